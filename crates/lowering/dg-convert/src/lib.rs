//! Conversion of analysed syntax trees into a reflection graph
//!
//! This crate handles:
//! - The identity registry mapping front-end symbols to reflections
//! - The conversion context with scoped state and inherit mode
//! - Factories for declarations, signatures, parameters and type parameters
//! - Kind-dispatched node converters and the pass orchestrator
//!
//! References created here stay pending; linking them is a separate pass.

pub mod context;
pub mod converter;
pub mod converters;
pub mod error;
pub mod events;
pub mod factories;
pub mod options;
pub mod registry;
pub mod types;

#[cfg(test)]
mod test_support;

pub use context::{Context, InheritMode};
pub use converter::{Conversion, Converter};
pub use converters::{ConverterRegistry, NodeConverter};
pub use error::{ConversionError, Result};
pub use events::{EventArgs, EventBus, EventKind};
pub use options::{ConverterOptions, EntryPointMode};
pub use registry::IdentityRegistry;
