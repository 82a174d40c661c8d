//! Factories creating reflections from syntax nodes
//!
//! Each factory checks the current scope, creates and links its reflection,
//! registers it in the identity registry and fires its creation event.

mod comment;
mod declaration;
mod parameter;
mod reference;
mod signature;
mod type_parameter;

pub use comment::create_comment;
pub use declaration::create_declaration;
pub use parameter::{create_parameter, NAMED_PARAMETERS};
pub use reference::{create_import_reference_type, create_reference_type};
pub use signature::create_signature;
pub use type_parameter::create_type_parameter;
