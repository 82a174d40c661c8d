//! Node converters and the kind-indexed table dispatching to them

mod call_signature;
mod constructor;
mod container;
mod function;
mod source_file;
mod type_alias;
mod typedef;
mod variable;

pub use call_signature::CallSignatureConverter;
pub use constructor::ConstructorConverter;
pub use container::ContainerConverter;
pub use function::FunctionConverter;
pub use source_file::SourceFileConverter;
pub use type_alias::TypeAliasConverter;
pub use typedef::DocTypedefConverter;
pub use variable::VariableConverter;

use crate::context::Context;
use crate::Result;
use dg_model::ReflectionId;
use dg_syntax::{SyntaxKind, SyntaxNode};
use rustc_hash::FxHashMap;
use std::fmt;

/// Converts one kind of syntax node into a reflection
pub trait NodeConverter {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Node kinds this converter handles
    fn supports(&self) -> &'static [SyntaxKind];

    /// Converts `node` under the current scope
    ///
    /// Returns `None` when the node produced no reflection.
    fn convert(&self, ctx: &mut Context<'_>, node: &SyntaxNode) -> Result<Option<ReflectionId>>;
}

/// Table from node kind to converter
#[derive(Default)]
pub struct ConverterRegistry {
    converters: Vec<Box<dyn NodeConverter>>,
    by_kind: FxHashMap<SyntaxKind, usize>,
}

impl ConverterRegistry {
    /// Creates an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with every built-in converter
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SourceFileConverter);
        registry.register(ContainerConverter);
        registry.register(FunctionConverter);
        registry.register(ConstructorConverter);
        registry.register(CallSignatureConverter);
        registry.register(VariableConverter);
        registry.register(TypeAliasConverter);
        registry.register(DocTypedefConverter);
        registry
    }

    /// Adds `converter` for every kind it supports
    ///
    /// A later registration replaces an earlier one for the same kind.
    pub fn register(&mut self, converter: impl NodeConverter + 'static) {
        let index = self.converters.len();
        for kind in converter.supports() {
            self.by_kind.insert(kind.clone(), index);
        }
        self.converters.push(Box::new(converter));
    }

    /// Converter responsible for `kind`
    #[must_use]
    pub fn get(&self, kind: &SyntaxKind) -> Option<&dyn NodeConverter> {
        self.by_kind
            .get(kind)
            .map(|&index| self.converters[index].as_ref())
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.converters.iter().map(|converter| converter.name()))
            .finish()
    }
}
