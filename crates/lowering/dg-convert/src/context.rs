//! Conversion context threaded through the tree walk

use crate::converters::ConverterRegistry;
use crate::events::{EventBus, EventKind};
use crate::options::ConverterOptions;
use crate::registry::IdentityRegistry;
use crate::Result;
use dg_model::{ProjectReflection, ReflectionId, ReflectionKind};
use dg_syntax::{FrontEnd, NodeId, SymbolHandle, SyntaxNode};
use std::rc::Rc;
use tracing::{debug, trace};

/// Declaration-merging state
///
/// While set, converting the node `inherit_parent` augments the current scope
/// reflection instead of creating a new one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InheritMode {
    /// Whether a base type is being merged into the current scope
    pub is_inherit: bool,
    /// Base declaration node being merged
    pub inherit_parent: Option<NodeId>,
}

/// State of one conversion pass
pub struct Context<'fe> {
    front_end: &'fe dyn FrontEnd,
    /// Reflections created so far
    pub project: ProjectReflection,
    /// Symbol identities of this pass
    pub registry: IdentityRegistry,
    scope: ReflectionId,
    inherit: InheritMode,
    inherit_scope: Option<ReflectionId>,
    inherit_chain: Vec<NodeId>,
    events: EventBus,
    converters: Rc<ConverterRegistry>,
    options: ConverterOptions,
}

impl<'fe> Context<'fe> {
    /// Creates a context whose scope is the project root
    pub fn new(
        front_end: &'fe dyn FrontEnd,
        project: ProjectReflection,
        events: EventBus,
        converters: Rc<ConverterRegistry>,
        options: ConverterOptions,
    ) -> Self {
        let scope = project.root();
        Self {
            front_end,
            project,
            registry: IdentityRegistry::new(),
            scope,
            inherit: InheritMode::default(),
            inherit_scope: None,
            inherit_chain: Vec::new(),
            events,
            converters,
            options,
        }
    }

    /// Splits the context back into its owned parts
    pub fn into_parts(self) -> (ProjectReflection, IdentityRegistry, EventBus) {
        (self.project, self.registry, self.events)
    }

    /// The front end answering symbol and type queries
    #[must_use]
    pub fn front_end(&self) -> &'fe dyn FrontEnd {
        self.front_end
    }

    /// Options of this pass
    #[must_use]
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Current scope reflection
    #[must_use]
    pub fn scope(&self) -> ReflectionId {
        self.scope
    }

    /// Kind of the current scope reflection
    #[must_use]
    pub fn scope_kind(&self) -> ReflectionKind {
        self.project[self.scope].kind
    }

    /// Runs `body` with `scope` as the current scope
    ///
    /// The previous scope is restored whether `body` succeeds or fails.
    pub fn with_scope<T>(
        &mut self,
        scope: ReflectionId,
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let previous = std::mem::replace(&mut self.scope, scope);
        trace!(?previous, ?scope, "enter scope");
        let result = body(self);
        self.scope = previous;
        result
    }

    /// Current inherit mode
    #[must_use]
    pub fn inherit_mode(&self) -> InheritMode {
        self.inherit
    }

    /// Whether a base type is being merged
    #[must_use]
    pub fn is_inherit(&self) -> bool {
        self.inherit.is_inherit
    }

    /// Whether `node` is the base declaration being merged into the scope
    #[must_use]
    pub fn is_inherit_target(&self, node: &SyntaxNode) -> bool {
        self.inherit.is_inherit && self.inherit.inherit_parent == Some(node.id)
    }

    /// Whether the current scope receives inherited members directly
    #[must_use]
    pub fn is_inheriting_into_scope(&self) -> bool {
        self.inherit.is_inherit && self.inherit_scope == Some(self.scope)
    }

    /// Runs `body` in inherit mode with `parent` as the merged base node
    ///
    /// Returns `None` without running `body` when `parent` is already being
    /// merged further up, which breaks inheritance cycles. The previous mode
    /// is restored on every exit path.
    pub fn inherit<T>(
        &mut self,
        parent: &SyntaxNode,
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<Option<T>> {
        if self.inherit_chain.contains(&parent.id) {
            debug!(node = ?parent.id, "inheritance cycle, skipping base");
            return Ok(None);
        }

        let previous = self.inherit;
        let previous_scope = self.inherit_scope;
        self.inherit = InheritMode {
            is_inherit: true,
            inherit_parent: Some(parent.id),
        };
        self.inherit_scope = Some(self.scope);
        self.inherit_chain.push(parent.id);

        let result = body(self);

        self.inherit_chain.pop();
        self.inherit = previous;
        self.inherit_scope = previous_scope;
        result.map(Some)
    }

    /// Registers `reflection` under the node's symbol
    ///
    /// Inherited copies are never registered: the registry keeps pointing at
    /// the reflection documenting the base declaration itself.
    pub fn register(&mut self, node: &SyntaxNode, reflection: ReflectionId) {
        if self.inherit.is_inherit {
            return;
        }
        if let Some(symbol) = node.symbol {
            self.registry.register(symbol, reflection);
        }
    }

    /// Reflection already documenting `symbol`, outside inherit mode
    #[must_use]
    pub fn existing_reflection(&self, symbol: SymbolHandle) -> Option<ReflectionId> {
        if self.inherit.is_inherit {
            return None;
        }
        self.registry.reflection_for_symbol(symbol)
    }

    /// Fires `kind` for a freshly created reflection
    pub fn trigger(&mut self, kind: EventKind, reflection: ReflectionId, node: &SyntaxNode) {
        self.events
            .dispatch(kind, &mut self.project, reflection, node);
    }

    /// Converts `node` with the converter registered for its kind
    ///
    /// Nodes without a converter are skipped.
    pub fn convert_node(&mut self, node: &SyntaxNode) -> Result<Option<ReflectionId>> {
        let converters = Rc::clone(&self.converters);
        match converters.get(&node.kind) {
            Some(converter) => converter.convert(self, node),
            None => {
                trace!(kind = %node.kind, "no converter registered, skipping node");
                Ok(None)
            }
        }
    }
}
