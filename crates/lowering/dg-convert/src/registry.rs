//! Identity registry: symbol handles to ids to reflections

use dg_model::{ReflectionId, ReflectionLookup, SymbolId};
use dg_syntax::SymbolHandle;
use rustc_hash::FxHashMap;
use tracing::warn;

/// Pass-scoped identity table
///
/// Hands out one [`SymbolId`] per front-end symbol in first-encounter order
/// and remembers which reflection documents each id. Created at the start of
/// a pass and handed back with the finished project.
#[derive(Debug, Default, Clone)]
pub struct IdentityRegistry {
    ids: FxHashMap<SymbolHandle, SymbolId>,
    reflections: FxHashMap<SymbolId, ReflectionId>,
    owners: FxHashMap<ReflectionId, SymbolId>,
    next_id: u32,
}

impl IdentityRegistry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `symbol`, allocated on first sight
    pub fn id_for(&mut self, symbol: SymbolHandle) -> SymbolId {
        if let Some(&id) = self.ids.get(&symbol) {
            return id;
        }
        let id = SymbolId(self.next_id);
        self.next_id += 1;
        self.ids.insert(symbol, id);
        id
    }

    /// Id of `symbol` if one was already allocated
    #[must_use]
    pub fn symbol_id(&self, symbol: SymbolHandle) -> Option<SymbolId> {
        self.ids.get(&symbol).copied()
    }

    /// Records `reflection` as the documentation of `symbol`
    ///
    /// The first registration wins; a later one for the same symbol is
    /// ignored so the mapping stays one-to-one.
    pub fn register(&mut self, symbol: SymbolHandle, reflection: ReflectionId) -> SymbolId {
        let id = self.id_for(symbol);
        if let Some(&existing) = self.reflections.get(&id) {
            if existing != reflection {
                warn!(%id, ?existing, ?reflection, "symbol already registered");
            }
            return id;
        }
        self.reflections.insert(id, reflection);
        self.owners.insert(reflection, id);
        id
    }

    /// Reflection registered for a front-end symbol
    #[must_use]
    pub fn reflection_for_symbol(&self, symbol: SymbolHandle) -> Option<ReflectionId> {
        self.symbol_id(symbol)
            .and_then(|id| self.reflections.get(&id).copied())
    }

    /// Symbol id a reflection was registered under
    #[must_use]
    pub fn symbol_of(&self, reflection: ReflectionId) -> Option<SymbolId> {
        self.owners.get(&reflection).copied()
    }

    /// Number of symbols with a registered reflection
    #[must_use]
    pub fn len(&self) -> usize {
        self.reflections.len()
    }

    /// Whether nothing was registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reflections.is_empty()
    }

    /// Number of ids handed out, registered or not
    #[must_use]
    pub fn allocated_ids(&self) -> u32 {
        self.next_id
    }
}

impl ReflectionLookup for IdentityRegistry {
    fn reflection_for(&self, symbol_id: SymbolId) -> Option<ReflectionId> {
        self.reflections.get(&symbol_id).copied()
    }
}
