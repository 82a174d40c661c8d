//! Reflection graph produced by the documentation converter
//!
//! A [`ProjectReflection`] owns every documented entity in an arena. Child
//! lists, signatures, parameters and type targets all refer to reflections by
//! [`ReflectionId`], which keeps the graph free of ownership cycles while still
//! allowing references in both directions.

pub mod kind;
pub mod project;
pub mod reflection;
pub mod render;
pub mod serialize;
pub mod types;
pub mod visitor;

pub use kind::{ReflectionFlag, ReflectionFlags, ReflectionKind};
pub use project::ProjectReflection;
pub use reflection::{
    Comment, CommentTag, DeclarationData, ParameterData, Reflection, ReflectionData, SignatureData,
    TypeParameterData,
};
pub use render::render_tree;
pub use serialize::{JsonProject, JsonReflection};
pub use types::{ReferenceTarget, ReferenceType, Type};
pub use visitor::{TypeVisitorMut, walk_type};

use la_arena::Idx;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

/// Index of a reflection in its project's arena
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ReflectionId(Idx<Reflection>);

impl ReflectionId {
    fn from_idx(idx: Idx<Reflection>) -> Self {
        Self(idx)
    }

    fn idx(self) -> Idx<Reflection> {
        self.0
    }

    /// Raw arena index
    #[must_use]
    pub fn as_u32(self) -> u32 {
        u32::from(self.0.into_raw())
    }
}

impl fmt::Debug for ReflectionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "ReflectionId({})", self.as_u32())
    }
}

impl Serialize for ReflectionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.as_u32())
    }
}

/// Converter-assigned identity of a front-end symbol
///
/// Ids are handed out in first-encounter order, starting at zero, and stay
/// stable for the lifetime of one conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub u32);

impl fmt::Display for SymbolId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "symbol#{}", self.0)
    }
}

/// Maps symbol ids to the reflection that documents them
pub trait ReflectionLookup {
    /// Reflection registered for `symbol_id`
    fn reflection_for(&self, symbol_id: SymbolId) -> Option<ReflectionId>;
}

impl<S: BuildHasher> ReflectionLookup for HashMap<SymbolId, ReflectionId, S> {
    fn reflection_for(&self, symbol_id: SymbolId) -> Option<ReflectionId> {
        self.get(&symbol_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_reflection_ids_are_allocation_order() {
        let mut project = ProjectReflection::new("demo");
        let root = project.root();
        let first = project.alloc(Reflection::new("a", ReflectionKind::Variable, Some(root)));
        let second = project.alloc(Reflection::new("b", ReflectionKind::Variable, Some(root)));
        assert_eq!(root.as_u32(), 0);
        assert_eq!(first.as_u32(), 1);
        assert_eq!(second.as_u32(), 2);
        assert_eq!(format!("{first:?}"), "ReflectionId(1)");
    }

    #[test]
    fn test_hash_map_lookup() {
        let mut project = ProjectReflection::new("demo");
        let root = project.root();
        let id = project.alloc(Reflection::new("a", ReflectionKind::Variable, Some(root)));

        let mut map = FxHashMap::default();
        map.insert(SymbolId(4), id);
        assert_eq!(map.reflection_for(SymbolId(4)), Some(id));
        assert_eq!(map.reflection_for(SymbolId(5)), None);
    }
}
