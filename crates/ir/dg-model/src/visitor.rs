//! Mutable traversal of every type in a project

use crate::{ProjectReflection, ReferenceType, Type};

/// Visitor over the types attached to reflections
pub trait TypeVisitorMut {
    /// Visit a type (can be overridden)
    fn visit_type(&mut self, ty: &mut Type) {
        walk_type(self, ty);
    }

    /// Visit a reference, before its type arguments
    fn visit_reference(&mut self, _reference: &mut ReferenceType) {}
}

/// Recurses into the constituents of `ty`
pub fn walk_type<V: TypeVisitorMut + ?Sized>(visitor: &mut V, ty: &mut Type) {
    match ty {
        Type::Reference(reference) => {
            visitor.visit_reference(reference);
            for argument in &mut reference.type_arguments {
                visitor.visit_type(argument);
            }
        }
        Type::Array { element } => visitor.visit_type(element),
        Type::Union { types } | Type::Intersection { types } => {
            for constituent in types {
                visitor.visit_type(constituent);
            }
        }
        Type::Intrinsic { .. }
        | Type::Literal { .. }
        | Type::Reflection { .. }
        | Type::Unknown { .. } => {}
    }
}

impl ProjectReflection {
    /// Runs `visitor` over the type slots of every reflection
    ///
    /// Type literal declarations live in the arena like any other reflection,
    /// so their members are reached without following [`Type::Reflection`].
    pub fn walk_types_mut<V: TypeVisitorMut>(&mut self, visitor: &mut V) {
        for (_, reflection) in self.iter_mut() {
            for ty in reflection.types_mut() {
                visitor.visit_type(ty);
            }
        }
    }
}
