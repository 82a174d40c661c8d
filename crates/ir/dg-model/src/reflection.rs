//! Reflection nodes

use crate::{ReflectionFlag, ReflectionFlags, ReflectionId, ReflectionKind, Type};
use dg_span::FileSpan;
use serde::Serialize;

/// One documented entity
#[derive(Debug, Clone, PartialEq)]
pub struct Reflection {
    /// Declared name
    pub name: String,
    /// What the reflection documents
    pub kind: ReflectionKind,
    /// Owning reflection, `None` only for the project root
    pub parent: Option<ReflectionId>,
    /// Boolean properties
    pub flags: ReflectionFlags,
    /// Parsed documentation comment
    pub comment: Option<Comment>,
    /// Every declaration site, in the order they were converted
    pub sources: Vec<FileSpan>,
    /// Kind-specific payload
    pub data: ReflectionData,
}

impl Reflection {
    /// Creates a reflection with the payload matching `kind`
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ReflectionKind, parent: Option<ReflectionId>) -> Self {
        Self {
            name: name.into(),
            kind,
            parent,
            flags: ReflectionFlags::default(),
            comment: None,
            sources: Vec::new(),
            data: ReflectionData::for_kind(kind),
        }
    }

    /// Sets or clears a flag
    pub fn set_flag(&mut self, flag: ReflectionFlag, value: bool) {
        self.flags.set(flag, value);
    }

    /// Whether a flag is set
    #[must_use]
    pub fn has_flag(&self, flag: ReflectionFlag) -> bool {
        self.flags.has(flag)
    }

    /// Whether this reflection can own child declarations
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self.data, ReflectionData::Declaration(_))
    }

    /// Declaration payload
    #[must_use]
    pub fn as_declaration(&self) -> Option<&DeclarationData> {
        match &self.data {
            ReflectionData::Declaration(data) => Some(data),
            _ => None,
        }
    }

    /// Mutable declaration payload
    pub fn as_declaration_mut(&mut self) -> Option<&mut DeclarationData> {
        match &mut self.data {
            ReflectionData::Declaration(data) => Some(data),
            _ => None,
        }
    }

    /// Signature payload
    #[must_use]
    pub fn as_signature(&self) -> Option<&SignatureData> {
        match &self.data {
            ReflectionData::Signature(data) => Some(data),
            _ => None,
        }
    }

    /// Mutable signature payload
    pub fn as_signature_mut(&mut self) -> Option<&mut SignatureData> {
        match &mut self.data {
            ReflectionData::Signature(data) => Some(data),
            _ => None,
        }
    }

    /// Parameter payload
    #[must_use]
    pub fn as_parameter(&self) -> Option<&ParameterData> {
        match &self.data {
            ReflectionData::Parameter(data) => Some(data),
            _ => None,
        }
    }

    /// Mutable parameter payload
    pub fn as_parameter_mut(&mut self) -> Option<&mut ParameterData> {
        match &mut self.data {
            ReflectionData::Parameter(data) => Some(data),
            _ => None,
        }
    }

    /// Type parameter payload
    #[must_use]
    pub fn as_type_parameter(&self) -> Option<&TypeParameterData> {
        match &self.data {
            ReflectionData::TypeParameter(data) => Some(data),
            _ => None,
        }
    }

    /// Mutable type parameter payload
    pub fn as_type_parameter_mut(&mut self) -> Option<&mut TypeParameterData> {
        match &mut self.data {
            ReflectionData::TypeParameter(data) => Some(data),
            _ => None,
        }
    }

    /// Type parameters owned by a declaration or signature
    #[must_use]
    pub fn type_parameters(&self) -> &[ReflectionId] {
        match &self.data {
            ReflectionData::Declaration(data) => &data.type_parameters,
            ReflectionData::Signature(data) => &data.type_parameters,
            _ => &[],
        }
    }

    /// Every type slot of this reflection
    pub fn types_mut(&mut self) -> Vec<&mut Type> {
        match &mut self.data {
            ReflectionData::Declaration(data) => data
                .ty
                .iter_mut()
                .chain(data.extended_types.iter_mut())
                .chain(data.inherited_from.iter_mut())
                .collect(),
            ReflectionData::Signature(data) => data.return_type.iter_mut().collect(),
            ReflectionData::Parameter(data) => data.ty.iter_mut().collect(),
            ReflectionData::TypeParameter(data) => data.constraint.iter_mut().collect(),
        }
    }
}

/// Kind-specific payload of a [`Reflection`]
#[derive(Debug, Clone, PartialEq)]
pub enum ReflectionData {
    /// Project root and every declaration kind
    Declaration(DeclarationData),
    /// Call or construct signature
    Signature(SignatureData),
    /// Signature parameter
    Parameter(ParameterData),
    /// Generic type parameter
    TypeParameter(TypeParameterData),
}

impl ReflectionData {
    /// Empty payload for `kind`
    #[must_use]
    pub fn for_kind(kind: ReflectionKind) -> Self {
        match kind {
            ReflectionKind::CallSignature | ReflectionKind::ConstructorSignature => {
                Self::Signature(SignatureData::default())
            }
            ReflectionKind::Parameter => Self::Parameter(ParameterData::default()),
            ReflectionKind::TypeParameter => Self::TypeParameter(TypeParameterData::default()),
            _ => Self::Declaration(DeclarationData::default()),
        }
    }
}

/// Payload of containers and declarations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarationData {
    /// Child declarations in insertion order
    pub children: Vec<ReflectionId>,
    /// Call/construct signatures, one per declaration site
    pub signatures: Vec<ReflectionId>,
    /// Generic type parameters
    pub type_parameters: Vec<ReflectionId>,
    /// Declared type of properties, variables and aliases
    pub ty: Option<Type>,
    /// Initializer text
    pub default_value: Option<String>,
    /// Types named in `extends` clauses
    pub extended_types: Vec<Type>,
    /// Declaration this member was copied from
    pub inherited_from: Option<Type>,
}

/// Payload of call and construct signatures
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureData {
    /// Parameters in declaration order
    pub parameters: Vec<ReflectionId>,
    /// Generic type parameters
    pub type_parameters: Vec<ReflectionId>,
    /// Return type
    pub return_type: Option<Type>,
}

/// Payload of signature parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterData {
    /// Parameter type
    pub ty: Option<Type>,
    /// Default value text
    pub default_value: Option<String>,
}

/// Payload of type parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeParameterData {
    /// `extends` constraint
    pub constraint: Option<Type>,
}

/// Documentation comment of a reflection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Summary text
    pub summary: String,
    /// Block tags in source order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<CommentTag>,
}

impl Comment {
    /// Whether there is nothing to show
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.tags.is_empty()
    }
}

/// Block tag of a [`Comment`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentTag {
    /// Tag name without `@`
    pub tag: String,
    /// Documented parameter or property name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_name: Option<String>,
    /// Tag text
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SymbolId;

    #[test]
    fn test_payload_follows_kind() {
        assert!(Reflection::new("Foo", ReflectionKind::Class, None).is_container());
        assert!(Reflection::new("__call", ReflectionKind::CallSignature, None)
            .as_signature()
            .is_some());
        assert!(Reflection::new("a", ReflectionKind::Parameter, None)
            .as_parameter()
            .is_some());
        assert!(!Reflection::new("T", ReflectionKind::TypeParameter, None).is_container());
    }

    #[test]
    fn test_types_mut_covers_declaration_slots() {
        let mut reflection = Reflection::new("Derived", ReflectionKind::Interface, None);
        let data = reflection.as_declaration_mut().unwrap();
        data.ty = Some(Type::intrinsic("string"));
        data.extended_types.push(Type::reference("Base", Some(SymbolId(1))));
        data.inherited_from = Some(Type::reference("Base.x", Some(SymbolId(2))));

        assert_eq!(reflection.types_mut().len(), 3);
    }
}
