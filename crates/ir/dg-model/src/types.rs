//! Documentation types

use crate::{ReflectionId, SymbolId};
use serde::Serialize;
use std::fmt;

/// Type attached to a declaration, parameter or signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Type {
    /// `string`, `number`, `void`, ...
    Intrinsic {
        /// Intrinsic name
        name: String,
    },
    /// Named type, see [`ReferenceType`]
    Reference(ReferenceType),
    /// `T[]`
    Array {
        /// Element type
        element: Box<Type>,
    },
    /// `A | B`
    Union {
        /// Constituents in source order
        types: Vec<Type>,
    },
    /// `A & B`
    Intersection {
        /// Constituents in source order
        types: Vec<Type>,
    },
    /// Literal type
    Literal {
        /// Literal source text
        value: String,
    },
    /// Anonymous object type documented by a type literal reflection
    Reflection {
        /// The [`crate::ReflectionKind::TypeLiteral`] declaration
        declaration: ReflectionId,
    },
    /// Type known only by its printed form
    Unknown {
        /// Printed form
        name: String,
    },
}

impl Type {
    /// Intrinsic type
    #[must_use]
    pub fn intrinsic(name: impl Into<String>) -> Self {
        Self::Intrinsic { name: name.into() }
    }

    /// Reference to a symbol that is not yet linked
    #[must_use]
    pub fn reference(name: impl Into<String>, symbol_id: Option<SymbolId>) -> Self {
        Self::Reference(ReferenceType::new(name, symbol_id))
    }

    /// The reference payload, if this is a reference
    #[must_use]
    pub fn as_reference(&self) -> Option<&ReferenceType> {
        match self {
            Self::Reference(reference) => Some(reference),
            _ => None,
        }
    }
}

/// Where a [`ReferenceType`] points after resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "id", rename_all = "camelCase")]
pub enum ReferenceTarget {
    /// Not resolved yet
    #[default]
    Pending,
    /// A reflection of this project
    Internal(ReflectionId),
    /// Something outside the documented program
    External,
}

/// Named reference to another symbol
///
/// During conversion only the name and symbol id are known. The resolution
/// pass later links the target reflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceType {
    /// Display name
    pub name: String,
    /// Identity of the referenced symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_id: Option<SymbolId>,
    /// Type arguments in source order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<Type>,
    /// Resolution state
    pub target: ReferenceTarget,
}

impl ReferenceType {
    /// Unresolved reference
    #[must_use]
    pub fn new(name: impl Into<String>, symbol_id: Option<SymbolId>) -> Self {
        Self {
            name: name.into(),
            symbol_id,
            type_arguments: Vec::new(),
            target: ReferenceTarget::Pending,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intrinsic { name } | Self::Unknown { name } => write!(formatter, "{name}"),
            Self::Literal { value } => write!(formatter, "{value}"),
            Self::Reference(reference) => {
                write!(formatter, "{}", reference.name)?;
                if !reference.type_arguments.is_empty() {
                    write!(formatter, "<")?;
                    write_joined(formatter, &reference.type_arguments, ", ")?;
                    write!(formatter, ">")?;
                }
                Ok(())
            }
            Self::Array { element } => match element.as_ref() {
                Self::Union { .. } | Self::Intersection { .. } => write!(formatter, "({element})[]"),
                _ => write!(formatter, "{element}[]"),
            },
            Self::Union { types } => write_joined(formatter, types, " | "),
            Self::Intersection { types } => write_joined(formatter, types, " & "),
            Self::Reflection { .. } => write!(formatter, "{{...}}"),
        }
    }
}

fn write_joined(formatter: &mut fmt::Formatter<'_>, types: &[Type], separator: &str) -> fmt::Result {
    for (index, ty) in types.iter().enumerate() {
        if index > 0 {
            write!(formatter, "{separator}")?;
        }
        write!(formatter, "{ty}")?;
    }
    Ok(())
}
