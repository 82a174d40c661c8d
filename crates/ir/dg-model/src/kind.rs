//! Reflection kinds and flags

use serde::{Serialize, Serializer};
use std::fmt;

/// What a reflection documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReflectionKind {
    /// Root of the documentation graph
    Project,
    /// One source module
    Module,
    /// Namespace block
    Namespace,
    /// Class
    Class,
    /// Interface
    Interface,
    /// Enum
    Enum,
    /// Enum member
    EnumMember,
    /// Type alias
    TypeAlias,
    /// Function
    Function,
    /// Method
    Method,
    /// Constructor
    Constructor,
    /// Property
    Property,
    /// Variable
    Variable,
    /// Anonymous object type
    TypeLiteral,
    /// Call signature
    CallSignature,
    /// Construct signature
    ConstructorSignature,
    /// Parameter of a signature
    Parameter,
    /// Generic type parameter
    TypeParameter,
}

impl ReflectionKind {
    /// Signature kinds own parameters and a return type
    #[must_use]
    pub fn is_signature(self) -> bool {
        matches!(self, Self::CallSignature | Self::ConstructorSignature)
    }
}

impl fmt::Display for ReflectionKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, formatter)
    }
}

/// A single boolean property of a reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectionFlag {
    /// Parameter or property may be omitted
    Optional,
    /// Variadic parameter
    Rest,
    /// Parameter has a default value expression
    DefaultValue,
    /// Declaration is exported from its module
    Exported,
    /// Static class member
    Static,
    /// Readonly member
    Readonly,
    /// Member copied from a base type
    Inherited,
}

impl ReflectionFlag {
    /// Every flag, in serialisation order
    pub const ALL: [Self; 7] = [
        Self::Optional,
        Self::Rest,
        Self::DefaultValue,
        Self::Exported,
        Self::Static,
        Self::Readonly,
        Self::Inherited,
    ];

    fn bit(self) -> u16 {
        1 << self as u16
    }

    /// Stable name of the flag
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Optional => "optional",
            Self::Rest => "rest",
            Self::DefaultValue => "defaultValue",
            Self::Exported => "exported",
            Self::Static => "static",
            Self::Readonly => "readonly",
            Self::Inherited => "inherited",
        }
    }
}

/// Set of [`ReflectionFlag`]s
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReflectionFlags(u16);

impl ReflectionFlags {
    /// Sets or clears `flag`
    pub fn set(&mut self, flag: ReflectionFlag, value: bool) {
        if value {
            self.0 |= flag.bit();
        } else {
            self.0 &= !flag.bit();
        }
    }

    /// Whether `flag` is set
    #[must_use]
    pub fn has(self, flag: ReflectionFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Whether no flag is set
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Set flags in serialisation order
    pub fn iter(self) -> impl Iterator<Item = ReflectionFlag> {
        ReflectionFlag::ALL.into_iter().filter(move |flag| self.has(*flag))
    }
}

impl Serialize for ReflectionFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(ReflectionFlag::name))
    }
}
