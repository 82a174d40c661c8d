//! Type expressions as written in source and as answered by the checker

use crate::{SymbolHandle, SyntaxNode};
use serde::{Deserialize, Serialize};

/// A type expression as it appears in the syntax tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeNode {
    /// Keyword type such as `number` or `void`
    Keyword {
        /// Keyword text
        name: String,
    },
    /// Named type reference, `Foo<T>`
    Reference {
        /// Name as written
        name: String,
        /// Symbol the checker bound the name to
        #[serde(default)]
        symbol: Option<SymbolHandle>,
        /// Type arguments in source order
        #[serde(default)]
        type_arguments: Vec<TypeNode>,
    },
    /// `T[]`
    Array {
        /// Element type
        element: Box<TypeNode>,
    },
    /// `A | B`
    Union {
        /// Constituents in source order
        types: Vec<TypeNode>,
    },
    /// `A & B`
    Intersection {
        /// Constituents in source order
        types: Vec<TypeNode>,
    },
    /// Literal type such as `"on"` or `42`
    Literal {
        /// Literal source text
        value: String,
    },
    /// Object literal type `{ a: string }`
    TypeLiteral {
        /// Member declarations
        #[serde(default)]
        members: Vec<SyntaxNode>,
    },
    /// Type-only cross-module reference, `import("./mod").Name`
    Import {
        /// Module specifier literal
        specifier: String,
        /// Qualified export name
        #[serde(default)]
        qualifier: Option<String>,
        /// Symbol the checker already resolved the reference to
        #[serde(default)]
        symbol: Option<SymbolHandle>,
    },
    /// Documentation-comment type expression wrapper, `{Foo}`
    DocExpression {
        /// Wrapped type
        #[serde(rename = "type")]
        inner: Box<TypeNode>,
    },
    /// Documentation-comment object type described by `@property` tags
    DocTypeLiteral {
        /// Property tag nodes in declaration order
        #[serde(default)]
        properties: Vec<SyntaxNode>,
    },
    /// `{T=}` documentation optional form
    DocOptional {
        /// Wrapped type
        #[serde(rename = "type")]
        inner: Box<TypeNode>,
    },
    /// `{?T}` documentation nullable form
    DocNullable {
        /// Wrapped type
        #[serde(rename = "type")]
        inner: Box<TypeNode>,
    },
    /// `{!T}` documentation non-nullable form
    DocNonNullable {
        /// Wrapped type
        #[serde(rename = "type")]
        inner: Box<TypeNode>,
    },
    /// Anything the front end could not classify
    Unknown {
        /// Source text
        text: String,
    },
}

impl TypeNode {
    /// Keyword type
    #[must_use]
    pub fn keyword(name: impl Into<String>) -> Self {
        Self::Keyword { name: name.into() }
    }

    /// Reference bound to `symbol`
    #[must_use]
    pub fn reference(name: impl Into<String>, symbol: Option<SymbolHandle>) -> Self {
        Self::Reference {
            name: name.into(),
            symbol,
            type_arguments: Vec::new(),
        }
    }

    /// Strips documentation optional/nullable wrappers
    ///
    /// Returns the innermost type and whether an optional wrapper was seen.
    #[must_use]
    pub fn unwrap_doc_modifiers(&self) -> (&Self, bool) {
        match self {
            Self::DocOptional { inner } => (inner.unwrap_doc_modifiers().0, true),
            Self::DocNullable { inner } | Self::DocNonNullable { inner } => {
                inner.unwrap_doc_modifiers()
            }
            Self::DocExpression { inner } => inner.unwrap_doc_modifiers(),
            other => (other, false),
        }
    }
}

/// A type as computed by the checker for some location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckedType {
    /// Intrinsic type (`string`, `any`, ...)
    Intrinsic {
        /// Intrinsic name
        name: String,
    },
    /// Named type
    Reference {
        /// Rendered name
        name: String,
        /// Symbol of the named type
        #[serde(default)]
        symbol: Option<SymbolHandle>,
        /// Type arguments
        #[serde(default)]
        type_arguments: Vec<CheckedType>,
    },
    /// Array type
    Array {
        /// Element type
        element: Box<CheckedType>,
    },
    /// Union type
    Union {
        /// Constituents
        types: Vec<CheckedType>,
    },
    /// Literal type
    Literal {
        /// Literal text
        value: String,
    },
    /// Type the checker can only print
    Unknown {
        /// Printed form
        text: String,
    },
}
