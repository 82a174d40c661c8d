//! Front-end input contract for the documentation converter
//!
//! The converter never parses source text itself. An external front end
//! (parser plus type checker) hands over already analysed syntax trees and
//! answers symbol, type and module queries through the [`FrontEnd`] trait.
//! This crate defines the shapes of that hand-over.

pub mod doc;
pub mod front_end;
pub mod ty;

pub use doc::{DocComment, DocTag, DocTagKind};
pub use front_end::{FrontEnd, SourceFile};
pub use ty::{CheckedType, TypeNode};

use dg_span::{FileId, FileSpan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a syntax node within one program
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

/// Opaque symbol identity assigned by the front end's binder
///
/// Two declaration sites of the same entity (overloads, merged interfaces,
/// re-exported typedefs) share one handle.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolHandle(pub u32);

/// Node kinds the converter knows how to dispatch on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxKind {
    /// Root of a source file
    SourceFile,
    /// `namespace` / `module` block
    Namespace,
    /// Class declaration
    Class,
    /// Interface declaration
    Interface,
    /// Enum declaration
    Enum,
    /// Enum member
    EnumMember,
    /// `type X = ...`
    TypeAlias,
    /// Function declaration
    Function,
    /// Method declaration or method signature
    Method,
    /// Class constructor
    Constructor,
    /// Call signature inside an interface or type literal
    CallSignature,
    /// Property declaration or property signature
    Property,
    /// Variable declaration
    Variable,
    /// Function parameter
    Parameter,
    /// Generic type parameter
    TypeParameter,
    /// Documentation-comment `@typedef` tag
    DocTypedefTag,
    /// Documentation-comment `@property` tag inside a typedef
    DocPropertyTag,
    /// Node kind the front end could not map
    Unknown(String),
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceFile => write!(formatter, "source_file"),
            Self::Namespace => write!(formatter, "namespace"),
            Self::Class => write!(formatter, "class"),
            Self::Interface => write!(formatter, "interface"),
            Self::Enum => write!(formatter, "enum"),
            Self::EnumMember => write!(formatter, "enum_member"),
            Self::TypeAlias => write!(formatter, "type_alias"),
            Self::Function => write!(formatter, "function"),
            Self::Method => write!(formatter, "method"),
            Self::Constructor => write!(formatter, "constructor"),
            Self::CallSignature => write!(formatter, "call_signature"),
            Self::Property => write!(formatter, "property"),
            Self::Variable => write!(formatter, "variable"),
            Self::Parameter => write!(formatter, "parameter"),
            Self::TypeParameter => write!(formatter, "type_parameter"),
            Self::DocTypedefTag => write!(formatter, "doc_typedef_tag"),
            Self::DocPropertyTag => write!(formatter, "doc_property_tag"),
            Self::Unknown(name) => write!(formatter, "unknown({name})"),
        }
    }
}

/// Syntactic markers carried by a declaration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeFlags {
    /// `?` marker on a parameter or property
    pub optional: bool,
    /// `...` variadic marker on a parameter
    pub rest: bool,
    /// Declaration carries an `export` modifier
    pub exported: bool,
    /// Parameter name is a destructuring pattern
    pub binding_pattern: bool,
    /// `static` member
    pub is_static: bool,
    /// `readonly` member
    pub readonly: bool,
}

/// Analysed syntax node handed over by the front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// Node identity
    pub id: NodeId,
    /// The kind of this node
    pub kind: SyntaxKind,
    /// Source location
    pub span: FileSpan,
    /// Declared name, when the node has one
    #[serde(default)]
    pub name: Option<String>,
    /// Symbol bound to this declaration
    #[serde(default)]
    pub symbol: Option<SymbolHandle>,
    /// Explicit type annotation (or the type expression of a documentation tag)
    #[serde(default)]
    pub type_annotation: Option<TypeNode>,
    /// Source text of the initializer / default value
    #[serde(default)]
    pub initializer: Option<String>,
    /// Syntactic markers
    #[serde(default)]
    pub flags: NodeFlags,
    /// Types named in `extends` clauses
    #[serde(default)]
    pub heritage: Vec<TypeNode>,
    /// Attached documentation comment
    #[serde(default)]
    pub comment: Option<DocComment>,
    /// Child nodes in declaration order
    #[serde(default)]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a bare node of `kind` with no name, symbol or children
    #[must_use]
    pub fn new(id: NodeId, kind: SyntaxKind, span: FileSpan) -> Self {
        Self {
            id,
            kind,
            span,
            name: None,
            symbol: None,
            type_annotation: None,
            initializer: None,
            flags: NodeFlags::default(),
            heritage: Vec::new(),
            comment: None,
            children: Vec::new(),
        }
    }

    /// Sets the declared name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Binds the node to a symbol
    #[must_use]
    pub fn with_symbol(mut self, symbol: SymbolHandle) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// Sets the type annotation
    #[must_use]
    pub fn with_type(mut self, type_annotation: TypeNode) -> Self {
        self.type_annotation = Some(type_annotation);
        self
    }

    /// Appends a child node
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// File the node belongs to
    #[must_use]
    pub fn file(&self) -> FileId {
        self.span.file
    }

    /// Declared name or the empty string
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Children of the given kind, in declaration order
    pub fn children_of_kind<'node>(
        &'node self,
        kind: &'node SyntaxKind,
    ) -> impl Iterator<Item = &'node Self> + 'node {
        self.children.iter().filter(move |child| &child.kind == kind)
    }

    /// Depth-first search for a node by id, including `self`
    #[must_use]
    pub fn find(&self, id: NodeId) -> Option<&Self> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}
