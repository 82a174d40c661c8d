//! Documentation comments and their block tags

use crate::TypeNode;
use serde::{Deserialize, Serialize};

/// Documentation comment attached to a declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocComment {
    /// Free text before the first block tag
    #[serde(default)]
    pub summary: String,
    /// Block tags in source order
    #[serde(default)]
    pub tags: Vec<DocTag>,
}

impl DocComment {
    /// First `@param` tag documenting `name`
    #[must_use]
    pub fn param_tag(&self, name: &str) -> Option<&DocTag> {
        find_param_tag(&self.tags, name)
    }

    /// First `@returns` tag
    #[must_use]
    pub fn returns_tag(&self) -> Option<&DocTag> {
        self.tags.iter().find(|tag| tag.kind == DocTagKind::Returns)
    }
}

/// Kind of a documentation block tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocTagKind {
    /// `@param`
    Param,
    /// `@property`
    Property,
    /// `@returns`
    Returns,
    /// `@typedef`
    Typedef,
    /// Any other tag, by name without the `@`
    Other(String),
}

impl DocTagKind {
    /// Tag name without the leading `@`
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Param => "param",
            Self::Property => "property",
            Self::Returns => "returns",
            Self::Typedef => "typedef",
            Self::Other(name) => name,
        }
    }
}

/// A single documentation block tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocTag {
    /// Tag kind
    pub kind: DocTagKind,
    /// Documented name (`@param name`)
    #[serde(default)]
    pub name: Option<String>,
    /// Type expression in braces
    #[serde(default)]
    pub type_expression: Option<TypeNode>,
    /// Name written in brackets, `[name]`
    #[serde(default)]
    pub bracketed: bool,
    /// Trailing description
    #[serde(default)]
    pub text: String,
}

impl DocTag {
    /// `@param` tag for `name`
    #[must_use]
    pub fn param(name: impl Into<String>, type_expression: Option<TypeNode>) -> Self {
        Self {
            kind: DocTagKind::Param,
            name: Some(name.into()),
            type_expression,
            bracketed: false,
            text: String::new(),
        }
    }
}

/// First `@param` tag in `tags` documenting `name`
#[must_use]
pub fn find_param_tag<'tag>(tags: &'tag [DocTag], name: &str) -> Option<&'tag DocTag> {
    tags.iter()
        .find(|tag| tag.kind == DocTagKind::Param && tag.name.as_deref() == Some(name))
}
