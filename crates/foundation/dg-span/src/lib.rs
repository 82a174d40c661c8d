//! Source file identifiers and byte spans
//!
//! Every syntax node handed over by the front end and every reflection
//! produced from it points back into the program through a [`FileSpan`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A unique identifier for a source file within one program
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub u32);

impl FileId {
    /// Creates a file id from its raw index
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw index of this file
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "file#{}", self.0)
    }
}

/// A byte offset span in a source file
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start offset
    pub start: u32,
    /// Exclusive end offset
    pub end: u32,
}

impl Span {
    /// Creates a span; `end` is clamped so that it never precedes `start`
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Byte range usable for slicing the source text
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Length in bytes
    #[must_use]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the span covers no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`
    #[must_use]
    pub fn cover(self, other: Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// A span with associated file
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct FileSpan {
    /// File the span points into
    pub file: FileId,
    /// Byte range inside that file
    #[serde(default)]
    pub span: Span,
}

impl FileSpan {
    /// Creates a file span
    #[must_use]
    pub fn new(file: FileId, span: Span) -> Self {
        Self { file, span }
    }

    /// Empty span at the start of `file`, used for synthesized nodes
    #[must_use]
    pub fn file_start(file: FileId) -> Self {
        Self::new(file, Span::default())
    }

    /// Byte range inside the file
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.span.range()
    }
}

impl fmt::Display for FileSpan {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}..{}", self.file, self.span.start, self.span.end)
    }
}
