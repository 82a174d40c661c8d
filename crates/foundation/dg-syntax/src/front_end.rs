//! Capabilities the converter requires from the front end

use crate::{CheckedType, DocTag, SymbolHandle, SyntaxNode};
use dg_span::FileId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An analysed source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// File id
    pub id: FileId,
    /// Path as known to the front end
    pub path: PathBuf,
    /// Root node, of kind [`crate::SyntaxKind::SourceFile`]
    pub root: SyntaxNode,
}

/// Parser + type checker + module resolver, as seen by the converter
///
/// Implementations answer queries about an already analysed program. All
/// queries are synchronous and must be answerable for any node or symbol the
/// implementation itself handed out.
pub trait FrontEnd {
    /// Root files in the order they should be documented
    fn source_files(&self) -> &[SourceFile];

    /// Path of a file
    fn file_path(&self, file: FileId) -> Option<&Path>;

    /// Bare name of a symbol
    fn symbol_name(&self, symbol: SymbolHandle) -> Option<&str>;

    /// Canonical rendering of a symbol as the checker prints it
    fn symbol_to_string(&self, symbol: SymbolHandle) -> String;

    /// Enclosing symbol (namespace, class, module)
    fn symbol_parent(&self, symbol: SymbolHandle) -> Option<SymbolHandle>;

    /// File holding the symbol's value declaration
    fn symbol_file(&self, symbol: SymbolHandle) -> Option<FileId>;

    /// Every declaration site of a symbol, in program order
    fn symbol_declarations(&self, symbol: SymbolHandle) -> Vec<&SyntaxNode>;

    /// Export named `name` in the export table of the module `file`
    fn module_export(&self, file: FileId, name: &str) -> Option<SymbolHandle>;

    /// Resolves `specifier` as imported from `from`
    fn resolve_module(&self, from: FileId, specifier: &str) -> Option<FileId>;

    /// Type the checker computed for a node
    fn type_at_location(&self, node: &SyntaxNode) -> Option<CheckedType>;

    /// Documentation tags that apply to `node`
    ///
    /// The default returns the node's own tags. `@param` tags usually sit on
    /// the enclosing function, so parameters also consult their signature's
    /// declaration.
    fn doc_tags<'node>(&self, node: &'node SyntaxNode) -> &'node [DocTag] {
        match &node.comment {
            Some(comment) => &comment.tags,
            None => &[],
        }
    }
}
