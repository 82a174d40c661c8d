//! In-memory front end for unit tests

use dg_span::{FileId, FileSpan};
use dg_syntax::{CheckedType, FrontEnd, NodeId, SourceFile, SymbolHandle, SyntaxKind, SyntaxNode};
use dg_vfs::VirtualFileSystem;
use rustc_hash::FxHashMap;
use std::path::Path;

pub(crate) struct MockSymbol {
    pub name: String,
    pub parent: Option<SymbolHandle>,
    pub file: Option<FileId>,
}

#[derive(Default)]
pub(crate) struct MockFrontEnd {
    pub files: Vec<SourceFile>,
    pub vfs: VirtualFileSystem,
    pub symbols: FxHashMap<SymbolHandle, MockSymbol>,
    pub exports: FxHashMap<(FileId, String), SymbolHandle>,
    pub types: FxHashMap<NodeId, CheckedType>,
}

impl MockFrontEnd {
    pub fn register(&mut self, path: &str) -> FileId {
        self.vfs.register_file(path)
    }

    pub fn add_file(&mut self, file: FileId, root: SyntaxNode) {
        let path = self.vfs.file_path(file).unwrap().to_path_buf();
        self.files.push(SourceFile { id: file, path, root });
    }

    pub fn symbol(&mut self, handle: u32, name: &str, parent: Option<u32>, file: Option<FileId>) -> SymbolHandle {
        let handle = SymbolHandle(handle);
        self.symbols.insert(
            handle,
            MockSymbol {
                name: name.to_string(),
                parent: parent.map(SymbolHandle),
                file,
            },
        );
        handle
    }
}

fn collect<'a>(node: &'a SyntaxNode, symbol: SymbolHandle, found: &mut Vec<&'a SyntaxNode>) {
    if node.symbol == Some(symbol) {
        found.push(node);
    }
    for child in &node.children {
        collect(child, symbol, found);
    }
}

impl FrontEnd for MockFrontEnd {
    fn source_files(&self) -> &[SourceFile] {
        &self.files
    }

    fn file_path(&self, file: FileId) -> Option<&Path> {
        self.vfs.file_path(file)
    }

    fn symbol_name(&self, symbol: SymbolHandle) -> Option<&str> {
        self.symbols.get(&symbol).map(|data| data.name.as_str())
    }

    fn symbol_to_string(&self, symbol: SymbolHandle) -> String {
        self.symbol_name(symbol).unwrap_or("__unknown").to_string()
    }

    fn symbol_parent(&self, symbol: SymbolHandle) -> Option<SymbolHandle> {
        self.symbols.get(&symbol).and_then(|data| data.parent)
    }

    fn symbol_file(&self, symbol: SymbolHandle) -> Option<FileId> {
        self.symbols.get(&symbol).and_then(|data| data.file)
    }

    fn symbol_declarations(&self, symbol: SymbolHandle) -> Vec<&SyntaxNode> {
        let mut found = Vec::new();
        for file in &self.files {
            collect(&file.root, symbol, &mut found);
        }
        found
    }

    fn module_export(&self, file: FileId, name: &str) -> Option<SymbolHandle> {
        self.exports.get(&(file, name.to_string())).copied()
    }

    fn resolve_module(&self, from: FileId, specifier: &str) -> Option<FileId> {
        self.vfs.resolve_module(from, specifier)
    }

    fn type_at_location(&self, node: &SyntaxNode) -> Option<CheckedType> {
        self.types.get(&node.id).cloned()
    }
}

pub(crate) fn node(id: u32, kind: SyntaxKind) -> SyntaxNode {
    SyntaxNode::new(NodeId(id), kind, FileSpan::file_start(FileId(0)))
}
