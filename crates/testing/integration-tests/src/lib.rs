//! Integration test utilities for docgraph
//!
//! [`ProgramBuilder`] assembles an analysed program the way a front end
//! would hand it over and loads it through the JSON snapshot front end, so
//! every scenario also exercises snapshot loading.

use anyhow::Result;
use dg_convert::{ConverterOptions, EntryPointMode};
use dg_driver::{Documentation, ProgramSnapshot, document_program};
use dg_span::{FileId, FileSpan, Span};
use dg_syntax::{CheckedType, DocComment, DocTag, NodeId, SymbolHandle, SyntaxKind, SyntaxNode, TypeNode};
use serde_json::{Value, json};

/// Test fixture describing one analysed program
#[derive(Debug)]
pub struct ProgramBuilder {
    name: String,
    files: Vec<(String, SyntaxNode)>,
    symbols: Vec<Value>,
    exports: Vec<Value>,
    types: Vec<Value>,
    ambient_modules: serde_json::Map<String, Value>,
    next_node: u32,
    next_symbol: u32,
}

impl ProgramBuilder {
    /// Creates an empty program named `name`
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            symbols: Vec::new(),
            exports: Vec::new(),
            types: Vec::new(),
            ambient_modules: serde_json::Map::new(),
            next_node: 0,
            next_symbol: 1,
        }
    }

    /// Adds a source file and returns its id
    pub fn file(&mut self, path: &str) -> FileId {
        let file = FileId(self.files.len() as u32);
        let root = self.node(file, SyntaxKind::SourceFile);
        self.files.push((path.to_string(), root));
        file
    }

    /// Declares a symbol
    pub fn symbol(&mut self, name: &str, parent: Option<SymbolHandle>, file: Option<FileId>) -> SymbolHandle {
        let handle = SymbolHandle(self.next_symbol);
        self.next_symbol += 1;
        let path = file.map(|file| self.path(file));
        self.symbols.push(json!({
            "id": handle,
            "name": name,
            "parent": parent,
            "file": path,
        }));
        handle
    }

    /// Bare node of `kind` with a fresh id
    pub fn node(&mut self, file: FileId, kind: SyntaxKind) -> SyntaxNode {
        let id = self.next_node;
        self.next_node += 1;
        let span = FileSpan::new(file, Span::new(id * 10, id * 10 + 5));
        SyntaxNode::new(NodeId(id), kind, span)
    }

    /// Named declaration node bound to a new symbol
    pub fn declaration(
        &mut self,
        file: FileId,
        kind: SyntaxKind,
        name: &str,
        parent: Option<SymbolHandle>,
    ) -> (SyntaxNode, SymbolHandle) {
        let symbol = self.symbol(name, parent, Some(file));
        let node = self.node(file, kind).with_name(name).with_symbol(symbol);
        (node, symbol)
    }

    /// Another declaration site of an existing symbol
    pub fn redeclaration(&mut self, file: FileId, kind: SyntaxKind, name: &str, symbol: SymbolHandle) -> SyntaxNode {
        self.node(file, kind).with_name(name).with_symbol(symbol)
    }

    /// Parameter node, optionally annotated
    pub fn parameter(&mut self, file: FileId, name: &str, ty: Option<TypeNode>) -> SyntaxNode {
        let node = self.node(file, SyntaxKind::Parameter).with_name(name);
        match ty {
            Some(ty) => node.with_type(ty),
            None => node,
        }
    }

    /// Appends a top-level node to `file`
    pub fn push(&mut self, file: FileId, node: SyntaxNode) {
        if let Some((_, root)) = self.files.get_mut(file.index()) {
            root.children.push(node);
        }
    }

    /// Adds `name` to the export table of `file`
    pub fn export(&mut self, file: FileId, name: &str, symbol: SymbolHandle) {
        let module = self.path(file);
        self.exports.push(json!({
            "module": module,
            "name": name,
            "symbol": symbol,
        }));
    }

    /// Records the checker's type for a node
    pub fn checked_type(&mut self, node: NodeId, ty: CheckedType) {
        self.types.push(json!({ "node": node, "type": ty }));
    }

    /// Declares an ambient module implemented by `file`
    pub fn ambient_module(&mut self, name: &str, file: FileId) {
        let path = self.path(file);
        self.ambient_modules.insert(name.to_string(), Value::String(path));
    }

    fn path(&self, file: FileId) -> String {
        self.files
            .get(file.index())
            .map(|(path, _)| path.clone())
            .unwrap_or_default()
    }

    /// Snapshot JSON of the program
    #[must_use]
    pub fn to_json(&self) -> Value {
        let files: Vec<Value> = self
            .files
            .iter()
            .map(|(path, root)| json!({ "path": path, "root": root }))
            .collect();
        json!({
            "name": self.name,
            "files": files,
            "symbols": self.symbols,
            "exports": self.exports,
            "types": self.types,
            "ambient_modules": self.ambient_modules,
        })
    }

    /// Loads the program through the snapshot front end
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot is inconsistent
    pub fn build(&self) -> Result<ProgramSnapshot> {
        ProgramSnapshot::from_json(&self.to_json().to_string())
    }
}

/// Options naming the project after the program
#[must_use]
pub fn options(mode: EntryPointMode) -> ConverterOptions {
    ConverterOptions {
        project_name: "demo".to_string(),
        mode,
        ..ConverterOptions::default()
    }
}

/// Converts and resolves a program
///
/// # Errors
///
/// Returns an error if loading or conversion fails
pub fn document(program: &ProgramBuilder, mode: EntryPointMode) -> Result<Documentation> {
    let snapshot = program.build()?;
    Ok(document_program(&snapshot, options(mode))?)
}

/// Comment carrying only block tags
#[must_use]
pub fn tags(tags: Vec<DocTag>) -> DocComment {
    DocComment {
        summary: String::new(),
        tags,
    }
}
