//! Front end backed by a JSON dump of an analysed program
//!
//! The snapshot format mirrors what a parser plus checker knows after
//! analysis:
//!
//! ```json
//! {
//!   "name": "shapes",
//!   "files": [{ "path": "src/shapes.ts", "root": { "id": 0, "kind": "source_file", ... } }],
//!   "symbols": [{ "id": 1, "name": "Point", "parent": null, "file": "src/shapes.ts" }],
//!   "exports": [{ "module": "src/shapes.ts", "name": "Point", "symbol": 1 }],
//!   "types": [{ "node": 4, "type": { "kind": "intrinsic", "name": "number" } }],
//!   "ambient_modules": { "shapes-lib": "src/shapes.ts" }
//! }
//! ```
//!
//! File ids are positions in `files`. Declaration sites are indexed once at
//! load time by walking every syntax tree.

use anyhow::{Context, Result, bail};
use dg_span::FileId;
use dg_syntax::{CheckedType, FrontEnd, NodeId, SourceFile, SymbolHandle, SyntaxNode};
use dg_vfs::VirtualFileSystem;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSnapshot {
    #[serde(default)]
    name: Option<String>,
    files: Vec<RawFile>,
    #[serde(default)]
    symbols: Vec<RawSymbol>,
    #[serde(default)]
    exports: Vec<RawExport>,
    #[serde(default)]
    types: Vec<RawCheckedType>,
    #[serde(default)]
    ambient_modules: BTreeMap<String, PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawFile {
    path: PathBuf,
    root: SyntaxNode,
}

#[derive(Debug, Deserialize)]
struct RawSymbol {
    id: SymbolHandle,
    name: String,
    #[serde(default)]
    parent: Option<SymbolHandle>,
    #[serde(default)]
    file: Option<PathBuf>,
    #[serde(default)]
    display: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawExport {
    module: PathBuf,
    name: String,
    symbol: SymbolHandle,
}

#[derive(Debug, Deserialize)]
struct RawCheckedType {
    node: NodeId,
    #[serde(rename = "type")]
    ty: CheckedType,
}

#[derive(Debug, Clone)]
struct SymbolEntry {
    name: String,
    parent: Option<SymbolHandle>,
    file: Option<FileId>,
    display: Option<String>,
}

/// Position of a declaration: file index, then child indices from the root
#[derive(Debug, Clone, PartialEq, Eq)]
struct NodePath {
    file: usize,
    steps: Vec<usize>,
}

/// A loaded program snapshot
#[derive(Debug, Clone)]
pub struct ProgramSnapshot {
    name: Option<String>,
    files: Vec<SourceFile>,
    vfs: VirtualFileSystem,
    symbols: FxHashMap<SymbolHandle, SymbolEntry>,
    exports: FxHashMap<(FileId, String), SymbolHandle>,
    types: FxHashMap<NodeId, CheckedType>,
    declarations: FxHashMap<SymbolHandle, Vec<NodePath>>,
}

impl ProgramSnapshot {
    /// Load a snapshot from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;

        Self::from_json(&contents)
            .with_context(|| format!("Failed to load snapshot file: {}", path.display()))
    }

    /// Load a snapshot from JSON text
    pub fn from_json(contents: &str) -> Result<Self> {
        let raw: RawSnapshot = serde_json::from_str(contents).context("Invalid snapshot JSON")?;
        Self::build(raw)
    }

    fn build(raw: RawSnapshot) -> Result<Self> {
        let mut vfs = VirtualFileSystem::new();
        let mut files = Vec::with_capacity(raw.files.len());
        for (index, file) in raw.files.into_iter().enumerate() {
            let id = vfs.register_file(&file.path);
            if id.index() != index {
                bail!("duplicate file path in snapshot: {}", file.path.display());
            }
            if file.root.file() != id {
                bail!(
                    "root node of {} points into {}, expected {}",
                    file.path.display(),
                    file.root.file(),
                    id
                );
            }
            files.push(SourceFile {
                id,
                path: file.path,
                root: file.root,
            });
        }

        let lookup = |path: &Path| {
            vfs.file_id(path)
                .with_context(|| format!("unknown file in snapshot: {}", path.display()))
        };

        let mut symbols = FxHashMap::default();
        for symbol in raw.symbols {
            let file = symbol.file.as_deref().map(lookup).transpose()?;
            let entry = SymbolEntry {
                name: symbol.name,
                parent: symbol.parent,
                file,
                display: symbol.display,
            };
            if symbols.insert(symbol.id, entry).is_some() {
                bail!("duplicate symbol id in snapshot: {}", symbol.id.0);
            }
        }

        let mut exports = FxHashMap::default();
        for export in raw.exports {
            let module = lookup(&export.module)?;
            exports.insert((module, export.name), export.symbol);
        }

        let mut ambient = Vec::with_capacity(raw.ambient_modules.len());
        for (name, path) in raw.ambient_modules {
            ambient.push((name, lookup(&path)?));
        }
        for (name, file) in ambient {
            vfs.declare_ambient_module(name, file);
        }

        let types = raw.types.into_iter().map(|entry| (entry.node, entry.ty)).collect();

        let mut declarations = FxHashMap::default();
        for (index, file) in files.iter().enumerate() {
            let mut steps = Vec::new();
            index_declarations(&file.root, index, &mut steps, &mut declarations);
        }

        debug!(
            files = files.len(),
            symbols = symbols.len(),
            declared = declarations.len(),
            "snapshot loaded"
        );

        Ok(Self {
            name: raw.name,
            files,
            vfs,
            symbols,
            exports,
            types,
            declarations,
        })
    }

    /// Program name recorded in the snapshot
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of source files
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    fn node_at(&self, path: &NodePath) -> Option<&SyntaxNode> {
        let mut node = &self.files.get(path.file)?.root;
        for &step in &path.steps {
            node = node.children.get(step)?;
        }
        Some(node)
    }
}

fn index_declarations(
    node: &SyntaxNode,
    file: usize,
    steps: &mut Vec<usize>,
    declarations: &mut FxHashMap<SymbolHandle, Vec<NodePath>>,
) {
    if let Some(symbol) = node.symbol {
        declarations.entry(symbol).or_default().push(NodePath {
            file,
            steps: steps.clone(),
        });
    }
    for (index, child) in node.children.iter().enumerate() {
        steps.push(index);
        index_declarations(child, file, steps, declarations);
        steps.pop();
    }
}

impl FrontEnd for ProgramSnapshot {
    fn source_files(&self) -> &[SourceFile] {
        &self.files
    }

    fn file_path(&self, file: FileId) -> Option<&Path> {
        self.vfs.file_path(file)
    }

    fn symbol_name(&self, symbol: SymbolHandle) -> Option<&str> {
        self.symbols.get(&symbol).map(|entry| entry.name.as_str())
    }

    fn symbol_to_string(&self, symbol: SymbolHandle) -> String {
        match self.symbols.get(&symbol) {
            Some(entry) => entry.display.clone().unwrap_or_else(|| entry.name.clone()),
            None => format!("__symbol{}", symbol.0),
        }
    }

    fn symbol_parent(&self, symbol: SymbolHandle) -> Option<SymbolHandle> {
        self.symbols.get(&symbol).and_then(|entry| entry.parent)
    }

    fn symbol_file(&self, symbol: SymbolHandle) -> Option<FileId> {
        self.symbols.get(&symbol).and_then(|entry| entry.file)
    }

    fn symbol_declarations(&self, symbol: SymbolHandle) -> Vec<&SyntaxNode> {
        self.declarations
            .get(&symbol)
            .map(|paths| paths.iter().filter_map(|path| self.node_at(path)).collect())
            .unwrap_or_default()
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
