//! Virtual file table and module specifier resolution
//!
//! Tracks the files of one analysed program by normalised path and resolves
//! import specifiers between them without touching the disk.

use dg_span::FileId;
use rustc_hash::FxHashMap;
use std::path::{Component, Path, PathBuf};
use tracing::trace;

/// Suffixes tried, in order, when resolving a relative specifier
const CANDIDATE_SUFFIXES: &[&str] = &[
    "",
    ".ts",
    ".tsx",
    ".d.ts",
    ".js",
    "/index.ts",
    "/index.tsx",
    "/index.d.ts",
    "/index.js",
];

/// Whether `specifier` names a file relative to the importing module
///
/// Everything else (`lodash`, `@scope/pkg`, `node:fs`) is ambient: it can
/// only be matched against declared ambient modules.
#[must_use]
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier.starts_with('/')
}

/// Lexically normalises a path: drops `.` and folds `..` into its parent
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// File table of one program
#[derive(Debug, Default, Clone)]
pub struct VirtualFileSystem {
    files: Vec<PathBuf>,
    paths: FxHashMap<PathBuf, FileId>,
    ambient_modules: FxHashMap<String, FileId>,
}

impl VirtualFileSystem {
    /// Creates an empty file table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file path and returns its id
    ///
    /// Registering the same (normalised) path twice returns the same id.
    pub fn register_file(&mut self, path: impl AsRef<Path>) -> FileId {
        let path = normalize_path(path.as_ref());
        if let Some(&file_id) = self.paths.get(&path) {
            return file_id;
        }

        let file_id = FileId::new(self.files.len() as u32);
        self.files.push(path.clone());
        self.paths.insert(path, file_id);
        file_id
    }

    /// Declares `name` as an ambient module implemented by `file`
    pub fn declare_ambient_module(&mut self, name: impl Into<String>, file: FileId) {
        self.ambient_modules.insert(name.into(), file);
    }

    /// Path of a registered file
    #[must_use]
    pub fn file_path(&self, file_id: FileId) -> Option<&Path> {
        self.files.get(file_id.index()).map(PathBuf::as_path)
    }

    /// Id of a registered path
    #[must_use]
    pub fn file_id(&self, path: impl AsRef<Path>) -> Option<FileId> {
        self.paths.get(&normalize_path(path.as_ref())).copied()
    }

    /// Number of registered files
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no file is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Resolves `specifier` as imported from `from`
    ///
    /// Relative specifiers are joined to the importing file's directory and
    /// tried with the usual source suffixes; ambient specifiers only match
    /// declared ambient modules.
    #[must_use]
    pub fn resolve_module(&self, from: FileId, specifier: &str) -> Option<FileId> {
        if !is_relative_specifier(specifier) {
            let resolved = self.ambient_modules.get(specifier).copied();
            trace!(specifier, ?resolved, "ambient module lookup");
            return resolved;
        }

        let importer = self.file_path(from)?;
        let base_dir = importer.parent().unwrap_or_else(|| Path::new(""));
        let base = normalize_path(&base_dir.join(specifier));
        let base = base.to_string_lossy();

        let mut stems = vec![base.to_string()];
        if let Some(stem) = base.strip_suffix(".js") {
            stems.push(stem.to_string());
        }

        let resolved = stems.iter().find_map(|stem| {
            CANDIDATE_SUFFIXES
                .iter()
                .find_map(|suffix| self.paths.get(Path::new(&format!("{stem}{suffix}"))))
                .copied()
        });
        trace!(specifier, ?resolved, "relative module lookup");
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (VirtualFileSystem, FileId, FileId, FileId) {
        let mut vfs = VirtualFileSystem::new();
        let main = vfs.register_file("src/main.ts");
        let shapes = vfs.register_file("src/shapes.ts");
        let util = vfs.register_file("src/util/index.d.ts");
        (vfs, main, shapes, util)
    }

    #[test]
    fn test_duplicate_registration() {
        let mut vfs = VirtualFileSystem::new();
        let id1 = vfs.register_file("test.ts");
        let id2 = vfs.register_file("./test.ts");
        assert_eq!(id1, id2);
        assert_eq!(vfs.len(), 1);
    }

    #[test]
    fn test_relative_specifiers() {
        assert!(is_relative_specifier("./shapes"));
        assert!(is_relative_specifier("../shapes"));
        assert!(is_relative_specifier(".."));
        assert!(!is_relative_specifier("lodash"));
        assert!(!is_relative_specifier("@scope/pkg"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("src/./a/../b.ts")), PathBuf::from("src/b.ts"));
        assert_eq!(normalize_path(Path::new("../x.ts")), PathBuf::from("../x.ts"));
    }

    #[test]
    fn test_resolve_relative_with_suffix() {
        let (vfs, main, shapes, util) = fixture();
        assert_eq!(vfs.resolve_module(main, "./shapes"), Some(shapes));
        assert_eq!(vfs.resolve_module(main, "./shapes.js"), Some(shapes));
        assert_eq!(vfs.resolve_module(main, "./util"), Some(util));
        assert_eq!(vfs.resolve_module(util, "../shapes"), Some(shapes));
        assert_eq!(vfs.resolve_module(main, "./missing"), None);
    }

    #[test]
    fn test_resolve_ambient_module() {
        let (mut vfs, main, _, util) = fixture();
        assert_eq!(vfs.resolve_module(main, "util-lib"), None);
        vfs.declare_ambient_module("util-lib", util);
        assert_eq!(vfs.resolve_module(main, "util-lib"), Some(util));
    }
}
