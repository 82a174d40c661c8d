//! Conversion options

/// How source files map onto the reflection tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryPointMode {
    /// One `Module` reflection per source file
    #[default]
    Modules,
    /// Declarations of every file directly below the project
    File,
}

/// Options of one conversion pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Name of the project reflection
    pub project_name: String,
    /// Source file mapping
    pub mode: EntryPointMode,
    /// Skip top-level declarations without an `export` modifier
    pub exclude_not_exported: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            project_name: "project".to_string(),
            mode: EntryPointMode::Modules,
            exclude_not_exported: false,
        }
    }
}
