//! `docgraph.toml` configuration

use anyhow::{Context, Result};
use dg_convert::{ConverterOptions, EntryPointMode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// File name looked up by [`Config::find_in_dir`]
pub const CONFIG_FILE_NAME: &str = "docgraph.toml";

/// Project configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Conversion settings
    pub conversion: ConversionConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// `[conversion]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    /// Project name; the snapshot's name is used when absent
    pub name: Option<String>,

    /// How source files map onto the reflection tree
    pub mode: ModeSetting,

    /// Skip top-level declarations without an `export` modifier
    pub exclude_not_exported: bool,
}

/// `[output]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Indent the JSON output
    pub pretty: bool,

    /// Print the reflection outline instead of JSON
    pub render_tree: bool,
}

/// Entry point mode as written in the configuration file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    /// `mode = "modules"`
    #[default]
    Modules,
    /// `mode = "file"`
    File,
}

impl From<ModeSetting> for EntryPointMode {
    fn from(mode: ModeSetting) -> Self {
        match mode {
            ModeSetting::Modules => Self::Modules,
            ModeSetting::File => Self::File,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load `docgraph.toml` from `dir`, or the defaults when there is none
    pub fn find_in_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.is_file() {
            debug!(dir = %dir.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(&config_path)
    }

    /// Converter options for a program whose own name is `program_name`
    #[must_use]
    pub fn converter_options(&self, program_name: Option<&str>) -> ConverterOptions {
        let defaults = ConverterOptions::default();
        let project_name = self
            .conversion
            .name
            .clone()
            .or_else(|| program_name.map(str::to_string))
            .unwrap_or(defaults.project_name);

        ConverterOptions {
            project_name,
            mode: self.conversion.mode.into(),
            exclude_not_exported: self.conversion.exclude_not_exported,
        }
    }
}
