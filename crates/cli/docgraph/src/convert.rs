//! Convert command implementation

use anyhow::{Context, Result};
use dg_driver::{Config, ModeSetting, ProgramSnapshot, document_program};
use std::path::Path;
use tracing::debug;

/// Command-line values that take precedence over the configuration file
#[derive(Debug, Default)]
pub struct Overrides {
    pub mode: Option<ModeSetting>,
    pub exclude_not_exported: bool,
    pub pretty: bool,
    pub tree: bool,
}

impl Overrides {
    fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.conversion.mode = mode;
        }
        config.conversion.exclude_not_exported |= self.exclude_not_exported;
        config.output.pretty |= self.pretty;
        config.output.render_tree |= self.tree;
    }
}

/// Configuration for `snapshot`: an explicit file, or `docgraph.toml` beside it
pub fn load_config(snapshot: &Path, explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::from_file(path),
        None => {
            let dir = snapshot.parent().unwrap_or_else(|| Path::new("."));
            Config::find_in_dir(dir)
        }
    }
}

pub fn convert(
    snapshot_path: &Path,
    config_path: Option<&Path>,
    output: Option<&Path>,
    overrides: &Overrides,
) -> Result<()> {
    let mut config = load_config(snapshot_path, config_path)?;
    overrides.apply(&mut config);
    debug!(?config, "effective configuration");

    let snapshot = ProgramSnapshot::from_file(snapshot_path)?;
    let options = config.converter_options(snapshot.name());
    let docs = document_program(&snapshot, options)
        .with_context(|| format!("Failed to convert {}", snapshot_path.display()))?;

    let rendered = if config.output.render_tree {
        docs.render_tree()
    } else {
        let mut json = docs.to_json(config.output.pretty)?;
        json.push('\n');
        json
    };

    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
