//! Check command implementation

use crate::convert::load_config;
use anyhow::Result;
use colored::Colorize;
use dg_driver::{ProgramSnapshot, document_program};
use std::path::Path;

pub fn check(snapshot_path: &Path, config_path: Option<&Path>) -> Result<()> {
    println!("{} snapshot at {:?}", "Checking".green().bold(), snapshot_path);

    let config = load_config(snapshot_path, config_path)?;
    let snapshot = ProgramSnapshot::from_file(snapshot_path)?;
    println!("  {} {} source files", "Found:".bold(), snapshot.file_count());

    let options = config.converter_options(snapshot.name());
    let docs = match document_program(&snapshot, options) {
        Ok(docs) => docs,
        Err(error) => {
            eprintln!("    {} {}", "✗".red(), error);
            eprintln!("{} conversion aborted", "Failed:".red().bold());
            anyhow::bail!("Check failed: {error}");
        }
    };

    println!("    {} {} reflections", "✓".green(), docs.project.len());
    println!("    {} {} symbols registered", "✓".green(), docs.registry.len());
    println!("    {} {} internal references", "✓".green(), docs.report.internal);

    println!();
    if docs.report.external == 0 {
        println!("{} All references resolved", "Success:".green().bold());
    } else {
        println!(
            "{} {} external references ({})",
            "Warning:".yellow().bold(),
            docs.report.external,
            docs.report
                .external_names
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}
