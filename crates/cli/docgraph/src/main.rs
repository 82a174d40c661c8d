//! docgraph CLI
//!
//! Main entry point for converting analysed program snapshots into
//! documentation graphs

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use dg_driver::ModeSetting;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod check;
mod convert;

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "DOCGRAPH_LOG";

#[derive(Parser)]
#[command(name = "docgraph")]
#[command(about = "Documentation graph generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a program snapshot into a reflection graph
    Convert {
        /// Path to the program snapshot (JSON)
        snapshot: PathBuf,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to docgraph.toml next to the snapshot)
        #[arg(long)]
        config: Option<PathBuf>,

        /// How source files map onto the reflection tree
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Skip top-level declarations without an export modifier
        #[arg(long)]
        exclude_not_exported: bool,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,

        /// Print the reflection outline instead of JSON
        #[arg(long)]
        tree: bool,
    },

    /// Convert a snapshot and report what was documented
    Check {
        /// Path to the program snapshot (JSON)
        snapshot: PathBuf,

        /// Configuration file (defaults to docgraph.toml next to the snapshot)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Entry point mode accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// One module per source file
    Modules,
    /// All declarations directly below the project
    File,
}

impl From<ModeArg> for ModeSetting {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Modules => Self::Modules,
            ModeArg::File => Self::File,
        }
    }
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            snapshot,
            output,
            config,
            mode,
            exclude_not_exported,
            pretty,
            tree,
        } => {
            let overrides = convert::Overrides {
                mode: mode.map(ModeSetting::from),
                exclude_not_exported,
                pretty,
                tree,
            };
            convert::convert(&snapshot, config.as_deref(), output.as_deref(), &overrides)?;
        }
        Commands::Check { snapshot, config } => {
            check::check(&snapshot, config.as_deref())?;
        }
    }

    Ok(())
}
