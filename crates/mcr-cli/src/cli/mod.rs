//! CLI for the MCR movie code renamer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use mcr_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_extract, run_rename};

/// Top-level CLI for the MCR movie code renamer.
#[derive(Debug, Parser)]
#[command(name = "mcr")]
#[command(about = "MCR: rename video files to their normalized movie code", long_about = None)]
pub struct Cli {
    /// Path to the JSON config file (created with defaults if missing).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scan the configured directory and rename video files to their movie code.
    Run {
        /// Directory to scan instead of the config's `file_path`.
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
        /// Show what would be renamed without touching any file.
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the normalized name for each given filename (no filesystem access).
    Extract {
        /// Filenames or paths to normalize.
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Run { root, dry_run } => {
                let path = cli.config.unwrap_or_else(config::config_path);
                run_rename(&path, root.as_deref(), dry_run)?;
            }
            CliCommand::Extract { names } => run_extract(&names),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
