//! `mcr run` – scan for video files and rename them to their movie code.

use anyhow::{Context, Result};
use mcr_core::config::{self, ConfigOrigin};
use mcr_core::rename::{rename_all, RenameOptions, RenameOutcome, RunReport, SkipReason};
use mcr_core::scan::collect_video_files;
use std::path::{Path, PathBuf};

/// Loads config, collects video files under the root and renames them one by one.
///
/// Config and walk errors abort the run. A failed rename is printed and the
/// remaining files are still processed.
pub fn run_rename(config_path: &Path, root: Option<&Path>, dry_run: bool) -> Result<()> {
    let loaded = config::load_or_init(config_path).context("error loading config")?;
    match loaded.origin {
        ConfigOrigin::Created => println!("Created new config file with default values"),
        ConfigOrigin::Loaded => println!("Loaded existing config file"),
    }
    let cfg = loaded.config;
    println!("Using config: {:?}", cfg);
    if !cfg.proxy_addr.is_empty() {
        tracing::debug!(proxy = %cfg.proxy_addr, "proxy_addr is set but unused");
    }

    let root: PathBuf = root
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&cfg.file_path));
    let files = collect_video_files(&root, &cfg.video_types)
        .with_context(|| format!("error scanning {}", root.display()))?;
    println!("Found {} video files", files.len());

    let report = rename_all(&files, RenameOptions { dry_run });
    print_report(&report);
    Ok(())
}

fn print_report(report: &RunReport) {
    for outcome in &report.outcomes {
        match outcome {
            RenameOutcome::Renamed { from, to } => {
                println!("Renamed: {} -> {}", from.display(), file_name(to));
            }
            RenameOutcome::WouldRename { from, to } => {
                println!("Would rename: {} -> {}", from.display(), file_name(to));
            }
            RenameOutcome::Skipped { path, reason } => match reason {
                SkipReason::AlreadyNamed => {
                    println!("Skipped: {} (already named correctly)", path.display())
                }
                SkipReason::NonUtf8Name => {
                    println!("Skipped: {} (file name is not valid UTF-8)", path.display())
                }
            },
            RenameOutcome::Failed { from, to, error } => {
                println!(
                    "Error renaming {} to {}: {}",
                    from.display(),
                    to.display(),
                    error
                );
            }
        }
    }
    println!(
        "Done: {} renamed, {} skipped, {} failed",
        report.renamed(),
        report.skipped(),
        report.failed()
    );
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
