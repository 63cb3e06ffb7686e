//! The rename pass: extract, deconflict, and move each file in turn.
//!
//! Files are handled sequentially in the order given. A failed rename is
//! recorded and the pass moves on; earlier renames are never rolled back.

use crate::movie_code::extract_movie_code;
use crate::resolver::unique_path;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What the extractor proposes for a single file, before deconfliction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenamePlan {
    /// Extracted name equals the current name (or nothing was extracted).
    Unchanged,
    /// The file name is not valid UTF-8 and cannot be normalized.
    NonUtf8,
    /// Move to `to`, which still has to go through [`unique_path`].
    Rename { to: PathBuf },
}

/// Why a file was left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyNamed,
    NonUtf8Name,
}

#[derive(Debug)]
pub enum RenameOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    /// Dry run: `to` is where the file would have gone.
    WouldRename { from: PathBuf, to: PathBuf },
    Skipped { path: PathBuf, reason: SkipReason },
    Failed {
        from: PathBuf,
        to: PathBuf,
        error: io::Error,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    /// Resolve targets and report, but leave the filesystem untouched.
    pub dry_run: bool,
}

/// Per-file outcomes of one pass, in processing order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<RenameOutcome>,
}

impl RunReport {
    pub fn renamed(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                RenameOutcome::Renamed { .. } | RenameOutcome::WouldRename { .. }
            )
        })
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Decides what should happen to `path` based on its name alone.
pub fn plan_rename(path: &Path) -> RenamePlan {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return RenamePlan::NonUtf8;
    };
    let normalized = extract_movie_code(name);
    if normalized == name {
        RenamePlan::Unchanged
    } else {
        RenamePlan::Rename {
            to: path.with_file_name(normalized),
        }
    }
}

/// Processes one file: plan, deconflict, rename.
pub fn rename_one(path: &Path, options: RenameOptions) -> RenameOutcome {
    let target = match plan_rename(path) {
        RenamePlan::Unchanged => {
            return RenameOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::AlreadyNamed,
            }
        }
        RenamePlan::NonUtf8 => {
            tracing::warn!(path = %path.display(), "skipping non-UTF-8 file name");
            return RenameOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::NonUtf8Name,
            };
        }
        RenamePlan::Rename { to } => to,
    };

    let to = unique_path(&target);
    let from = path.to_path_buf();

    if options.dry_run {
        tracing::debug!(from = %from.display(), to = %to.display(), "dry run");
        return RenameOutcome::WouldRename { from, to };
    }

    match fs::rename(&from, &to) {
        Ok(()) => {
            tracing::debug!(from = %from.display(), to = %to.display(), "renamed");
            RenameOutcome::Renamed { from, to }
        }
        Err(error) => {
            tracing::warn!(
                from = %from.display(),
                to = %to.display(),
                "rename failed: {}",
                error
            );
            RenameOutcome::Failed { from, to, error }
        }
    }
}

/// Runs the pass over `files` in order and collects every outcome.
pub fn rename_all(files: &[PathBuf], options: RenameOptions) -> RunReport {
    let outcomes = files.iter().map(|f| rename_one(f, options)).collect();
    let report = RunReport { outcomes };
    tracing::info!(
        renamed = report.renamed(),
        skipped = report.skipped(),
        failed = report.failed(),
        dry_run = options.dry_run,
        "rename pass finished"
    );
    report
}
