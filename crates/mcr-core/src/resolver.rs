//! Collision-free target path selection.
//!
//! Existence is checked at call time only. Nothing is reserved, so another
//! process may still claim the returned path before the caller renames
//! into it.

use crate::filename::split_extension;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns `target` if nothing exists there, otherwise the first free
/// `stem_N.ext` sibling with `N` counting up from 1.
///
/// Dangling symlinks count as existing entries. The probe has no upper bound.
pub fn unique_path(target: &Path) -> PathBuf {
    if !entry_exists(target) {
        return target.to_path_buf();
    }

    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, ext) = split_extension(&name);

    let mut counter: u64 = 1;
    loop {
        let candidate = target.with_file_name(format!("{stem}_{counter}{ext}"));
        if !entry_exists(&candidate) {
            tracing::debug!(
                target = %target.display(),
                resolved = %candidate.display(),
                "target taken, using numbered name"
            );
            return candidate;
        }
        counter += 1;
    }
}

fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
