//! Recursive collection of video files under a root directory.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Fatal scan failure. Any walk error aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("error walking {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Returns true if the full path ends with one of `video_types`, ignoring case.
pub fn has_video_extension(path: &Path, video_types: &[String]) -> bool {
    let lower = path.to_string_lossy().to_lowercase();
    video_types
        .iter()
        .any(|ext| !ext.is_empty() && lower.ends_with(&ext.to_lowercase()))
}

/// Walks `root` and collects every regular file matching `video_types`.
///
/// Symlinks are not followed. The list is in traversal order, which is
/// whatever the platform returns; it is not sorted. Everything is collected
/// before returning so later renames cannot feed back into the walk.
pub fn collect_video_files(
    root: &Path,
    video_types: &[String],
) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| ScanError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if has_video_extension(entry.path(), video_types) {
            files.push(entry.into_path());
        }
    }
    tracing::debug!(root = %root.display(), count = files.len(), "scan complete");
    Ok(files)
}
