//! Temporary directory trees populated with empty video files for rename tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct VideoDir {
    dir: TempDir,
}

impl VideoDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `rel` (parent directories included) with `contents`.
    pub fn add(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Sorted file names directly under `rel` ("" for the root).
    pub fn names_in(&self, rel: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path().join(rel))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub fn default_video_types() -> Vec<String> {
    mcr_core::config::McrConfig::default().video_types
}
