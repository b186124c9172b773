#![allow(dead_code)]

pub mod mock_session;
pub mod mock_transcoder;

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temporary music directory populated with empty files at `paths`
pub fn music_dir(paths: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for path in paths {
        touch(dir.path(), path);
    }
    dir
}

pub fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, b"").expect("Failed to create file");
}
