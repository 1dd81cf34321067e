//! Shared unit test utilities.
//!
//! Projects are temp directories holding a `.git` marker, so config
//! discovery never escapes into the surrounding filesystem.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::discovery::CONFIG_FILE_NAME;

/// A project root with a minimal kwscan.toml.
pub fn temp_project() -> TempDir {
    temp_project_with_config("version = 1\n")
}

/// A project root with the given kwscan.toml content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    create_tree(dir.path(), &[(".git/HEAD", ""), (CONFIG_FILE_NAME, config)]);
    dir
}

/// A project whose config points at a keyword file holding `keywords`.
pub fn temp_project_with_keywords(keywords: &[&str]) -> TempDir {
    let dir = temp_project_with_config("version = 1\n[keywords]\nfile = \"keywords.txt\"\n");
    write_keywords(dir.path(), "keywords.txt", keywords);
    dir
}

/// Write one keyword per line to `root/name`.
pub fn write_keywords(root: &Path, name: &str, keywords: &[&str]) -> PathBuf {
    let path = root.join(name);
    let mut content = keywords.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
