use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};
use yap_tools_core::Config;

/// Resolve `path` against the current directory and make sure it exists
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let candidate = Path::new(path);
    let absolute = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        std::env::current_dir()?.join(candidate)
    };

    if !absolute.exists() {
        bail!("File not found: {}", absolute.display());
    }

    absolute
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", absolute.display()))
}

pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Hidden directories such as `.git` are never descended into
pub(crate) fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Source files under `root` in file-name order
pub fn walk_source_files(root: &Path, config: &Config) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && config.is_source_file(e.path()))
        .map(|e| e.into_path())
        .collect()
}

/// Source files a command line path stands for. A file named explicitly is
/// kept whatever its extension; a directory is walked.
pub fn collect_source_files(path: &Path, config: &Config) -> Vec<PathBuf> {
    if path.is_dir() {
        walk_source_files(path, config)
    } else {
        vec![path.to_path_buf()]
    }
}
