//! File-system backed workspace for definition and hover lookups

use std::path::PathBuf;
use tracing::debug;
use yap_tools_core::{Config, FileId, Result, WorkspaceSource};

use super::file::walk_source_files;

/// Every source file under a root, enumerated in file-name order and read on
/// demand
#[derive(Debug, Clone)]
pub struct DiskWorkspace {
    root: PathBuf,
    config: Config,
}

impl DiskWorkspace {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }
}

impl WorkspaceSource for DiskWorkspace {
    fn candidates(&self) -> Vec<FileId> {
        let files = walk_source_files(&self.root, &self.config);
        debug!("{} candidate files under {}", files.len(), self.root.display());
        files.iter().map(|p| FileId::from_path(p)).collect()
    }

    fn read(&self, file: &FileId) -> Result<String> {
        Ok(std::fs::read_to_string(file.as_str())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use yap_tools_core::{CancellationToken, Position, find_in_workspace};

    #[test]
    fn test_search_on_disk() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("a.yap"), "main();").unwrap();
        fs::write(root.join("b.yap"), "\nexport fn main() {}").unwrap();
        fs::write(root.join("c.yap"), "fn main() {}").unwrap();

        let workspace = DiskWorkspace::new(root, Config::default());
        let cancel = CancellationToken::new();
        let found = find_in_workspace("main", None, &workspace, &cancel).unwrap();

        assert_eq!(found.file, FileId::from_path(&root.join("b.yap")));
        assert_eq!(found.position, Position::new(1, 0));
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let workspace = DiskWorkspace::new(temp.path(), Config::default());
        let missing = FileId::from_path(&temp.path().join("gone.yap"));
        assert!(workspace.read(&missing).is_err());
    }
}
