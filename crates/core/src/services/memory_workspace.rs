//! In-memory workspace implementation
//!
//! Holds already-read `(FileId, text)` pairs in caller order. Useful for
//! hosts that own their own document store, and for tests.

use crate::error::{Error, Result};
use crate::interfaces::WorkspaceSource;
use crate::types::FileId;

#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspace {
    files: Vec<(FileId, String)>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, id: impl Into<FileId>, text: impl Into<String>) -> Self {
        self.insert(id, text);
        self
    }

    /// Add a file, or replace its text in place if it is already present
    pub fn insert(&mut self, id: impl Into<FileId>, text: impl Into<String>) {
        let id = id.into();
        let text = text.into();
        match self.files.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = text,
            None => self.files.push((id, text)),
        }
    }
}

impl WorkspaceSource for MemoryWorkspace {
    fn candidates(&self) -> Vec<FileId> {
        self.files.iter().map(|(id, _)| id.clone()).collect()
    }

    fn read(&self, file: &FileId) -> Result<String> {
        self.files
            .iter()
            .find(|(id, _)| id == file)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| Error::FileNotFound(file.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_keep_insertion_order() {
        let workspace = MemoryWorkspace::new()
            .with_file("b.yap", "")
            .with_file("a.yap", "")
            .with_file("b.yap", "fn b() {}");

        let ids: Vec<String> = workspace
            .candidates()
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, vec!["b.yap", "a.yap"]);
        assert_eq!(workspace.read(&"b.yap".into()).unwrap(), "fn b() {}");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let workspace = MemoryWorkspace::new();
        assert!(matches!(
            workspace.read(&"nope.yap".into()),
            Err(Error::FileNotFound(_))
        ));
    }
}
