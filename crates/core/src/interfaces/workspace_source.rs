//! Workspace access interface
//!
//! The engine never walks the file system itself. Hosts decide which files
//! exist, in which order they are searched, and how they are read.

use crate::error::Result;
use crate::types::FileId;

/// Trait for enumerating and reading the files of a workspace
pub trait WorkspaceSource: Send + Sync {
    /// Candidate files in search order. Definition lookup is first-match-wins
    /// over this order.
    fn candidates(&self) -> Vec<FileId>;

    /// Read the full text of a candidate
    fn read(&self, file: &FileId) -> Result<String>;
}
