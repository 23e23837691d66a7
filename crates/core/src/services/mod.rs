//! Service implementations of the interface traits

pub mod memory_workspace;

pub use memory_workspace::MemoryWorkspace;
