//! Core interfaces between the engine and its host
//!
//! The engine operates on text it is handed. Anything that touches the
//! outside world (enumerating and reading workspace files) sits behind the
//! traits defined here.

pub mod workspace_source;

pub use workspace_source::WorkspaceSource;
