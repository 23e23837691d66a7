//! yap-tools-core - Language-aware text engine for the YAP scripting language
//!
//! This crate provides functionality to:
//! - Re-indent and re-wrap YAP source (comment- and string-aware)
//! - Locate function declarations in a document or across a workspace
//! - Build hover documentation from signatures and preceding comments
//! - Compute the text edits that import a standard-library symbol
//!
//! Everything works on plain text with line-level lexical scanning; malformed
//! input degrades to "no edit" or "not found" rather than an error.
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod imports;
pub mod interfaces;
pub mod parser;
pub mod services;
pub mod symbols;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::Config;
pub use engine::Engine;
pub use format::{Formatter, format_document};
pub use imports::{ImportClause, ensure_imported, parse_imports};
pub use interfaces::WorkspaceSource;
pub use services::MemoryWorkspace;
pub use symbols::{CompletionItem, CompletionKind, find_in_document, find_in_workspace, hover};
