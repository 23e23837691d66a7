//! Whole-document re-indentation

pub mod engine;

pub use engine::{DEFAULT_INDENT_WIDTH, Formatter, format_document};
