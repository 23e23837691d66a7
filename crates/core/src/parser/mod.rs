//! Lightweight lexical scanning of YAP source, one line at a time

pub mod classifier;
pub mod normalizer;
pub mod utils;

// Re-export commonly used items
pub use classifier::{LineClass, classify, split_trailing_comment};
pub use normalizer::{merge_open_brace, normalize_line};
pub use utils::{offset_to_position, position_to_offset, word_at};
