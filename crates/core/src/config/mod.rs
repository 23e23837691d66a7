//! Configuration management for yap-tools

mod settings;

pub use settings::{CONFIG_FILE_NAMES, Config};
