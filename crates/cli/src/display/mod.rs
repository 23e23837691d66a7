pub mod formatter;

pub use formatter::{display_path, format_location, print_json};
