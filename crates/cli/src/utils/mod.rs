pub mod file;
pub mod parser;
pub mod workspace;

pub use file::{collect_source_files, read_source, resolve_path};
pub use parser::parse_filepath_with_position;
pub use workspace::DiskWorkspace;
