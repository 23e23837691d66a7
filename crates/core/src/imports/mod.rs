pub mod auto_import;
pub mod clause;

pub use auto_import::ensure_imported;
pub use clause::{ImportClause, parse_imports};
