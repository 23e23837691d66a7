pub mod cancellation;
pub mod edit;
pub mod location;
pub mod position;

// Re-export commonly used types
pub use cancellation::CancellationToken;
pub use edit::{TextEdit, apply_edits};
pub use location::{DefinitionLocation, FileId};
pub use position::{Position, Range};
