pub mod builtins;
pub mod catalog;
pub mod definition;
pub mod hover;

pub use builtins::{BuiltinDoc, BuiltinKind, STD_MATH};
pub use catalog::{CompletionItem, CompletionKind, completions};
pub use definition::{find_definition, find_in_document, find_in_workspace};
pub use hover::hover;
