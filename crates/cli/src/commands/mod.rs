pub mod complete;
pub mod definition;
pub mod fmt;
pub mod hover;
pub mod import;

pub use complete::complete_command;
pub use definition::definition_command;
pub use fmt::fmt_command;
pub use hover::hover_command;
pub use import::import_command;
