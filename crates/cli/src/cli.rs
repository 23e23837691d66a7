use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    complete_command, definition_command, fmt_command, hover_command, import_command,
};

#[derive(Parser, Debug)]
#[command(name = "yap-tools")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Re-indent YAP files in place
    #[command(visible_alias = "f")]
    Fmt {
        /// Files or directories to format
        #[arg(required = true)]
        paths: Vec<String>,

        /// Only report files that would change, exit non-zero if any
        #[arg(long)]
        check: bool,

        /// Spaces per indentation level (overrides the config file)
        #[arg(long)]
        indent: Option<usize>,
    },
    /// Find where the function under the cursor is declared
    #[command(visible_alias = "d")]
    Definition {
        /// File with 1-based position (e.g., src/main.yap:10:5)
        position: String,

        /// Workspace root to search (defaults to the file's directory)
        #[arg(short, long)]
        root: Option<String>,
    },
    /// Show documentation for the identifier under the cursor
    Hover {
        /// File with 1-based position (e.g., src/main.yap:10:5)
        position: String,

        /// Workspace root to search (defaults to the file's directory)
        #[arg(short, long)]
        root: Option<String>,
    },
    /// Compute the edits that import a symbol
    Import {
        /// Path to the YAP file
        file: String,

        /// Symbol to import
        symbol: String,

        /// Module to import from (defaults to the configured std module)
        #[arg(short, long)]
        module: Option<String>,

        /// Apply the edits to the file instead of printing them
        #[arg(short, long)]
        write: bool,
    },
    /// List completion items for a file as JSON
    Complete {
        /// Path to the YAP file
        file: String,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Fmt {
                paths,
                check,
                indent,
            } => fmt_command(&paths, check, indent),
            Commands::Definition { position, root } => {
                definition_command(&position, root.as_deref())
            }
            Commands::Hover { position, root } => hover_command(&position, root.as_deref()),
            Commands::Import {
                file,
                symbol,
                module,
                write,
            } => import_command(&file, &symbol, module.as_deref(), write),
            Commands::Complete { file } => complete_command(&file),
        }
    }
}
