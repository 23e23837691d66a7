use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use yap_tools_core::DefinitionLocation;

/// Path relative to the current directory when it lies beneath it
pub fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(&cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

/// `path:line:col`, 1-based
pub fn format_location(location: &DefinitionLocation) -> String {
    format!(
        "{}:{}:{}",
        display_path(Path::new(location.file.as_str())),
        location.position.line + 1,
        location.position.character + 1
    )
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yap_tools_core::{FileId, Position};

    #[test]
    fn test_location_is_one_based() {
        let location = DefinitionLocation {
            file: FileId::new("/nowhere/lib.yap"),
            position: Position::new(0, 4),
        };
        assert_eq!(format_location(&location), "/nowhere/lib.yap:1:5");
    }
}
