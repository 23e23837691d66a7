use crate::error::{Error, Result};
use crate::format::DEFAULT_INDENT_WIDTH;
use crate::symbols::STD_MATH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAMES: [&str; 2] = [".yap-tools.json", "yap-tools.json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Spaces per indentation level
    pub indent_width: usize,
    /// Module auto-import offers math functions from
    pub std_module: String,
    /// File extensions (without the dot) treated as YAP sources
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            std_module: STD_MATH.to_string(),
            extensions: vec!["yap".to_string()],
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Configuration governing `path`, or the defaults when no file is found
    pub fn load_for(path: &Path) -> Result<Self> {
        let start = if path.is_file() {
            path.parent().unwrap_or(path)
        } else {
            path
        };

        match Self::find_config_file(start) {
            Some(config_path) => {
                debug!("Using config {}", config_path.display());
                Self::load_from_file(&config_path)
            }
            None => {
                debug!("No config found above {}, using defaults", start.display());
                Ok(Self::default())
            }
        }
    }

    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{ "indent_width": 2 }"#).unwrap();
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.std_module, "std/Math");
        assert_eq!(config.extensions, vec!["yap"]);
    }

    #[test]
    fn test_config_found_in_ancestor() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join("yap-tools.json"),
            r#"{ "std_module": "lib/Math" }"#,
        )
        .unwrap();

        let found = Config::find_config_file(&nested).unwrap();
        assert_eq!(found, temp.path().join("yap-tools.json"));

        let file = nested.join("main.yap");
        fs::write(&file, "print(1);").unwrap();
        let config = Config::load_for(&file).unwrap();
        assert_eq!(config.std_module, "lib/Math");
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn test_dotfile_takes_precedence() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".yap-tools.json"), r#"{ "indent_width": 8 }"#).unwrap();
        fs::write(temp.path().join("yap-tools.json"), r#"{ "indent_width": 2 }"#).unwrap();

        assert_eq!(Config::load_for(temp.path()).unwrap().indent_width, 8);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("yap-tools.json");
        fs::write(&path, "{ indent_width: }").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_extra_extensions() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".yap-tools.json");
        fs::write(&path, r#"{ "indent_width": 3, "extensions": ["yap", "yp"] }"#).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(
            loaded,
            Config {
                indent_width: 3,
                extensions: vec!["yap".to_string(), "yp".to_string()],
                ..Default::default()
            }
        );
        assert!(loaded.is_source_file(Path::new("a/b.yp")));
        assert!(!loaded.is_source_file(Path::new("a/b.rs")));
    }
}
