//! Locating `fn` / `export fn` declarations by name.
//!
//! Lookup is purely lexical: the first line whose code (outside comments and
//! string literals) contains `[export] fn NAME` wins. Across a workspace the
//! candidates are searched in the order the host supplies them and the first
//! file with a match is returned, even when several files declare the name.

use regex::Regex;
use tracing::{debug, warn};

use crate::interfaces::WorkspaceSource;
use crate::parser::classifier::{is_inside_string, is_line_comment, split_trailing_comment};
use crate::types::{CancellationToken, DefinitionLocation, FileId, Position};

/// A workspace match together with the text it was found in
#[derive(Debug, Clone)]
pub struct WorkspaceHit {
    pub location: DefinitionLocation,
    pub text: String,
}

pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn declaration_pattern(name: &str) -> Option<Regex> {
    if !is_identifier(name) {
        return None;
    }
    Regex::new(&format!(r"(?:\bexport\s+)?\bfn\s+{}\b", regex::escape(name))).ok()
}

/// Position of the first declaration of `name` in `text`
pub fn find_in_document(text: &str, name: &str) -> Option<Position> {
    let pattern = declaration_pattern(name)?;

    for (index, line) in text.lines().enumerate() {
        if is_line_comment(line) {
            continue;
        }
        let (code, _) = split_trailing_comment(line);
        let found = pattern
            .find_iter(code)
            .find(|m| !is_inside_string(code, m.start()));
        if let Some(m) = found {
            let column = code[..m.start()].chars().count();
            return Some(Position::new(index as u32, column as u32));
        }
    }

    None
}

/// First-match-wins search over the host's candidate files.
///
/// `exclude` (normally the current document) is skipped. Files that fail to
/// read are logged and skipped. Returns `None` as soon as `cancel` fires,
/// including when a match was just found.
pub fn search_workspace(
    name: &str,
    exclude: Option<&FileId>,
    source: &dyn WorkspaceSource,
    cancel: &CancellationToken,
) -> Option<WorkspaceHit> {
    declaration_pattern(name)?;

    for file in source.candidates() {
        if cancel.is_cancelled() {
            debug!("workspace search for '{}' cancelled", name);
            return None;
        }
        if exclude == Some(&file) {
            continue;
        }

        let text = match source.read(&file) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping {} during definition search: {}", file, e);
                continue;
            }
        };

        if let Some(position) = find_in_document(&text, name) {
            if cancel.is_cancelled() {
                debug!("workspace search for '{}' cancelled", name);
                return None;
            }
            debug!("definition of '{}' found in {} at {:?}", name, file, position);
            return Some(WorkspaceHit {
                location: DefinitionLocation { file, position },
                text,
            });
        }
    }

    None
}

pub fn find_in_workspace(
    name: &str,
    exclude: Option<&FileId>,
    source: &dyn WorkspaceSource,
    cancel: &CancellationToken,
) -> Option<DefinitionLocation> {
    search_workspace(name, exclude, source, cancel).map(|hit| hit.location)
}

/// Current document first, then the rest of the workspace
pub fn find_definition(
    current: &FileId,
    text: &str,
    name: &str,
    source: Option<&dyn WorkspaceSource>,
    cancel: &CancellationToken,
) -> Option<DefinitionLocation> {
    if let Some(position) = find_in_document(text, name) {
        return Some(DefinitionLocation {
            file: current.clone(),
            position,
        });
    }
    find_in_workspace(name, Some(current), source?, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::services::MemoryWorkspace;

    #[test]
    fn test_find_plain_and_exported() {
        let text = "var x = 1;\n\nfn helper(a) {\n}\n  export fn main() {\n}";
        assert_eq!(find_in_document(text, "helper"), Some(Position::new(2, 0)));
        assert_eq!(find_in_document(text, "main"), Some(Position::new(4, 2)));
    }

    #[test]
    fn test_whole_word_only() {
        let text = "fn helpers() {}\nfn help() {}";
        assert_eq!(find_in_document(text, "help"), Some(Position::new(1, 0)));
        assert_eq!(find_in_document("fn helper2() {}", "helper"), None);
    }

    #[test]
    fn test_comments_and_strings_are_skipped() {
        let text = "// fn target()\nx(); // fn target()\nprint(\"fn target\");\nfn target() {}";
        assert_eq!(find_in_document(text, "target"), Some(Position::new(3, 0)));
    }

    #[test]
    fn test_non_identifier_name_finds_nothing() {
        assert_eq!(find_in_document("fn a() {}", ""), None);
        assert_eq!(find_in_document("fn a() {}", "a.b"), None);
    }

    #[test]
    fn test_workspace_first_match_wins() {
        let workspace = MemoryWorkspace::new()
            .with_file("a.yap", "helper();")
            .with_file("b.yap", "fn helper() {}")
            .with_file("c.yap", "\n\nexport fn helper() {}");
        let cancel = CancellationToken::new();

        let found =
            find_in_workspace("helper", Some(&"a.yap".into()), &workspace, &cancel).unwrap();
        assert_eq!(found.file, FileId::new("b.yap"));
        assert_eq!(found.position, Position::new(0, 0));

        let reordered = MemoryWorkspace::new()
            .with_file("c.yap", "\n\nexport fn helper() {}")
            .with_file("b.yap", "fn helper() {}");
        let found = find_in_workspace("helper", None, &reordered, &cancel).unwrap();
        assert_eq!(found.file, FileId::new("c.yap"));
        assert_eq!(found.position, Position::new(2, 0));
    }

    #[test]
    fn test_excluded_file_is_not_searched() {
        let workspace = MemoryWorkspace::new().with_file("self.yap", "fn only() {}");
        let cancel = CancellationToken::new();
        assert_eq!(
            find_in_workspace("only", Some(&"self.yap".into()), &workspace, &cancel),
            None
        );
    }

    #[test]
    fn test_cancelled_search_returns_none() {
        let workspace = MemoryWorkspace::new().with_file("b.yap", "fn helper() {}");
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_eq!(find_in_workspace("helper", None, &workspace, &cancel), None);
    }

    struct FlakyWorkspace;

    impl WorkspaceSource for FlakyWorkspace {
        fn candidates(&self) -> Vec<FileId> {
            vec!["broken.yap".into(), "ok.yap".into()]
        }

        fn read(&self, file: &FileId) -> Result<String> {
            match file.as_str() {
                "ok.yap" => Ok("fn helper() {}".to_string()),
                _ => Err(Error::Other("permission denied".to_string())),
            }
        }
    }

    #[test]
    fn test_unreadable_candidate_is_skipped() {
        let cancel = CancellationToken::new();
        let found = find_in_workspace("helper", None, &FlakyWorkspace, &cancel).unwrap();
        assert_eq!(found.file, FileId::new("ok.yap"));
    }

    #[test]
    fn test_current_document_wins_over_workspace() {
        let workspace = MemoryWorkspace::new().with_file("other.yap", "fn f() {}");
        let cancel = CancellationToken::new();
        let current = FileId::new("main.yap");

        let local = find_definition(&current, "\nfn f() {}", "f", Some(&workspace), &cancel);
        assert_eq!(local.unwrap().file, current);

        let remote = find_definition(&current, "f();", "f", Some(&workspace), &cancel);
        assert_eq!(remote.unwrap().file, FileId::new("other.yap"));

        assert_eq!(find_definition(&current, "f();", "f", None, &cancel), None);
    }
}
