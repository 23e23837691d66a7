//! Line-level predicates shared by the formatter, the definition index and
//! the auto-import synthesizer.

use regex::Regex;
use std::sync::LazyLock;

pub const COMMENT_MARKER: &str = "//";

static IMPORT_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^import\b").unwrap());

static IMPORT_NAMED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^import\s*\{").unwrap());

static BLOCK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(if|else|while|fn|export\s+fn)\b").unwrap());

/// Coarse classification of a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    LineComment,
    ImportAll,
    ImportNamed,
    BlockHeader,
    Other,
}

pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineClass::Blank
    } else if is_line_comment(trimmed) {
        LineClass::LineComment
    } else if is_import_line(trimmed) {
        if IMPORT_NAMED_LINE.is_match(trimmed) {
            LineClass::ImportNamed
        } else {
            LineClass::ImportAll
        }
    } else if is_block_header(trimmed) {
        LineClass::BlockHeader
    } else {
        LineClass::Other
    }
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub fn is_line_comment(line: &str) -> bool {
    line.trim().starts_with(COMMENT_MARKER)
}

pub fn is_import_line(line: &str) -> bool {
    IMPORT_LINE.is_match(line.trim())
}

pub fn is_block_header(line: &str) -> bool {
    BLOCK_HEADER.is_match(line.trim())
}

pub fn starts_with_closing_bracket(line: &str) -> bool {
    matches!(line.trim().chars().next(), Some('}' | ']' | ')'))
}

/// Imports never open a block, whatever their braces look like
pub fn ends_with_opening_bracket(line: &str) -> bool {
    if is_import_line(line) {
        return false;
    }
    matches!(line.trim().chars().last(), Some('{' | '[' | '('))
}

/// Whether the `"` at byte `index` toggles string state, i.e. it is preceded
/// by an even run of backslashes
fn is_unescaped_quote(bytes: &[u8], index: usize) -> bool {
    if bytes[index] != b'"' {
        return false;
    }
    let backslashes = bytes[..index]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 0
}

/// Split `line` into its code and an optional trailing `//` comment.
///
/// A `//` inside a double-quoted string does not start a comment; a quote
/// escaped by an odd run of backslashes does not toggle the string state. The
/// code part is right-trimmed and the comment is empty when there is none.
pub fn split_trailing_comment(line: &str) -> (&str, &str) {
    let bytes = line.as_bytes();
    let mut in_string = false;

    for i in 0..bytes.len() {
        if is_unescaped_quote(bytes, i) {
            in_string = !in_string;
        } else if !in_string && bytes[i] == b'/' && bytes.get(i + 1) == Some(&b'/') {
            return (line[..i].trim_end(), line[i..].trim_end());
        }
    }

    (line.trim_end(), "")
}

/// Whether byte `index` of `line` falls inside a double-quoted string
pub fn is_inside_string(line: &str, index: usize) -> bool {
    let bytes = line.as_bytes();
    (0..index.min(bytes.len()))
        .filter(|&i| is_unescaped_quote(bytes, i))
        .count()
        % 2
        == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_string() {
        let line = "print(\"fn x\"); fn y";
        assert!(is_inside_string(line, line.find("fn x").unwrap()));
        assert!(!is_inside_string(line, line.find("fn y").unwrap()));
    }

    #[test]
    fn test_classify_lines() {
        assert_eq!(classify("   "), LineClass::Blank);
        assert_eq!(classify("  // note"), LineClass::LineComment);
        assert_eq!(classify("import \"std/Math\";"), LineClass::ImportAll);
        assert_eq!(
            classify("import { abs } from \"std/Math\";"),
            LineClass::ImportNamed
        );
        assert_eq!(classify("export fn main() {"), LineClass::BlockHeader);
        assert_eq!(classify("else {"), LineClass::BlockHeader);
        assert_eq!(classify("print(x);"), LineClass::Other);
    }

    #[test]
    fn test_block_header_needs_whole_keyword() {
        assert!(is_block_header("if(x){"));
        assert!(is_block_header("while (x) {"));
        assert!(is_block_header("export   fn f() {"));
        assert!(!is_block_header("iffy = 1;"));
        assert!(!is_block_header("fnord();"));
        assert!(!is_block_header("} else {"));
    }

    #[test]
    fn test_import_keyword_boundary() {
        assert!(is_import_line("  import \"x\";"));
        assert!(!is_import_line("imports = 3;"));
    }

    #[test]
    fn test_bracket_edges() {
        assert!(starts_with_closing_bracket("  } else {"));
        assert!(starts_with_closing_bracket("]);"));
        assert!(!starts_with_closing_bracket("x = 1;"));
        assert!(ends_with_opening_bracket("fn f() {  "));
        assert!(ends_with_opening_bracket("var a = ["));
        assert!(!ends_with_opening_bracket("f();"));
    }

    #[test]
    fn test_import_never_opens_block() {
        assert!(!ends_with_opening_bracket("import {"));
    }

    #[test]
    fn test_split_comment_ignores_string_contents() {
        assert_eq!(
            split_trailing_comment("write(\"http://x\");"),
            ("write(\"http://x\");", "")
        );
    }

    #[test]
    fn test_split_trailing_comment() {
        assert_eq!(split_trailing_comment("x(); // note"), ("x();", "// note"));
        assert_eq!(split_trailing_comment("// only"), ("", "// only"));
    }

    #[test]
    fn test_split_comment_with_escaped_quote() {
        let line = r#"print("say \"//hi\""); // real"#;
        let (code, comment) = split_trailing_comment(line);
        assert_eq!(code, r#"print("say \"//hi\"");"#);
        assert_eq!(comment, "// real");
    }

    #[test]
    fn test_unterminated_string_swallows_slashes() {
        assert_eq!(
            split_trailing_comment("print(\"oops // not a comment"),
            ("print(\"oops // not a comment", "")
        );
    }

    #[test]
    fn test_escaped_backslash_closes_string() {
        let line = r#"print("a\\"); // note {"#;
        assert_eq!(split_trailing_comment(line), (r#"print("a\\");"#, "// note {"));

        let line = r#"print("a\\\"//"); // tail"#;
        assert_eq!(split_trailing_comment(line).1, "// tail");
        assert!(is_inside_string(line, line.find("//").unwrap()));
    }
}
