//! Hover documentation for identifiers.

use regex::Regex;

use super::builtins::{self, STD_MATH};
use super::definition::{find_in_document, search_workspace};
use crate::interfaces::WorkspaceSource;
use crate::parser::classifier::{COMMENT_MARKER, is_line_comment};
use crate::types::{CancellationToken, FileId, Position};

/// Documentation for `name`: builtins first, then a declaration in `text`,
/// then one elsewhere in the workspace. Math functions are documented as
/// living in `std_module`.
pub fn hover(
    text: &str,
    name: &str,
    std_module: &str,
    current: Option<&FileId>,
    source: Option<&dyn WorkspaceSource>,
    cancel: &CancellationToken,
) -> Option<String> {
    if let Some(doc) = builtins::lookup(name) {
        return Some(doc.to_markdown(std_module));
    }

    if let Some(position) = find_in_document(text, name) {
        return Some(describe_function(text, name, position));
    }

    let hit = search_workspace(name, current, source?, cancel)?;
    let position = find_in_document(&hit.text, name)?;
    Some(describe_function(&hit.text, name, position))
}

/// Signature block plus the comment block above the declaration at `position`
pub fn describe_function(text: &str, name: &str, position: Position) -> String {
    let params = function_params(text, name, position).unwrap_or_default();
    let docs = doc_comment_above(text, position.line);
    render_function_doc(name, &params, &docs)
}

pub fn render_function_doc(name: &str, params: &str, docs: &[String]) -> String {
    let mut out = format!("```yap\nfn {}({})\n```", name, params);
    if !docs.is_empty() {
        out.push_str("\n\n");
        out.push_str(&docs.join("\n"));
    }
    out
}

/// Parameter list of the declaration, normalized to `a, b, c`.
///
/// A list that runs past the end of the line is cut at the line end.
fn function_params(text: &str, name: &str, position: Position) -> Option<String> {
    let line = text.lines().nth(position.line as usize)?;
    let start = line
        .char_indices()
        .nth(position.character as usize)
        .map(|(i, _)| i)?;

    let pattern = Regex::new(&format!(
        r"^(?:export\s+)?fn\s+{}\s*\(([^)]*)",
        regex::escape(name)
    ))
    .ok()?;
    let captures = pattern.captures(&line[start..])?;

    let params = captures[1]
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    Some(params)
}

/// Contiguous `//` lines directly above `line`, in source order, with the
/// marker and one following space removed
pub fn doc_comment_above(text: &str, line: u32) -> Vec<String> {
    let mut docs: Vec<String> = text
        .lines()
        .take(line as usize)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .take_while(|l| is_line_comment(l))
        .map(|l| {
            let body = &l.trim()[COMMENT_MARKER.len()..];
            body.strip_prefix(' ').unwrap_or(body).trim_end().to_string()
        })
        .collect();
    docs.reverse();
    docs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryWorkspace;

    #[test]
    fn test_builtin_wins() {
        let cancel = CancellationToken::new();
        let doc = hover("fn print() {}", "print", STD_MATH, None, None, &cancel).unwrap();
        assert!(doc.contains("Prints a value"));
    }

    #[test]
    fn test_math_builtin_names_configured_module() {
        let cancel = CancellationToken::new();
        let doc = hover("", "abs", "lib/Num", None, None, &cancel).unwrap();
        assert!(doc.ends_with("*Module:* `lib/Num`"));
    }

    #[test]
    fn test_user_function_with_comment_block() {
        let text = "// unrelated\n\n// Adds two numbers.\n// Returns the sum.\nfn add(a,b) {\n  return a + b;\n}";
        let cancel = CancellationToken::new();
        assert_eq!(
            hover(text, "add", STD_MATH, None, None, &cancel).unwrap(),
            "```yap\nfn add(a, b)\n```\n\nAdds two numbers.\nReturns the sum."
        );
    }

    #[test]
    fn test_no_comment_no_separator() {
        let cancel = CancellationToken::new();
        assert_eq!(
            hover("var x = 1;\nexport fn run() {}", "run", STD_MATH, None, None, &cancel).unwrap(),
            "```yap\nfn run()\n```"
        );
    }

    #[test]
    fn test_blank_line_stops_comment_walk() {
        let text = "// detached\n\nfn f() {}";
        assert!(doc_comment_above(text, 2).is_empty());
    }

    #[test]
    fn test_comment_marker_without_space() {
        let text = "  //tight\n  //  indented\nfn f() {}";
        assert_eq!(doc_comment_above(text, 2), vec!["tight", " indented"]);
    }

    #[test]
    fn test_workspace_function() {
        let workspace = MemoryWorkspace::new()
            .with_file("main.yap", "helper(1);")
            .with_file("lib.yap", "// Helps.\nexport fn helper(x) {}");
        let cancel = CancellationToken::new();
        let current = FileId::new("main.yap");

        let doc = hover("helper(1);", "helper", STD_MATH, Some(&current), Some(&workspace), &cancel);
        assert_eq!(doc.unwrap(), "```yap\nfn helper(x)\n```\n\nHelps.");
    }

    #[test]
    fn test_unknown_symbol() {
        let workspace = MemoryWorkspace::new().with_file("lib.yap", "fn other() {}");
        let cancel = CancellationToken::new();
        assert_eq!(hover("x();", "x", STD_MATH, None, Some(&workspace), &cancel), None);
    }

    #[test]
    fn test_cancelled_workspace_hover() {
        let workspace = MemoryWorkspace::new().with_file("lib.yap", "fn helper() {}");
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_eq!(hover("", "helper", STD_MATH, None, Some(&workspace), &cancel), None);
    }
}
