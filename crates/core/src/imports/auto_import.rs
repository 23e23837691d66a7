//! Edits that make a module symbol visible in a document.

use tracing::debug;

use super::clause::{ImportClause, parse_imports};
use crate::parser::utils::{detect_line_ending, line_end_position};
use crate::symbols::definition::is_identifier;
use crate::types::{Position, TextEdit};

/// Minimal edits importing `symbol` from `module` into `text`.
///
/// Nothing is returned when the module is imported wholesale or the symbol
/// is already named. An existing named import of the module is extended;
/// otherwise a new clause goes after the last top-level import statement, or
/// at the top.
pub fn ensure_imported(text: &str, symbol: &str, module: &str) -> Vec<TextEdit> {
    if !is_identifier(symbol) {
        return Vec::new();
    }

    let clauses = parse_imports(text);
    let relevant: Vec<&ImportClause> = clauses
        .iter()
        .filter(|c| c.imports_module(module))
        .collect();

    if relevant
        .iter()
        .any(|c| matches!(c, ImportClause::All { .. }))
    {
        debug!("{} already imported wholesale", module);
        return Vec::new();
    }

    let mut named = relevant.iter().filter_map(|c| match c {
        ImportClause::Named {
            symbols, list_end, ..
        } => Some((symbols, *list_end)),
        _ => None,
    });

    if let Some((symbols, list_end)) = named.next() {
        let already = symbols.iter().any(|s| s == symbol)
            || named.any(|(others, _)| others.iter().any(|s| s == symbol));
        if already {
            return Vec::new();
        }
        let prefix = if symbols.is_empty() { " " } else { ", " };
        debug!("extending import of {} with {}", module, symbol);
        return vec![TextEdit::insert(list_end, format!("{prefix}{symbol}"))];
    }

    let eol = detect_line_ending(text);
    let clause = format!("import {{ {} }} from \"{}\";", symbol, module);

    let lines: Vec<&str> = text.lines().collect();
    let last_import_end = clauses
        .iter()
        .filter(|c| is_top_level(&lines, c.line()))
        .map(|c| c.end_line() as usize)
        .max();

    match last_import_end.and_then(|index| Some((index, *lines.get(index)?))) {
        Some((index, line)) => {
            let at = line_end_position(line, index);
            vec![TextEdit::insert(at, format!("{eol}{clause}"))]
        }
        None if text.is_empty() => vec![TextEdit::insert(Position::default(), clause)],
        None => vec![TextEdit::insert(Position::default(), format!("{clause}{eol}"))],
    }
}

/// Statements nested in a block start indented
fn is_top_level(lines: &[&str], line: u32) -> bool {
    lines
        .get(line as usize)
        .is_some_and(|l| !l.starts_with(char::is_whitespace))
}
