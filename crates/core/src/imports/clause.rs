use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::parser::classifier::is_import_line;
use crate::parser::utils::offset_to_position;
use crate::types::Position;

// Both forms may span lines; the optional `;` ends the statement
static IMPORT_ALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\A[ \t]*import\s*"(?P<module>[^"]*)"(?:\s*;)?"#).unwrap()
});

static IMPORT_NAMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\A[ \t]*import\s*\{(?P<list>[^}]*)\}\s*from\s*"(?P<module>[^"]*)"(?:\s*;)?"#)
        .unwrap()
});

/// An import statement and the lines it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImportClause {
    /// `import "module";`
    All {
        module: String,
        line: u32,
        end_line: u32,
    },
    /// `import { a, b } from "module";`
    Named {
        module: String,
        symbols: Vec<String>,
        line: u32,
        end_line: u32,
        /// End of the trimmed list content, where a new symbol goes
        list_end: Position,
        close_brace: Position,
    },
}

impl ImportClause {
    pub fn module(&self) -> &str {
        match self {
            ImportClause::All { module, .. } | ImportClause::Named { module, .. } => module,
        }
    }

    /// Line the `import` keyword is on
    pub fn line(&self) -> u32 {
        match self {
            ImportClause::All { line, .. } | ImportClause::Named { line, .. } => *line,
        }
    }

    /// Line holding the end of the statement
    pub fn end_line(&self) -> u32 {
        match self {
            ImportClause::All { end_line, .. } | ImportClause::Named { end_line, .. } => *end_line,
        }
    }

    pub fn imports_module(&self, module: &str) -> bool {
        same_module(self.module(), module)
    }
}

/// Module paths compare equal with or without the `.yap` suffix
pub fn same_module(a: &str, b: &str) -> bool {
    let strip = |m: &str| m.trim().strip_suffix(".yap").unwrap_or(m.trim()).to_string();
    strip(a) == strip(b)
}

/// Recognize an import statement starting at byte `start` of `text`, which
/// must be the beginning of line `line`
fn parse_import_at(text: &str, start: usize, line: u32) -> Option<ImportClause> {
    let rest = &text[start..];

    if let Some(caps) = IMPORT_NAMED.captures(rest) {
        let whole = caps.get(0)?;
        let list = caps.name("list")?;
        let symbols = list
            .as_str()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        let content_end = list.start() + list.as_str().trim_end().len();

        return Some(ImportClause::Named {
            module: caps["module"].to_string(),
            symbols,
            line,
            end_line: offset_to_position(text, start + whole.end()).line,
            list_end: offset_to_position(text, start + content_end),
            close_brace: offset_to_position(text, start + list.end()),
        });
    }

    let caps = IMPORT_ALL.captures(rest)?;
    let whole = caps.get(0)?;
    Some(ImportClause::All {
        module: caps["module"].to_string(),
        line,
        end_line: offset_to_position(text, start + whole.end()).line,
    })
}

/// Every import clause in `text`, in source order
pub fn parse_imports(text: &str) -> Vec<ImportClause> {
    let mut clauses = Vec::new();
    let mut start = 0usize;

    for (index, line) in text.split_inclusive('\n').enumerate() {
        if is_import_line(line) {
            clauses.extend(parse_import_at(text, start, index as u32));
        }
        start += line.len();
    }

    clauses
}
