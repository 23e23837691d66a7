//! Completion items for keywords, builtins, math functions and constants.

use serde::Serialize;

use super::builtins::MATH_FUNCTIONS;
use crate::imports::ensure_imported;
use crate::types::TextEdit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Keyword,
    Function,
    Constant,
    Variable,
}

struct CatalogEntry {
    label: &'static str,
    kind: CompletionKind,
    snippet: &'static str,
    description: &'static str,
}

const fn entry(
    label: &'static str,
    kind: CompletionKind,
    snippet: &'static str,
    description: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        label,
        kind,
        snippet,
        description,
    }
}

use CompletionKind::*;

// Math functions come from the std module table, between these two groups
const LANGUAGE: &[CatalogEntry] = &[
    entry("var", Keyword, "var ${1:name} = ${2:value};", "Variable declaration"),
    entry(
        "fn",
        Keyword,
        "fn ${1:name}(${2:params}) {\n\t${3:// body}\n}",
        "Function declaration",
    ),
    entry(
        "export fn",
        Keyword,
        "export fn ${1:name}(${2:params}) {\n\t${3:// body}\n}",
        "Exported function declaration",
    ),
    entry("if", Keyword, "if (${1:condition}) {\n\t${2:// code}\n}", "If statement"),
    entry("else", Keyword, "else {\n\t${1:// code}\n}", "Else statement"),
    entry("while", Keyword, "while (${1:condition}) {\n\t${2:// code}\n}", "While loop"),
    entry("return", Keyword, "return ${1:value};", "Return statement"),
    entry(
        "import",
        Keyword,
        "import { ${1:name} } from \"${2:path}\";",
        "Import named exports",
    ),
    entry("import all", Keyword, "import \"${1:path}\";", "Import all exports"),
    entry("print", Function, "print(${1:value});", "Print to console"),
    entry("read", Function, "read(\"${1:path}\")", "Read file contents"),
    entry("write", Function, "write(\"${1:path}\", ${2:content});", "Write file contents"),
    entry("append", Function, "append(\"${1:path}\", ${2:content});", "Append file contents"),
    entry("push", Function, "push(${1:array}, ${2:value})", "Push value to array"),
    entry("pop", Function, "pop(${1:array})", "Pop value from array"),
    entry("timestamp", Function, "timestamp()", "Current time in milliseconds"),
    entry("random", Function, "random(${1:max})", "Random integer below max"),
];

const VALUES: &[CatalogEntry] = &[
    entry("true", Constant, "true", "Boolean true"),
    entry("false", Constant, "false", "Boolean false"),
    entry("args", Variable, "args", "Program arguments array"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    /// Snippet syntax with `${n:placeholder}` tab stops
    pub insert_text: String,
    pub detail: String,
    pub documentation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_edits: Vec<TextEdit>,
}

/// All completion items for `text`; std items carry the edits that import
/// them from `std_module`
pub fn completions(text: &str, std_module: &str) -> Vec<CompletionItem> {
    let plain = |e: &CatalogEntry| CompletionItem {
        label: e.label.to_string(),
        kind: e.kind,
        insert_text: e.snippet.to_string(),
        detail: "YAP".to_string(),
        documentation: e.description.to_string(),
        module: None,
        additional_edits: Vec::new(),
    };

    let math = MATH_FUNCTIONS.iter().map(|f| CompletionItem {
        label: f.name.to_string(),
        kind: Function,
        insert_text: f.snippet(),
        detail: "YAP".to_string(),
        documentation: format!("Math.{} ({}.yap)", f.name, std_module),
        module: Some(std_module.to_string()),
        additional_edits: ensure_imported(text, f.name, std_module),
    });

    LANGUAGE
        .iter()
        .map(plain)
        .chain(math)
        .chain(VALUES.iter().map(plain))
        .collect()
}
