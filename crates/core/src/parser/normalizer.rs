//! Rewrites a single logical line into one or more normalized logical lines.
//!
//! Every rule is anchored at the start of the line and is a no-op when its
//! pattern does not match, so irregular input passes through untouched.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::trace;

use super::classifier::{is_block_header, is_import_line, split_trailing_comment};

static ELSE_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<close>\}\s*)?else\s*\{").unwrap());

static CLOSE_ELSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\}\s*else\b").unwrap());

static IF_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<close>\}\s*)?(?P<else>else\s+)?if\s*\((?P<cond>.*?)\)\s*\{").unwrap()
});

static WHILE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^while\s*\((?P<cond>.*?)\)\s*\{").unwrap());

static FN_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<export>export\s+)?fn\s+(?P<name>\w+)\s*\((?P<params>[^)]*)\)\s*\{").unwrap()
});

/// A block header up to and including its opening brace
static HEADER_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:else\s+if\s*\(.*?\)|if\s*\(.*?\)|while\s*\(.*?\)|else|(?:export\s+)?fn\s+\w+\s*\([^)]*\))\s*\{",
    )
    .unwrap()
});

fn close_prefix(caps: &Captures<'_>) -> &'static str {
    if caps.name("close").is_some() { "} " } else { "" }
}

/// Brace-spacing normalization for headers: `if(x){` -> `if (x) {`,
/// `else{` -> `else {`, `fn  f(a){` -> `fn f(a) {`.
pub fn normalize_spacing(line: &str) -> String {
    if is_import_line(line) {
        return line.to_string();
    }

    let mut out = line.to_string();

    if let Some(caps) = IF_HEADER.captures(&out) {
        let replacement = format!(
            "{}{}if ({}) {{",
            close_prefix(&caps),
            if caps.name("else").is_some() { "else " } else { "" },
            &caps["cond"]
        );
        out = format!("{replacement}{}", &out[caps.get(0).map_or(0, |m| m.end())..]);
    } else if let Some(caps) = ELSE_BRACE.captures(&out) {
        let replacement = format!("{}else {{", close_prefix(&caps));
        out = format!("{replacement}{}", &out[caps.get(0).map_or(0, |m| m.end())..]);
    } else if let Some(caps) = WHILE_HEADER.captures(&out) {
        let replacement = format!("while ({}) {{", &caps["cond"]);
        out = format!("{replacement}{}", &out[caps.get(0).map_or(0, |m| m.end())..]);
    } else if let Some(caps) = FN_HEADER.captures(&out) {
        let replacement = format!(
            "{}fn {}({}) {{",
            if caps.name("export").is_some() { "export " } else { "" },
            &caps["name"],
            &caps["params"]
        );
        out = format!("{replacement}{}", &out[caps.get(0).map_or(0, |m| m.end())..]);
    }

    // `}else` without a brace on the same line
    if CLOSE_ELSE.is_match(&out) && !out.starts_with("} else") {
        out = CLOSE_ELSE.replace(&out, "} else").into_owned();
    }

    out
}

/// Split a header whose body starts on the same line as its `{`.
///
/// `if (x) { y(); }` becomes `if (x) {`, `y();`, `}`. Lines that are not
/// block headers, or that have nothing after the brace, come back as-is.
pub fn split_inline_body(line: &str) -> Vec<String> {
    let Some(m) = HEADER_OPEN.find(line) else {
        return vec![line.to_string()];
    };

    let header = &line[..m.end()];
    let rest = line[m.end()..].trim();
    if rest.is_empty() {
        return vec![line.to_string()];
    }

    trace!("splitting inline body after '{}'", header);
    // The body may itself hold a header with an inline body
    let mut parts = vec![header.to_string()];
    match rest.strip_suffix('}') {
        Some(inner) => {
            let inner = inner.trim();
            if !inner.is_empty() {
                parts.extend(normalize_line(inner));
            }
            parts.push("}".to_string());
        }
        None => parts.extend(normalize_line(rest)),
    }
    parts
}

/// Normalize one trimmed, non-blank, non-comment line of code.
pub fn normalize_line(line: &str) -> Vec<String> {
    if is_import_line(line) {
        return vec![line.to_string()];
    }

    let spaced = normalize_spacing(line);

    // `} else { body }` -> `}`, `else {`, `body`, `}`
    if let Some(rest) = spaced.strip_prefix('}') {
        let rest = rest.trim_start();
        if is_block_header(rest) {
            let parts = split_inline_body(rest);
            if parts.len() > 1 {
                let mut out = vec!["}".to_string()];
                out.extend(parts);
                return out;
            }
        }
        return vec![spaced];
    }

    split_inline_body(&spaced)
}

/// Join a header line with a detached `{` that followed it, keeping any
/// trailing comment at the end of the merged line.
pub fn merge_open_brace(header: &str) -> String {
    let (code, comment) = split_trailing_comment(header.trim());
    let merged = normalize_spacing(&format!("{code} {{"));
    if comment.is_empty() {
        merged
    } else {
        format!("{merged} {comment}")
    }
}
