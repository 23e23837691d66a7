//! Documentation for language keywords, runtime builtins and the standard
//! math module.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const STD_MATH: &str = "std/Math";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    Keyword,
    Function,
    Constant,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinDoc {
    pub kind: BuiltinKind,
    pub signature: String,
    pub summary: &'static str,
    /// Lives in the configured standard module and must be imported
    pub in_std_module: bool,
}

impl BuiltinDoc {
    fn new(kind: BuiltinKind, signature: &str, summary: &'static str) -> Self {
        Self {
            kind,
            signature: signature.to_string(),
            summary,
            in_std_module: false,
        }
    }

    /// Markdown for hover; std functions name `std_module` as their home
    pub fn to_markdown(&self, std_module: &str) -> String {
        let mut out = format!("```yap\n{}\n```\n\n{}", self.signature, self.summary);
        if self.in_std_module {
            out.push_str(&format!("\n\n*Module:* `{}`", std_module));
        }
        out
    }
}

/// A function of the standard math module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathFunction {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub summary: &'static str,
}

impl MathFunction {
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.params.join(", "))
    }

    /// Call snippet with one tab stop per parameter
    pub fn snippet(&self) -> String {
        let stops: Vec<String> = self
            .params
            .iter()
            .enumerate()
            .map(|(i, p)| format!("${{{}:{}}}", i + 1, p))
            .collect();
        format!("{}({})", self.name, stops.join(", "))
    }
}

pub const MATH_FUNCTIONS: &[MathFunction] = &[
    MathFunction { name: "abs", params: &["x"], summary: "Absolute value of `x`." },
    MathFunction {
        name: "sign",
        params: &["x"],
        summary: "`-1`, `0` or `1` according to the sign of `x`.",
    },
    MathFunction { name: "max", params: &["a", "b"], summary: "The larger of `a` and `b`." },
    MathFunction { name: "min", params: &["a", "b"], summary: "The smaller of `a` and `b`." },
    MathFunction {
        name: "clamp",
        params: &["x", "lo", "hi"],
        summary: "`x` limited to the range `lo..=hi`.",
    },
    MathFunction { name: "is_even", params: &["x"], summary: "`true` when `x` is even." },
    MathFunction { name: "is_odd", params: &["x"], summary: "`true` when `x` is odd." },
    MathFunction {
        name: "pow",
        params: &["base", "exp"],
        summary: "`base` raised to the integer power `exp`.",
    },
    MathFunction { name: "gcd", params: &["a", "b"], summary: "Greatest common divisor." },
    MathFunction { name: "lcm", params: &["a", "b"], summary: "Least common multiple." },
    MathFunction { name: "factorial", params: &["n"], summary: "`n!` for non-negative `n`." },
    MathFunction {
        name: "int_sqrt",
        params: &["n"],
        summary: "Integer square root, rounded down.",
    },
];

static BUILTIN_DOCS: LazyLock<HashMap<&'static str, BuiltinDoc>> = LazyLock::new(|| {
    use BuiltinKind::*;

    let mut docs = HashMap::from([
        ("var", BuiltinDoc::new(Keyword, "var name = value;", "Declares a variable.")),
        (
            "fn",
            BuiltinDoc::new(Keyword, "fn name(params) { ... }", "Declares a function."),
        ),
        (
            "export",
            BuiltinDoc::new(
                Keyword,
                "export fn name(params) { ... }",
                "Declares a function visible to importing files.",
            ),
        ),
        (
            "if",
            BuiltinDoc::new(
                Keyword,
                "if (condition) { ... }",
                "Runs the block when the condition is non-zero.",
            ),
        ),
        (
            "else",
            BuiltinDoc::new(
                Keyword,
                "else { ... }",
                "Runs the block when the preceding `if` condition was zero.",
            ),
        ),
        (
            "while",
            BuiltinDoc::new(
                Keyword,
                "while (condition) { ... }",
                "Repeats the block while the condition is non-zero.",
            ),
        ),
        (
            "return",
            BuiltinDoc::new(Keyword, "return value;", "Returns a value from the current function."),
        ),
        (
            "import",
            BuiltinDoc::new(
                Keyword,
                "import { name } from \"path\";\nimport \"path\";",
                "Imports named exports, or every export, from another file.",
            ),
        ),
        ("true", BuiltinDoc::new(Constant, "true", "Boolean true (1).")),
        ("false", BuiltinDoc::new(Constant, "false", "Boolean false (0).")),
        (
            "args",
            BuiltinDoc::new(Variable, "args", "Array of the program's command line arguments."),
        ),
        (
            "print",
            BuiltinDoc::new(Function, "print(value)", "Prints a value followed by a newline."),
        ),
        (
            "read",
            BuiltinDoc::new(Function, "read(path)", "Returns the contents of a file as a string."),
        ),
        (
            "write",
            BuiltinDoc::new(
                Function,
                "write(path, content)",
                "Writes content to a file, replacing it.",
            ),
        ),
        (
            "append",
            BuiltinDoc::new(
                Function,
                "append(path, content)",
                "Appends content to the end of a file.",
            ),
        ),
        (
            "push",
            BuiltinDoc::new(Function, "push(array, value)", "Appends a value to an array."),
        ),
        (
            "pop",
            BuiltinDoc::new(
                Function,
                "pop(array)",
                "Removes and returns the last element of an array.",
            ),
        ),
        (
            "timestamp",
            BuiltinDoc::new(Function, "timestamp()", "Current time in milliseconds."),
        ),
        (
            "random",
            BuiltinDoc::new(Function, "random(max)", "Random integer in `0..max`."),
        ),
    ]);

    for f in MATH_FUNCTIONS {
        docs.insert(
            f.name,
            BuiltinDoc {
                kind: Function,
                signature: f.signature(),
                summary: f.summary,
                in_std_module: true,
            },
        );
    }
    docs
});

pub fn lookup(name: &str) -> Option<&'static BuiltinDoc> {
    BUILTIN_DOCS.get(name)
}
