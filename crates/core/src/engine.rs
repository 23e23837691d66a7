//! Editor-facing entry points bound to one configuration

use tracing::debug;

use crate::{
    config::Config,
    format::Formatter,
    imports,
    interfaces::WorkspaceSource,
    parser::word_at,
    symbols::{self, CompletionItem},
    types::{CancellationToken, DefinitionLocation, FileId, Position, TextEdit},
};

/// Stateless apart from its configuration; share it freely between threads
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whole-document replacement, or `None` when already formatted
    pub fn format(&self, text: &str) -> Option<TextEdit> {
        Formatter::new(self.config.indent_width).format(text)
    }

    /// Declaration of the identifier at `position` in `current`
    pub fn definition(
        &self,
        current: &FileId,
        text: &str,
        position: Position,
        source: Option<&dyn WorkspaceSource>,
        cancel: &CancellationToken,
    ) -> Option<DefinitionLocation> {
        let name = word_at(text, position)?;
        debug!("definition request for '{}' in {}", name, current);
        symbols::find_definition(current, text, &name, source, cancel)
    }

    pub fn hover(
        &self,
        current: &FileId,
        text: &str,
        position: Position,
        source: Option<&dyn WorkspaceSource>,
        cancel: &CancellationToken,
    ) -> Option<String> {
        let name = word_at(text, position)?;
        debug!("hover request for '{}' in {}", name, current);
        symbols::hover(
            text,
            &name,
            &self.config.std_module,
            Some(current),
            source,
            cancel,
        )
    }

    /// Import `symbol` from the configured standard module
    pub fn ensure_imported(&self, text: &str, symbol: &str) -> Vec<TextEdit> {
        imports::ensure_imported(text, symbol, &self.config.std_module)
    }

    pub fn completions(&self, text: &str) -> Vec<CompletionItem> {
        symbols::completions(text, &self.config.std_module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryWorkspace;
    use crate::types::apply_edits;

    #[test]
    fn test_definition_under_cursor() {
        let engine = Engine::default();
        let current = FileId::new("main.yap");
        let text = "fn helper() {}\nhelper();";
        let cancel = CancellationToken::new();

        let found = engine
            .definition(&current, text, Position::new(1, 3), None, &cancel)
            .unwrap();
        assert_eq!(found.file, current);
        assert_eq!(found.position, Position::new(0, 0));

        assert_eq!(
            engine.definition(&current, text, Position::new(1, 8), None, &cancel),
            None
        );
    }

    #[test]
    fn test_hover_across_workspace() {
        let engine = Engine::default();
        let workspace = MemoryWorkspace::new()
            .with_file("main.yap", "area(2);")
            .with_file("shapes.yap", "// Square area.\nexport fn area(side) {\n    return side * side;\n}");
        let cancel = CancellationToken::new();

        let doc = engine
            .hover(
                &FileId::new("main.yap"),
                "area(2);",
                Position::new(0, 0),
                Some(&workspace),
                &cancel,
            )
            .unwrap();
        assert_eq!(doc, "```yap\nfn area(side)\n```\n\nSquare area.");
    }

    #[test]
    fn test_configured_module_and_indent() {
        let engine = Engine::new(Config {
            indent_width: 2,
            std_module: "lib/Num".to_string(),
            ..Default::default()
        });

        let text = "x();";
        assert_eq!(
            apply_edits(text, &engine.ensure_imported(text, "abs")),
            "import { abs } from \"lib/Num\";\nx();"
        );

        let edit = engine.format("fn f() {\nx();\n}").unwrap();
        assert_eq!(edit.new_text, "fn f() {\n  x();\n}");
    }

    #[test]
    fn test_math_docs_name_configured_module() {
        let engine = Engine::new(Config {
            std_module: "lib/Num".to_string(),
            ..Default::default()
        });
        let cancel = CancellationToken::new();

        let doc = engine
            .hover(&FileId::new("main.yap"), "abs(1);", Position::new(0, 1), None, &cancel)
            .unwrap();
        assert!(doc.ends_with("*Module:* `lib/Num`"));
        assert!(!doc.contains("std/Math"));

        let abs = engine
            .completions("")
            .into_iter()
            .find(|i| i.label == "abs")
            .unwrap();
        assert_eq!(abs.documentation, "Math.abs (lib/Num.yap)");
    }
}
