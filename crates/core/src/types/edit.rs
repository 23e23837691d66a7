use serde::{Deserialize, Serialize};

use super::position::{Position, Range};
use crate::parser::utils::position_to_offset;

/// A substring replacement expressed against the original, unmodified text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

impl TextEdit {
    pub fn insert(position: Position, text: impl Into<String>) -> Self {
        Self {
            range: Range::empty(position),
            new_text: text.into(),
        }
    }

    pub fn replace(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: text.into(),
        }
    }

    pub fn is_insertion(&self) -> bool {
        self.range.is_empty()
    }
}

/// Apply a batch of edits produced by a single engine call.
///
/// Every edit must reference the original `text`. Edits are applied from the
/// last start position to the first so earlier offsets stay valid; overlapping
/// edits are not supported and the later one wins.
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> String {
    let mut resolved: Vec<(usize, usize, &str)> = edits
        .iter()
        .map(|edit| {
            let start = position_to_offset(text, edit.range.start);
            let end = position_to_offset(text, edit.range.end).max(start);
            (start, end, edit.new_text.as_str())
        })
        .collect();
    resolved.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    let mut output = text.to_string();
    for (start, end, replacement) in resolved {
        output.replace_range(start..end, replacement);
    }
    output
}
