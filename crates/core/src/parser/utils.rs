use crate::types::Position;

/// Convert a position into a byte offset, clamping to the end of the line
/// (or of the text) when the position points past it.
///
/// Columns count `char`s, not UTF-16 units.
pub fn position_to_offset(text: &str, position: Position) -> usize {
    let mut line_start = 0usize;
    for (index, line) in text.split_inclusive('\n').enumerate() {
        if index as u32 == position.line {
            let content = line.trim_end_matches('\n').trim_end_matches('\r');
            let column = content
                .char_indices()
                .nth(position.character as usize)
                .map(|(i, _)| i)
                .unwrap_or(content.len());
            return line_start + column;
        }
        line_start += line.len();
    }
    text.len()
}

/// Convert a byte offset into a position. Offsets past the end map to the
/// final position of the text.
pub fn offset_to_position(text: &str, offset: usize) -> Position {
    let offset = offset.min(text.len());
    let mut line = 0u32;
    let mut line_start = 0usize;

    for (i, c) in text.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let character = text
        .get(line_start..offset)
        .map(|s| s.chars().count())
        .unwrap_or(0);
    Position::new(line, character as u32)
}

/// Position just past the last character of `line` (excluding the terminator)
pub fn line_end_position(line: &str, line_index: usize) -> Position {
    let content = line.trim_end_matches('\r');
    Position::new(line_index as u32, content.chars().count() as u32)
}

/// The line terminator a document predominantly uses
pub fn detect_line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") { "\r\n" } else { "\n" }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// The identifier under the cursor, or immediately to its left
pub fn word_at(text: &str, position: Position) -> Option<String> {
    let line = text.lines().nth(position.line as usize)?;
    let chars: Vec<char> = line.chars().collect();
    let mut cursor = (position.character as usize).min(chars.len());

    if cursor == chars.len() || !is_word_char(chars[cursor]) {
        if cursor > 0 && is_word_char(chars[cursor - 1]) {
            cursor -= 1;
        } else {
            return None;
        }
    }

    let mut start = cursor;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = cursor;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }

    Some(chars[start..end].iter().collect())
}
