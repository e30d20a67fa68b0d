//! Key-driven text insertion for code textareas.
//!
//! Selection offsets come from the DOM as UTF-16 code units, so every edit
//! takes and returns UTF-16 positions and converts at the boundary.

#[cfg(test)]
#[path = "editing_test.rs"]
mod editing_test;

use crate::consts::TAB_INDENT;

/// Result of an edit: the new field value and the collapsed cursor position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub value: String,
    /// Cursor in UTF-16 code units.
    pub cursor: u32,
}

/// Byte offset of UTF-16 position `pos`, clamped to the end of `text`.
///
/// A position inside a surrogate pair snaps forward to the next char.
pub fn utf16_to_byte(text: &str, pos: u32) -> usize {
    let mut units = 0_u32;
    for (idx, ch) in text.char_indices() {
        if units >= pos {
            return idx;
        }
        units += u32::try_from(ch.len_utf16()).unwrap_or(2);
    }
    text.len()
}

fn utf16_len(text: &str) -> u32 {
    text.chars()
        .map(|c| u32::try_from(c.len_utf16()).unwrap_or(2))
        .sum()
}

/// Replace the selection `[start, end)` with `insert`; cursor lands after it.
pub fn replace_selection(value: &str, start: u32, end: u32, insert: &str) -> TextEdit {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let start_byte = utf16_to_byte(value, start);
    let end_byte = utf16_to_byte(value, end).max(start_byte);

    let mut out = String::with_capacity(value.len() + insert.len());
    out.push_str(&value[..start_byte]);
    out.push_str(insert);
    out.push_str(&value[end_byte..]);

    TextEdit {
        cursor: utf16_len(&value[..start_byte]) + utf16_len(insert),
        value: out,
    }
}

/// Tab: replace the selection with a fixed four-space indent.
pub fn insert_tab(value: &str, start: u32, end: u32) -> TextEdit {
    replace_selection(value, start, end, TAB_INDENT)
}

/// Leading whitespace of the line containing byte offset `cursor_byte`,
/// looking only at text before the cursor.
pub fn current_line_indent(value: &str, cursor_byte: usize) -> &str {
    let before = &value[..cursor_byte.min(value.len())];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line = &before[line_start..];
    let indent_len = line.len() - line.trim_start().len();
    &line[..indent_len]
}

/// Enter: newline plus the current line's indentation.
pub fn insert_newline(value: &str, start: u32, end: u32) -> TextEdit {
    let lower = start.min(end);
    let indent = current_line_indent(value, utf16_to_byte(value, lower));
    let insert = format!("\n{indent}");
    replace_selection(value, start, end, &insert)
}
