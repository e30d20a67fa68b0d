use super::*;

// =============================================================
// Tab
// =============================================================

#[test]
fn tab_at_end_appends_four_spaces() {
    let edit = insert_tab("abcd", 4, 4);
    assert_eq!(edit.value, "abcd    ");
    assert_eq!(edit.cursor, 8);
}

#[test]
fn tab_in_middle_inserts_at_cursor() {
    let edit = insert_tab("ab", 1, 1);
    assert_eq!(edit.value, "a    b");
    assert_eq!(edit.cursor, 5);
}

#[test]
fn tab_replaces_selection() {
    let edit = insert_tab("hello world", 0, 5);
    assert_eq!(edit.value, "     world");
    assert_eq!(edit.cursor, 4);
}

#[test]
fn reversed_selection_is_normalized() {
    assert_eq!(insert_tab("hello", 5, 0), insert_tab("hello", 0, 5));
}

#[test]
fn cursor_past_end_is_clamped() {
    let edit = insert_tab("ab", 10, 10);
    assert_eq!(edit.value, "ab    ");
    assert_eq!(edit.cursor, 6);
}

// =============================================================
// Enter
// =============================================================

#[test]
fn enter_copies_leading_spaces() {
    let edit = insert_newline("  foo", 5, 5);
    assert_eq!(edit.value, "  foo\n  ");
    assert_eq!(edit.cursor, 8);
}

#[test]
fn enter_uses_current_line_only() {
    let text = "def f():\n    return 1";
    let end = u32::try_from(text.len()).unwrap();
    let edit = insert_newline(text, end, end);
    assert_eq!(edit.value, "def f():\n    return 1\n    ");
}

#[test]
fn enter_without_indent_inserts_bare_newline() {
    let edit = insert_newline("foo", 3, 3);
    assert_eq!(edit.value, "foo\n");
    assert_eq!(edit.cursor, 4);
}

#[test]
fn enter_mid_line_keeps_tail() {
    let edit = insert_newline("\tab", 2, 2);
    assert_eq!(edit.value, "\ta\n\tb");
    assert_eq!(edit.cursor, 4);
}

#[test]
fn enter_inside_indent_copies_only_indent_before_cursor() {
    let edit = insert_newline("    x", 2, 2);
    assert_eq!(edit.value, "  \n    x");
    assert_eq!(edit.cursor, 5);
}

#[test]
fn enter_on_empty_field() {
    let edit = insert_newline("", 0, 0);
    assert_eq!(edit.value, "\n");
    assert_eq!(edit.cursor, 1);
}

// =============================================================
// UTF-16 offsets
// =============================================================

#[test]
fn utf16_positions_map_to_byte_offsets() {
    // 'é' is 2 bytes / 1 unit, '😀' is 4 bytes / 2 units.
    let text = "é😀x";
    assert_eq!(utf16_to_byte(text, 0), 0);
    assert_eq!(utf16_to_byte(text, 1), 2);
    assert_eq!(utf16_to_byte(text, 3), 6);
    assert_eq!(utf16_to_byte(text, 4), 7);
    assert_eq!(utf16_to_byte(text, 99), 7);
}

#[test]
fn tab_after_astral_char_reports_utf16_cursor() {
    let edit = insert_tab("😀", 2, 2);
    assert_eq!(edit.value, "😀    ");
    assert_eq!(edit.cursor, 6);
}
