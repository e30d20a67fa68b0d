//! Page components, one per data-attribute contract.
//!
//! Each module exposes a `setup` that discovers its elements once and wires
//! listeners for the page's lifetime. Pure helpers (option structs, labels,
//! value formatting) compile natively; the DOM side is behind `hydrate`.

#[cfg(feature = "hydrate")]
pub mod dom;

pub mod code_editor;
pub mod code_highlighter;
pub mod copy_to_clipboard;
pub mod date_formatter;
pub mod favorite_button;
pub mod keyboard_shortcuts;
pub mod markdown_editor;
pub mod select_dropdown;
pub mod tags_input;
pub mod theme_toggle;
