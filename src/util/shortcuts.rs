//! Global single-key shortcuts.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

use crate::consts::{ID_ADD_SNIPPET_BTN, ID_GLOBAL_SEARCH_INPUT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// `/` focuses the global search field.
    FocusSearch,
    /// `a` activates the "add snippet" control.
    AddSnippet,
}

impl Shortcut {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "/" => Some(Self::FocusSearch),
            "a" => Some(Self::AddSnippet),
            _ => None,
        }
    }

    /// Id of the element the shortcut acts on.
    pub fn target_id(self) -> &'static str {
        match self {
            Self::FocusSearch => ID_GLOBAL_SEARCH_INPUT,
            Self::AddSnippet => ID_ADD_SNIPPET_BTN,
        }
    }
}

/// Shortcut for a key release, if one applies.
///
/// Shortcuts only fire when the event targets the page body, so typing into
/// fields never triggers them.
pub fn route_key(key: &str, target_is_body: bool) -> Option<Shortcut> {
    if !target_is_body {
        return None;
    }
    Shortcut::from_key(key)
}
