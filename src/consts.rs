//! Shared DOM contract constants: attribute names, element ids, classes.

// ── Data attributes ─────────────────────────────────────────────

/// Element carries a raw timestamp to be rendered as text.
pub const ATTR_TIMESTAMP: &str = "data-timestamp";

/// Optional display pattern override for [`ATTR_TIMESTAMP`] elements.
pub const ATTR_TIMESTAMP_FORMAT: &str = "data-timestamp-format";

/// Optional tooltip pattern override for [`ATTR_TIMESTAMP`] elements.
pub const ATTR_TIMESTAMP_TITLE_FORMAT: &str = "data-timestamp-title-format";

pub const ATTR_MARKDOWN_EDITOR: &str = "data-markdown-editor";
pub const ATTR_TAGS_INPUT: &str = "data-tags-input";
pub const ATTR_DROPDOWN: &str = "data-dropdown";
pub const ATTR_DROPDOWN_SEARCH_PLACEHOLDER: &str = "data-dropdown-search-placeholder";

/// Copy button; value is the id of the element whose value gets copied.
/// The misspelling is part of the template contract.
pub const ATTR_COPY_TO_CLIPBOARD: &str = "data-copy-to-cliboard";

/// Favorite button; value is the snippet id.
pub const ATTR_FAVORITE_BTN: &str = "data-favorite-btn";

pub const ATTR_TEXTAREA_CODE: &str = "data-textarea-code";
pub const ATTR_DARK_MODE_ONLY: &str = "data-dark-mode-only";
pub const ATTR_LIGHT_MODE_ONLY: &str = "data-light-mode-only";

/// Attribute on a code textarea naming the detected highlighter language.
pub const ATTR_LANGUAGE: &str = "language";

// ── Element ids ─────────────────────────────────────────────────

pub const ID_THEME_TOGGLE: &str = "theme-toggle";
pub const ID_HIGHLIGHT_DARK_THEME: &str = "highlightjs-dark-theme";
pub const ID_HIGHLIGHT_LIGHT_THEME: &str = "highlightjs-light-theme";
pub const ID_GLOBAL_SEARCH_INPUT: &str = "global-search-input";
pub const ID_ADD_SNIPPET_BTN: &str = "global-add-snippet-btn";
pub const ID_LANGUAGE_SELECT: &str = "language";
pub const ID_DETECTED_LANGUAGE: &str = "detected-language";
pub const ID_SNIPPET_SAVE_FORM: &str = "form--snippet-save";
pub const ID_CLIENT_CONFIG: &str = "snippets-client-config";

/// Prefix of the element id a `selected_id` query parameter scrolls to.
pub const SNIPPET_ELEMENT_PREFIX: &str = "snippet-";

// ── Classes ─────────────────────────────────────────────────────

/// Root marker class for dark mode on `<html>`.
pub const CLASS_DARK: &str = "dark";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_FAVORITE: &str = "is-favorite";

// ── Storage / URL ───────────────────────────────────────────────

/// localStorage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "color-theme";

pub const SELECTED_ID_PARAM: &str = "selected_id";

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Labels ──────────────────────────────────────────────────────

pub const LABEL_REMOVE_FAVORITE: &str = "Remove from favorites";
pub const LABEL_ADD_FAVORITE: &str = "Add to favorites";

/// Value of the language select meaning "detect from content".
pub const LANGUAGE_AUTO: &str = "auto";

// ── Editing ─────────────────────────────────────────────────────

/// Inserted in place of a Tab key press.
pub const TAB_INDENT: &str = "    ";
