//! Dark mode detection and application to the document.
//!
//! Reads the OS color-scheme signal and applies a [`Theme`] to the page:
//! the `dark` class on `<html>`, the matching highlighter stylesheet, and the
//! mode-only elements. Requires a browser environment.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Theme;

/// Whether the OS reports a dark color-scheme preference.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(crate::consts::PREFERS_DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Theme currently marked on `<html>`.
pub fn current() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let dark = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .is_some_and(|el| el.class_list().contains(crate::consts::CLASS_DARK));
        if dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Id of the highlighter stylesheet `<link>` for `theme`.
pub fn stylesheet_id(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => crate::consts::ID_HIGHLIGHT_LIGHT_THEME,
        Theme::Dark => crate::consts::ID_HIGHLIGHT_DARK_THEME,
    }
}

/// Attribute marking elements shown only in `theme`.
pub fn mode_only_attr(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => crate::consts::ATTR_LIGHT_MODE_ONLY,
        Theme::Dark => crate::consts::ATTR_DARK_MODE_ONLY,
    }
}

/// Mark the root class only; used right before a reload.
pub fn set_root_class(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            let result = if theme.is_dark() {
                class_list.add_1(crate::consts::CLASS_DARK)
            } else {
                class_list.remove_1(crate::consts::CLASS_DARK)
            };
            if let Err(e) = result {
                log::warn!("dark mode class update failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Apply `theme` to the whole page.
pub fn apply(theme: Theme) {
    set_root_class(theme);
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(link) = doc
            .get_element_by_id(stylesheet_id(theme))
            .and_then(|el| el.dyn_into::<web_sys::HtmlLinkElement>().ok())
        {
            link.set_disabled(false);
        }
        for el in crate::components::dom::query_all(&format!("[{}]", mode_only_attr(theme))) {
            if let Err(e) = el.class_list().remove_1(crate::consts::CLASS_HIDDEN) {
                log::warn!("could not reveal mode-only element: {e:?}");
            }
        }
    }
}
