//! Theme controller: apply the stored theme and wire the toggle button.
//!
//! Toggling persists the new preference and reloads the page, so every
//! widget (some cannot re-theme live) starts again from one consistent mode.

use crate::state::theme::{Theme, ThemeSettings};
use crate::util::dark_mode;
use crate::util::storage::LocalStorage;

/// Resolve the effective theme and apply it to the page.
pub fn setup() -> Theme {
    let settings = ThemeSettings::new(LocalStorage);
    let theme = settings.load(dark_mode::prefers_dark());
    dark_mode::apply(theme);

    #[cfg(feature = "hydrate")]
    {
        use super::dom;
        use crate::consts::ID_THEME_TOGGLE;

        if let Some(button) = dom::by_id::<web_sys::EventTarget>(ID_THEME_TOGGLE) {
            dom::log_listen_error(
                "theme toggle",
                dom::listen(&button, "click", move |_| {
                    let (next, persisted) = settings.toggle(dark_mode::current());
                    if let Err(e) = persisted {
                        log::warn!("theme preference not saved: {e}");
                    }
                    dark_mode::set_root_class(next);
                    if let Some(Err(e)) = dom::window().map(|w| w.location().reload()) {
                        log::warn!("reload after theme toggle failed: {e:?}");
                    }
                }),
            );
        }
    }

    theme
}
