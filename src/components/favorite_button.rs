//! Favorite buttons: `data-favorite-btn="<snippet id>"`.
//!
//! ARCHITECTURE
//! ============
//! Setup groups every button on the page by snippet id and seeds a
//! [`FavoriteRegistry`] from the buttons' initial `is-favorite` class. A click
//! runs [`toggle`]: optimistic flip, backend call, settle. Rendering goes
//! through [`FavoriteView`] so the same flow drives the DOM and the tests.

#[cfg(test)]
#[path = "favorite_button_test.rs"]
mod favorite_button_test;

use std::cell::RefCell;

use crate::consts::{LABEL_ADD_FAVORITE, LABEL_REMOVE_FAVORITE};
use crate::net::api::FavoriteApi;
use crate::state::favorite::{FavoriteRegistry, FavoriteState, Settlement, ToggleOutcome};

/// Title and aria-label for a button showing `favorited`.
pub fn favorite_label(favorited: bool) -> &'static str {
    if favorited { LABEL_REMOVE_FAVORITE } else { LABEL_ADD_FAVORITE }
}

/// Renders one snippet's favorite state onto all of its buttons.
pub trait FavoriteView {
    fn render(&self, snippet_id: &str, favorited: bool);
}

/// Run one click for `snippet_id` to completion.
///
/// Returns the entry's state afterwards, or `None` for an unregistered id.
pub async fn toggle<A, V>(
    registry: &RefCell<FavoriteRegistry>,
    api: &A,
    view: &V,
    snippet_id: &str,
) -> Option<FavoriteState>
where
    A: FavoriteApi,
    V: FavoriteView,
{
    let ticket = registry.borrow_mut().begin_toggle(snippet_id)?;
    view.render(snippet_id, ticket.optimistic);

    let result = api.toggle_favorite(snippet_id).await;
    #[cfg(feature = "hydrate")]
    if let Err(e) = &result {
        log::warn!("favorite toggle for {snippet_id} failed: {e}");
    }
    let outcome = result.map_or(ToggleOutcome::Failed, ToggleOutcome::Confirmed);

    let settlement = registry.borrow_mut().settle(&ticket, outcome);
    if let Settlement::Applied(favorited) = settlement {
        view.render(snippet_id, favorited);
    }
    registry.borrow().state(snippet_id)
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Event, HtmlElement};

    use super::super::dom;
    use super::{FavoriteView, favorite_label, toggle};
    use crate::consts::{ATTR_FAVORITE_BTN, CLASS_FAVORITE};
    use crate::net::api::HttpFavoriteApi;
    use crate::state::favorite::FavoriteRegistry;

    /// Buttons on the page, grouped by snippet id.
    #[derive(Default)]
    struct DomFavoriteView {
        buttons: HashMap<String, Vec<HtmlElement>>,
    }

    impl DomFavoriteView {
        fn discover() -> Self {
            let mut view = Self::default();
            for el in dom::query_all(&format!("[{ATTR_FAVORITE_BTN}]")) {
                let Some(id) = el.get_attribute(ATTR_FAVORITE_BTN).filter(|id| !id.is_empty()) else {
                    continue;
                };
                if let Ok(button) = el.dyn_into::<HtmlElement>() {
                    view.buttons.entry(id).or_default().push(button);
                }
            }
            view
        }
    }

    impl FavoriteView for DomFavoriteView {
        fn render(&self, snippet_id: &str, favorited: bool) {
            let Some(buttons) = self.buttons.get(snippet_id) else {
                return;
            };
            let label = favorite_label(favorited);
            for button in buttons {
                let updated = button
                    .class_list()
                    .toggle_with_force(CLASS_FAVORITE, favorited)
                    .map(|_| ())
                    .and_then(|()| button.set_attribute("aria-label", label))
                    .and_then(|()| button.set_attribute("aria-pressed", if favorited { "true" } else { "false" }));
                button.set_title(label);
                if let Err(e) = updated {
                    log::warn!("favorite button for {snippet_id} not updated: {e:?}");
                }
            }
        }
    }

    /// Wire every favorite button on the page.
    pub fn setup(config: &crate::config::ClientConfig) {
        let view = DomFavoriteView::discover();
        let mut registry = FavoriteRegistry::default();
        for (id, buttons) in &view.buttons {
            let favorited = buttons.iter().any(|b| b.class_list().contains(CLASS_FAVORITE));
            registry.register(id, favorited);
        }
        if registry.is_empty() {
            return;
        }
        log::debug!("favorite buttons for {} snippets", registry.len());

        let registry = Rc::new(RefCell::new(registry));
        let api = Rc::new(HttpFavoriteApi::new(config.api_base.clone()));
        let view = Rc::new(view);

        for (id, buttons) in &view.buttons {
            for button in buttons {
                let id = id.clone();
                let registry = Rc::clone(&registry);
                let api = Rc::clone(&api);
                let handler_view = Rc::clone(&view);
                let handler_button = button.clone();
                dom::log_listen_error(
                    "favorite button",
                    dom::listen(button, "click", move |ev: Event| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        if let Err(e) = handler_button.blur() {
                            log::debug!("favorite button blur failed: {e:?}");
                        }
                        let id = id.clone();
                        let registry = Rc::clone(&registry);
                        let api = Rc::clone(&api);
                        let view = Rc::clone(&handler_view);
                        wasm_bindgen_futures::spawn_local(async move {
                            toggle(&registry, api.as_ref(), view.as_ref(), &id).await;
                        });
                    }),
                );
            }
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::setup;
