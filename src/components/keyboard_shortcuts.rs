//! Page-wide single-key shortcuts, routed by `util::shortcuts`.

/// Listen for shortcut keys released while nothing else has focus.
#[cfg(feature = "hydrate")]
pub fn setup() {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Event, HtmlElement, KeyboardEvent};

    use super::dom;
    use crate::util::shortcuts::{Shortcut, route_key};

    let Some(body) = dom::document().and_then(|d| d.body()) else {
        return;
    };
    let body_value = JsValue::from(body.clone());
    dom::log_listen_error(
        "keyboard shortcuts",
        dom::listen(&body, "keyup", move |ev: Event| {
            let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let on_body = ev.target().is_some_and(|t| JsValue::from(t) == body_value);
            let Some(shortcut) = route_key(&key_ev.key(), on_body) else {
                return;
            };
            let Some(target) = dom::by_id::<HtmlElement>(shortcut.target_id()) else {
                return;
            };
            match shortcut {
                Shortcut::FocusSearch => {
                    if let Err(e) = target.focus() {
                        log::debug!("search focus failed: {e:?}");
                    }
                }
                Shortcut::AddSnippet => target.click(),
            }
        }),
    );
}
