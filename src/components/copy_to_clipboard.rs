//! Copy buttons: `data-copy-to-cliboard="<element id>"`.
//!
//! The attribute spelling matches the server templates.

#[cfg(test)]
#[path = "copy_to_clipboard_test.rs"]
mod copy_to_clipboard_test;

use crate::config::ClientConfig;

/// Element id named by a copy button's attribute, if any.
pub fn target_id(attr: &str) -> Option<&str> {
    Some(attr.trim()).filter(|id| !id.is_empty())
}

/// Temporary button state shown after a successful copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyFeedback {
    pub label: String,
    pub class: String,
    pub duration_ms: u32,
}

impl CopyFeedback {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            label: config.copy_feedback_label.clone(),
            class: config.copy_feedback_class.clone(),
            duration_ms: config.copy_feedback_ms,
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Element, Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

    use super::super::dom;
    use super::{CopyFeedback, target_id};
    use crate::consts::ATTR_COPY_TO_CLIPBOARD;
    use crate::error::ClientError;

    /// Form field value for inputs and textareas, text content otherwise.
    fn copy_value(target: &Element) -> String {
        if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
            return area.value();
        }
        if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        target.text_content().unwrap_or_default()
    }

    async fn write_clipboard(text: &str) -> Result<(), ClientError> {
        let window = dom::window().ok_or(ClientError::Unavailable)?;
        // Missing outside secure contexts.
        let clipboard = window.navigator().clipboard().ok_or(ClientError::Unavailable)?;
        JsFuture::from(clipboard.write_text(text)).await?;
        Ok(())
    }

    fn show_feedback(button: &HtmlElement, feedback: &CopyFeedback) {
        let saved = button.inner_html();
        if let Err(e) = button.class_list().add_1(&feedback.class) {
            log::warn!("copy feedback class not added: {e:?}");
        }
        button.set_inner_text(&feedback.label);

        let button = button.clone();
        let class = feedback.class.clone();
        gloo_timers::callback::Timeout::new(feedback.duration_ms, move || {
            button.set_inner_html(&saved);
            if let Err(e) = button.class_list().remove_1(&class) {
                log::warn!("copy feedback class not removed: {e:?}");
            }
        })
        .forget();
    }

    fn on_click(ev: &Event, button: &HtmlElement, feedback: &Rc<CopyFeedback>) {
        ev.prevent_default();
        ev.stop_propagation();

        let attr = button.get_attribute(ATTR_COPY_TO_CLIPBOARD).unwrap_or_default();
        let Some(target) = target_id(&attr).and_then(dom::by_id::<Element>) else {
            log::debug!("copy target {attr:?} not found");
            return;
        };
        let text = copy_value(&target);

        let button = button.clone();
        let feedback = Rc::clone(feedback);
        wasm_bindgen_futures::spawn_local(async move {
            match write_clipboard(&text).await {
                Ok(()) => show_feedback(&button, &feedback),
                Err(e) => log::warn!("clipboard write failed: {e}"),
            }
        });
    }

    /// Attach a click handler to every copy button on the page.
    pub fn setup(config: &crate::config::ClientConfig) {
        let feedback = Rc::new(CopyFeedback::from_config(config));
        for el in dom::query_all(&format!("[{ATTR_COPY_TO_CLIPBOARD}]")) {
            let Ok(button) = el.dyn_into::<HtmlElement>() else {
                continue;
            };
            let handler_button = button.clone();
            let feedback = Rc::clone(&feedback);
            dom::log_listen_error(
                "copy button",
                dom::listen(&button, "click", move |ev| on_click(&ev, &handler_button, &feedback)),
            );
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::setup;
