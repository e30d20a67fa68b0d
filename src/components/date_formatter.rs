//! Replace raw `data-timestamp` values with readable text and tooltips.

/// Render every timestamp element on the page. Safe to call repeatedly.
#[cfg(feature = "hydrate")]
pub fn format() {
    use wasm_bindgen::JsCast;

    use super::dom;
    use crate::consts::{ATTR_TIMESTAMP, ATTR_TIMESTAMP_FORMAT, ATTR_TIMESTAMP_TITLE_FORMAT};
    use crate::util::timestamp;

    let elements = dom::query_all(&format!("[{ATTR_TIMESTAMP}]"));
    if elements.is_empty() {
        return;
    }
    let now = chrono::Local::now().fixed_offset();
    for el in elements {
        let raw = el.get_attribute(ATTR_TIMESTAMP).unwrap_or_default();
        let display = el.get_attribute(ATTR_TIMESTAMP_FORMAT);
        let title = el.get_attribute(ATTR_TIMESTAMP_TITLE_FORMAT);
        let rendered = timestamp::render(&raw, display.as_deref(), title.as_deref(), &now);
        if rendered.text == timestamp::INVALID_DATE {
            log::debug!("unparseable timestamp {raw:?}");
        }
        match el.dyn_into::<web_sys::HtmlElement>() {
            Ok(html) => {
                html.set_inner_text(&rendered.text);
                html.set_title(&rendered.title);
            }
            Err(el) => {
                el.set_text_content(Some(&rendered.text));
                if let Err(e) = el.set_attribute("title", &rendered.title) {
                    log::warn!("timestamp title not set: {e:?}");
                }
            }
        }
    }
}
