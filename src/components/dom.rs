//! Small web-sys helpers shared by the components.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::ClientError;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element by id, cast to `T`. `None` when missing or of another type.
pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Register `handler` for `event` on `target` for the page's lifetime.
///
/// # Errors
///
/// Returns [`ClientError::Js`] if the browser rejects the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ClientError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`listen`], in the capture phase.
///
/// # Errors
///
/// Returns [`ClientError::Js`] if the browser rejects the listener.
pub fn listen_capture<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ClientError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_capture(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Fire a plain `input` event so listeners re-read the field.
pub fn dispatch_input(target: &EventTarget) {
    let dispatched = Event::new("input").and_then(|ev| target.dispatch_event(&ev));
    if let Err(e) = dispatched {
        log::warn!("input event dispatch failed: {e:?}");
    }
}

/// Log a failed listener registration for `what`.
pub fn log_listen_error(what: &str, result: Result<(), ClientError>) {
    if let Err(e) = result {
        log::warn!("{what}: listener not registered: {e}");
    }
}
