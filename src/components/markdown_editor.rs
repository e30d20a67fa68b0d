//! Rich markdown editing for `data-markdown-editor` textareas.
//!
//! The textarea stays in the form, hidden, and is rewritten on every editor
//! change so a plain form submit carries the current markdown. The editor
//! theme is fixed at setup; theme toggles reload the page.

#[cfg(test)]
#[path = "markdown_editor_test.rs"]
mod markdown_editor_test;

use serde::Serialize;

use crate::state::theme::Theme;

/// Editor theme name for a page theme.
pub fn editor_theme(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "dark",
        Theme::Light => "default",
    }
}

/// Serializable part of the editor options; `el` and `events` are attached
/// as JS values at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownEditorOptions {
    pub height: String,
    pub initial_value: String,
    pub preview_style: &'static str,
    pub preview_highlight: bool,
    pub plugins: Vec<String>,
    pub hide_mode_switch: bool,
    pub autofocus: bool,
    pub theme: &'static str,
}

impl MarkdownEditorOptions {
    pub fn new(initial_value: impl Into<String>, height: impl Into<String>, theme: Theme) -> Self {
        Self {
            height: height.into(),
            initial_value: initial_value.into(),
            preview_style: "tab",
            preview_highlight: false,
            plugins: Vec::new(),
            hide_mode_switch: true,
            autofocus: false,
            theme: editor_theme(theme),
        }
    }
}

#[cfg(feature = "hydrate")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(js_namespace = toastui)]
    extern "C" {
        #[wasm_bindgen(js_name = Editor)]
        pub type ToastEditor;

        #[wasm_bindgen(catch, constructor, js_class = "Editor")]
        pub fn new(options: &JsValue) -> Result<ToastEditor, JsValue>;

        #[wasm_bindgen(method, js_class = "Editor", js_name = getMarkdown)]
        pub fn get_markdown(this: &ToastEditor) -> String;
    }
}

#[cfg(feature = "hydrate")]
fn mount(
    textarea: &web_sys::HtmlTextAreaElement,
    config: &crate::config::ClientConfig,
    theme: Theme,
) -> Result<(), crate::error::ClientError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use crate::error::ClientError;

    let document = super::dom::document().ok_or(ClientError::Unavailable)?;
    let parent = textarea
        .parent_node()
        .ok_or_else(|| ClientError::Js("markdown textarea is detached".to_owned()))?;

    textarea.style().set_property("display", "none")?;
    let container = document.create_element("div")?;
    parent.insert_before(&container, Some(textarea.as_ref()))?;

    let options = MarkdownEditorOptions::new(textarea.value(), &config.markdown_editor_height, theme);
    let js_options = serde_wasm_bindgen::to_value(&options).map_err(|e| ClientError::Js(e.to_string()))?;
    Reflect::set(&js_options, &"el".into(), &container)?;

    let editor: Rc<RefCell<Option<bindings::ToastEditor>>> = Rc::new(RefCell::new(None));
    let editor_for_cb = Rc::clone(&editor);
    let field = textarea.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        if let Some(editor) = editor_for_cb.borrow().as_ref() {
            field.set_value(&editor.get_markdown());
        }
    });
    let events = Object::new();
    Reflect::set(&events, &"change".into(), on_change.as_ref())?;
    Reflect::set(&js_options, &"events".into(), &JsValue::from(events))?;
    on_change.forget();

    *editor.borrow_mut() = Some(bindings::ToastEditor::new(&js_options)?);
    Ok(())
}

/// Replace every markdown textarea with a rich editor.
#[cfg(feature = "hydrate")]
pub fn setup(config: &crate::config::ClientConfig, theme: Theme) {
    use wasm_bindgen::JsCast;

    use crate::consts::ATTR_MARKDOWN_EDITOR;

    for el in super::dom::query_all(&format!("[{ATTR_MARKDOWN_EDITOR}]")) {
        let Ok(textarea) = el.dyn_into::<web_sys::HtmlTextAreaElement>() else {
            continue;
        };
        if let Err(e) = mount(&textarea, config, theme) {
            log::warn!("markdown editor not mounted: {e}");
        }
    }
}
