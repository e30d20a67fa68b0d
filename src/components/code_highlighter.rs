//! Syntax highlighting for static code blocks, plus language detection.
//!
//! The highlighter itself is the page's `hljs` global with its copy-button
//! plugin; this module only drives it. Textarea highlighting comes from the
//! `highlighted-code` custom element, loaded by dynamic import.

#[cfg(test)]
#[path = "code_highlighter_test.rs"]
mod code_highlighter_test;

use serde::Serialize;

/// Selector for static code blocks.
pub const CODE_BLOCK_SELECTOR: &str = "pre code";

pub const HIGHLIGHTED_CODE_MODULE: &str = "https://unpkg.com/highlighted-code";
pub const CUSTOM_ELEMENTS_POLYFILL: &str = "https://unpkg.com/@ungap/custom-elements";

/// Options for the copy-button plugin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CopyButtonOptions {
    /// `false` keeps the button visible instead of hover-only.
    pub autohide: bool,
}

impl Default for CopyButtonOptions {
    fn default() -> Self {
        Self { autohide: false }
    }
}

#[cfg(feature = "hydrate")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type AutoHighlightResult;

        #[wasm_bindgen(method, getter)]
        pub fn language(this: &AutoHighlightResult) -> Option<String>;

        #[wasm_bindgen(catch, js_namespace = hljs, js_name = addPlugin)]
        pub fn add_plugin(plugin: &JsValue) -> Result<(), JsValue>;

        #[wasm_bindgen(catch, js_namespace = hljs, js_name = highlightElement)]
        pub fn highlight_element(el: &web_sys::Element) -> Result<(), JsValue>;

        #[wasm_bindgen(catch, js_namespace = hljs, js_name = highlightAuto)]
        pub fn highlight_auto(code: &str) -> Result<AutoHighlightResult, JsValue>;

        pub type CopyButtonPlugin;

        #[wasm_bindgen(catch, constructor)]
        pub fn new(options: &JsValue) -> Result<CopyButtonPlugin, JsValue>;
    }

    #[wasm_bindgen(inline_js = "export function import_module(url) { return import(url); }")]
    extern "C" {
        #[wasm_bindgen(catch)]
        pub fn import_module(url: &str) -> Result<js_sys::Promise, JsValue>;
    }
}

/// [`LanguageDetector`](crate::state::language::LanguageDetector) backed by
/// `hljs.highlightAuto`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HljsDetector;

#[cfg(feature = "hydrate")]
impl crate::state::language::LanguageDetector for HljsDetector {
    fn detect(&self, code: &str) -> Option<String> {
        if code.trim().is_empty() {
            return None;
        }
        match bindings::highlight_auto(code) {
            Ok(result) => result.language(),
            Err(e) => {
                log::warn!("language detection unavailable: {e:?}");
                None
            }
        }
    }
}

/// Browsers other than Chromium and Gecko need the custom-elements polyfill.
#[cfg(feature = "hydrate")]
fn needs_custom_elements_polyfill() -> bool {
    let Some(window) = super::dom::window() else {
        return false;
    };
    let has = |name: &str| js_sys::Reflect::has(&window, &name.into()).unwrap_or(false);
    !has("chrome") && !has("netscape")
}

#[cfg(feature = "hydrate")]
async fn load_module(url: &str) -> Result<(), crate::error::ClientError> {
    let promise = bindings::import_module(url)?;
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}

/// Highlight every static code block and load textarea highlighting.
#[cfg(feature = "hydrate")]
pub fn highlight_all() {
    match serde_wasm_bindgen::to_value(&CopyButtonOptions::default()) {
        Ok(options) => {
            let registered = bindings::CopyButtonPlugin::new(&options)
                .and_then(|plugin| bindings::add_plugin(&plugin));
            if let Err(e) = registered {
                log::warn!("copy button plugin not registered: {e:?}");
            }
        }
        Err(e) => log::warn!("copy button options: {e}"),
    }

    for block in super::dom::query_all(CODE_BLOCK_SELECTOR) {
        if let Err(e) = bindings::highlight_element(&block) {
            log::warn!("highlighting failed: {e:?}");
        }
    }

    wasm_bindgen_futures::spawn_local(async {
        if needs_custom_elements_polyfill() {
            if let Err(e) = load_module(CUSTOM_ELEMENTS_POLYFILL).await {
                log::warn!("custom elements polyfill failed to load: {e}");
            }
        }
        if let Err(e) = load_module(HIGHLIGHTED_CODE_MODULE).await {
            log::warn!("textarea highlighting failed to load: {e}");
        }
    });
}
