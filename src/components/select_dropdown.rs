//! Searchable dropdowns for `data-dropdown` selects.

#[cfg(test)]
#[path = "select_dropdown_test.rs"]
mod select_dropdown_test;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownSettings {
    pub show_search: bool,
    pub search_placeholder: String,
    pub open_position: &'static str,
}

impl DropdownSettings {
    /// Settings for one select. A per-element placeholder wins over the
    /// configured default; a blank one does not.
    pub fn new(element_placeholder: Option<&str>, default_placeholder: &str) -> Self {
        let search_placeholder = element_placeholder
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(default_placeholder)
            .to_owned();
        Self {
            show_search: true,
            search_placeholder,
            open_position: "down",
        }
    }
}

#[cfg(feature = "hydrate")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type SlimSelect;

        #[wasm_bindgen(catch, constructor)]
        pub fn new(options: &JsValue) -> Result<SlimSelect, JsValue>;
    }
}

#[cfg(feature = "hydrate")]
fn mount(select: &web_sys::Element, settings: &DropdownSettings) -> Result<(), crate::error::ClientError> {
    use js_sys::{Object, Reflect};

    use crate::error::ClientError;

    let options = Object::new();
    Reflect::set(&options, &"select".into(), select)?;
    let settings = serde_wasm_bindgen::to_value(settings).map_err(|e| ClientError::Js(e.to_string()))?;
    Reflect::set(&options, &"settings".into(), &settings)?;
    bindings::SlimSelect::new(&options)?;
    Ok(())
}

/// Enhance every dropdown select on the page.
#[cfg(feature = "hydrate")]
pub fn setup(config: &crate::config::ClientConfig) {
    use crate::consts::{ATTR_DROPDOWN, ATTR_DROPDOWN_SEARCH_PLACEHOLDER};

    for select in super::dom::query_all(&format!("[{ATTR_DROPDOWN}]")) {
        let placeholder = select.get_attribute(ATTR_DROPDOWN_SEARCH_PLACEHOLDER);
        let settings = DropdownSettings::new(placeholder.as_deref(), &config.dropdown_search_placeholder);
        if let Err(e) = mount(&select, &settings) {
            log::warn!("dropdown not mounted: {e}");
        }
    }
}
