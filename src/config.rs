//! Client configuration supplied by the server-rendered page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates may embed `<script type="application/json"
//! id="snippets-client-config">` with any subset of [`ClientConfig`] fields.
//! Missing fields take their defaults, so an absent or empty block yields the
//! stock behavior.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ClientError;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Minimum `log` level for the browser console (`error` .. `trace`).
    pub log_level: String,
    /// Prefix prepended to backend paths, e.g. `/app` behind a sub-path proxy.
    pub api_base: String,
    /// How long the copy confirmation stays on the button.
    pub copy_feedback_ms: u32,
    pub copy_feedback_label: String,
    pub copy_feedback_class: String,
    /// Search placeholder for dropdowns without a per-element override.
    pub dropdown_search_placeholder: String,
    pub markdown_editor_height: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            api_base: String::new(),
            copy_feedback_ms: 1000,
            copy_feedback_label: "Copied!".to_owned(),
            copy_feedback_class: "!bg-green-400".to_owned(),
            dropdown_search_placeholder: "Search...".to_owned(),
            markdown_editor_height: "500px".to_owned(),
        }
    }
}

impl ClientConfig {
    /// Parse a JSON config block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if the block is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, ClientError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Read the config block from the current document.
    ///
    /// Runs before the logger exists, so a malformed block is reported straight
    /// to the console.
    #[cfg(feature = "hydrate")]
    pub fn load() -> Self {
        let Some(raw) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(crate::consts::ID_CLIENT_CONFIG))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("ignoring client config: {e}").into());
                Self::default()
            }
        }
    }
}
