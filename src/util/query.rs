//! URL query helpers for the initial scroll-to-selection.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use url::form_urlencoded;

use crate::consts::{SELECTED_ID_PARAM, SNIPPET_ELEMENT_PREFIX};

/// First value of `name` in a `location.search` string (leading `?` optional).
/// Empty values count as absent.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Element id to scroll to on load, if any.
///
/// An existing URL fragment wins: the browser already positioned the page.
pub fn scroll_target(search: &str, hash: &str) -> Option<String> {
    if !hash.is_empty() && hash != "#" {
        return None;
    }
    let selected = query_param(search, SELECTED_ID_PARAM)?;
    Some(format!("{SNIPPET_ELEMENT_PREFIX}{selected}"))
}
