//! REST calls to the snippet backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: [`HttpFavoriteApi`] reports [`ClientError::Unavailable`];
//! tests drive the favorite flow through their own [`FavoriteApi`].
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies all map to a
//! `ClientError`; the favorite flow treats every one of them as "rollback".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ClientError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ToggleFavoriteResponse;

/// Path of the toggle endpoint for `snippet_id`, under `api_base`.
pub fn toggle_favorite_endpoint(api_base: &str, snippet_id: &str) -> String {
    let base = api_base.trim_end_matches('/');
    format!("{base}/snippets/{snippet_id}/toggle-favorite/")
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_toggle_response(body: &str) -> Result<bool, ClientError> {
    serde_json::from_str::<ToggleFavoriteResponse>(body)
        .map(|resp| resp.is_favorite)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// Backend operations for favorites.
#[allow(async_fn_in_trait)]
pub trait FavoriteApi {
    /// Toggle the favorite flag and return the server's resulting state.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an
    /// unreadable response body.
    async fn toggle_favorite(&self, snippet_id: &str) -> Result<bool, ClientError>;
}

/// [`FavoriteApi`] over HTTP.
#[derive(Clone, Debug, Default)]
pub struct HttpFavoriteApi {
    api_base: String,
}

impl HttpFavoriteApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

impl FavoriteApi for HttpFavoriteApi {
    async fn toggle_favorite(&self, snippet_id: &str) -> Result<bool, ClientError> {
        #[cfg(feature = "hydrate")]
        {
            let url = toggle_favorite_endpoint(&self.api_base, snippet_id);
            let resp = gloo_net::http::Request::post(&url)
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(|e| ClientError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ClientError::Status(resp.status()));
            }
            let body = resp.text().await.map_err(|e| ClientError::Decode(e.to_string()))?;
            decode_toggle_response(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.api_base, snippet_id);
            Err(ClientError::Unavailable)
        }
    }
}
