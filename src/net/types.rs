//! Wire DTOs for the backend endpoints the client calls.

use serde::Deserialize;

/// Body of a successful `POST /snippets/{id}/toggle-favorite/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ToggleFavoriteResponse {
    /// Favorite status after the toggle.
    #[serde(alias = "favorite")]
    pub is_favorite: bool,
}
