//! Browser `localStorage` as a [`PreferenceStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage can be missing or throw (private mode, disabled cookies). Reads then
//! come back empty so callers fall through to their defaults, and writes
//! surface a [`ClientError::Storage`] for logging.

use crate::error::ClientError;
use crate::state::theme::PreferenceStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, ClientError> {
    web_sys::window()
        .ok_or_else(|| ClientError::Storage("no window".to_owned()))?
        .local_storage()
        .map_err(|e| ClientError::Storage(format!("{e:?}")))?
        .ok_or_else(|| ClientError::Storage("localStorage disabled".to_owned()))
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|e| ClientError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(ClientError::Unavailable)
        }
    }
}
