//! Light/dark theme preference and its settings store.
//!
//! DESIGN
//! ======
//! The preference is process-wide configuration: read once at startup and
//! written only through [`ThemeSettings::toggle`]. Resolution order is stored
//! value, then the OS color-scheme signal, then light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::THEME_STORAGE_KEY;
use crate::error::ClientError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value persisted in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Resolve the effective theme from a stored value and the OS signal.
    ///
    /// Unrecognised stored values count as "no preference".
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.and_then(|s| s.parse().ok()) {
            Some(theme) => theme,
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ClientError::Decode(format!("unknown theme: {other}"))),
        }
    }
}

/// Minimal key/value store backing persisted preferences.
pub trait PreferenceStore {
    /// Read a value. Storage failures read as `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Storage`] when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;
}

/// Theme preference bound to a store.
pub struct ThemeSettings<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeSettings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Effective theme for this page load.
    pub fn load(&self, prefers_dark: bool) -> Theme {
        Theme::resolve(self.store.get(THEME_STORAGE_KEY).as_deref(), prefers_dark)
    }

    /// Flip `current`, persist the result, and return it.
    ///
    /// The returned theme is valid even when persisting fails; the error is
    /// reported alongside so the caller can log it.
    pub fn toggle(&self, current: Theme) -> (Theme, Result<(), ClientError>) {
        let next = current.toggled();
        let persisted = self.store.set(THEME_STORAGE_KEY, next.as_str());
        (next, persisted)
    }
}
