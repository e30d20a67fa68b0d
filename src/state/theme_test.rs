use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

/// In-memory [`PreferenceStore`].
#[derive(Debug, Default)]
struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn parse_accepts_only_known_values() {
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert!("Dark".parse::<Theme>().is_err());
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn stored_preference_beats_os_signal() {
    assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn os_signal_used_without_stored_preference() {
    assert_eq!(Theme::resolve(None, true), Theme::Dark);
    assert_eq!(Theme::resolve(None, false), Theme::Light);
}

#[test]
fn garbage_stored_value_falls_back_to_os_signal() {
    assert_eq!(Theme::resolve(Some("purple"), true), Theme::Dark);
    assert_eq!(Theme::resolve(Some("purple"), false), Theme::Light);
}

// =============================================================
// ThemeSettings
// =============================================================

#[test]
fn load_reads_store() {
    let store = MemoryStore::default();
    store.set(THEME_STORAGE_KEY, "dark").unwrap();
    let settings = ThemeSettings::new(store);
    assert_eq!(settings.load(false), Theme::Dark);
    assert_eq!(settings.load(true), Theme::Dark);
}

#[test]
fn toggle_persists_new_value() {
    let settings = ThemeSettings::new(MemoryStore::default());
    let (next, persisted) = settings.toggle(Theme::Light);
    assert!(persisted.is_ok());
    assert_eq!(next, Theme::Dark);
    assert_eq!(settings.load(false), Theme::Dark);
}

#[test]
fn toggling_twice_restores_stored_preference() {
    let store = MemoryStore::default();
    store.set(THEME_STORAGE_KEY, "light").unwrap();
    let settings = ThemeSettings::new(store);

    let start = settings.load(false);
    let (once, _) = settings.toggle(start);
    let (twice, _) = settings.toggle(once);

    assert_eq!(twice, start);
    assert_eq!(settings.load(true), Theme::Light);
}

struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), ClientError> {
        Err(ClientError::Storage("quota exceeded".to_owned()))
    }
}

#[test]
fn failing_store_uses_os_signal_and_still_toggles() {
    let settings = ThemeSettings::new(FailingStore);
    assert_eq!(settings.load(true), Theme::Dark);
    let (next, persisted) = settings.toggle(Theme::Dark);
    assert_eq!(next, Theme::Light);
    assert!(matches!(persisted, Err(ClientError::Storage(_))));
}
