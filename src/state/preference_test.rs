use std::cell::Cell;

use super::*;

#[derive(Default)]
struct Marker {
    enabled: Cell<bool>,
    writes: Cell<u32>,
}

impl ThemeTarget for Marker {
    fn has_marker(&self) -> bool {
        self.enabled.get()
    }

    fn set_marker(&self, enabled: bool) -> Result<(), UiError> {
        self.enabled.set(enabled);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), UiError> {
        Err(UiError::Js("QuotaExceededError".to_owned()))
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_from_stored_only_recognizes_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::default(), Theme::Light);
}

// =============================================================
// load_theme
// =============================================================

#[test]
fn load_applies_dark_marker_when_saved() {
    let store = MemoryStore::default();
    store.set("theme", "dark").unwrap();
    let prefs = PreferenceStore::new(store);
    let marker = Marker::default();

    assert_eq!(prefs.load_theme(&marker).unwrap(), Theme::Dark);
    assert!(marker.has_marker());
}

#[test]
fn load_leaves_page_untouched_for_light_or_missing() {
    let prefs = PreferenceStore::new(MemoryStore::default());
    let marker = Marker::default();
    assert_eq!(prefs.load_theme(&marker).unwrap(), Theme::Light);
    assert_eq!(marker.writes.get(), 0);

    prefs.store().set("theme", "light").unwrap();
    assert_eq!(prefs.load_theme(&marker).unwrap(), Theme::Light);
    assert_eq!(marker.writes.get(), 0);
}

// =============================================================
// toggle_theme
// =============================================================

#[test]
fn toggle_round_trips_light_dark_light() {
    let prefs = PreferenceStore::new(MemoryStore::default());
    let marker = Marker::default();

    assert_eq!(prefs.toggle_theme(&marker).unwrap(), Theme::Dark);
    assert!(marker.has_marker());
    assert_eq!(prefs.store().get("theme").as_deref(), Some("dark"));

    assert_eq!(prefs.toggle_theme(&marker).unwrap(), Theme::Light);
    assert!(!marker.has_marker());
    assert_eq!(prefs.store().get("theme").as_deref(), Some("light"));
}

#[test]
fn toggle_follows_marker_not_stored_value() {
    let prefs = PreferenceStore::new(MemoryStore::default());
    prefs.store().set("theme", "dark").unwrap();
    let marker = Marker::default();

    assert_eq!(prefs.toggle_theme(&marker).unwrap(), Theme::Dark);
    assert_eq!(prefs.stored_theme(), Theme::Dark);
}

#[test]
fn toggle_reports_store_failure() {
    let prefs = PreferenceStore::new(ReadOnlyStore);
    let marker = Marker::default();
    assert!(matches!(prefs.toggle_theme(&marker), Err(UiError::Js(_))));
}
