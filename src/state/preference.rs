//! Theme preference: one `light`/`dark` flag in `localStorage`.
//!
//! The flag is read once when the script starts and written on every toggle.
//! Dark mode is shown by the `dark-theme` marker class on `<body>`.
//!
//! DESIGN
//! ======
//! Storage and the marker target are traits so [`PreferenceStore`] can be
//! driven by in-memory fakes; browser implementations live behind `hydrate`.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::consts::THEME_STORAGE_KEY;
use crate::error::UiError;

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Only `dark` selects dark mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some("dark") { Self::Dark } else { Self::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// String key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// Element that carries the dark-mode marker.
pub trait ThemeTarget {
    fn has_marker(&self) -> bool;

    /// # Errors
    ///
    /// Returns an error when the marker cannot be changed.
    fn set_marker(&self, enabled: bool) -> Result<(), UiError>;
}

/// In-memory store for tests and native builds. The page always persists through `LocalStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Explicit owner of the theme flag.
pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn stored_theme(&self) -> Theme {
        Theme::from_stored(self.store.get(THEME_STORAGE_KEY).as_deref())
    }

    /// Apply the stored theme at start-up. A light preference leaves the page untouched.
    ///
    /// # Errors
    ///
    /// Returns an error when the marker cannot be applied.
    pub fn load_theme(&self, target: &impl ThemeTarget) -> Result<Theme, UiError> {
        let theme = self.stored_theme();
        if theme == Theme::Dark {
            target.set_marker(true)?;
        }
        Ok(theme)
    }

    /// Flip the marker and persist the resulting theme.
    ///
    /// # Errors
    ///
    /// Returns an error when the marker or the store rejects the change.
    pub fn toggle_theme(&self, target: &impl ThemeTarget) -> Result<Theme, UiError> {
        let current = if target.has_marker() { Theme::Dark } else { Theme::Light };
        let next = current.toggled();
        target.set_marker(next == Theme::Dark)?;
        self.store.set(THEME_STORAGE_KEY, next.as_str())?;
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    /// # Errors
    ///
    /// Returns an error when the window or its storage is unavailable.
    pub fn open() -> Result<Self, UiError> {
        let storage = crate::dom::window()?
            .local_storage()?
            .ok_or_else(|| UiError::Missing("localStorage".to_owned()))?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("reading {key} failed: {}", UiError::from(err));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.storage.set_item(key, value)?;
        Ok(())
    }
}

/// `<body>` carrying the `dark-theme` class.
#[cfg(feature = "hydrate")]
pub struct BodyMarker {
    body: web_sys::HtmlElement,
}

#[cfg(feature = "hydrate")]
impl BodyMarker {
    /// # Errors
    ///
    /// Returns an error when the document has no body yet.
    pub fn current() -> Result<Self, UiError> {
        Ok(Self { body: crate::dom::body()? })
    }
}

#[cfg(feature = "hydrate")]
impl ThemeTarget for BodyMarker {
    fn has_marker(&self) -> bool {
        self.body.class_list().contains(crate::consts::DARK_THEME_CLASS)
    }

    fn set_marker(&self, enabled: bool) -> Result<(), UiError> {
        let classes = self.body.class_list();
        if enabled {
            classes.add_1(crate::consts::DARK_THEME_CLASS)?;
        } else {
            classes.remove_1(crate::consts::DARK_THEME_CLASS)?;
        }
        Ok(())
    }
}

/// Apply the saved theme to the current page.
#[cfg(feature = "hydrate")]
pub fn load_theme() -> Result<Theme, UiError> {
    PreferenceStore::new(LocalStorage::open()?).load_theme(&BodyMarker::current()?)
}

/// Toggle the current page's theme and save it.
#[cfg(feature = "hydrate")]
pub fn toggle_theme() -> Result<Theme, UiError> {
    PreferenceStore::new(LocalStorage::open()?).toggle_theme(&BodyMarker::current()?)
}
