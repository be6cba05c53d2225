//! Theme preference and its persistence.
//!
//! [`ThemeState`] is the only owner of the persisted preference and the
//! document-level `dark` marker. It resolves the initial preference once
//! (stored value, then the environment's preferred scheme, then the
//! configured default) and writes both the marker and the store on every
//! change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Persisted choice between the two visual modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Interpret a stored value. Only `"dark"` selects the dark theme; any
    /// other non-empty value selects light, and an empty value counts as
    /// absent.
    pub fn from_stored(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self::from_dark(value == "dark"))
        }
    }

    /// Fallback chain: stored value, then scheme signal, then default.
    pub fn resolve(stored: Option<Self>, prefers_dark: Option<bool>, default_dark: bool) -> Self {
        stored
            .or_else(|| prefers_dark.map(Self::from_dark))
            .unwrap_or_else(|| Self::from_dark(default_dark))
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform services the theme depends on.
pub trait ThemeHost {
    /// Raw persisted value, if any.
    fn stored_theme(&self) -> Result<Option<String>>;

    /// Persist a value.
    fn store_theme(&self, value: &str) -> Result<()>;

    /// Environment preferred-scheme signal. `None` when the environment
    /// cannot answer the query at all; a dark query that does not match
    /// counts as light.
    fn prefers_dark(&self) -> Result<Option<bool>>;

    /// Add or remove the global dark marker.
    fn set_dark_marker(&self, dark: bool) -> Result<()>;
}

/// Browser host: `localStorage`, `matchMedia` and the root element's class
/// list.
#[derive(Debug, Clone)]
pub struct BrowserHost {
    storage_key: String,
}

impl BrowserHost {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    fn window() -> Result<web_sys::Window> {
        web_sys::window().ok_or_else(|| ShellError::host("window", "no global window"))
    }

    fn storage() -> Result<web_sys::Storage> {
        Self::window()?
            .local_storage()
            .map_err(|e| ShellError::from_js("localStorage", e))?
            .ok_or_else(|| ShellError::host("localStorage", "storage unavailable"))
    }
}

impl ThemeHost for BrowserHost {
    fn stored_theme(&self) -> Result<Option<String>> {
        Self::storage()?
            .get_item(&self.storage_key)
            .map_err(|e| ShellError::from_js("localStorage.getItem", e))
    }

    fn store_theme(&self, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(&self.storage_key, value)
            .map_err(|e| ShellError::from_js("localStorage.setItem", e))
    }

    fn prefers_dark(&self) -> Result<Option<bool>> {
        let list = Self::window()?
            .match_media("(prefers-color-scheme: dark)")
            .map_err(|e| ShellError::from_js("matchMedia", e))?;
        Ok(list.map(|list| list.matches()))
    }

    fn set_dark_marker(&self, dark: bool) -> Result<()> {
        let root = Self::window()?
            .document()
            .and_then(|doc| doc.document_element())
            .ok_or_else(|| ShellError::host("documentElement", "no document root"))?;
        let classes = root.class_list();
        let outcome = if dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        outcome.map_err(|e| ShellError::from_js("classList", e))
    }
}

/// Process-wide theme state.
#[derive(Debug)]
pub struct ThemeState<H> {
    host: H,
    current: ThemePreference,
}

impl<H: ThemeHost> ThemeState<H> {
    /// Resolve the initial preference and apply it.
    pub fn init(host: H, default_dark: bool) -> Self {
        let stored = host
            .stored_theme()
            .unwrap_or_else(|err| {
                log::warn!("reading stored theme failed: {err}");
                None
            })
            .and_then(|value| ThemePreference::from_stored(&value));
        let prefers_dark = host.prefers_dark().unwrap_or_else(|err| {
            log::warn!("reading preferred color scheme failed: {err}");
            None
        });

        let current = ThemePreference::resolve(stored, prefers_dark, default_dark);
        log::debug!("initial theme: {current} (stored {stored:?}, prefers dark {prefers_dark:?})");

        let state = Self { host, current };
        state.apply();
        state
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn is_dark(&self) -> bool {
        self.current.is_dark()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Set the preference, updating the marker and the store immediately.
    pub fn set(&mut self, preference: ThemePreference) {
        self.current = preference;
        self.apply();
    }

    fn apply(&self) {
        let dark = self.current.is_dark();
        if let Err(err) = self.host.set_dark_marker(dark) {
            log::warn!("applying theme marker failed: {err}");
        }
        if let Err(err) = self.host.store_theme(self.current.as_str()) {
            log::warn!("persisting theme failed: {err}");
        }
    }
}
