//! Keeps the surface theme in step with the external settings store.
//!
//! The menu toggle changes the applied theme immediately but never writes
//! to the store. The periodic poll then puts the store's value back, so a
//! manual toggle that disagrees with the store lasts at most one poll period.

use tracing::{debug, info};

use crate::app::domain::Theme;
use crate::app::infrastructure::settings_store::SettingsStore;

pub const THEME_KEY: &str = "Theme";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSync {
    applied: Theme,
    key: String,
}

impl ThemeSync {
    pub fn new(applied: Theme, key: impl Into<String>) -> Self {
        Self {
            applied,
            key: key.into(),
        }
    }

    /// Resolve the initial theme from the store, reading `key`.
    pub fn at_startup(store: &dyn SettingsStore, key: &str) -> Self {
        let stored = store.value(key);
        let applied = Theme::resolve(stored.as_deref());
        info!(stored = ?stored, theme = ?applied, "resolved startup theme");
        Self::new(applied, key)
    }

    pub fn applied(&self) -> Theme {
        self.applied
    }

    /// Menu toggle. Applies Dark when checked, Light otherwise.
    pub fn toggle(&mut self, checked: bool) -> Theme {
        self.applied = Theme::from_checked(checked);
        debug!(theme = ?self.applied, "dark theme toggled from menu");
        self.applied
    }

    /// One poll tick. A missing key reads as `"light"`. Returns the new theme
    /// when the store disagrees with what is applied; unrecognised values
    /// leave the applied theme alone.
    pub fn poll(&mut self, store: &dyn SettingsStore) -> Option<Theme> {
        let stored = store.value(&self.key);
        let value = stored.as_deref().unwrap_or(Theme::Light.store_value());
        let Some(wanted) = Theme::from_store_value(value) else {
            debug!(value, "ignoring unrecognised stored theme");
            return None;
        };
        if wanted == self.applied {
            return None;
        }
        info!(from = ?self.applied, to = ?wanted, "stored theme overrides applied theme");
        self.applied = wanted;
        Some(wanted)
    }
}
