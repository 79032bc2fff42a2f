//! Light/dark display theme preference.

use std::fmt;

use thiserror::Error;

use crate::storage::{KeyValueStore, StorageKey};

/// Default key holding the theme preference.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Display theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Returns the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Error returned while parsing a stored theme value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(pub String);

impl TryFrom<&str> for Theme {
    type Error = ParseThemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseThemeError(value.to_owned())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads and writes the theme preference.
#[derive(Debug, Clone)]
pub struct ThemePreferences<S> {
    store: S,
    key: StorageKey,
}

impl<S: KeyValueStore> ThemePreferences<S> {
    /// Creates preferences stored under `key`.
    #[must_use]
    pub const fn new(store: S, key: StorageKey) -> Self {
        Self { store, key }
    }

    /// Returns the stored theme, or the system preference when nothing
    /// valid is stored.
    #[must_use]
    pub fn load(&self, system_prefers_dark: bool) -> Theme {
        let fallback = if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        };
        match self.store.get(&self.key) {
            Ok(Some(raw)) => Theme::try_from(raw.as_str()).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring stored theme");
                fallback
            }),
            Ok(None) => fallback,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to read theme");
                fallback
            }
        }
    }

    /// Stores `theme`; failures are logged and otherwise ignored.
    pub fn save(&self, theme: Theme) {
        if let Err(err) = self.store.set(&self.key, theme.as_str()) {
            tracing::warn!(key = %self.key, error = %err, "failed to save theme");
        }
    }

    /// Stores and returns the theme opposite to `current`.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next);
        next
    }
}
