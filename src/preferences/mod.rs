//! User display preferences stored beside, but independent of, the task
//! snapshot.

mod theme;

pub use theme::{DEFAULT_THEME_KEY, ParseThemeError, Theme, ThemePreferences};
