//! Light/dark theme preference
//!
//! The preference lives in client-side storage under the `theme` key. A
//! missing or corrupt value means "unset", in which case the OS color scheme
//! decides. Storage is best-effort: read failures count as unset and write
//! failures are logged and dropped, while the in-memory theme still changes.

use std::fmt;

use tracing::warn;

use crate::Result;

/// Storage key holding the preference
pub const STORAGE_KEY: &str = "theme";

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value; anything but `light`/`dark` is rejected
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backing storage for the theme preference
pub trait ThemeStore {
    /// Raw stored value, `None` when nothing is stored
    fn load(&self) -> Result<Option<String>>;

    /// Persist the preference
    fn save(&mut self, theme: Theme) -> Result<()>;
}

/// Toggle button rendering state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeIndicator {
    /// `aria-pressed` value: true while dark
    pub pressed: bool,
    pub label: &'static str,
}

/// Current theme plus the store it is persisted to
#[derive(Debug)]
pub struct ThemeState<S> {
    theme: Theme,
    store: S,
}

impl<S: ThemeStore> ThemeState<S> {
    /// Stored preference if valid, otherwise the OS preference
    pub fn initialize(store: S, os_preference: Theme) -> Self {
        let stored = match store.load() {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(e) => {
                warn!("Theme storage unreadable, using OS preference: {}", e);
                None
            }
        };

        Self {
            theme: stored.unwrap_or(os_preference),
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it
    ///
    /// The in-memory theme changes even when the store rejects the write.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.save(self.theme) {
            warn!(theme = %self.theme, "Failed to persist theme preference: {}", e);
        }
        self.theme
    }

    pub fn indicator(&self) -> ThemeIndicator {
        match self.theme {
            Theme::Dark => ThemeIndicator {
                pressed: true,
                label: "Switch to light mode",
            },
            Theme::Light => ThemeIndicator {
                pressed: false,
                label: "Switch to dark mode",
            },
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
