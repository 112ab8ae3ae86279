//! Light/dark theme preference.
//!
//! The persisted preference and the document's visual flag are written
//! together by [`ThemeController`]; nothing else mutates either.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::PortfolioResult;

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored value.
    ///
    /// An empty string counts as no preference. Anything other than
    /// `"dark"` is light.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "dark" => Some(Theme::Dark),
            _ => Some(Theme::Light),
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn inverse(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Startup resolution: stored value, then system preference, then light.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        if let Some(theme) = stored.and_then(Theme::from_stored) {
            return theme;
        }
        if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value persistence for the preference (localStorage in the browser).
pub trait ThemeStore {
    /// Raw stored value, `None` when absent or unreadable.
    fn load(&self) -> Option<String>;

    fn save(&self, theme: Theme) -> PortfolioResult<()>;
}

/// Where the theme becomes visible: the root flag and the toggle control.
pub trait ThemeSurface {
    fn is_dark(&self) -> bool;

    fn set_dark(&self, dark: bool);

    /// No-op when the page has no toggle control.
    fn set_toggle_checked(&self, checked: bool);
}

/// Keeps the stored preference and the visual flag in sync.
pub struct ThemeController<S, V> {
    store: S,
    surface: V,
}

impl<S: ThemeStore, V: ThemeSurface> ThemeController<S, V> {
    pub fn new(store: S, surface: V) -> Self {
        Self { store, surface }
    }

    /// Resolve the startup theme and apply it. Returns the applied theme.
    pub fn init(&self, system_prefers_dark: bool) -> Theme {
        let stored = self.store.load();
        let theme = Theme::resolve(stored.as_deref(), system_prefers_dark);
        debug!(?stored, system_prefers_dark, %theme, "Resolved startup theme");
        self.apply(theme);
        theme
    }

    /// Set the root flag and toggle state. Idempotent.
    pub fn apply(&self, theme: Theme) {
        self.surface.set_dark(theme.is_dark());
        self.surface.set_toggle_checked(theme.is_dark());
    }

    /// Flip the current theme, persist it and apply it.
    pub fn toggle(&self) -> Theme {
        let current = if self.surface.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        };
        let next = current.inverse();
        if let Err(e) = self.store.save(next) {
            warn!(error = %e, %next, "Failed to persist theme preference");
        }
        self.apply(next);
        info!(%next, "Theme toggled");
        next
    }

    pub fn current(&self) -> Theme {
        if self.surface.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }
}
