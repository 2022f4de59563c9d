//! Theme preference and its derived visual state.
//!
//! The active theme is persisted under a single storage key and mirrored to
//! the page through hooks registered on `set_theme`: the `data-theme` root
//! attribute, the toggle icon, and the neon border suppression flag.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::hooks::EffectHooks;
use crate::util::storage::PreferenceStore;

/// Root attribute read by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Body class that disables the neon border effect.
pub const NO_NEON_CLASS: &str = "no-neon";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon shown on the toggle: the theme a click switches *to*.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-sun",
            Self::Light => "fas fa-moon",
        }
    }

    #[must_use]
    pub const fn suppresses_neon(self) -> bool {
        matches!(self, Self::Light)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the active theme, its persisted copy, and the hooks mirroring it.
pub struct ThemeController<S> {
    store: S,
    storage_key: String,
    fallback: Theme,
    active: Theme,
    effects: EffectHooks<Theme>,
}

impl<S: fmt::Debug> fmt::Debug for ThemeController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("store", &self.store)
            .field("storage_key", &self.storage_key)
            .field("active", &self.active)
            .field("effects", &self.effects)
            .finish_non_exhaustive()
    }
}

impl<S: PreferenceStore> ThemeController<S> {
    /// A controller that falls back to `fallback` when nothing is stored.
    pub fn new(store: S, storage_key: impl Into<String>, fallback: Theme) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
            fallback,
            active: fallback,
            effects: EffectHooks::new(),
        }
    }

    /// Register a hook that runs after every `set_theme`, in registration order.
    pub fn on_change(&mut self, hook: impl Fn(&Theme) + 'static) {
        self.effects.register(hook);
    }

    /// The persisted theme, if any. Unrecognized values count as absent.
    pub fn stored_theme(&self) -> Option<Theme> {
        let raw = self.store.read(&self.storage_key)?;
        let theme = Theme::parse(&raw);
        if theme.is_none() {
            log::debug!("ignoring stored theme {raw:?}");
        }
        theme
    }

    /// Apply the persisted theme, or the fallback when none is stored.
    pub fn init(&mut self) -> Theme {
        let theme = self.stored_theme().unwrap_or(self.fallback);
        self.set_theme(theme);
        theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if let Err(err) = self.store.write(&self.storage_key, theme.as_str()) {
            log::warn!("persisting theme {theme}: {err}");
        }
        self.active = theme;
        self.effects.run(&theme);
    }

    /// Switch to the opposite theme and return it.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.active.toggled();
        log::debug!("theme toggled to {next}");
        self.set_theme(next);
        next
    }

    #[must_use]
    pub fn active(&self) -> Theme {
        self.active
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
