//! User preferences and color theme persisted in the key/value store.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::constants::{STORAGE_KEY_PREFERENCES, STORAGE_KEY_THEME};
use crate::storage::kv::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub toasts_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { toasts_enabled: true }
    }
}

/// Loads preferences once and writes every change straight back
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
    preferences: Preferences,
}

impl PreferenceStore {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let preferences = store
            .get(STORAGE_KEY_PREFERENCES)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { store, preferences }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn toasts_enabled(&self) -> bool {
        self.preferences.toasts_enabled
    }

    pub fn set_toasts_enabled(&mut self, enabled: bool) {
        self.preferences.toasts_enabled = enabled;
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(&self.preferences) {
            Ok(json) => {
                if let Err(e) = self.store.set(STORAGE_KEY_PREFERENCES, &json) {
                    log::warn!("Failed to persist preferences: {:#}", e);
                }
            }
            Err(e) => log::warn!("Failed to serialize preferences: {}", e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Theme after `System` has been resolved against the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().trim_matches('"') {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    pub fn resolve(self) -> ResolvedTheme {
        self.resolve_with(std::env::var("COLORFGBG").ok().as_deref())
    }

    /// Resolve using an explicit `COLORFGBG` value (`"fg;bg"`)
    pub fn resolve_with(self, colorfgbg: Option<&str>) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System => {
                let background = colorfgbg
                    .and_then(|value| value.rsplit(';').next())
                    .and_then(|bg| bg.trim().parse::<u8>().ok());
                match background {
                    Some(7) | Some(15) => ResolvedTheme::Light,
                    _ => ResolvedTheme::Dark,
                }
            }
        }
    }
}

/// Selected theme, stored as its bare name under the `theme` key
pub struct ThemeStore {
    store: Arc<dyn KeyValueStore>,
    theme: Theme,
}

impl ThemeStore {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let theme = store
            .get(STORAGE_KEY_THEME)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self { store, theme }
    }

    pub fn get(&self) -> Theme {
        self.theme
    }

    pub fn resolved(&self) -> ResolvedTheme {
        self.theme.resolve()
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.store.set(STORAGE_KEY_THEME, theme.as_str()) {
            log::warn!("Failed to persist theme: {:#}", e);
        }
    }

    /// Light -> Dark -> System -> Light
    pub fn cycle(&mut self) -> Theme {
        let next = self.theme.next();
        self.set(next);
        next
    }
}
