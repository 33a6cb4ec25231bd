//! Keyboard shortcut registry
//!
//! Built-in chords can be overridden by the user. Overrides are stored as a JSON
//! map under [`STORAGE_KEY_SHORTCUTS`] and merged over the defaults on load, so
//! shortcuts added in newer versions always show up.
//!
//! Each stored entry is merged field by field over its default. An entry that
//! fails to parse is skipped on its own and the rest still apply.
//!
//! Chords are not checked for collisions. When two shortcuts share a chord,
//! [`ShortcutRegistry::find_match`] returns the first one in id order.
//!
//! Terminals without the keyboard enhancement protocol cannot report SHIFT on
//! Ctrl+letter, and they send Ctrl+punctuation as the bare key. Unless the
//! registry is told the terminal is enhanced, chords that cannot be delivered
//! are also matched in the form the terminal actually sends.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::constants::STORAGE_KEY_SHORTCUTS;
use crate::storage::kv::KeyValueStore;

pub const OPEN_SETTINGS: &str = "openSettings";
pub const TOGGLE_SIDEBAR: &str = "toggleSidebar";
pub const ADD_PROJECT: &str = "addProject";
pub const TOGGLE_THEME: &str = "toggleTheme";
pub const SHOW_HELP: &str = "showHelp";
pub const QUIT: &str = "quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutCategory {
    Global,
    Navigation,
    Sidebar,
}

impl ShortcutCategory {
    pub fn label(self) -> &'static str {
        match self {
            ShortcutCategory::Global => "Global",
            ShortcutCategory::Navigation => "Navigation",
            ShortcutCategory::Sidebar => "Sidebar",
        }
    }
}

/// Host platform, decides how the primary modifier is matched and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Apple,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Apple
        } else {
            Platform::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub meta_key: bool,
    #[serde(default)]
    pub shift_key: bool,
    #[serde(default)]
    pub alt_key: bool,
    pub description: String,
    pub category: ShortcutCategory,
}

/// Partial change applied by [`ShortcutRegistry::update`], also the shape of a
/// stored override entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutUpdate {
    pub key: Option<String>,
    pub ctrl_key: Option<bool>,
    pub meta_key: Option<bool>,
    pub shift_key: Option<bool>,
    pub alt_key: Option<bool>,
}

impl Shortcut {
    fn new(id: &str, key: &str, description: &str, category: ShortcutCategory) -> Self {
        Self {
            id: id.to_string(),
            key: key.to_string(),
            ctrl_key: false,
            meta_key: false,
            shift_key: false,
            alt_key: false,
            description: description.to_string(),
            category,
        }
    }

    fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// Ctrl and meta collapse into a single primary modifier
    pub fn uses_primary(&self) -> bool {
        self.ctrl_key || self.meta_key
    }

    fn apply(&mut self, update: &ShortcutUpdate) {
        if let Some(key) = &update.key {
            self.key = key.clone();
        }
        if let Some(ctrl) = update.ctrl_key {
            self.ctrl_key = ctrl;
        }
        if let Some(meta) = update.meta_key {
            self.meta_key = meta;
        }
        if let Some(shift) = update.shift_key {
            self.shift_key = shift;
        }
        if let Some(alt) = update.alt_key {
            self.alt_key = alt;
        }
    }

    /// Check whether a terminal key event triggers this shortcut
    ///
    /// The primary modifier is SUPER on Apple and CONTROL elsewhere. CONTROL is
    /// also accepted on Apple because most terminals never forward ⌘. Letters
    /// compare case-insensitively and an uppercase letter counts as shifted.
    /// Punctuation ignores SHIFT since terminals report it inconsistently.
    pub fn matches(&self, event: &KeyEvent, platform: Platform) -> bool {
        let Some(pressed) = key_name(event.code) else {
            return false;
        };
        if !pressed.eq_ignore_ascii_case(&self.key) {
            return false;
        }

        let mods = event.modifiers;
        let primary_held = match platform {
            Platform::Apple => mods.intersects(KeyModifiers::SUPER | KeyModifiers::CONTROL),
            Platform::Other => mods.contains(KeyModifiers::CONTROL),
        };
        if primary_held != self.uses_primary() {
            return false;
        }

        if mods.contains(KeyModifiers::ALT) != self.alt_key {
            return false;
        }

        let is_letter = matches!(event.code, KeyCode::Char(c) if c.is_alphabetic());
        if is_letter {
            let shifted = mods.contains(KeyModifiers::SHIFT)
                || matches!(event.code, KeyCode::Char(c) if c.is_uppercase());
            shifted == self.shift_key
        } else if self.shift_key {
            mods.contains(KeyModifiers::SHIFT)
        } else {
            true
        }
    }

    /// The chord as a legacy terminal delivers it, if that differs
    ///
    /// Ctrl+Shift+letter arrives without SHIFT and Ctrl+punctuation arrives as
    /// the bare key.
    fn legacy_form(&self) -> Option<Shortcut> {
        if !self.uses_primary() || self.alt_key {
            return None;
        }
        let mut chars = self.key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };

        if c.is_alphabetic() {
            self.shift_key.then(|| Shortcut {
                shift_key: false,
                ..self.clone()
            })
        } else if c.is_ascii_punctuation() {
            Some(Shortcut {
                ctrl_key: false,
                meta_key: false,
                ..self.clone()
            })
        } else {
            None
        }
    }
}

fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(c) => return Some(c.to_string()),
        KeyCode::Esc => "Escape",
        KeyCode::Enter => "Enter",
        KeyCode::Tab => "Tab",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::F(n) => return Some(format!("F{}", n)),
        _ => return None,
    };
    Some(name.to_string())
}

/// Built-in shortcuts keyed by id
pub fn default_shortcuts() -> BTreeMap<String, Shortcut> {
    [
        Shortcut::new(OPEN_SETTINGS, ",", "Open Settings", ShortcutCategory::Global).with_meta(),
        Shortcut::new(TOGGLE_SIDEBAR, "s", "Toggle Sidebar", ShortcutCategory::Sidebar)
            .with_meta()
            .with_shift(),
        Shortcut::new(ADD_PROJECT, "n", "Add Project", ShortcutCategory::Global).with_meta(),
        Shortcut::new(TOGGLE_THEME, "t", "Toggle Theme", ShortcutCategory::Global)
            .with_meta()
            .with_shift(),
        Shortcut::new(SHOW_HELP, "?", "Show Help", ShortcutCategory::Global),
        Shortcut::new(QUIT, "q", "Quit", ShortcutCategory::Global),
    ]
    .into_iter()
    .map(|shortcut| (shortcut.id.clone(), shortcut))
    .collect()
}

/// Display tokens for a shortcut, e.g. `["Ctrl", "Shift", "S"]`
pub fn format(shortcut: &Shortcut, platform: Platform) -> Vec<String> {
    let apple = platform == Platform::Apple;
    let mut keys = Vec::new();

    if shortcut.uses_primary() {
        keys.push(if apple { "⌘" } else { "Ctrl" }.to_string());
    }
    if shortcut.shift_key {
        keys.push(if apple { "⇧" } else { "Shift" }.to_string());
    }
    if shortcut.alt_key {
        keys.push(if apple { "⌥" } else { "Alt" }.to_string());
    }

    let display_key = match shortcut.key.as_str() {
        "," | "." => shortcut.key.clone(),
        "Escape" => "Esc".to_string(),
        other => other.to_uppercase(),
    };
    keys.push(display_key);
    keys
}

/// Shortcut table merged from defaults and persisted overrides
pub struct ShortcutRegistry {
    store: Arc<dyn KeyValueStore>,
    shortcuts: BTreeMap<String, Shortcut>,
    keyboard_enhanced: bool,
}

impl ShortcutRegistry {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let shortcuts = Self::load(store.as_ref());
        Self {
            store,
            shortcuts,
            keyboard_enhanced: false,
        }
    }

    /// Whether the terminal reports full modifiers; disables legacy matching
    pub fn set_keyboard_enhanced(&mut self, enhanced: bool) {
        self.keyboard_enhanced = enhanced;
    }

    fn load(store: &dyn KeyValueStore) -> BTreeMap<String, Shortcut> {
        let mut shortcuts = default_shortcuts();
        let Some(raw) = store.get(STORAGE_KEY_SHORTCUTS) else {
            return shortcuts;
        };
        let overrides = match serde_json::from_str::<BTreeMap<String, serde_json::Value>>(&raw) {
            Ok(overrides) => overrides,
            Err(e) => {
                log::warn!("Ignoring stored shortcuts: {}", e);
                return shortcuts;
            }
        };

        for (id, value) in overrides {
            let Some(shortcut) = shortcuts.get_mut(&id) else {
                continue;
            };
            match serde_json::from_value::<ShortcutUpdate>(value) {
                Ok(update) => shortcut.apply(&update),
                Err(e) => log::warn!("Ignoring stored shortcut {}: {}", id, e),
            }
        }
        shortcuts
    }

    /// Current shortcuts keyed by id
    pub fn get(&self) -> &BTreeMap<String, Shortcut> {
        &self.shortcuts
    }

    pub fn shortcut(&self, id: &str) -> Option<&Shortcut> {
        self.shortcuts.get(id)
    }

    /// Re-read overrides from the store
    pub fn reload(&mut self) {
        self.shortcuts = Self::load(self.store.as_ref());
    }

    /// Persist a full shortcut map
    pub fn save(&mut self, shortcuts: BTreeMap<String, Shortcut>) {
        match serde_json::to_string(&shortcuts) {
            Ok(json) => {
                if let Err(e) = self.store.set(STORAGE_KEY_SHORTCUTS, &json) {
                    log::warn!("Failed to persist shortcuts: {:#}", e);
                }
            }
            Err(e) => log::warn!("Failed to serialize shortcuts: {}", e),
        }
        self.reload();
    }

    /// Change a single shortcut; unknown ids are ignored
    pub fn update(&mut self, id: &str, update: ShortcutUpdate) {
        let mut shortcuts = self.shortcuts.clone();
        let Some(shortcut) = shortcuts.get_mut(id) else {
            return;
        };
        shortcut.apply(&update);
        self.save(shortcuts);
    }

    /// Drop all overrides
    pub fn reset(&mut self) {
        if let Err(e) = self.store.remove(STORAGE_KEY_SHORTCUTS) {
            log::warn!("Failed to reset shortcuts: {:#}", e);
        }
        self.shortcuts = default_shortcuts();
    }

    /// Shortcuts grouped by category, ids sorted within each group
    pub fn by_category(&self) -> BTreeMap<ShortcutCategory, Vec<Shortcut>> {
        let mut grouped: BTreeMap<ShortcutCategory, Vec<Shortcut>> = BTreeMap::new();
        for shortcut in self.shortcuts.values() {
            grouped.entry(shortcut.category).or_default().push(shortcut.clone());
        }
        grouped
    }

    /// Id of the first shortcut (in id order) triggered by this key
    ///
    /// Exact chords win over legacy forms, so a plain binding is never shadowed
    /// by another shortcut's fallback.
    pub fn find_match(&self, event: &KeyEvent, platform: Platform) -> Option<&str> {
        let exact = self.shortcuts.values().find(|shortcut| shortcut.matches(event, platform));
        if exact.is_some() || self.keyboard_enhanced {
            return exact.map(|shortcut| shortcut.id.as_str());
        }

        self.shortcuts
            .values()
            .find(|shortcut| {
                shortcut
                    .legacy_form()
                    .is_some_and(|legacy| legacy.matches(event, platform))
            })
            .map(|shortcut| shortcut.id.as_str())
    }

    /// Display string such as `Ctrl+,` for a shortcut id
    pub fn display(&self, id: &str, platform: Platform) -> String {
        self.shortcuts
            .get(id)
            .map(|shortcut| {
                let separator = if platform == Platform::Apple { "" } else { "+" };
                format(shortcut, platform).join(separator)
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MemoryStore;

    fn registry() -> ShortcutRegistry {
        ShortcutRegistry::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_format_open_settings_on_linux() {
        let registry = registry();
        let shortcut = registry.shortcut(OPEN_SETTINGS).unwrap();
        assert_eq!(format(shortcut, Platform::Other), vec!["Ctrl", ","]);
        assert_eq!(format(shortcut, Platform::Apple), vec!["⌘", ","]);
    }

    #[test]
    fn test_format_toggle_sidebar() {
        let registry = registry();
        let shortcut = registry.shortcut(TOGGLE_SIDEBAR).unwrap();
        assert_eq!(format(shortcut, Platform::Other), vec!["Ctrl", "Shift", "S"]);
        assert_eq!(format(shortcut, Platform::Apple), vec!["⌘", "⇧", "S"]);
    }

    #[test]
    fn test_format_escape_key() {
        let shortcut = Shortcut::new("close", "Escape", "Close", ShortcutCategory::Navigation);
        assert_eq!(format(&shortcut, Platform::Other), vec!["Esc"]);
    }

    #[test]
    fn test_primary_modifier_resolution() {
        let registry = registry();
        let shortcut = registry.shortcut(ADD_PROJECT).unwrap();
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        let super_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::SUPER);
        let plain_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);

        assert!(shortcut.matches(&ctrl_n, Platform::Other));
        assert!(!shortcut.matches(&super_n, Platform::Other));
        assert!(shortcut.matches(&super_n, Platform::Apple));
        assert!(shortcut.matches(&ctrl_n, Platform::Apple));
        assert!(!shortcut.matches(&plain_n, Platform::Other));
    }

    #[test]
    fn test_shift_must_match_for_letters() {
        let registry = registry();
        let shortcut = registry.shortcut(TOGGLE_SIDEBAR).unwrap();
        let ctrl_shift_s = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert!(shortcut.matches(&ctrl_shift_s, Platform::Other));
        assert!(!shortcut.matches(&ctrl_s, Platform::Other));
    }

    #[test]
    fn test_legacy_forms() {
        let registry = registry();
        let sidebar = registry.shortcut(TOGGLE_SIDEBAR).unwrap().legacy_form().unwrap();
        assert!(!sidebar.shift_key && sidebar.meta_key);

        let settings = registry.shortcut(OPEN_SETTINGS).unwrap().legacy_form().unwrap();
        assert!(!settings.uses_primary());

        assert!(registry.shortcut(ADD_PROJECT).unwrap().legacy_form().is_none());
        assert!(registry.shortcut(QUIT).unwrap().legacy_form().is_none());
    }

    #[test]
    fn test_question_mark_ignores_reported_shift() {
        let registry = registry();
        let help = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(registry.find_match(&help, Platform::Other), Some(SHOW_HELP));
    }

    #[test]
    fn test_by_category_groups_and_sorts() {
        let registry = registry();
        let grouped = registry.by_category();
        let global: Vec<&str> = grouped[&ShortcutCategory::Global].iter().map(|s| s.id.as_str()).collect();
        assert_eq!(global, vec![ADD_PROJECT, OPEN_SETTINGS, QUIT, SHOW_HELP, TOGGLE_THEME]);
        assert_eq!(grouped[&ShortcutCategory::Sidebar].len(), 1);
        assert!(!grouped.contains_key(&ShortcutCategory::Navigation));
    }
}
