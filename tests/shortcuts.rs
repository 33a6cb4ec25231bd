use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use envault::shortcuts::{self, Platform, ShortcutRegistry, ShortcutUpdate};
use envault::storage::{KeyValueStore, MemoryStore};
use std::sync::Arc;

fn store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

#[test]
fn test_defaults_without_overrides() {
    let registry = ShortcutRegistry::new(store());
    assert_eq!(registry.get().len(), 6);
    assert_eq!(registry.shortcut(shortcuts::QUIT).unwrap().key, "q");
    assert_eq!(registry.display(shortcuts::OPEN_SETTINGS, Platform::Other), "Ctrl+,");
    assert_eq!(registry.display(shortcuts::OPEN_SETTINGS, Platform::Apple), "⌘,");
}

#[test]
fn test_override_persists_and_reloads() {
    let store = store();
    let mut registry = ShortcutRegistry::new(store.clone());
    let before = registry.shortcut(shortcuts::ADD_PROJECT).unwrap().clone();

    registry.update(
        shortcuts::ADD_PROJECT,
        ShortcutUpdate {
            key: Some("m".to_string()),
            ..Default::default()
        },
    );

    let reloaded = ShortcutRegistry::new(store);
    let after = reloaded.shortcut(shortcuts::ADD_PROJECT).unwrap();
    assert_eq!(after.key, "m");
    assert_eq!(after.meta_key, before.meta_key);
    assert_eq!(after.ctrl_key, before.ctrl_key);
    assert_eq!(after.shift_key, before.shift_key);
    assert_eq!(after.description, before.description);
    assert_eq!(after.category, before.category);

    let ctrl_m = KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL);
    assert_eq!(reloaded.find_match(&ctrl_m, Platform::Other), Some(shortcuts::ADD_PROJECT));

    let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
    assert_eq!(reloaded.find_match(&ctrl_n, Platform::Other), None);
}

#[test]
fn test_unknown_id_is_ignored() {
    let store = store();
    let mut registry = ShortcutRegistry::new(store.clone());
    registry.update(
        "doesNotExist",
        ShortcutUpdate {
            key: Some("z".to_string()),
            ..Default::default()
        },
    );
    assert!(registry.shortcut("doesNotExist").is_none());
    assert!(store.get("envault-shortcuts").is_none());
}

#[test]
fn test_stored_unknown_ids_are_dropped_on_load() {
    let store = store();
    store
        .set(
            "envault-shortcuts",
            r#"{"legacy":{"id":"legacy","key":"x","description":"Old","category":"global"}}"#,
        )
        .unwrap();
    let registry = ShortcutRegistry::new(store);
    assert!(registry.shortcut("legacy").is_none());
    assert_eq!(registry.get().len(), 6);
}

#[test]
fn test_corrupt_overrides_fall_back_to_defaults() {
    let store = store();
    store.set("envault-shortcuts", "{not json").unwrap();
    let registry = ShortcutRegistry::new(store);
    assert_eq!(registry.shortcut(shortcuts::ADD_PROJECT).unwrap().key, "n");
}

#[test]
fn test_reset_restores_defaults() {
    let store = store();
    let mut registry = ShortcutRegistry::new(store.clone());
    registry.update(
        shortcuts::QUIT,
        ShortcutUpdate {
            key: Some("x".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(registry.shortcut(shortcuts::QUIT).unwrap().key, "x");

    registry.reset();
    assert_eq!(registry.shortcut(shortcuts::QUIT).unwrap().key, "q");
    assert!(store.get("envault-shortcuts").is_none());
}

#[test]
fn test_collision_resolves_to_first_id() {
    let mut registry = ShortcutRegistry::new(store());
    // Rebind quit onto addProject's chord
    registry.update(
        shortcuts::QUIT,
        ShortcutUpdate {
            key: Some("n".to_string()),
            ctrl_key: Some(true),
            ..Default::default()
        },
    );

    let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
    assert_eq!(registry.find_match(&ctrl_n, Platform::Other), Some(shortcuts::ADD_PROJECT));
}

#[test]
fn test_legacy_terminal_chords_match() {
    let registry = ShortcutRegistry::new(store());
    let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
    let comma = KeyEvent::new(KeyCode::Char(','), KeyModifiers::NONE);

    assert_eq!(registry.find_match(&ctrl_s, Platform::Other), Some(shortcuts::TOGGLE_SIDEBAR));
    assert_eq!(registry.find_match(&ctrl_t, Platform::Other), Some(shortcuts::TOGGLE_THEME));
    assert_eq!(registry.find_match(&comma, Platform::Other), Some(shortcuts::OPEN_SETTINGS));
}

#[test]
fn test_enhanced_terminal_matches_exactly() {
    let mut registry = ShortcutRegistry::new(store());
    registry.set_keyboard_enhanced(true);
    let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    let ctrl_shift_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    let comma = KeyEvent::new(KeyCode::Char(','), KeyModifiers::NONE);
    let ctrl_comma = KeyEvent::new(KeyCode::Char(','), KeyModifiers::CONTROL);

    assert_eq!(registry.find_match(&ctrl_s, Platform::Other), None);
    assert_eq!(registry.find_match(&comma, Platform::Other), None);
    assert_eq!(registry.find_match(&ctrl_shift_s, Platform::Other), Some(shortcuts::TOGGLE_SIDEBAR));
    assert_eq!(registry.find_match(&ctrl_comma, Platform::Other), Some(shortcuts::OPEN_SETTINGS));
}

#[test]
fn test_exact_binding_beats_legacy_form() {
    let mut registry = ShortcutRegistry::new(store());
    // Plain "," now belongs to help; openSettings keeps Ctrl+,
    registry.update(
        shortcuts::SHOW_HELP,
        ShortcutUpdate {
            key: Some(",".to_string()),
            ..Default::default()
        },
    );
    let comma = KeyEvent::new(KeyCode::Char(','), KeyModifiers::NONE);
    assert_eq!(registry.find_match(&comma, Platform::Other), Some(shortcuts::SHOW_HELP));
}

#[test]
fn test_partial_override_merges_over_default() {
    let store = store();
    store
        .set(
            "envault-shortcuts",
            r#"{
                "addProject": {"key": "m", "metaKey": true},
                "openSettings": {"id": "openSettings", "key": "p", "ctrlKey": true, "metaKey": false,
                                 "shiftKey": false, "altKey": false, "description": "Open Settings",
                                 "category": "global"}
            }"#,
        )
        .unwrap();
    let registry = ShortcutRegistry::new(store);

    let add = registry.shortcut(shortcuts::ADD_PROJECT).unwrap();
    assert_eq!(add.key, "m");
    assert!(add.meta_key);
    assert_eq!(add.description, "Add Project");

    let settings = registry.shortcut(shortcuts::OPEN_SETTINGS).unwrap();
    assert_eq!(settings.key, "p");
    assert!(settings.ctrl_key);
    assert!(!settings.meta_key);
}

#[test]
fn test_malformed_entry_only_drops_itself() {
    let store = store();
    store
        .set(
            "envault-shortcuts",
            r#"{"addProject": {"key": 5}, "quit": {"key": "x"}}"#,
        )
        .unwrap();
    let registry = ShortcutRegistry::new(store);
    assert_eq!(registry.shortcut(shortcuts::ADD_PROJECT).unwrap().key, "n");
    assert_eq!(registry.shortcut(shortcuts::QUIT).unwrap().key, "x");
}

#[test]
fn test_clearing_a_default_modifier_survives_reload() {
    let store = store();
    let mut registry = ShortcutRegistry::new(store.clone());
    registry.update(
        shortcuts::ADD_PROJECT,
        ShortcutUpdate {
            key: Some("a".to_string()),
            meta_key: Some(false),
            ..Default::default()
        },
    );

    let reloaded = ShortcutRegistry::new(store);
    assert!(!reloaded.shortcut(shortcuts::ADD_PROJECT).unwrap().uses_primary());
}
