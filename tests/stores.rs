use envault::backend::{EnvFile, Project};
use envault::ui::core::{EnvFileStore, ProjectStore};
use std::time::{Duration, Instant};

fn project(id: i64, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        path: format!("/work/{}", name),
        icon: "folder".to_string(),
        icon_color: "#737373".to_string(),
        active_environment: None,
        created_at: "2024-01-01 00:00:00".to_string(),
        updated_at: "2024-01-01 00:00:00".to_string(),
    }
}

fn env_file(name: &str, active: bool) -> EnvFile {
    EnvFile {
        name: name.to_string(),
        path: format!("/work/app/{}", name),
        is_active: active,
        modified_at: None,
    }
}

#[test]
fn test_stale_read_is_discarded() {
    let mut store = EnvFileStore::default();
    let seq = store.begin_scan(1);
    store.apply_scanned(1, seq, Ok(vec![env_file(".env", false), env_file(".env.dev", false)]));

    store.begin_read("/work/app/.env");
    store.begin_read("/work/app/.env.dev");

    // The first read resolves after the user moved on
    assert!(!store.apply_read("/work/app/.env", Ok("OLD=1".to_string())));
    assert_eq!(store.content(), None);
    assert!(store.is_loading_content());

    assert!(store.apply_read("/work/app/.env.dev", Ok("NEW=1".to_string())));
    assert_eq!(store.content(), Some("NEW=1"));
    assert!(!store.is_loading_content());
}

#[test]
fn test_stale_scan_is_discarded() {
    let mut store = EnvFileStore::default();
    let first = store.begin_scan(1);
    let second = store.begin_scan(2);

    assert!(!store.apply_scanned(1, first, Ok(vec![env_file(".env", false)])));
    assert!(store.is_empty());
    assert!(store.is_loading());

    assert!(store.apply_scanned(2, second, Ok(vec![env_file(".env.local", false)])));
    assert_eq!(store.len(), 1);
    assert!(!store.is_loading());
}

#[test]
fn test_scan_error_is_recorded() {
    let mut store = EnvFileStore::default();
    let seq = store.begin_scan(1);
    store.apply_scanned(1, seq, Err("permission denied".to_string()));
    assert_eq!(store.error(), Some("permission denied"));
    assert!(store.is_empty());

    store.clear_error();
    assert_eq!(store.error(), None);
}

#[test]
fn test_refresh_indicator_has_floor() {
    let mut store = EnvFileStore::new(Duration::from_millis(500));
    let t0 = Instant::now();
    assert!(!store.is_refreshing(t0));

    let seq = store.begin_scan(1);
    store.apply_scanned(1, seq, Ok(vec![]));
    let seq = store.begin_refresh(t0);
    assert!(store.is_refreshing(t0));

    // A fast rescan still keeps the indicator for the full floor
    store.apply_scanned(1, seq, Ok(vec![env_file(".env", false)]));
    store.apply_refresh_done();
    assert!(store.is_refreshing(t0 + Duration::from_millis(100)));
    assert!(!store.is_refreshing(t0 + Duration::from_millis(500)));
}

#[test]
fn test_slow_refresh_outlasts_floor() {
    let mut store = EnvFileStore::new(Duration::from_millis(500));
    let t0 = Instant::now();
    let seq = store.begin_scan(1);
    store.apply_scanned(1, seq, Ok(vec![]));
    store.begin_refresh(t0);

    assert!(store.is_refreshing(t0 + Duration::from_secs(2)));
    store.apply_refresh_done();
    assert!(!store.is_refreshing(t0 + Duration::from_secs(2)));
}

#[test]
fn test_rescan_same_project_keeps_list_until_result() {
    let mut store = EnvFileStore::default();
    let seq = store.begin_scan(1);
    store.apply_scanned(1, seq, Ok(vec![env_file(".env", false)]));
    store.begin_read("/work/app/.env");

    store.begin_scan(1);
    assert_eq!(store.len(), 1);
    assert_eq!(store.selected_path(), None);
    assert_eq!(store.content(), None);
}

#[test]
fn test_activation_marks_exactly_one_file() {
    let mut store = EnvFileStore::default();
    let seq = store.begin_scan(1);
    store.apply_scanned(
        1,
        seq,
        Ok(vec![
            env_file(".env", false),
            env_file(".env.dev", true),
            env_file(".env.prod", false),
        ]),
    );

    store.apply_activated(".env.prod");
    let active: Vec<&str> = store
        .env_files()
        .iter()
        .filter(|f| f.is_active)
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(active, vec![".env.prod"]);
}

#[test]
fn test_project_store_add_prepends() {
    let mut store = ProjectStore::new();
    store.apply_loaded(Ok(vec![project(1, "a"), project(2, "b")]));
    store.apply_added(project(3, "c"));

    let ids: Vec<i64> = store.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_project_store_failed_load_keeps_list() {
    let mut store = ProjectStore::new();
    store.apply_loaded(Ok(vec![project(1, "a")]));
    store.begin_load();
    assert!(store.is_loading());

    store.apply_loaded(Err("database locked".to_string()));
    assert!(!store.is_loading());
    assert_eq!(store.len(), 1);
    assert_eq!(store.error(), Some("database locked"));
}

#[test]
fn test_project_store_delete_clears_selection() {
    let mut store = ProjectStore::new();
    store.apply_loaded(Ok(vec![project(1, "a"), project(2, "b")]));
    store.select(Some(2));
    assert_eq!(store.selected().map(|p| p.name.as_str()), Some("b"));

    store.apply_deleted(2);
    assert_eq!(store.selected_id(), None);
    assert_eq!(store.index_of(1), Some(0));
}

#[test]
fn test_project_store_update_and_active_environment() {
    let mut store = ProjectStore::new();
    store.apply_loaded(Ok(vec![project(1, "a")]));

    let mut renamed = project(1, "renamed");
    renamed.icon = "rocket".to_string();
    store.apply_updated(renamed);
    store.set_active_environment(1, ".env.dev");

    let p = store.find(1).unwrap();
    assert_eq!(p.name, "renamed");
    assert_eq!(p.icon, "rocket");
    assert_eq!(p.active_environment.as_deref(), Some(".env.dev"));
}

#[test]
fn test_refresh_started_before_activation_keeps_new_active_file() {
    let mut store = EnvFileStore::default();
    let t0 = Instant::now();
    let seq = store.begin_scan(1);
    store.apply_scanned(1, seq, Ok(vec![env_file(".env.dev", true), env_file(".env.prod", false)]));

    let refresh = store.begin_refresh(t0);
    store.apply_activated(".env.prod");

    // The rescan read the directory before the switch
    assert!(store.apply_scanned(1, refresh, Ok(vec![env_file(".env.dev", true), env_file(".env.prod", false)])));
    let active: Vec<&str> = store
        .env_files()
        .iter()
        .filter(|f| f.is_active)
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(active, vec![".env.prod"]);
}

#[test]
fn test_scan_after_activation_is_taken_as_is() {
    let mut store = EnvFileStore::default();
    let seq = store.begin_scan(1);
    store.apply_scanned(1, seq, Ok(vec![env_file(".env.dev", false), env_file(".env.prod", false)]));
    store.apply_activated(".env.prod");

    // A scan issued after the switch is the source of truth
    let refresh = store.begin_refresh(Instant::now());
    assert!(store.apply_scanned(1, refresh, Ok(vec![env_file(".env.dev", true), env_file(".env.prod", false)])));
    assert!(store.env_files()[0].is_active);
    assert!(!store.env_files()[1].is_active);
}

#[test]
fn test_older_scan_of_same_project_is_discarded() {
    let mut store = EnvFileStore::default();
    let seq = store.begin_scan(1);
    store.apply_scanned(1, seq, Ok(vec![env_file(".env", false)]));

    let older = store.begin_refresh(Instant::now());
    let newer = store.begin_refresh(Instant::now());

    assert!(store.apply_scanned(1, newer, Ok(vec![env_file(".env", false), env_file(".env.test", false)])));
    assert!(!store.apply_scanned(1, older, Ok(vec![env_file(".env", false)])));
    assert_eq!(store.len(), 2);
}
