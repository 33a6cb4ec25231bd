use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use envault::backend::{AddProjectArgs, Backend, LocalBackend};
use envault::config::Config;
use envault::logger::Logger;
use envault::storage::{LocalStorage, MemoryStore};
use envault::ui::core::{DialogType, EventType, FocusManager, FocusZone, ListenerSlot};
use envault::ui::{AppComponent, AppServices};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct Fixture {
    root: PathBuf,
    project_dir: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let root = std::env::temp_dir().join(format!("envault-app-{}", uuid::Uuid::new_v4()));
        let project_dir = root.join("webapp");
        std::fs::create_dir_all(&project_dir).unwrap();
        std::fs::write(project_dir.join(".env"), "MODE=local\n").unwrap();
        std::fs::write(project_dir.join(".env.dev"), "# dev\nMODE=dev\n").unwrap();
        Self { root, project_dir }
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

async fn app_with_project(fixture: &Fixture, slot: &ListenerSlot) -> AppComponent {
    let backend = LocalBackend::new(LocalStorage::in_memory().await.unwrap());
    backend
        .add_project(AddProjectArgs {
            path: fixture.project_dir.to_string_lossy().to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let services = AppServices {
        backend: Arc::new(backend),
        store: Arc::new(MemoryStore::new()),
        logger: Logger::new(),
    };
    let mut app = AppComponent::new(services, &Config::default(), slot).unwrap();
    app.start();
    settle(&mut app).await;
    app
}

/// Apply background results until no task is left running
async fn settle(app: &mut AppComponent) {
    for _ in 0..400 {
        let actions = app.process_background_actions();
        let idle = actions.is_empty() && app.active_task_count() == 0;
        for action in actions {
            app.handle_app_action(action);
        }
        app.sync_state(Instant::now());
        if idle {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("background tasks did not settle");
}

fn key(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

#[tokio::test]
async fn test_browse_and_activate_environment() {
    let fixture = Fixture::new();
    let slot = ListenerSlot::new();
    let mut app = app_with_project(&fixture, &slot).await;
    assert_eq!(app.projects().len(), 1);
    assert_eq!(app.projects().selected_id(), None);

    // Select the project from the sidebar
    key(&mut app, KeyCode::Enter);
    settle(&mut app).await;
    let project_id = app.projects().selected_id().unwrap();
    assert_eq!(app.env_files().project_id(), Some(project_id));
    let names: Vec<&str> = app.env_files().env_files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec![".env", ".env.dev"]);

    // Open .env.dev in the viewer
    key(&mut app, KeyCode::Tab);
    assert_eq!(app.focus().active_zone(), FocusZone::EnvList);
    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Enter);
    settle(&mut app).await;
    assert_eq!(app.env_files().content(), Some("# dev\nMODE=dev\n"));

    // Activate it
    key(&mut app, KeyCode::Char('a'));
    settle(&mut app).await;
    assert_eq!(
        app.projects().selected().unwrap().active_environment.as_deref(),
        Some(".env.dev")
    );
    assert!(app.env_files().get(1).unwrap().is_active);
    assert!(!app.env_files().get(0).unwrap().is_active);
    assert_eq!(
        std::fs::read_to_string(fixture.project_dir.join(".env")).unwrap(),
        "# dev\nMODE=dev\n"
    );
    assert_eq!(
        std::fs::read_to_string(fixture.project_dir.join(".env.backup")).unwrap(),
        "MODE=local\n"
    );
}

#[tokio::test]
async fn test_primary_env_cannot_be_activated() {
    let fixture = Fixture::new();
    let slot = ListenerSlot::new();
    let mut app = app_with_project(&fixture, &slot).await;

    key(&mut app, KeyCode::Enter);
    settle(&mut app).await;
    key(&mut app, KeyCode::Tab);
    key(&mut app, KeyCode::Char('a'));
    settle(&mut app).await;

    assert!(app.projects().selected().unwrap().active_environment.is_none());
    assert!(!fixture.project_dir.join(".env.backup").exists());
}

#[tokio::test]
async fn test_app_holds_listener_slot() {
    let fixture = Fixture::new();
    let slot = ListenerSlot::new();
    let app = app_with_project(&fixture, &slot).await;

    assert!(slot.is_held());
    assert!(FocusManager::attach(&slot).is_err());
    drop(app);
    assert!(!slot.is_held());
}

#[tokio::test]
async fn test_dialog_captures_keys() {
    let fixture = Fixture::new();
    let slot = ListenerSlot::new();
    let mut app = app_with_project(&fixture, &slot).await;

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)));
    assert_eq!(app.dialog(), Some(&DialogType::ProjectAdd));
    assert!(!app.focus().is_enabled());

    // Navigation keys go to the dialog, not the sidebar
    key(&mut app, KeyCode::Tab);
    assert_eq!(app.focus().active_zone(), FocusZone::Sidebar);

    // Submitting an empty path keeps the dialog open
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.dialog(), Some(&DialogType::ProjectAdd));

    key(&mut app, KeyCode::Esc);
    assert_eq!(app.dialog(), None);
    assert!(app.focus().is_enabled());
}

#[tokio::test]
async fn test_add_project_through_dialog() {
    let fixture = Fixture::new();
    let slot = ListenerSlot::new();
    let mut app = app_with_project(&fixture, &slot).await;

    let second = fixture.root.join("backend");
    std::fs::create_dir_all(&second).unwrap();

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)));
    for c in second.to_string_lossy().chars() {
        key(&mut app, KeyCode::Char(c));
    }
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.dialog(), None);
    settle(&mut app).await;

    assert_eq!(app.projects().len(), 2);
    let newest = app.projects().get(0).unwrap();
    assert_eq!(newest.name, "backend");
    assert_eq!(app.projects().selected_id(), Some(newest.id));
    assert_eq!(app.focus().sidebar_index(), 0);
}

#[tokio::test]
async fn test_toggle_sidebar_and_help() {
    let fixture = Fixture::new();
    let slot = ListenerSlot::new();
    let mut app = app_with_project(&fixture, &slot).await;
    assert!(!app.is_sidebar_collapsed());

    app.handle_event(EventType::Key(KeyEvent::new(
        KeyCode::Char('S'),
        KeyModifiers::CONTROL | KeyModifiers::SHIFT,
    )));
    assert!(app.is_sidebar_collapsed());

    key(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog(), Some(&DialogType::Help));
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.dialog(), None);

    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_collapsed_sidebar_navigation_mounts_flyout() {
    let fixture = Fixture::new();
    let slot = ListenerSlot::new();
    let mut app = app_with_project(&fixture, &slot).await;

    app.handle_event(EventType::Key(KeyEvent::new(
        KeyCode::Char('S'),
        KeyModifiers::CONTROL | KeyModifiers::SHIFT,
    )));
    key(&mut app, KeyCode::Down);
    assert!(app.flyout().is_mounted());

    // Choosing the project hides it right away
    key(&mut app, KeyCode::Enter);
    assert!(!app.flyout().is_visible());
    settle(&mut app).await;
}

#[tokio::test]
async fn test_legacy_terminal_chords_reach_sidebar_and_settings() {
    let fixture = Fixture::new();
    let slot = ListenerSlot::new();
    let mut app = app_with_project(&fixture, &slot).await;

    // Ctrl+Shift+S as sent by a terminal that cannot report SHIFT
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
    assert!(app.is_sidebar_collapsed());

    // Ctrl+, arrives as a bare comma
    key(&mut app, KeyCode::Char(','));
    assert_eq!(app.dialog(), Some(&DialogType::Settings));
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.dialog(), None);
}

#[tokio::test]
async fn test_enhanced_terminal_requires_exact_chords() {
    let fixture = Fixture::new();
    let slot = ListenerSlot::new();
    let mut app = app_with_project(&fixture, &slot).await;
    app.set_keyboard_enhanced(true);

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
    assert!(!app.is_sidebar_collapsed());
    key(&mut app, KeyCode::Char(','));
    assert_eq!(app.dialog(), None);

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char(','), KeyModifiers::CONTROL)));
    assert_eq!(app.dialog(), Some(&DialogType::Settings));
}
