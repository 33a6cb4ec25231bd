use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use envault::config::FlyoutConfig;
use envault::ui::core::{FlyoutController, FlyoutInputs, FlyoutTimings, FocusManager, FocusZone};
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

struct Harness {
    focus: FocusManager,
    flyout: FlyoutController,
    selected: Option<i64>,
    collapsed: bool,
    project_count: usize,
}

impl Harness {
    fn new(now: Instant) -> Self {
        let mut focus = FocusManager::new();
        focus.set_item_counts(3, 0);
        let mut harness = Self {
            focus,
            flyout: FlyoutController::new(FlyoutTimings::from(&FlyoutConfig::default())),
            selected: Some(10),
            collapsed: true,
            project_count: 3,
        };
        harness.observe(now);
        harness
    }

    fn observe(&mut self, now: Instant) {
        let inputs = FlyoutInputs {
            project_count: self.project_count,
            selected_project_id: self.selected,
            sidebar_active: self.focus.active_zone() == FocusZone::Sidebar,
            sidebar_collapsed: self.collapsed,
            navigation_trigger: self.focus.navigation_trigger(),
        };
        self.flyout.observe(&inputs, now);
    }

    fn press(&mut self, code: KeyCode, now: Instant) {
        self.focus.handle_key(&KeyEvent::new(code, KeyModifiers::NONE));
        self.observe(now);
    }
}

#[test]
fn test_navigation_keys_drive_flyout() {
    let t0 = Instant::now();
    let mut h = Harness::new(t0);
    assert!(!h.flyout.is_mounted());

    h.press(KeyCode::Down, t0);
    assert!(h.flyout.is_mounted());
    h.flyout.tick(t0 + ms(20));
    assert!(h.flyout.is_visible());

    // Each further move restarts the inactivity timer
    h.press(KeyCode::Down, t0 + ms(1000));
    h.flyout.tick(t0 + ms(2000));
    assert!(h.flyout.is_visible());

    h.flyout.tick(t0 + ms(2500));
    assert!(!h.flyout.is_visible());
    h.flyout.tick(t0 + ms(2700));
    assert!(!h.flyout.is_mounted());
}

#[test]
fn test_choosing_a_project_hides_immediately() {
    let t0 = Instant::now();
    let mut h = Harness::new(t0);
    h.press(KeyCode::Down, t0);
    h.flyout.tick(t0 + ms(20));
    assert!(h.flyout.is_visible());

    h.selected = Some(11);
    h.observe(t0 + ms(40));
    assert!(!h.flyout.is_visible());
    assert!(h.flyout.is_mounted());

    h.flyout.tick(t0 + ms(240));
    assert!(!h.flyout.is_mounted());
}

#[test]
fn test_tab_to_env_list_hides() {
    let t0 = Instant::now();
    let mut h = Harness::new(t0);
    h.press(KeyCode::Down, t0);
    h.flyout.tick(t0 + ms(20));

    h.press(KeyCode::Tab, t0 + ms(30));
    assert!(!h.flyout.is_visible());
}

#[test]
fn test_expanded_sidebar_never_mounts() {
    let t0 = Instant::now();
    let mut h = Harness::new(t0);
    h.collapsed = false;
    h.press(KeyCode::Down, t0);
    h.flyout.tick(t0 + ms(100));
    assert!(!h.flyout.is_mounted());

    // Collapsing again does not replay the earlier navigation
    h.collapsed = true;
    h.observe(t0 + ms(200));
    assert!(!h.flyout.is_mounted());

    h.press(KeyCode::Up, t0 + ms(300));
    assert!(h.flyout.is_mounted());
}

#[test]
fn test_env_list_navigation_does_not_mount() {
    let t0 = Instant::now();
    let mut h = Harness::new(t0);
    h.focus.set_item_counts(3, 3);
    h.focus.set_active_zone(FocusZone::EnvList);
    h.press(KeyCode::Down, t0);
    assert!(!h.flyout.is_mounted());
}

#[test]
fn test_last_project_removed_hides_immediately() {
    let t0 = Instant::now();
    let mut h = Harness::new(t0);
    h.press(KeyCode::Down, t0);
    h.flyout.tick(t0 + ms(20));
    assert!(h.flyout.is_visible());

    h.project_count = 0;
    h.observe(t0 + ms(40));
    assert!(!h.flyout.is_visible());
    assert!(h.flyout.is_mounted());

    h.flyout.tick(t0 + ms(239));
    assert!(h.flyout.is_mounted());
    h.flyout.tick(t0 + ms(240));
    assert!(!h.flyout.is_mounted());

    // Navigating with no projects does not bring it back
    h.press(KeyCode::Up, t0 + ms(300));
    assert!(!h.flyout.is_mounted());
}
