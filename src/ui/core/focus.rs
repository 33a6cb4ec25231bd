//! Dual-zone keyboard focus.
//!
//! The window is split into two focus zones, the project sidebar and the env
//! file list. Each zone keeps its own cursor; switching zones never moves
//! either cursor. Keys that act on an item produce a [`FocusIntent`] carrying
//! the index under the cursor at the moment of the keypress, and the owner
//! turns intents into actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::listener::{ListenerGuard, ListenerSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusZone {
    #[default]
    Sidebar,
    EnvList,
}

impl FocusZone {
    pub fn other(self) -> Self {
        match self {
            FocusZone::Sidebar => FocusZone::EnvList,
            FocusZone::EnvList => FocusZone::Sidebar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusState {
    pub active_zone: FocusZone,
    pub sidebar_index: usize,
    pub env_list_index: usize,
}

/// Item-level requests produced by the key handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusIntent {
    SidebarSelect(usize),
    SidebarEdit(usize),
    SidebarDelete(usize),
    EnvListSelect(usize),
    EnvListActivate(usize),
    EnvListRefresh,
}

/// Result of offering a key to the focus manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a focus key; pass it on to global shortcuts
    Ignored,
    /// Consumed, optionally with an intent for the owner
    Handled(Option<FocusIntent>),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FocusError {
    #[error("another focus manager already owns the keyboard listener")]
    ListenerBusy,
}

fn clamp_index(index: usize, count: usize) -> usize {
    index.min(count.saturating_sub(1))
}

#[derive(Debug, Default)]
pub struct FocusManager {
    state: FocusState,
    navigation_trigger: u64,
    sidebar_count: usize,
    env_list_count: usize,
    enabled: bool,
    guard: Option<ListenerGuard>,
}

impl FocusManager {
    /// Manager that is not bound to a window listener
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Bind to the window's listener slot; fails if it is already taken
    pub fn attach(slot: &ListenerSlot) -> Result<Self, FocusError> {
        let guard = slot.acquire()?;
        Ok(Self {
            guard: Some(guard),
            ..Self::new()
        })
    }

    pub fn is_attached(&self) -> bool {
        self.guard.is_some()
    }

    /// Give the listener slot back without dropping the manager
    pub fn detach(&mut self) {
        self.guard = None;
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn active_zone(&self) -> FocusZone {
        self.state.active_zone
    }

    pub fn sidebar_index(&self) -> usize {
        self.state.sidebar_index
    }

    pub fn env_list_index(&self) -> usize {
        self.state.env_list_index
    }

    /// Counter bumped by every up/down move in the sidebar zone
    pub fn navigation_trigger(&self) -> u64 {
        self.navigation_trigger
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_active_zone(&mut self, zone: FocusZone) {
        self.state.active_zone = zone;
    }

    pub fn set_sidebar_index(&mut self, index: usize) {
        self.state.sidebar_index = clamp_index(index, self.sidebar_count);
    }

    pub fn set_env_list_index(&mut self, index: usize) {
        self.state.env_list_index = clamp_index(index, self.env_list_count);
    }

    /// Store item counts and re-clamp both cursors right away
    pub fn set_item_counts(&mut self, sidebar_count: usize, env_list_count: usize) {
        self.sidebar_count = sidebar_count;
        self.env_list_count = env_list_count;
        self.state.sidebar_index = clamp_index(self.state.sidebar_index, sidebar_count);
        self.state.env_list_index = clamp_index(self.state.env_list_index, env_list_count);
    }

    fn active_count(&self) -> usize {
        match self.state.active_zone {
            FocusZone::Sidebar => self.sidebar_count,
            FocusZone::EnvList => self.env_list_count,
        }
    }

    fn active_index_mut(&mut self) -> &mut usize {
        match self.state.active_zone {
            FocusZone::Sidebar => &mut self.state.sidebar_index,
            FocusZone::EnvList => &mut self.state.env_list_index,
        }
    }

    fn move_by(&mut self, down: bool) {
        let count = self.active_count();
        let index = self.active_index_mut();
        *index = if down {
            clamp_index(index.saturating_add(1), count)
        } else {
            index.saturating_sub(1)
        };
        if self.state.active_zone == FocusZone::Sidebar {
            self.navigation_trigger = self.navigation_trigger.wrapping_add(1);
        }
    }

    fn move_to(&mut self, end: bool) {
        let target = if end { self.active_count().saturating_sub(1) } else { 0 };
        *self.active_index_mut() = target;
    }

    /// Offer a key to the focus manager
    pub fn handle_key(&mut self, key: &KeyEvent) -> KeyOutcome {
        if !self.enabled || key.kind == KeyEventKind::Release {
            return KeyOutcome::Ignored;
        }

        let primary = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
        if primary || key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('1') if primary => {
                    self.set_active_zone(FocusZone::Sidebar);
                    KeyOutcome::Handled(None)
                }
                KeyCode::Char('2') if primary => {
                    self.set_active_zone(FocusZone::EnvList);
                    KeyOutcome::Handled(None)
                }
                _ => KeyOutcome::Ignored,
            };
        }

        let zone = self.state.active_zone;
        let has_items = self.active_count() > 0;

        match key.code {
            KeyCode::Tab => {
                self.state.active_zone = zone.other();
                KeyOutcome::Handled(None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_by(false);
                KeyOutcome::Handled(None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_by(true);
                KeyOutcome::Handled(None)
            }
            KeyCode::Home => {
                self.move_to(false);
                KeyOutcome::Handled(None)
            }
            KeyCode::End => {
                self.move_to(true);
                KeyOutcome::Handled(None)
            }
            KeyCode::Enter => {
                let intent = match zone {
                    FocusZone::Sidebar if has_items => Some(FocusIntent::SidebarSelect(self.state.sidebar_index)),
                    FocusZone::EnvList if has_items => Some(FocusIntent::EnvListSelect(self.state.env_list_index)),
                    _ => None,
                };
                KeyOutcome::Handled(intent)
            }
            KeyCode::Char('e') | KeyCode::Char('E') if zone == FocusZone::Sidebar && has_items => {
                KeyOutcome::Handled(Some(FocusIntent::SidebarEdit(self.state.sidebar_index)))
            }
            KeyCode::Delete | KeyCode::Backspace if zone == FocusZone::Sidebar && has_items => {
                KeyOutcome::Handled(Some(FocusIntent::SidebarDelete(self.state.sidebar_index)))
            }
            KeyCode::Char('a') | KeyCode::Char('A') if zone == FocusZone::EnvList && has_items => {
                KeyOutcome::Handled(Some(FocusIntent::EnvListActivate(self.state.env_list_index)))
            }
            KeyCode::Char('r') | KeyCode::Char('R') if zone == FocusZone::EnvList => {
                KeyOutcome::Handled(Some(FocusIntent::EnvListRefresh))
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn manager(sidebar: usize, env_list: usize) -> FocusManager {
        let mut manager = FocusManager::new();
        manager.set_item_counts(sidebar, env_list);
        manager
    }

    #[test]
    fn test_down_never_exceeds_last_index() {
        let mut fm = manager(3, 0);
        for _ in 0..10 {
            fm.handle_key(&key(KeyCode::Down));
        }
        assert_eq!(fm.sidebar_index(), 2);
        assert_eq!(fm.navigation_trigger(), 10);
    }

    #[test]
    fn test_up_floors_at_zero() {
        let mut fm = manager(3, 3);
        fm.handle_key(&key(KeyCode::Char('k')));
        assert_eq!(fm.sidebar_index(), 0);
    }

    #[test]
    fn test_tab_twice_is_identity() {
        let mut fm = manager(4, 4);
        fm.set_sidebar_index(2);
        fm.set_env_list_index(1);
        let before = fm.state();
        fm.handle_key(&key(KeyCode::Tab));
        assert_eq!(fm.active_zone(), FocusZone::EnvList);
        fm.handle_key(&key(KeyCode::Tab));
        assert_eq!(fm.state(), before);
    }

    #[test]
    fn test_shrinking_counts_clamps_indices() {
        let mut fm = manager(5, 5);
        fm.set_sidebar_index(4);
        fm.set_env_list_index(4);
        fm.set_item_counts(2, 0);
        assert_eq!(fm.sidebar_index(), 1);
        assert_eq!(fm.env_list_index(), 0);
    }

    #[test]
    fn test_enter_on_empty_env_list_is_consumed_without_intent() {
        let mut fm = manager(2, 0);
        fm.set_active_zone(FocusZone::EnvList);
        assert_eq!(fm.handle_key(&key(KeyCode::Enter)), KeyOutcome::Handled(None));
    }

    #[test]
    fn test_env_list_down_does_not_bump_trigger() {
        let mut fm = manager(2, 3);
        fm.set_active_zone(FocusZone::EnvList);
        fm.handle_key(&key(KeyCode::Down));
        assert_eq!(fm.env_list_index(), 1);
        assert_eq!(fm.navigation_trigger(), 0);
    }

    #[test]
    fn test_zone_specific_letters_fall_through_elsewhere() {
        let mut fm = manager(2, 2);
        assert_eq!(fm.handle_key(&key(KeyCode::Char('a'))), KeyOutcome::Ignored);
        assert_eq!(fm.handle_key(&key(KeyCode::Char('r'))), KeyOutcome::Ignored);
        fm.set_active_zone(FocusZone::EnvList);
        assert_eq!(fm.handle_key(&key(KeyCode::Char('e'))), KeyOutcome::Ignored);
        assert_eq!(fm.handle_key(&key(KeyCode::Delete)), KeyOutcome::Ignored);
    }

    #[test]
    fn test_modified_letters_are_not_focus_keys() {
        let mut fm = manager(2, 2);
        let ctrl_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(fm.handle_key(&ctrl_e), KeyOutcome::Ignored);
    }

    #[test]
    fn test_primary_digit_switches_zone() {
        let mut fm = manager(2, 2);
        let ctrl_2 = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::CONTROL);
        let super_1 = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::SUPER);
        assert_eq!(fm.handle_key(&ctrl_2), KeyOutcome::Handled(None));
        assert_eq!(fm.active_zone(), FocusZone::EnvList);
        assert_eq!(fm.handle_key(&super_1), KeyOutcome::Handled(None));
        assert_eq!(fm.active_zone(), FocusZone::Sidebar);
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let mut fm = manager(2, 2);
        fm.set_enabled(false);
        assert_eq!(fm.handle_key(&key(KeyCode::Down)), KeyOutcome::Ignored);
        assert_eq!(fm.sidebar_index(), 0);
    }

    #[test]
    fn test_second_attach_is_rejected_until_release() {
        let slot = ListenerSlot::new();
        let first = FocusManager::attach(&slot).unwrap();
        assert_eq!(FocusManager::attach(&slot).unwrap_err(), FocusError::ListenerBusy);
        drop(first);
        assert!(FocusManager::attach(&slot).is_ok());
    }
}
