//! Transient project flyout shown over a collapsed sidebar.
//!
//! While the sidebar is collapsed to icons, moving the sidebar cursor pops up a
//! floating copy of the project list. It mounts first and becomes visible after
//! a short delay, hides after a stretch of inactivity, and unmounts once its
//! exit transition has run.
//!
//! The controller never reads the clock. Callers pass `now` into
//! [`FlyoutController::observe`] and [`FlyoutController::tick`], and poll
//! [`FlyoutController::next_deadline`] to know when to tick again.

use std::time::{Duration, Instant};

use crate::config::FlyoutConfig;

/// Values the flyout reacts to, sampled after every UI update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlyoutInputs {
    pub project_count: usize,
    pub selected_project_id: Option<i64>,
    pub sidebar_active: bool,
    pub sidebar_collapsed: bool,
    pub navigation_trigger: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyoutTimer {
    ShowDelay,
    HideAfterInactivity,
    UnmountAfterExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlyoutTimings {
    pub show_delay: Duration,
    pub hide_after: Duration,
    pub unmount_after: Duration,
}

impl Default for FlyoutTimings {
    fn default() -> Self {
        Self::from(&FlyoutConfig::default())
    }
}

impl From<&FlyoutConfig> for FlyoutTimings {
    fn from(config: &FlyoutConfig) -> Self {
        Self {
            show_delay: config.show_delay(),
            hide_after: config.hide_after(),
            unmount_after: config.unmount_after(),
        }
    }
}

#[derive(Debug)]
pub struct FlyoutController {
    timings: FlyoutTimings,
    mounted: bool,
    visible: bool,
    show_at: Option<Instant>,
    hide_at: Option<Instant>,
    unmount_at: Option<Instant>,
    last_trigger: Option<u64>,
    last_selected: Option<Option<i64>>,
}

impl FlyoutController {
    pub fn new(timings: FlyoutTimings) -> Self {
        Self {
            timings,
            mounted: false,
            visible: false,
            show_at: None,
            hide_at: None,
            unmount_at: None,
            last_trigger: None,
            last_selected: None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn deadline(&self, timer: FlyoutTimer) -> Option<Instant> {
        match timer {
            FlyoutTimer::ShowDelay => self.show_at,
            FlyoutTimer::HideAfterInactivity => self.hide_at,
            FlyoutTimer::UnmountAfterExit => self.unmount_at,
        }
    }

    /// Earliest pending timer deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.show_at, self.hide_at, self.unmount_at].into_iter().flatten().min()
    }

    fn clear_timers(&mut self) {
        self.show_at = None;
        self.hide_at = None;
        self.unmount_at = None;
    }

    fn reset(&mut self) {
        self.clear_timers();
        self.mounted = false;
        self.visible = false;
    }

    fn hide(&mut self, now: Instant) {
        let already_exiting = !self.visible && self.show_at.is_none() && self.unmount_at.is_some();
        if already_exiting {
            return;
        }
        self.show_at = None;
        self.hide_at = None;
        self.visible = false;
        self.unmount_at = Some(now + self.timings.unmount_after);
    }

    /// Feed the current inputs; returns whether mounted/visible changed
    pub fn observe(&mut self, inputs: &FlyoutInputs, now: Instant) -> bool {
        let before = (self.mounted, self.visible);

        let first = self.last_selected.is_none();
        if !first && self.last_selected != Some(inputs.selected_project_id) && self.mounted {
            self.hide(now);
        }
        self.last_selected = Some(inputs.selected_project_id);

        let trigger_changed = self
            .last_trigger
            .is_some_and(|last| last != inputs.navigation_trigger);
        self.last_trigger = Some(inputs.navigation_trigger);

        if !inputs.sidebar_collapsed {
            self.reset();
        } else if !inputs.sidebar_active || inputs.project_count == 0 {
            if self.mounted {
                self.hide(now);
            }
        } else if trigger_changed {
            self.clear_timers();
            if self.mounted {
                self.visible = true;
            } else {
                self.mounted = true;
                self.visible = false;
                self.show_at = Some(now + self.timings.show_delay);
            }
            self.hide_at = Some(now + self.timings.hide_after);
        }

        before != (self.mounted, self.visible)
    }

    /// Fire every timer due at `now`, in deadline order
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = (self.mounted, self.visible);

        loop {
            let due = [
                (FlyoutTimer::ShowDelay, self.show_at),
                (FlyoutTimer::HideAfterInactivity, self.hide_at),
                (FlyoutTimer::UnmountAfterExit, self.unmount_at),
            ]
            .into_iter()
            .filter_map(|(timer, deadline)| deadline.filter(|d| *d <= now).map(|d| (timer, d)))
            .min_by_key(|(_, deadline)| *deadline);

            let Some((timer, deadline)) = due else {
                break;
            };

            match timer {
                FlyoutTimer::ShowDelay => {
                    self.show_at = None;
                    if self.mounted {
                        self.visible = true;
                    }
                }
                FlyoutTimer::HideAfterInactivity => {
                    self.hide_at = None;
                    self.hide(deadline);
                }
                FlyoutTimer::UnmountAfterExit => {
                    self.unmount_at = None;
                    self.mounted = false;
                    self.visible = false;
                }
            }
        }

        before != (self.mounted, self.visible)
    }
}

impl Default for FlyoutController {
    fn default() -> Self {
        Self::new(FlyoutTimings::default())
    }
}
