//! Core UI functionality for envault.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, focus and flyout state machines, the data stores
//! behind the panels, and background task management.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard/mouse input polling
//! - [`focus`] - Dual-zone keyboard focus manager
//! - [`flyout`] - Timer-driven project flyout controller
//! - [`listener`] - Exclusive per-window keyboard listener slot
//! - [`project_store`] / [`env_file_store`] - Panel data owned by the UI task
//! - [`task_manager`] - Background backend calls reporting back as actions

pub mod actions;
pub mod component;
pub mod env_file_store;
pub mod event_handler;
pub mod flyout;
pub mod focus;
pub mod listener;
pub mod project_store;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, ToastKind};
pub use component::Component;
pub use env_file_store::EnvFileStore;
pub use event_handler::{EventHandler, EventType};
pub use flyout::{FlyoutController, FlyoutInputs, FlyoutTimer, FlyoutTimings};
pub use focus::{FocusError, FocusIntent, FocusManager, FocusState, FocusZone, KeyOutcome};
pub use listener::{ListenerGuard, ListenerSlot};
pub use project_store::ProjectStore;
pub use task_manager::{TaskId, TaskManager};
