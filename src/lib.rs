//! envault - A terminal UI for managing per-project .env files
//!
//! Projects are directories registered in a local SQLite database. For each
//! project the app lists the `.env*` files it contains, shows their contents
//! and activates a variant by copying it over `.env` (backing up the previous
//! one first).
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Local database and key-value persistence
//! * [`backend`] - Project and env file operations
//! * [`shortcuts`] - Rebindable keyboard shortcuts
//! * [`ui`] - Terminal user interface components

/// Project and env file operations behind an async trait
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Toast and theme preferences
pub mod preferences;

/// Repository layer for database operations
pub mod repositories;

/// Keyboard shortcut registry
pub mod shortcuts;

/// SQLite connection and key-value store
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export entity models for convenient access
pub use entities::{env_history, project};
