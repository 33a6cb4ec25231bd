//! Local persistence
//!
//! - [`db`]: SQLite database (projects, activation history) via SeaORM
//! - [`kv`]: small key/value documents for theme, preferences and shortcuts

pub mod db;
pub mod kv;

pub use db::LocalStorage;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
