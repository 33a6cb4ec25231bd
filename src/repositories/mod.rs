//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database queries
//! and operations, following the Data Mapper pattern recommended by SeaORM.
//! Repositories keep entities as pure data models while providing reusable
//! database access methods.

pub mod env_history;
pub mod project;

pub use env_history::EnvHistoryRepository;
pub use project::ProjectRepository;
