pub mod env_history;
pub mod project;

pub use env_history::Entity as EnvHistory;
pub use project::Entity as Project;
