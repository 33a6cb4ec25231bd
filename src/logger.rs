use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::Config;

/// Path of the installed `fern` file dispatch, set at most once per process
static FILE_DISPATCH: OnceCell<PathBuf> = OnceCell::new();

/// Shared logger that can be used across the application
///
/// Entries are always kept in memory for the in-app logs dialog. When file
/// logging is enabled they are also forwarded to the `log` facade, which a
/// `fern` dispatch writes to `envault.log` in the data directory.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    /// Create a logger from the `[logging]` config section
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::install_file_dispatch()?;
        }
        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled,
        })
    }

    fn install_file_dispatch() -> Result<()> {
        FILE_DISPATCH
            .get_or_try_init(|| {
                let path = Self::get_log_file_path()?;
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
                }
                let file = fern::log_file(&path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?;

                // Another logger may already own the `log` facade (tests, embedding apps)
                let _ = fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{}] {} {}: {}",
                            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .level(log::LevelFilter::Info)
                    .chain(file)
                    .apply();

                Ok::<PathBuf, anyhow::Error>(path)
            })
            .map(|_| ())
    }

    /// Location of the log file written when logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        Ok(Config::get_data_dir()?.join("envault.log"))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether log entries of this logger reach the log file
    pub fn has_file_writer(&self) -> bool {
        self.enabled && FILE_DISPATCH.get().is_some()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if self.enabled {
            log::info!(target: "envault", "{}", message);
        }

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
