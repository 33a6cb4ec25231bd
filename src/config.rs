//! Configuration management for envault
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, FLYOUT_HIDE_AFTER_MS, FLYOUT_SHOW_DELAY_MS, FLYOUT_UNMOUNT_AFTER_MS, MIN_REFRESH_INDICATOR_MS,
    SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub flyout: FlyoutConfig,
    pub env_files: EnvFilesConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Sidebar width in columns
    pub sidebar_width: u16,
    /// Start with the sidebar collapsed to icons only
    pub sidebar_collapsed: bool,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Icon theme: "Ascii", "Unicode" or "Emoji"
    pub icon_theme: IconTheme,
}

/// Timings for the floating project list shown over a collapsed sidebar
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyoutConfig {
    /// Delay between mounting the flyout and making it visible
    pub show_delay_ms: u64,
    /// Inactivity after the last navigation key before the flyout hides
    pub hide_after_ms: u64,
    /// Length of the exit transition before the flyout is unmounted
    pub unmount_after_ms: u64,
}

/// Env file panel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvFilesConfig {
    /// Minimum time the refresh indicator stays on screen
    pub min_refresh_indicator_ms: u64,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the SQLite database path
    pub database_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            sidebar_collapsed: false,
            mouse_enabled: true,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for FlyoutConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: FLYOUT_SHOW_DELAY_MS,
            hide_after_ms: FLYOUT_HIDE_AFTER_MS,
            unmount_after_ms: FLYOUT_UNMOUNT_AFTER_MS,
        }
    }
}

impl FlyoutConfig {
    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms)
    }

    pub fn hide_after(&self) -> Duration {
        Duration::from_millis(self.hide_after_ms)
    }

    pub fn unmount_after(&self) -> Duration {
        Duration::from_millis(self.unmount_after_ms)
    }
}

impl Default for EnvFilesConfig {
    fn default() -> Self {
        Self {
            min_refresh_indicator_ms: MIN_REFRESH_INDICATOR_MS,
        }
    }
}

impl EnvFilesConfig {
    pub fn min_refresh_indicator(&self) -> Duration {
        Duration::from_millis(self.min_refresh_indicator_ms)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("envault.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("envault").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        if self.flyout.hide_after_ms < 100 {
            anyhow::bail!("flyout.hide_after_ms must be at least 100, got {}", self.flyout.hide_after_ms);
        }

        if self.flyout.unmount_after_ms > 1000 {
            anyhow::bail!(
                "flyout.unmount_after_ms cannot exceed 1000, got {}",
                self.flyout.unmount_after_ms
            );
        }

        if self.flyout.show_delay_ms >= self.flyout.hide_after_ms {
            anyhow::bail!("flyout.show_delay_ms must be shorter than flyout.hide_after_ms");
        }

        if self.env_files.min_refresh_indicator_ms > 5000 {
            anyhow::bail!("env_files.min_refresh_indicator_ms cannot exceed 5000");
        }

        Ok(())
    }

    /// Resolve the SQLite database path, honoring the storage override
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.storage.database_path {
            return Ok(path.clone());
        }
        Ok(Self::get_data_dir()?.join("envault.db"))
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# envault Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("envault"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }

    /// Directory holding persisted UI state (theme, preferences, shortcuts)
    pub fn get_state_dir() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("state"))
    }

    /// Directory holding the database and log file
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("envault"))
    }
}
