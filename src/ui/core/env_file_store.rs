//! Env file list, selection and viewer content for the selected project.
//!
//! Scans and reads complete asynchronously and may resolve out of order. A
//! result is applied only if it still matches what the user is looking at:
//! scans by project id and sequence number, reads by file path. A scan that
//! started before the latest activation keeps that activation's marking.

use std::time::{Duration, Instant};

use crate::backend::EnvFile;
use crate::constants::MIN_REFRESH_INDICATOR_MS;

#[derive(Debug)]
pub struct EnvFileStore {
    env_files: Vec<EnvFile>,
    project_id: Option<i64>,
    selected_path: Option<String>,
    content: Option<String>,
    is_loading: bool,
    is_loading_content: bool,
    error: Option<String>,
    min_refresh_indicator: Duration,
    refresh_started: Option<Instant>,
    refresh_pending: bool,
    scan_seq: u64,
    activation: Option<(u64, String)>,
}

impl Default for EnvFileStore {
    fn default() -> Self {
        Self::new(Duration::from_millis(MIN_REFRESH_INDICATOR_MS))
    }
}

impl EnvFileStore {
    pub fn new(min_refresh_indicator: Duration) -> Self {
        Self {
            env_files: Vec::new(),
            project_id: None,
            selected_path: None,
            content: None,
            is_loading: false,
            is_loading_content: false,
            error: None,
            min_refresh_indicator,
            refresh_started: None,
            refresh_pending: false,
            scan_seq: 0,
            activation: None,
        }
    }

    pub fn env_files(&self) -> &[EnvFile] {
        &self.env_files
    }

    pub fn len(&self) -> usize {
        self.env_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.env_files.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EnvFile> {
        self.env_files.get(index)
    }

    pub fn project_id(&self) -> Option<i64> {
        self.project_id
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.selected_path.as_deref()
    }

    pub fn selected(&self) -> Option<&EnvFile> {
        let path = self.selected_path.as_deref()?;
        self.env_files.iter().find(|f| f.path == path)
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_loading_content(&self) -> bool {
        self.is_loading_content
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn next_scan(&mut self) -> u64 {
        self.scan_seq += 1;
        self.scan_seq
    }

    /// Start scanning a project; drops the current selection and content.
    /// Returns the sequence number the scan result must carry.
    pub fn begin_scan(&mut self, project_id: i64) -> u64 {
        if self.project_id != Some(project_id) {
            self.env_files.clear();
            self.activation = None;
        }
        self.project_id = Some(project_id);
        self.is_loading = true;
        self.error = None;
        self.selected_path = None;
        self.content = None;
        self.is_loading_content = false;
        self.next_scan()
    }

    /// Apply a scan result; returns false when it belongs to another project or
    /// a newer scan has started since
    pub fn apply_scanned(&mut self, project_id: i64, seq: u64, result: Result<Vec<EnvFile>, String>) -> bool {
        if self.project_id != Some(project_id) || seq != self.scan_seq {
            return false;
        }
        self.is_loading = false;
        self.refresh_pending = false;
        match result {
            Ok(files) => {
                self.env_files = files;
                let activated_later = self
                    .activation
                    .as_ref()
                    .filter(|(issued, _)| seq <= *issued)
                    .map(|(_, name)| name.clone());
                if let Some(name) = activated_later {
                    self.mark_active(&name);
                }
            }
            Err(e) => {
                self.error = Some(e);
                self.env_files.clear();
            }
        }
        true
    }

    pub fn begin_read(&mut self, path: &str) {
        self.selected_path = Some(path.to_string());
        self.is_loading_content = true;
    }

    /// Apply file content; stale reads for a path no longer selected are dropped
    pub fn apply_read(&mut self, path: &str, result: Result<String, String>) -> bool {
        if self.selected_path.as_deref() != Some(path) {
            return false;
        }
        self.is_loading_content = false;
        match result {
            Ok(content) => self.content = Some(content),
            Err(e) => {
                self.content = None;
                self.error = Some(e);
            }
        }
        true
    }

    /// Mark exactly one file as the active environment
    pub fn apply_activated(&mut self, env_name: &str) {
        self.activation = Some((self.scan_seq, env_name.to_string()));
        self.mark_active(env_name);
    }

    fn mark_active(&mut self, env_name: &str) {
        for file in &mut self.env_files {
            file.is_active = file.name == env_name;
        }
    }

    /// Start a rescan of the current project; returns its sequence number
    pub fn begin_refresh(&mut self, now: Instant) -> u64 {
        self.refresh_started = Some(now);
        self.refresh_pending = true;
        self.next_scan()
    }

    pub fn apply_refresh_done(&mut self) {
        self.refresh_pending = false;
    }

    /// True while the rescan runs and for at least the indicator floor
    pub fn is_refreshing(&self, now: Instant) -> bool {
        match self.refresh_started {
            Some(started) => self.refresh_pending || now < started + self.min_refresh_indicator,
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_path = None;
        self.content = None;
        self.is_loading_content = false;
    }

    /// Forget the current project entirely
    pub fn clear(&mut self) {
        self.env_files.clear();
        self.project_id = None;
        self.is_loading = false;
        self.refresh_pending = false;
        self.activation = None;
        self.clear_selection();
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
