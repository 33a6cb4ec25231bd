//! Project list state owned by the UI task.

use crate::backend::Project;

#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    selected_id: Option<i64>,
    is_loading: bool,
    error: Option<String>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn find(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn index_of(&self, id: i64) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected_id
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected_id.and_then(|id| self.find(id))
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// A failed load keeps whatever list was already shown
    pub fn apply_loaded(&mut self, result: Result<Vec<Project>, String>) {
        self.is_loading = false;
        match result {
            Ok(projects) => {
                self.projects = projects;
                if self.selected_id.is_some_and(|id| self.find(id).is_none()) {
                    self.selected_id = None;
                }
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// New projects go to the top of the list
    pub fn apply_added(&mut self, project: Project) {
        self.projects.retain(|p| p.id != project.id);
        self.projects.insert(0, project);
    }

    pub fn apply_updated(&mut self, project: Project) {
        if let Some(slot) = self.projects.iter_mut().find(|p| p.id == project.id) {
            *slot = project;
        }
    }

    pub fn apply_deleted(&mut self, id: i64) {
        self.projects.retain(|p| p.id != id);
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
    }

    pub fn set_active_environment(&mut self, id: i64, env_name: &str) {
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == id) {
            project.active_environment = Some(env_name.to_string());
        }
    }

    pub fn select(&mut self, id: Option<i64>) {
        self.selected_id = id;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
