use std::sync::Arc;
use std::time::Instant;

use crate::backend::{Backend, UpdateProjectArgs};
use crate::config::Config;
use crate::constants::{
    ERROR_ENV_ACTIVATE_FAILED, ERROR_ENV_READ_FAILED, ERROR_ENV_SCAN_FAILED, ERROR_PROJECT_ADD_FAILED,
    ERROR_PROJECT_DELETE_FAILED, ERROR_PROJECT_LOAD_FAILED, ERROR_PROJECT_UPDATE_FAILED, ENV_FILE_PRIMARY,
    SUCCESS_ENV_ACTIVATED, SUCCESS_ENV_REFRESHED, SUCCESS_PROJECT_ADDED, SUCCESS_PROJECT_DELETED,
    SUCCESS_PROJECT_UPDATED, SUCCESS_SHORTCUTS_RESET,
};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::preferences::{PreferenceStore, ThemeStore};
use crate::shortcuts::{self, Platform, ShortcutRegistry};
use crate::storage::KeyValueStore;
use crate::ui::components::{
    DialogComponent, EnvListComponent, EnvListStatus, EnvViewerComponent, FlyoutComponent, FlyoutView,
    SidebarComponent, StatusBar, ToastManager,
};
use crate::ui::core::{
    actions::{Action, DialogType, ToastKind},
    event_handler::EventType,
    Component, EnvFileStore, FlyoutController, FlyoutInputs, FlyoutTimings, FocusError, FocusIntent, FocusManager,
    FocusZone, KeyOutcome, ListenerSlot, ProjectStore, TaskManager,
};
use crate::ui::layout::LayoutManager;
use crate::ui::palette::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

/// Services the app reads and writes outside the UI task
pub struct AppServices {
    pub backend: Arc<dyn Backend>,
    pub store: Arc<dyn KeyValueStore>,
    pub logger: Logger,
}

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    env_list: EnvListComponent,
    viewer: EnvViewerComponent,
    flyout_view: FlyoutComponent,
    dialog: DialogComponent,
    toasts: ToastManager,

    // Application state
    projects: ProjectStore,
    env_files: EnvFileStore,
    focus: FocusManager,
    flyout: FlyoutController,
    sidebar_collapsed: bool,
    sidebar_width: u16,
    was_refreshing: bool,

    // Preferences
    shortcuts: ShortcutRegistry,
    preferences: PreferenceStore,
    theme: ThemeStore,
    icons: IconService,
    palette: Palette,
    platform: Platform,

    // Services
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    /// Build the app and take the window's keyboard listener slot
    pub fn new(services: AppServices, config: &Config, slot: &ListenerSlot) -> Result<Self, FocusError> {
        let focus = FocusManager::attach(slot)?;
        let (task_manager, background_action_rx) = TaskManager::new(services.backend);

        let theme = ThemeStore::load(Arc::clone(&services.store));
        let palette = Palette::for_theme(theme.resolved());

        Ok(Self {
            sidebar: SidebarComponent::new(),
            env_list: EnvListComponent::new(),
            viewer: EnvViewerComponent::new(),
            flyout_view: FlyoutComponent::new(),
            dialog: DialogComponent::new(),
            toasts: ToastManager::default(),
            projects: ProjectStore::new(),
            env_files: EnvFileStore::new(config.env_files.min_refresh_indicator()),
            focus,
            flyout: FlyoutController::new(FlyoutTimings::from(&config.flyout)),
            sidebar_collapsed: config.ui.sidebar_collapsed,
            sidebar_width: config.ui.sidebar_width,
            was_refreshing: false,
            shortcuts: ShortcutRegistry::new(Arc::clone(&services.store)),
            preferences: PreferenceStore::load(Arc::clone(&services.store)),
            theme,
            icons: IconService::new(config.ui.icon_theme),
            palette,
            platform: Platform::current(),
            task_manager,
            background_action_rx,
            logger: services.logger,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Tell shortcut matching whether the terminal reports full modifiers
    pub fn set_keyboard_enhanced(&mut self, enhanced: bool) {
        self.shortcuts.set_keyboard_enhanced(enhanced);
    }

    pub fn projects(&self) -> &ProjectStore {
        &self.projects
    }

    pub fn env_files(&self) -> &EnvFileStore {
        &self.env_files
    }

    pub fn focus(&self) -> &FocusManager {
        &self.focus
    }

    pub fn flyout(&self) -> &FlyoutController {
        &self.flyout
    }

    pub fn dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn is_sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Kick off the initial project load
    pub fn start(&mut self) {
        self.logger.log("AppComponent: Loading projects".to_string());
        self.handle_app_action(Action::LoadProjects);
    }

    fn toast(&mut self, kind: ToastKind, message: String) {
        if self.preferences.toasts_enabled() {
            self.toasts.push(kind, message, Instant::now());
        }
    }

    fn toast_error(&mut self, context: &str, error: &str) {
        self.logger.log(format!("{}: {}", context, error));
        self.toast(ToastKind::Error, format!("{}: {}", context, error));
    }

    /// Turn a focus intent into an action, using the index captured at keypress
    fn intent_action(&self, intent: FocusIntent) -> Action {
        match intent {
            FocusIntent::SidebarSelect(index) => self
                .projects
                .get(index)
                .map_or(Action::None, |project| Action::SelectProject(project.id)),
            FocusIntent::SidebarEdit(index) => self.projects.get(index).map_or(Action::None, |project| {
                Action::ShowDialog(DialogType::ProjectEdit {
                    project_id: project.id,
                    name: project.name.clone(),
                    icon: project.icon.clone(),
                    icon_color: project.icon_color.clone(),
                })
            }),
            FocusIntent::SidebarDelete(index) => self.projects.get(index).map_or(Action::None, |project| {
                Action::ShowDialog(DialogType::DeleteConfirmation {
                    project_id: project.id,
                    name: project.name.clone(),
                })
            }),
            FocusIntent::EnvListSelect(index) => self
                .env_files
                .get(index)
                .map_or(Action::None, |file| Action::SelectEnvFile(file.path.clone())),
            FocusIntent::EnvListActivate(index) => {
                match (self.projects.selected_id(), self.env_files.get(index)) {
                    (Some(project_id), Some(file)) if file.can_activate() => Action::ActivateEnv {
                        project_id,
                        env_name: file.name.clone(),
                    },
                    _ => Action::None,
                }
            }
            FocusIntent::EnvListRefresh => Action::RefreshEnvFiles,
        }
    }

    fn shortcut_action(&self, id: &str) -> Action {
        match id {
            shortcuts::OPEN_SETTINGS => Action::ShowDialog(DialogType::Settings),
            shortcuts::TOGGLE_SIDEBAR => Action::ToggleSidebar,
            shortcuts::ADD_PROJECT => Action::ShowDialog(DialogType::ProjectAdd),
            shortcuts::TOGGLE_THEME => Action::CycleTheme,
            shortcuts::SHOW_HELP => Action::ShowDialog(DialogType::Help),
            shortcuts::QUIT => Action::Quit,
            _ => Action::None,
        }
    }

    /// Keys that no focus zone or shortcut claimed
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Char('x') => match self.focus.active_zone() {
                FocusZone::Sidebar => Action::DismissProjectError,
                FocusZone::EnvList => Action::DismissEnvError,
            },
            _ => Action::None,
        }
    }

    fn is_viewer_scroll_key(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::PageUp | KeyCode::PageDown)
            || (matches!(key.code, KeyCode::Up | KeyCode::Down) && key.modifiers.contains(KeyModifiers::SHIFT))
    }

    /// Route a key: dialog, then viewer scrolling, then focus zones, then shortcuts
    pub fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if Self::is_viewer_scroll_key(&key) {
            return self.viewer.handle_key_events(key);
        }

        match self.focus.handle_key(&key) {
            KeyOutcome::Handled(Some(intent)) => return self.intent_action(intent),
            KeyOutcome::Handled(None) => return Action::None,
            KeyOutcome::Ignored => {}
        }

        if let Some(id) = self.shortcuts.find_match(&key, self.platform) {
            let id = id.to_string();
            self.logger.log(format!("Shortcut: {}", id));
            return self.shortcut_action(&id);
        }

        self.handle_global_key(key)
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog.is_visible() {
            return Action::None;
        }
        let action = self.sidebar.handle_mouse(mouse);
        if !matches!(action, Action::None) {
            return action;
        }
        let action = self.env_list.handle_mouse(mouse);
        if !matches!(action, Action::None) {
            return action;
        }
        self.viewer.handle_mouse(mouse)
    }

    fn select_project(&mut self, id: i64) {
        let Some(project) = self.projects.find(id).cloned() else {
            return;
        };
        let changed = self.projects.selected_id() != Some(id);
        self.projects.select(Some(id));
        if let Some(index) = self.projects.index_of(id) {
            self.focus.set_sidebar_index(index);
        }
        if changed {
            self.focus.set_env_list_index(0);
        }

        self.logger.log(format!("Selecting project '{}' ({})", project.name, project.id));
        let seq = self.env_files.begin_scan(project.id);
        self.task_manager
            .spawn_scan_env_files(project.id, seq, project.path, project.active_environment, false);
    }

    fn select_env_file(&mut self, path: String) {
        if self.env_files.selected_path() == Some(path.as_str()) && self.env_files.content().is_some() {
            return;
        }
        self.env_files.begin_read(&path);
        self.task_manager.spawn_read_env_file(path);
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => {
                self.should_quit = true;
            }

            Action::SelectProject(id) => self.select_project(id),
            Action::SelectEnvFile(path) => self.select_env_file(path),
            Action::FocusSidebarItem(index) => {
                self.focus.set_active_zone(FocusZone::Sidebar);
                self.focus.set_sidebar_index(index);
                if let Some(id) = self.projects.get(index).map(|p| p.id) {
                    self.select_project(id);
                }
            }
            Action::FocusEnvListItem(index) => {
                self.focus.set_active_zone(FocusZone::EnvList);
                self.focus.set_env_list_index(index);
                if let Some(path) = self.env_files.get(index).map(|f| f.path.clone()) {
                    self.select_env_file(path);
                }
            }

            Action::LoadProjects => {
                self.projects.begin_load();
                self.task_manager.spawn_load_projects();
            }
            Action::AddProject { path } => {
                self.logger.log(format!("Adding project: {}", path));
                self.task_manager.spawn_add_project(path);
            }
            Action::UpdateProject {
                id,
                name,
                icon,
                icon_color,
            } => {
                self.task_manager.spawn_update_project(UpdateProjectArgs {
                    id,
                    name,
                    icon,
                    icon_color,
                });
            }
            Action::DeleteProject(id) => {
                self.logger.log(format!("Deleting project {}", id));
                self.task_manager.spawn_delete_project(id);
            }
            Action::ActivateEnv { project_id, env_name } => {
                self.logger.log(format!("Activating {} for project {}", env_name, project_id));
                self.task_manager.spawn_activate_env(project_id, env_name);
            }
            Action::RefreshEnvFiles => {
                if let Some(project) = self.projects.selected().cloned() {
                    let seq = self.env_files.begin_refresh(Instant::now());
                    self.task_manager
                        .spawn_scan_env_files(project.id, seq, project.path, project.active_environment, true);
                }
            }

            Action::ProjectsLoaded(result) => {
                if let Err(e) = &result {
                    self.toast_error(ERROR_PROJECT_LOAD_FAILED, e);
                }
                self.projects.apply_loaded(result);
                if self.projects.selected_id().is_none() && self.env_files.project_id().is_some() {
                    self.env_files.clear();
                }
            }
            Action::ProjectAdded(result) => match result {
                Ok(project) => {
                    let id = project.id;
                    self.projects.apply_added(project);
                    self.projects.clear_error();
                    self.toast(ToastKind::Success, SUCCESS_PROJECT_ADDED.to_string());
                    self.focus.set_item_counts(self.projects.len(), self.env_files.len());
                    self.select_project(id);
                }
                Err(e) => {
                    self.toast_error(ERROR_PROJECT_ADD_FAILED, &e);
                    self.projects.set_error(e);
                }
            },
            Action::ProjectUpdated(result) => match result {
                Ok(project) => {
                    self.projects.apply_updated(project);
                    self.toast(ToastKind::Success, SUCCESS_PROJECT_UPDATED.to_string());
                }
                Err(e) => {
                    self.toast_error(ERROR_PROJECT_UPDATE_FAILED, &e);
                    self.projects.set_error(e);
                }
            },
            Action::ProjectDeleted { id, result } => match result {
                Ok(()) => {
                    self.projects.apply_deleted(id);
                    if self.env_files.project_id() == Some(id) {
                        self.env_files.clear();
                    }
                    self.toast(ToastKind::Success, SUCCESS_PROJECT_DELETED.to_string());
                }
                Err(e) => {
                    self.toast_error(ERROR_PROJECT_DELETE_FAILED, &e);
                    self.projects.set_error(e);
                }
            },
            Action::EnvFilesScanned {
                project_id,
                seq,
                refresh,
                result,
            } => {
                let failure = result.as_ref().err().cloned();
                if !self.env_files.apply_scanned(project_id, seq, result) {
                    self.logger
                        .log(format!("Dropping stale scan #{} for project {}", seq, project_id));
                    return;
                }
                if refresh {
                    self.env_files.apply_refresh_done();
                }
                if let Some(path) = self.env_files.selected_path().map(str::to_string) {
                    if !self.env_files.env_files().iter().any(|f| f.path == path) {
                        self.env_files.clear_selection();
                    }
                }
                match failure {
                    Some(e) => self.toast_error(ERROR_ENV_SCAN_FAILED, &e),
                    None if refresh => self.toast(ToastKind::Success, SUCCESS_ENV_REFRESHED.to_string()),
                    None => {}
                }
            }
            Action::EnvFileRead { path, result } => {
                let failure = result.as_ref().err().cloned();
                if !self.env_files.apply_read(&path, result) {
                    self.logger.log(format!("Dropping stale read for {}", path));
                    return;
                }
                if let Some(e) = failure {
                    self.toast_error(ERROR_ENV_READ_FAILED, &e);
                }
            }
            Action::EnvActivated {
                project_id,
                env_name,
                result,
            } => match result {
                Ok(()) => {
                    self.projects.set_active_environment(project_id, &env_name);
                    if self.env_files.project_id() == Some(project_id) {
                        self.env_files.apply_activated(&env_name);
                        let viewing_primary = self.env_files.selected().is_some_and(|f| f.name == ENV_FILE_PRIMARY);
                        if let (true, Some(path)) = (viewing_primary, self.env_files.selected_path()) {
                            let path = path.to_string();
                            self.env_files.begin_read(&path);
                            self.task_manager.spawn_read_env_file(path);
                        }
                    }
                    self.toast(ToastKind::Success, format!("{}: {}", SUCCESS_ENV_ACTIVATED, env_name));
                }
                Err(e) => {
                    self.toast_error(ERROR_ENV_ACTIVATE_FAILED, &e);
                    self.env_files.set_error(e);
                }
            },

            Action::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
            }
            Action::SetTheme(theme) => {
                self.theme.set(theme);
                self.palette = Palette::for_theme(self.theme.resolved());
            }
            Action::CycleTheme => {
                let theme = self.theme.cycle();
                self.palette = Palette::for_theme(self.theme.resolved());
                self.toast(ToastKind::Info, format!("Theme: {}", theme.label()));
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
            }
            Action::SetToastsEnabled(enabled) => {
                self.preferences.set_toasts_enabled(enabled);
                if !enabled {
                    self.toasts.clear();
                }
            }
            Action::ResetShortcuts => {
                self.shortcuts.reset();
                self.toast(ToastKind::Success, SUCCESS_SHORTCUTS_RESET.to_string());
            }
            Action::ShowToast(kind, message) => self.toast(kind, message),
            Action::DismissProjectError => self.projects.clear_error(),
            Action::DismissEnvError => self.env_files.clear_error(),
            Action::ShowDialog(dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                if dialog_type == DialogType::Logs {
                    self.dialog.logs = self.logger.get_logs();
                }
                self.dialog.show(dialog_type);
            }
            Action::HideDialog => {
                self.dialog.clear_dialog();
            }
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        // Reap first: a finished task has already sent its action
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        for (id, description) in completed_tasks {
            self.logger.log(format!("Background: task {} finished: {}", id, description));
        }

        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        actions
    }

    /// Abort background work still in flight
    pub fn shutdown(&mut self) {
        self.logger.log("AppComponent: Cancelling background tasks".to_string());
        self.task_manager.cancel_all_tasks();
    }

    /// Re-clamp focus, sample the flyout inputs and push data into the components
    pub fn sync_state(&mut self, now: Instant) {
        self.focus.set_item_counts(self.projects.len(), self.env_files.len());
        self.focus.set_enabled(!self.dialog.is_visible());

        let inputs = FlyoutInputs {
            project_count: self.projects.len(),
            selected_project_id: self.projects.selected_id(),
            sidebar_active: self.focus.active_zone() == FocusZone::Sidebar,
            sidebar_collapsed: self.sidebar_collapsed,
            navigation_trigger: self.focus.navigation_trigger(),
        };
        self.flyout.observe(&inputs, now);

        self.sync_component_data(now);
    }

    fn sync_component_data(&mut self, now: Instant) {
        let zone = self.focus.active_zone();

        self.sidebar.update_data(self.projects.projects(), self.projects.selected_id());
        self.sidebar
            .set_focus(self.focus.sidebar_index(), zone == FocusZone::Sidebar);
        self.sidebar.set_collapsed(self.sidebar_collapsed);
        self.sidebar
            .set_status(self.projects.is_loading(), self.projects.error().map(str::to_string));

        self.env_list
            .update_data(self.projects.selected(), self.env_files.env_files(), self.env_files.selected_path());
        self.env_list
            .set_focus(self.focus.env_list_index(), zone == FocusZone::EnvList);
        self.env_list.set_status(EnvListStatus {
            loading: self.env_files.is_loading(),
            refreshing: self.env_files.is_refreshing(now),
            error: self.env_files.error().map(str::to_string),
        });

        self.viewer.update_data(
            self.env_files.selected(),
            self.env_files.content(),
            self.env_files.is_loading_content(),
        );

        self.dialog.settings.theme = self.theme.get();
        self.dialog.settings.toasts_enabled = self.preferences.toasts_enabled();
        self.dialog.settings.shortcuts = self.shortcuts.by_category();
        self.dialog.settings.platform = self.platform;

        for icons in [
            &mut self.sidebar.icons,
            &mut self.env_list.icons,
            &mut self.viewer.icons,
            &mut self.flyout_view.icons,
            &mut self.dialog.icons,
        ] {
            icons.set_theme(self.icons.theme());
        }
        self.sidebar.palette = self.palette;
        self.env_list.palette = self.palette;
        self.viewer.palette = self.palette;
        self.flyout_view.palette = self.palette;
        self.dialog.palette = self.palette;
    }

    /// Advance timers; returns true when something visible changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.flyout.tick(now);
        changed |= self.toasts.expire(now);

        let refreshing = self.env_files.is_refreshing(now);
        if refreshing != self.was_refreshing {
            self.was_refreshing = refreshing;
            changed = true;
        }
        if changed {
            self.sync_component_data(now);
        }
        changed
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.handle_app_action(action);
        self.sync_state(Instant::now());
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.handle_app_action(action);
        self.sync_state(Instant::now());
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::app_layout(rect, self.sidebar_width, self.sidebar_collapsed);

        self.sidebar.render(f, layout.sidebar);
        self.env_list.render(f, layout.env_list);
        self.viewer.render(f, layout.viewer);
        StatusBar::render(
            f,
            layout.status,
            self.focus.active_zone(),
            &self.shortcuts,
            self.platform,
            &self.palette,
        );

        if self.flyout.is_mounted() {
            let area = FlyoutComponent::area(layout.sidebar, rect, self.projects.len());
            let view = FlyoutView {
                projects: self.projects.projects(),
                cursor: self.focus.sidebar_index(),
                selected_id: self.projects.selected_id(),
                visible: self.flyout.is_visible(),
            };
            self.flyout_view.render(f, area, &view);
        }

        self.toasts.render(f, rect, &self.icons, &self.palette);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
