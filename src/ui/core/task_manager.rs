use super::actions::Action;
use crate::backend::{AddProjectArgs, Backend, UpdateProjectArgs};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

impl BackgroundTask {
    pub fn elapsed(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }
}

/// Runs backend calls off the UI task and reports results as actions
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
    backend: Arc<dyn Backend>,
}

impl TaskManager {
    pub fn new(backend: Arc<dyn Backend>) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
                backend,
            },
            rx,
        )
    }

    /// Spawn a future whose output action is sent back to the UI
    pub fn spawn_operation<F, Fut>(&mut self, description: String, operation: F) -> TaskId
    where
        F: FnOnce(Arc<dyn Backend>) -> Fut + Send + 'static,
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let backend = Arc::clone(&self.backend);

        let handle = tokio::spawn(async move {
            let action = operation(backend).await;
            // The receiver is gone only when the app is shutting down
            let _ = action_sender.send(action);
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    pub fn spawn_load_projects(&mut self) -> TaskId {
        self.spawn_operation("Load projects".to_string(), |backend| async move {
            Action::ProjectsLoaded(backend.list_projects().await.map_err(|e| e.to_string()))
        })
    }

    pub fn spawn_add_project(&mut self, path: String) -> TaskId {
        let description = format!("Add project: {}", path);
        self.spawn_operation(description, |backend| async move {
            let args = AddProjectArgs {
                path,
                ..Default::default()
            };
            Action::ProjectAdded(backend.add_project(args).await.map_err(|e| e.to_string()))
        })
    }

    pub fn spawn_update_project(&mut self, args: UpdateProjectArgs) -> TaskId {
        let description = format!("Update project: {}", args.id);
        self.spawn_operation(description, |backend| async move {
            Action::ProjectUpdated(backend.update_project(args).await.map_err(|e| e.to_string()))
        })
    }

    pub fn spawn_delete_project(&mut self, id: i64) -> TaskId {
        self.spawn_operation(format!("Delete project: {}", id), move |backend| async move {
            let result = backend.delete_project(id).await.map_err(|e| e.to_string());
            Action::ProjectDeleted { id, result }
        })
    }

    pub fn spawn_scan_env_files(
        &mut self,
        project_id: i64,
        seq: u64,
        project_path: String,
        active_env: Option<String>,
        refresh: bool,
    ) -> TaskId {
        let description = format!("Scan env files: {}", project_path);
        self.spawn_operation(description, move |backend| async move {
            let result = backend
                .scan_env_files(&project_path, active_env.as_deref())
                .await
                .map_err(|e| e.to_string());
            Action::EnvFilesScanned {
                project_id,
                seq,
                refresh,
                result,
            }
        })
    }

    pub fn spawn_read_env_file(&mut self, path: String) -> TaskId {
        let description = format!("Read env file: {}", path);
        self.spawn_operation(description, |backend| async move {
            let result = backend.read_env_file(&path).await.map_err(|e| e.to_string());
            Action::EnvFileRead { path, result }
        })
    }

    pub fn spawn_activate_env(&mut self, project_id: i64, env_name: String) -> TaskId {
        let description = format!("Activate env: {}", env_name);
        self.spawn_operation(description, move |backend| async move {
            let result = backend
                .activate_env(project_id, &env_name)
                .await
                .map_err(|e| e.to_string());
            Action::EnvActivated {
                project_id,
                env_name,
                result,
            }
        })
    }

    /// Drop handles of finished tasks, returning their descriptions and run time
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| {
                self.tasks
                    .remove(&id)
                    .map(|task| (id, format!("{} in {} ms", task.description, task.elapsed().as_millis())))
            })
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
