//! Task operations for HomeView (add, delete, clear, export)

use tracing::{debug, error};

use super::{Focus, HomeView, Intent};
use crate::store::TaskError;
use crate::tui::components::{Severity, Toast};

impl HomeView {
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::AddTask(text) => self.add_task(&text),
            Intent::DeleteTask(raw) => self.delete_task(&raw),
            Intent::ClearAll => self.clear_all(),
            Intent::Export => self.export_tasks(),
        }
    }

    pub(super) fn add_task(&mut self, text: &str) {
        if self.store.add(text) {
            self.task_input.reset();
            self.focus = Focus::TaskInput;
        }
    }

    pub(super) fn delete_task(&mut self, raw: &str) {
        match self.store.delete(raw) {
            Ok(removed) => {
                debug!("Deleted task: {}", removed);
                self.delete_input.reset();
            }
            Err(e) => self.report(e),
        }
        self.focus = Focus::DeleteInput;
    }

    pub(super) fn clear_all(&mut self) {
        self.store.clear();
    }

    pub(super) fn export_tasks(&mut self) {
        match self.store.export_snapshot(&self.export_dir) {
            Ok(path) => {
                self.notify(Toast::new(
                    format!("Tasks exported to {}", path.display()),
                    Severity::Info,
                ));
            }
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, err: TaskError) {
        let severity = match err {
            TaskError::EmptyList => Severity::Warning,
            _ => Severity::Error,
        };
        if err.is_user_error() {
            debug!("Rejected task operation: {}", err);
        } else {
            error!("Task operation failed: {}", err);
        }
        self.notify(Toast::new(err.to_string(), severity));
    }

    fn notify(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }
}
