//! Event handlers bound by the view.
//!
//! Validation errors block on `window.alert`; any other failure only makes it
//! to the console since the row already shows what the user asked for.

use tasklist::{TaskElement, TaskError, TaskList, TaskStore};
use zoon::eprintln;

/// Where a failed event ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    /// Blocking message the user has to dismiss.
    Alert(String),
    Console(String),
}

impl Notice {
    fn for_error(action: &str, error: &TaskError) -> Self {
        if error.is_validation() {
            Notice::Alert(error.to_string())
        } else {
            Notice::Console(format!("Failed to {action}: {error:#}"))
        }
    }

    fn show(self) {
        match self {
            Notice::Alert(message) => show_alert(&message),
            Notice::Console(message) => eprintln!("{message}"),
        }
    }
}

pub fn add_task<S: TaskStore>(tasks: &TaskList<S>) {
    if let Err(error) = tasks.add_task() {
        Notice::for_error("add task", &error).show();
    }
}

pub fn remove_task<S: TaskStore>(tasks: &TaskList<S>, element: &TaskElement) {
    if let Err(error) = tasks.remove_task(element) {
        Notice::for_error(&format!("remove task '{}'", element.title), &error).show();
    }
}

pub fn mark_task_status<S: TaskStore>(tasks: &TaskList<S>, element: &TaskElement) {
    if let Err(error) = tasks.mark_task_status(element) {
        Notice::for_error(&format!("store status of task '{}'", element.title), &error).show();
    }
}

fn show_alert(message: &str) {
    let Some(window) = web_sys::window() else {
        eprintln!("{message}");
        return;
    };
    if let Err(alert_error) = window.alert_with_message(message) {
        eprintln!("{message} (alert failed: {alert_error:?})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist::{MemoryStorage, StorageBackend, TaskListConfig};

    /// Backend whose writes always fail.
    struct ReadOnlyStorage;

    impl StorageBackend for ReadOnlyStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, TaskError> {
            Ok(None)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), TaskError> {
            Err(TaskError::Storage("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), TaskError> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_title_alerts_with_message() {
        let tasks = TaskList::with_backend(MemoryStorage::new(), TaskListConfig::default());
        tasks.set_input("  ");
        let error = tasks.add_task().unwrap_err();

        assert_eq!(
            Notice::for_error("add task", &error),
            Notice::Alert("You left the field empty!".to_string())
        );
    }

    #[test]
    fn test_custom_message_is_alerted() {
        let config = TaskListConfig::default().with_empty_title_message("Type something first");
        let tasks = TaskList::with_backend(MemoryStorage::new(), config);
        let error = tasks.add_task().unwrap_err();

        assert_eq!(
            Notice::for_error("add task", &error),
            Notice::Alert("Type something first".to_string())
        );
    }

    #[test]
    fn test_storage_failure_goes_to_console() {
        let tasks = TaskList::with_backend(ReadOnlyStorage, TaskListConfig::default());
        tasks.set_input("Buy milk");
        let error = tasks.add_task().unwrap_err();

        let Notice::Console(message) = Notice::for_error("add task", &error) else {
            panic!("storage failure must not alert");
        };
        assert!(message.starts_with("Failed to add task: "));
        assert!(message.contains("quota exceeded"));
    }
}
