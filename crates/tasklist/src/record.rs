//! Task records (the persisted unit) and their displayed projection.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::config::{DONE_CLASS, TASK_CLASS};

/// Stable task identity, assigned once at creation.
pub type TaskId = Ulid;

/// One persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub task_name: String,
    pub checked: bool,
}

impl TaskRecord {
    /// A new, unchecked task with a fresh id.
    pub fn new(task_name: impl Into<String>) -> Self {
        Self {
            id: Ulid::new(),
            task_name: task_name.into(),
            checked: false,
        }
    }

    pub fn status(&self) -> TaskStatus {
        TaskStatus::from(self.checked)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    Unchecked,
    Checked,
}

impl TaskStatus {
    pub fn toggle(self) -> Self {
        match self {
            TaskStatus::Unchecked => TaskStatus::Checked,
            TaskStatus::Checked => TaskStatus::Unchecked,
        }
    }

    pub fn is_checked(self) -> bool {
        self == TaskStatus::Checked
    }
}

impl From<bool> for TaskStatus {
    fn from(checked: bool) -> Self {
        if checked {
            TaskStatus::Checked
        } else {
            TaskStatus::Unchecked
        }
    }
}

/// A task row as displayed.
///
/// `index` is the row position at the time the row was rendered or last
/// reindexed; it ends up in the `data-index` attribute. The row is matched
/// to its stored record through `id`, never through `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskElement {
    pub id: TaskId,
    pub title: String,
    pub status: TaskStatus,
    pub index: usize,
}

impl TaskElement {
    /// Empty row used as template content.
    pub fn blank() -> Self {
        Self {
            id: Ulid::nil(),
            title: String::new(),
            status: TaskStatus::Unchecked,
            index: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status.is_checked()
    }

    /// Class list of the row root: `task`, plus `done` when checked.
    pub fn class_name(&self) -> String {
        if self.is_done() {
            format!("{TASK_CLASS} {DONE_CLASS}")
        } else {
            TASK_CLASS.to_string()
        }
    }
}
