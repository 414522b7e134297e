//! Widget configuration and the markup contract.

use std::borrow::Cow;

/// Local storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "Tasks";

/// Message shown when a task is added with an empty title.
pub const DEFAULT_EMPTY_TITLE_MESSAGE: &str = "You left the field empty!";

// Class names and attributes of the rendered markup.
pub const TASK_LIST_CLASS: &str = "task-list";
pub const TASK_CLASS: &str = "task";
pub const DONE_CLASS: &str = "done";
pub const TITLE_CLASS: &str = "title";
pub const ICON_CLASS: &str = "icon";
pub const DELETE_CLASS: &str = "delete";
pub const INPUT_CLASS: &str = "text";
pub const ADD_CLASS: &str = "add";
pub const INDEX_ATTRIBUTE: &str = "data-index";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListConfig {
    /// Key holding the JSON-encoded task sequence.
    pub storage_key: Cow<'static, str>,
    pub empty_title_message: Cow<'static, str>,
}

impl TaskListConfig {
    pub fn with_storage_key(mut self, storage_key: impl Into<Cow<'static, str>>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    pub fn with_empty_title_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.empty_title_message = message.into();
        self
    }
}

impl Default for TaskListConfig {
    fn default() -> Self {
        Self {
            storage_key: Cow::Borrowed(DEFAULT_STORAGE_KEY),
            empty_title_message: Cow::Borrowed(DEFAULT_EMPTY_TITLE_MESSAGE),
        }
    }
}
