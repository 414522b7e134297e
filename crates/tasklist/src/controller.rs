//! The task list controller.
//!
//! `TaskList` owns the displayed rows (a `MutableVec` the renderer draws
//! from), the new-task input and the injected [`TaskStore`]. Every operation
//! runs to completion synchronously: it updates the store through the codec
//! and then the displayed rows, so the two never drift between events.

use zoon::{Mutable, MutableVec};

use crate::codec::{self, ApplyOutcome, StorageAction, TaskKey};
use crate::config::TaskListConfig;
use crate::error::TaskError;
use crate::record::{TaskElement, TaskId, TaskRecord, TaskStatus};
use crate::storage::{KeyedStore, LocalStorage, StorageBackend, TaskStore};
use crate::template::{Template, TaskRowRenderer};

pub struct TaskList<S> {
    store: S,
    template: Template<TaskElement, TaskRowRenderer>,
    elements: MutableVec<TaskElement>,
    input: Mutable<String>,
    config: TaskListConfig,
}

impl TaskList<KeyedStore<LocalStorage>> {
    /// Controller persisting to the browser's local storage.
    pub fn in_browser(config: TaskListConfig) -> Self {
        Self::with_backend(LocalStorage, config)
    }
}

impl<B: StorageBackend> TaskList<KeyedStore<B>> {
    /// Controller keeping its tasks under `config.storage_key` of `backend`.
    pub fn with_backend(backend: B, config: TaskListConfig) -> Self {
        let store = KeyedStore::new(backend, config.storage_key.clone());
        Self::new(store, config)
    }
}

impl<S: TaskStore> TaskList<S> {
    pub fn new(store: S, config: TaskListConfig) -> Self {
        Self {
            store,
            template: Template::new(TaskElement::blank(), TaskRowRenderer),
            elements: MutableVec::new(),
            input: Mutable::new(String::new()),
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Displayed rows, in display order.
    pub fn elements(&self) -> &MutableVec<TaskElement> {
        &self.elements
    }

    pub fn snapshot(&self) -> Vec<TaskElement> {
        self.elements.lock_ref().to_vec()
    }

    pub fn len(&self) -> usize {
        self.elements.lock_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.lock_ref().is_empty()
    }

    /// The displayed row with `id`, if it is still displayed.
    pub fn find(&self, id: TaskId) -> Option<TaskElement> {
        self.elements
            .lock_ref()
            .iter()
            .find(|element| element.id == id)
            .cloned()
    }

    /// Text of the new-task input.
    pub fn input(&self) -> &Mutable<String> {
        &self.input
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.input.set(text.into());
    }

    pub fn get_task_title<'a>(&self, element: &'a TaskElement) -> &'a str {
        &element.title
    }

    pub fn get_task_index(&self, element: &TaskElement) -> usize {
        element.index
    }

    /// One past the highest displayed index, `0` for an empty list.
    pub fn get_latest_task_index(&self) -> usize {
        self.elements
            .lock_ref()
            .iter()
            .map(|element| element.index)
            .max()
            .map_or(0, |highest| highest + 1)
    }

    /// Adds the task typed in the input and clears the input.
    ///
    /// An empty or whitespace-only input is rejected with
    /// [`TaskError::Validation`] and leaves everything as it was.
    pub fn add_task(&self) -> Result<TaskElement, TaskError> {
        let title = self.input.get_cloned();
        let element = self.add_task_with_title(&title)?;
        self.input.set(String::new());
        Ok(element)
    }

    /// Adds a task with the given title; the input is not touched.
    pub fn add_task_with_title(&self, title: &str) -> Result<TaskElement, TaskError> {
        if title.trim().is_empty() {
            log_debug!("[tasks] rejected empty title");
            return Err(TaskError::Validation(self.config.empty_title_message.to_string()));
        }

        let record = TaskRecord::new(title);
        codec::apply(&self.store, StorageAction::Add(record.clone()))?;

        let element = self.template.fill_item(&record, self.get_latest_task_index());
        self.elements.lock_mut().push_cloned(element.clone());
        log_debug!("[tasks] added '{}' at {}", element.title, element.index);
        Ok(element)
    }

    /// Removes the row and its stored record, then reindexes the remaining
    /// rows to `0..n`.
    ///
    /// A row that is no longer displayed is left alone and reported as
    /// [`ApplyOutcome::Missed`].
    pub fn remove_task(&self, element: &TaskElement) -> Result<ApplyOutcome, TaskError> {
        let Some(current) = self.find(element.id) else {
            log_debug!("[tasks] '{}' is not displayed, nothing to remove", element.title);
            return Ok(ApplyOutcome::Missed);
        };

        let outcome = codec::apply(&self.store, StorageAction::Remove(key_of(&current)))?;

        let mut elements = self.elements.lock_mut();
        if let Some(position) = elements.iter().position(|element| element.id == current.id) {
            elements.remove(position);
        }
        for position in 0..elements.len() {
            if elements[position].index != position {
                let mut element = elements[position].clone();
                element.index = position;
                elements.set_cloned(position, element);
            }
        }
        log_debug!("[tasks] removed '{}', {} left", current.title, elements.len());
        Ok(outcome)
    }

    /// Toggles the row between checked and unchecked and stores the new
    /// state. Returns the status the row ends up with.
    pub fn mark_task_status(&self, element: &TaskElement) -> Result<TaskStatus, TaskError> {
        let toggled = {
            let mut elements = self.elements.lock_mut();
            let Some(position) = elements.iter().position(|displayed| displayed.id == element.id)
            else {
                log_debug!("[tasks] '{}' is not displayed, nothing to toggle", element.title);
                return Ok(element.status);
            };
            let mut toggled = elements[position].clone();
            toggled.status = toggled.status.toggle();
            elements.set_cloned(position, toggled.clone());
            toggled
        };

        let key = key_of(&toggled);
        let action = match toggled.status {
            TaskStatus::Checked => StorageAction::Check(key),
            TaskStatus::Unchecked => StorageAction::Uncheck(key),
        };
        codec::apply(&self.store, action)?;
        Ok(toggled.status)
    }

    /// Appends a row for every stored task. Returns the number of rows added.
    pub fn show_all_tasks(&self) -> usize {
        let records = self.store.load();
        if records.is_empty() {
            return 0;
        }

        let start = self.get_latest_task_index();
        let fragment = self.template.fill_collection_from(&records, start);
        let count = fragment.len();
        let mut elements = self.elements.lock_mut();
        for element in fragment {
            elements.push_cloned(element);
        }
        log_info!("[tasks] loaded {count} task(s) from '{}'", self.config.storage_key);
        count
    }
}

fn key_of(element: &TaskElement) -> TaskKey {
    TaskKey {
        id: element.id,
        task_name: element.title.clone(),
        index: element.index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn task_list() -> TaskList<KeyedStore<MemoryStorage>> {
        TaskList::with_backend(MemoryStorage::new(), TaskListConfig::default())
    }

    #[test]
    fn test_latest_index_of_empty_list_is_zero() {
        assert_eq!(task_list().get_latest_task_index(), 0);
    }

    #[test]
    fn test_latest_index_follows_highest() {
        let tasks = task_list();
        tasks.add_task_with_title("A").unwrap();
        tasks.add_task_with_title("B").unwrap();
        assert_eq!(tasks.get_latest_task_index(), 2);
    }

    #[test]
    fn test_title_and_index_accessors() {
        let tasks = task_list();
        tasks.add_task_with_title("A").unwrap();
        let element = tasks.add_task_with_title("B").unwrap();
        assert_eq!(tasks.get_task_title(&element), "B");
        assert_eq!(tasks.get_task_index(&element), 1);
    }

    #[test]
    fn test_add_task_clears_input() {
        let tasks = task_list();
        tasks.set_input("Buy milk");
        let element = tasks.add_task().unwrap();
        assert_eq!(element.title, "Buy milk");
        assert_eq!(tasks.input().get_cloned(), "");
    }

    #[test]
    fn test_rejected_add_keeps_input() {
        let tasks = task_list();
        tasks.set_input("   ");
        let error = tasks.add_task().unwrap_err();
        assert_eq!(error, TaskError::Validation("You left the field empty!".to_string()));
        assert_eq!(tasks.input().get_cloned(), "   ");
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_toggle_of_removed_row_is_noop() {
        let tasks = task_list();
        let element = tasks.add_task_with_title("A").unwrap();
        tasks.remove_task(&element).unwrap();

        assert_eq!(tasks.mark_task_status(&element), Ok(TaskStatus::Unchecked));
        assert_eq!(tasks.remove_task(&element), Ok(ApplyOutcome::Missed));
        assert!(tasks.store().load().is_empty());
    }

    #[test]
    fn test_toggle_uses_displayed_state_not_caller_copy() {
        let tasks = task_list();
        let stale = tasks.add_task_with_title("A").unwrap();
        assert_eq!(tasks.mark_task_status(&stale), Ok(TaskStatus::Checked));
        // `stale` still says unchecked; the displayed row decides.
        assert_eq!(tasks.mark_task_status(&stale), Ok(TaskStatus::Unchecked));
    }
}
