//! Task sequence encoding and the read-modify-write storage actions.
//!
//! Every action reads the whole persisted sequence, changes it in memory and
//! writes the whole sequence back. Check, uncheck and remove all find their
//! record by id; the displayed index travels along only as a hint and a
//! mismatch is logged.

use std::collections::HashSet;

use serde::Deserialize;
use zoon::serde_json;

use crate::error::TaskError;
use crate::record::{TaskId, TaskRecord};
use crate::storage::TaskStore;

/// Identifies the record behind a displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskKey {
    pub id: TaskId,
    pub task_name: String,
    /// Displayed position of the row.
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageAction {
    Add(TaskRecord),
    Check(TaskKey),
    Uncheck(TaskKey),
    Remove(TaskKey),
}

impl StorageAction {
    pub fn name(&self) -> &'static str {
        match self {
            StorageAction::Add(_) => "add",
            StorageAction::Check(_) => "check",
            StorageAction::Uncheck(_) => "uncheck",
            StorageAction::Remove(_) => "remove",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The sequence was changed and written back.
    Applied,
    /// No record matched the key; nothing was written.
    Missed,
}

/// A decoded task sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    pub records: Vec<TaskRecord>,
    /// Some entries had no id, or repeated an earlier entry's id, and were
    /// given a fresh one; the sequence should be written back so the ids stick.
    pub upgraded: bool,
}

/// Persisted entry as read. Entries written before ids existed carry only
/// `task_name` and `checked`.
#[derive(Deserialize)]
struct StoredRecord {
    id: Option<TaskId>,
    task_name: String,
    #[serde(default)]
    checked: bool,
}

/// Strict decoding.
///
/// Ids come out unique: the first entry keeps a repeated id, later ones get
/// a fresh id.
pub fn try_decode(raw: &str) -> Result<Decoded, TaskError> {
    let stored: Vec<StoredRecord> = serde_json::from_str(raw)
        .map_err(|error| TaskError::Deserialization(format!("{error:#}")))?;
    let mut seen = HashSet::with_capacity(stored.len());
    let mut upgraded = false;
    let records = stored
        .into_iter()
        .map(|stored| {
            let id = match stored.id {
                Some(id) if seen.insert(id) => id,
                Some(id) => {
                    log_info!("[codec] task '{}' repeats id {id}, assigning a new one", stored.task_name);
                    upgraded = true;
                    TaskId::new()
                }
                None => {
                    upgraded = true;
                    TaskId::new()
                }
            };
            TaskRecord {
                id,
                task_name: stored.task_name,
                checked: stored.checked,
            }
        })
        .collect();
    Ok(Decoded { records, upgraded })
}

/// Decoding used on load: malformed data is logged and read as an empty
/// sequence, so a corrupted store never blocks the page.
pub fn decode(raw: &str) -> Decoded {
    match try_decode(raw) {
        Ok(decoded) => decoded,
        Err(error) => {
            log_error!("{error:#}, starting with an empty task list");
            Decoded::default()
        }
    }
}

pub fn encode(records: &[TaskRecord]) -> Result<String, TaskError> {
    serde_json::to_string(records).map_err(|error| TaskError::Serialization(format!("{error:#}")))
}

/// Applies `action` to the sequence held by `store`.
pub fn apply(store: &impl TaskStore, action: StorageAction) -> Result<ApplyOutcome, TaskError> {
    let mut records = store.load();
    log_debug!("[codec] {} on {} stored task(s)", action.name(), records.len());

    let outcome = match action {
        StorageAction::Add(record) => {
            records.push(record);
            ApplyOutcome::Applied
        }
        StorageAction::Check(key) => set_checked(&mut records, &key, true),
        StorageAction::Uncheck(key) => set_checked(&mut records, &key, false),
        StorageAction::Remove(key) => match position_of(&records, &key) {
            Some(position) => {
                records.remove(position);
                ApplyOutcome::Applied
            }
            None => ApplyOutcome::Missed,
        },
    };

    if outcome == ApplyOutcome::Applied {
        store.save(&records)?;
    }
    Ok(outcome)
}

fn set_checked(records: &mut [TaskRecord], key: &TaskKey, checked: bool) -> ApplyOutcome {
    match position_of(records, key) {
        Some(position) => {
            records[position].checked = checked;
            ApplyOutcome::Applied
        }
        None => ApplyOutcome::Missed,
    }
}

fn position_of(records: &[TaskRecord], key: &TaskKey) -> Option<usize> {
    let Some(position) = records.iter().position(|record| record.id == key.id) else {
        log_debug!("[codec] no stored task '{}' ({})", key.task_name, key.id);
        return None;
    };
    if position != key.index || records[position].task_name != key.task_name {
        log_info!(
            "[codec] task '{}' is displayed at {} but stored at {} as '{}'",
            key.task_name,
            key.index,
            position,
            records[position].task_name
        );
    }
    Some(position)
}
