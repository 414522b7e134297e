//! Browser to-do list core.
//!
//! Task records are persisted as one JSON array in local storage, rendered
//! from a row template and kept in sync with the displayed list by
//! [`TaskList`]. Nothing here touches the DOM directly; the Zoon renderer
//! draws rows from the controller's [`zoon::MutableVec`].

pub use zoon;

#[macro_use]
pub mod logging;

pub mod codec;
pub mod config;
pub mod controller;
pub mod error;
pub mod record;
pub mod storage;
pub mod template;

pub use codec::{ApplyOutcome, StorageAction, TaskKey};
pub use config::TaskListConfig;
pub use controller::TaskList;
pub use error::TaskError;
pub use record::{TaskElement, TaskId, TaskRecord, TaskStatus};
pub use storage::{KeyedStore, LocalStorage, MemoryStorage, StorageBackend, TaskStore};
pub use template::{Fragment, ItemRenderer, Template, TaskRowRenderer};
