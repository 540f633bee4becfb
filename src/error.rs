//! Error types shared by the task list and the task store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by task-list operations and the backing store.
///
/// Every operation returns its failure to the immediate caller; nothing
/// is swallowed inside the core. The command layer renders these through
/// `Display` for the user.
#[derive(Debug, Error)]
pub enum Error {
    /// New task text is shorter than the configured minimum.
    #[error("task text must be at least {min} characters long")]
    Validation {
        /// The configured minimum length.
        min: usize,
    },

    /// No task carries the requested id.
    #[error("no task with id {id}")]
    NotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// The task exists but was already marked done.
    #[error("task {id} is already done")]
    AlreadyDone {
        /// The id of the completed task.
        id: u64,
    },

    /// The store file exists but does not hold valid task records.
    #[error("store file {} is corrupt: {source}", path.display())]
    CorruptStore {
        /// Path of the store file.
        path: PathBuf,
        /// The decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the store file failed.
    #[error("store I/O failed for {}: {source}", path.display())]
    Io {
        /// Path of the store file.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
