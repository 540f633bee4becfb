//! Task store — flat-file persistence for the task list.
//!
//! Tasks persist as a single JSON array of `{text, done}` records.
//! Identifiers are a runtime-only concept: they are dropped on save and
//! the list assigns fresh sequential ids on every load, so a stored id
//! must never be treated as a durable external key.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::ports::filesystem::FileSystem;
use crate::task::Task;

/// One persisted task record, exactly as it appears in the store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskRecord {
    /// The task text.
    pub text: String,
    /// Whether the task was completed.
    pub done: bool,
}

/// Flat-file persistence for the task list.
///
/// All I/O goes through the [`FileSystem`] port so the store works
/// unchanged against the real disk or an in-memory filesystem in tests.
pub struct TaskStore {
    fs: Box<dyn FileSystem>,
    path: PathBuf,
}

impl TaskStore {
    /// Creates a store backed by the given filesystem and file path.
    #[must_use]
    pub fn new(fs: Box<dyn FileSystem>, path: &Path) -> Self {
        Self { fs, path: path.to_path_buf() }
    }

    /// Loads the persisted records in the order of the most recent save.
    ///
    /// A missing store file is an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::CorruptStore`] if its contents do not decode as an array
    /// of `{text, done}` records.
    pub fn load(&self) -> Result<Vec<TaskRecord>, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(Vec::new());
        }
        let contents = self
            .fs
            .read_to_string(&self.path)
            .map_err(|source| Error::Io { path: self.path.clone(), source })?;
        serde_json::from_str(&contents)
            .map_err(|source| Error::CorruptStore { path: self.path.clone(), source })
    }

    /// Overwrites the store with the given tasks.
    ///
    /// Only `text` and `done` are written; ids are dropped. The
    /// overwrite is atomic from a reader's point of view, and a failed
    /// write leaves the previous store contents intact (see
    /// [`FileSystem::write`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if encoding or writing fails.
    pub fn save(&self, tasks: &[&Task]) -> Result<(), Error> {
        let records: Vec<TaskRecord> = tasks
            .iter()
            .map(|task| TaskRecord { text: task.text().to_string(), done: task.is_done() })
            .collect();
        let mut json = serde_json::to_string_pretty(&records)
            .map_err(|source| Error::Io { path: self.path.clone(), source: Box::new(source) })?;
        json.push('\n');
        self.fs
            .write(&self.path, &json)
            .map_err(|source| Error::Io { path: self.path.clone(), source })
    }
}
