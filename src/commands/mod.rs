//! Command dispatch and handlers.
//!
//! Every handler performs one full session against the store: load the
//! persisted records, replay them into a fresh [`TaskList`], apply the
//! requested operation, and (for mutating commands) save the
//! default-order view back.

pub mod add;
pub mod clear;
pub mod done;
pub mod list;
pub mod remove;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::cli::Command;
use crate::config::Config;
use crate::store::TaskStore;
use crate::task::TaskList;

/// Dispatch a parsed command to its handler.
///
/// Configuration is read from the environment once per invocation and
/// handed down by reference; see [`Config::from_env`].
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = Config::from_env();
    dispatch_with_config(command, &config)
}

/// Dispatch a command with the given configuration.
fn dispatch_with_config(command: &Command, config: &Config) -> Result<(), String> {
    match command {
        Command::Add { text, done } => add::run(config, text, *done),
        Command::List { abc, active } => list::run(config, *abc, *active),
        Command::Done { id } => done::run(config, *id),
        Command::Remove { id } => remove::run(config, *id),
        Command::Clear => clear::run(config),
    }
}

/// Opens the task store configured for this invocation.
fn open_store(config: &Config) -> TaskStore {
    TaskStore::new(Box::new(LiveFileSystem), &config.store_path)
}

/// Loads the store and replays its records into a fresh task list.
///
/// Stored ids are not preserved: every load numbers tasks sequentially
/// from 1 in stored order. Restoring skips the minimum-length rule so a
/// previously accepted task stays loadable after the configured minimum
/// grows.
fn load_list(store: &TaskStore, config: &Config) -> Result<TaskList, String> {
    let records = store.load().map_err(|err| err.to_string())?;
    let mut list = TaskList::new(config.min_length);
    for record in records {
        list.restore_task(&record.text, record.done);
    }
    Ok(list)
}

/// Writes the current default-order view of the list back to the store.
fn save_list(store: &TaskStore, list: &TaskList) -> Result<(), String> {
    store.save(&list.list_tasks(false, false)).map_err(|err| err.to_string())
}
