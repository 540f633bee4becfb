//! `tally done` command.

use crate::config::Config;

/// Execute the `done` command.
///
/// Marks the task with the given id as completed and saves the list.
/// Ids are the ones shown by `tally list` for the current store state.
///
/// # Errors
///
/// Returns an error string when the id is unknown, the task is already
/// done, or the store cannot be loaded or written.
pub fn run(config: &Config, id: u64) -> Result<(), String> {
    let store = super::open_store(config);
    let mut list = super::load_list(&store, config)?;
    let task = list.complete_task(id).map_err(|err| err.to_string())?;
    println!("Completed {task}");
    super::save_list(&store, &list)
}
