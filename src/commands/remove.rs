//! `tally remove` command.

use crate::config::Config;

/// Execute the `remove` command.
///
/// Drops the task with the given id from the list and saves the rest.
/// The removed id is not reused within the session, but a later
/// invocation renumbers the survivors from 1 on reload.
///
/// # Errors
///
/// Returns an error string when the id is unknown or the store cannot
/// be loaded or written.
pub fn run(config: &Config, id: u64) -> Result<(), String> {
    let store = super::open_store(config);
    let mut list = super::load_list(&store, config)?;
    let task = list.remove_task(id).map_err(|err| err.to_string())?;
    println!("Removed {task}");
    super::save_list(&store, &list)
}
