//! `tally list` command.

use crate::config::Config;

/// Execute the `list` command.
///
/// Prints the tasks one per line in creation order, or alphabetically
/// with `--abc`; `--active` hides completed tasks. Read-only: the store
/// is not rewritten.
///
/// # Errors
///
/// Returns an error string if the store cannot be loaded.
pub fn run(config: &Config, abc: bool, active: bool) -> Result<(), String> {
    let store = super::open_store(config);
    let list = super::load_list(&store, config)?;

    let view = list.list_tasks(abc, active);
    if view.is_empty() {
        println!("No tasks.");
        return Ok(());
    }
    for task in &view {
        println!("{task}");
    }
    println!("\n{} task(s) total.", view.len());
    Ok(())
}
