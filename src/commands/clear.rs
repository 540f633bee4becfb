//! `tally clear` command.

use crate::config::Config;

/// Execute the `clear` command.
///
/// Removes every completed task, saves the survivors, and reports how
/// many tasks were dropped. Zero removals is a normal outcome.
///
/// # Errors
///
/// Returns an error string if the store cannot be loaded or written.
pub fn run(config: &Config) -> Result<(), String> {
    let store = super::open_store(config);
    let mut list = super::load_list(&store, config)?;
    let removed = list.remove_completed_tasks();
    super::save_list(&store, &list)?;
    println!("Removed {removed} completed task(s).");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskRecord;

    fn temp_config(name: &str) -> Config {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        Config { min_length: 2, store_path: dir.join("tasks.json") }
    }

    fn seed(config: &Config, records: &[TaskRecord]) {
        std::fs::create_dir_all(config.store_path.parent().unwrap()).unwrap();
        std::fs::write(&config.store_path, serde_json::to_string(records).unwrap()).unwrap();
    }

    fn stored_records(config: &Config) -> Vec<TaskRecord> {
        let contents = std::fs::read_to_string(&config.store_path).unwrap();
        serde_json::from_str(&contents).unwrap()
    }

    fn cleanup(config: &Config) {
        let _ = std::fs::remove_dir_all(config.store_path.parent().unwrap());
    }

    #[test]
    fn clear_drops_completed_tasks_and_keeps_the_rest() {
        let config = temp_config("tally_cmd_clear_persists");
        seed(
            &config,
            &[
                TaskRecord { text: "Buy milk".to_string(), done: true },
                TaskRecord { text: "Go".to_string(), done: false },
            ],
        );

        run(&config).unwrap();

        assert_eq!(
            stored_records(&config),
            vec![TaskRecord { text: "Go".to_string(), done: false }]
        );
        cleanup(&config);
    }

    #[test]
    fn clear_on_an_empty_store_succeeds() {
        let config = temp_config("tally_cmd_clear_empty");
        assert!(run(&config).is_ok());
        assert_eq!(stored_records(&config), Vec::new());
        cleanup(&config);
    }
}
