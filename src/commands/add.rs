//! `tally add` command.

use crate::config::Config;

/// Execute the `add` command.
///
/// Appends a task with the given text, optionally already completed,
/// and saves the list.
///
/// # Errors
///
/// Returns an error string when the text is shorter than the configured
/// minimum or when the store cannot be loaded or written.
pub fn run(config: &Config, text: &str, done: bool) -> Result<(), String> {
    let store = super::open_store(config);
    let mut list = super::load_list(&store, config)?;
    let task = list.add_task(text, done).map_err(|err| err.to_string())?;
    println!("Added {task}");
    super::save_list(&store, &list)
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

    fn stored_records(config: &Config) -> Vec<TaskRecord> {
        let contents = std::fs::read_to_string(&config.store_path).unwrap();
        serde_json::from_str(&contents).unwrap()
    }

    fn cleanup(config: &Config) {
        let _ = std::fs::remove_dir_all(config.store_path.parent().unwrap());
    }

    #[test]
    fn add_persists_the_new_task() {
        let config = temp_config("tally_cmd_add_persists");

        run(&config, "Buy milk", false).unwrap();
        run(&config, "Go", true).unwrap();

        assert_eq!(
            stored_records(&config),
            vec![
                TaskRecord { text: "Buy milk".to_string(), done: false },
                TaskRecord { text: "Go".to_string(), done: true },
            ]
        );
        cleanup(&config);
    }

    #[test]
    fn rejected_add_reports_the_minimum_and_leaves_the_store_alone() {
        let config = temp_config("tally_cmd_add_rejected");

        let err = run(&config, "A", false).unwrap_err();
        assert!(err.contains("at least 2"));
        assert!(!config.store_path.exists());
        cleanup(&config);
    }
}
