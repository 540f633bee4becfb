//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `tally`.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "Manage a to-do list from the command line")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new task to the list.
    Add {
        /// The task text.
        text: String,
        /// Mark the task done on creation.
        #[arg(long)]
        done: bool,
    },
    /// Show the tasks on the list.
    List {
        /// Sort alphabetically by task text instead of creation order.
        #[arg(long)]
        abc: bool,
        /// Hide completed tasks.
        #[arg(long)]
        active: bool,
    },
    /// Mark a task as done.
    Done {
        /// Id of the task to complete.
        id: u64,
    },
    /// Remove a task from the list.
    Remove {
        /// Id of the task to remove.
        id: u64,
    },
    /// Remove every completed task.
    Clear,
}
