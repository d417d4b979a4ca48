use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "task-cli",
    version,
    about = "Track tasks in a local JSON file",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a new task
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },
    /// Replace a task's description
    Update {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },
    /// Delete a task after confirmation
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Mark a task as todo
    MarkTodo {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Mark a task as in progress
    MarkInProgress {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Mark a task as done
    MarkDone {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// List tasks, optionally only those with a given status
    List { filter: Option<String> },
    /// Show usage
    Help,
    #[command(external_subcommand)]
    External(Vec<String>),
}
