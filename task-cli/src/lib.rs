//! A small task tracker that keeps its tasks in a JSON file.
//!
//! Every invocation loads the whole store, runs exactly one command against
//! it and writes the store back.
pub mod cli;
pub mod commands;
pub mod config;
pub mod prompt;
pub mod repository;
pub mod task;

pub use commands::{CommandDispatcher, USAGE};
pub use repository::{JsonFileRepository, TaskRepository};
pub use task::{Status, Task, TaskStore};

use crate::cli::Command;
use crate::prompt::ConfirmationPrompt;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read json file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse json file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to convert tasks to json: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to update json file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Usage: task-cli add <description>")]
    EmptyDescription,
    #[error("No task id left to assign: the highest id is already {}", u32::MAX)]
    IdExhausted,
    #[error("Failed to register answer: {0}")]
    Prompt(#[source] std::io::Error),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Runs one command from load to save.
///
/// `help` (or no command at all) only prints the usage text and never touches
/// the store. Every other command, including unrecognised ones, loads the
/// store first and saves it afterwards. A failed load returns before anything
/// is written.
pub fn run<R: TaskRepository, W: Write>(
    command: Option<Command>,
    repository: &R,
    prompt: &mut dyn ConfirmationPrompt,
    out: &mut W,
) -> Result<(), Error> {
    let command = match command {
        None | Some(Command::Help) => {
            writeln!(out, "{USAGE}")?;
            return Ok(());
        }
        Some(command) => command,
    };

    let mut store = repository.load()?;
    CommandDispatcher::new(&mut store, prompt, out).dispatch(command)?;
    repository.save(&store)
}
