use crate::Error;
use crate::cli::Command;
use crate::prompt::{AssumeYes, ConfirmationPrompt};
use crate::task::{Status, Task, TaskStore};
use chrono::Local;
use std::io::Write;
use tracing::debug;

pub const USAGE: &str = "Task CLI Usage:
  add <description>           Add a new task
  update <id> <description>   Update a task
  delete <id> [--yes]         Delete a task (--yes skips the confirmation)
  mark-todo <id>              Mark task as todo
  mark-in-progress <id>       Mark task as in progress
  mark-done <id>              Mark task as done
  list [filter]               List tasks (optional filter: todo, in-progress, done)";

/// `ctime`-style timestamp, e.g. `Mon Jan  2 15:04:05 2006`.
const DISPLAY_TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Which tasks `list` shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Only(Status),
    /// A filter that names no known status; it matches nothing.
    Unmatched,
}

impl ListFilter {
    pub fn parse(filter: Option<&str>) -> Self {
        match filter {
            None | Some("") => ListFilter::All,
            Some(name) => match name.parse() {
                Ok(status) => ListFilter::Only(status),
                Err(_) => ListFilter::Unmatched,
            },
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Only(status) => task.status() == *status,
            ListFilter::Unmatched => false,
        }
    }
}

/// Applies one parsed command to the in-memory store, reporting to `out`.
pub struct CommandDispatcher<'a, P: ConfirmationPrompt + ?Sized, W: Write> {
    store: &'a mut TaskStore,
    prompt: &'a mut P,
    out: &'a mut W,
}

impl<'a, P: ConfirmationPrompt + ?Sized, W: Write> CommandDispatcher<'a, P, W> {
    pub fn new(store: &'a mut TaskStore, prompt: &'a mut P, out: &'a mut W) -> Self {
        Self { store, prompt, out }
    }

    pub fn dispatch(&mut self, command: Command) -> Result<(), Error> {
        match command {
            Command::Add { description } => self.add(&description),
            Command::Update { id, description } => self.update(id, &description),
            Command::Delete { id, yes } => self.delete(id, yes),
            Command::MarkTodo { id } => self.mark(id, Status::Todo),
            Command::MarkInProgress { id } => self.mark(id, Status::InProgress),
            Command::MarkDone { id } => self.mark(id, Status::Done),
            Command::List { filter } => self.list(&ListFilter::parse(filter.as_deref())),
            Command::Help | Command::External(_) => {
                debug!("command does not touch the store");
                Ok(())
            }
        }
    }

    fn add(&mut self, words: &[String]) -> Result<(), Error> {
        let description = words.join(" ");
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }
        let id = self.store.add(description)?;
        debug!(id, "task added");
        writeln!(self.out, "Task added successfully (ID: {id})")?;
        Ok(())
    }

    fn update(&mut self, id: i64, words: &[String]) -> Result<(), Error> {
        let updated = u32::try_from(id)
            .is_ok_and(|task_id| self.store.update_description(task_id, words.join(" ")));
        if updated {
            writeln!(self.out, "Task with ID: {id} updated successfully")?;
        } else {
            debug!(id, "no task to update");
            writeln!(self.out, "Failed to update task with ID: {id}")?;
        }
        Ok(())
    }

    fn delete(&mut self, id: i64, yes: bool) -> Result<(), Error> {
        let deleted = if yes {
            remove_confirmed(&mut *self.store, id, &mut AssumeYes)?
        } else {
            remove_confirmed(&mut *self.store, id, &mut *self.prompt)?
        };
        if deleted {
            writeln!(self.out, "Task with ID: {id} deleted successfully")?;
        } else {
            debug!(id, "no task deleted");
            writeln!(self.out, "Failed to delete task with ID: {id}")?;
        }
        Ok(())
    }

    fn mark(&mut self, id: i64, status: Status) -> Result<(), Error> {
        let label = status.label();
        let marked =
            u32::try_from(id).is_ok_and(|task_id| self.store.set_status(task_id, status));
        if marked {
            writeln!(
                self.out,
                "Task with ID: {id} successfully marked as {label}"
            )?;
        } else {
            debug!(id, %status, "no task to mark");
            writeln!(self.out, "Failed to mark task with ID: {id} as {label}")?;
        }
        Ok(())
    }

    fn list(&mut self, filter: &ListFilter) -> Result<(), Error> {
        if self.store.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "ALL TASKS")?;
        for (index, task) in self.store.tasks().iter().enumerate() {
            if filter.matches(task) {
                write_task(&mut *self.out, index + 1, task)?;
            }
        }
        Ok(())
    }
}

/// Asks for confirmation on every task carrying `id` and removes the first
/// one confirmed. Declining moves on to the next match.
fn remove_confirmed<P: ConfirmationPrompt + ?Sized>(
    store: &mut TaskStore,
    id: i64,
    prompt: &mut P,
) -> Result<bool, Error> {
    let Ok(task_id) = u32::try_from(id) else {
        return Ok(false);
    };
    let question = format!("Are you sure you want to delete the task with ID: {id}? (y/n) ");
    for index in store.positions_of(task_id) {
        if prompt.confirm(&question).map_err(Error::Prompt)? {
            store.remove_at(index);
            return Ok(true);
        }
    }
    Ok(false)
}

fn write_task<W: Write>(out: &mut W, display_index: usize, task: &Task) -> std::io::Result<()> {
    writeln!(out, "Task #{display_index}:")?;
    writeln!(out, "  ID:          {}", task.id())?;
    writeln!(out, "  Description: {}", task.description())?;
    writeln!(out, "  Status:      {}", task.status())?;
    writeln!(
        out,
        "  Created at:  {}",
        task.created_at()
            .with_timezone(&Local)
            .format(DISPLAY_TIME_FORMAT)
    )?;
    writeln!(
        out,
        "  Updated at:  {}",
        task.updated_at()
            .with_timezone(&Local)
            .format(DISPLAY_TIME_FORMAT)
    )?;
    writeln!(out)
}
