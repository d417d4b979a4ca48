use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A single tracked task, as stored in the task file.
#[derive(Debug, Eq, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: u32,
    description: String,
    status: Status,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(
        id: u32,
        description: String,
        status: Status,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[derive(Debug, Default, Eq, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// Human wording used in command confirmations, e.g. "in progress".
    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in progress",
            Status::Done => "done",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// The ordered, in-memory task list for one invocation.
///
/// Tasks keep the order they were appended in; that order is what gets
/// written back to disk and what `list` displays.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl From<Vec<Task>> for TaskStore {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// The id the next added task receives: one past the highest id present,
    /// or 1 when the store is empty. Fails once the highest id is `u32::MAX`.
    pub fn next_id(&self) -> Result<u32, Error> {
        match self.tasks.iter().map(|task| task.id).max() {
            None => Ok(1),
            Some(highest) => highest.checked_add(1).ok_or(Error::IdExhausted),
        }
    }

    pub fn add(&mut self, description: String) -> Result<u32, Error> {
        let id = self.next_id()?;
        let now = Utc::now();
        self.tasks.push(Task {
            id,
            description,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Replaces the description of the task with `id`. `updated_at` is left
    /// as it was. Returns false when no task has that id.
    pub fn update_description(&mut self, id: u32, description: String) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.description = description;
                true
            }
            None => false,
        }
    }

    /// Sets the status of the task with `id`, leaving `updated_at` untouched.
    pub fn set_status(&mut self, id: u32, status: Status) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    pub fn positions_of(&self, id: u32) -> Vec<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.id == id)
            .map(|(index, _)| index)
            .collect()
    }

    /// Removes the task at `index`, shifting later tasks down.
    pub fn remove_at(&mut self, index: usize) -> Task {
        self.tasks.remove(index)
    }
}
