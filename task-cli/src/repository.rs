use crate::Error;
use crate::task::{Task, TaskStore};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads and persists the whole task list.
pub trait TaskRepository {
    fn load(&self) -> Result<TaskStore, Error>;
    fn save(&self, store: &TaskStore) -> Result<(), Error>;
}

/// Keeps tasks in a single JSON file holding a top-level array.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskRepository for JsonFileRepository {
    /// A missing file, an empty file and a `null` document all load as an
    /// empty store.
    fn load(&self) -> Result<TaskStore, Error> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no task file yet, starting empty");
                return Ok(TaskStore::new());
            }
            Err(source) => {
                return Err(Error::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if contents.is_empty() {
            return Ok(TaskStore::new());
        }

        let tasks: Option<Vec<Task>> =
            serde_json::from_slice(&contents).map_err(|source| Error::Parse {
                path: self.path.clone(),
                source,
            })?;
        let store = TaskStore::from(tasks.unwrap_or_default());
        debug!(path = %self.path.display(), tasks = store.len(), "loaded tasks");
        Ok(store)
    }

    /// Overwrites the file with the tab-indented JSON array.
    fn save(&self, store: &TaskStore) -> Result<(), Error> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        store
            .tasks()
            .serialize(&mut serializer)
            .map_err(Error::Serialize)?;

        fs::write(&self.path, buffer).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), tasks = store.len(), "saved tasks");
        Ok(())
    }
}
