//! Ordered task collection.

use std::cmp::Reverse;
use std::path::Path;

use tracing::{info, warn};

use super::{Priority, Task, TaskCodec, TaskKind};
use crate::error::Result;
use crate::storage::{atomic_write, read_if_exists, LoadOutcome};

/// Owns the task list and its order.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Append a new task of the kind selected by `is_work`.
    ///
    /// # Errors
    /// Returns a validation error, with the store unchanged, if `title` is
    /// blank.
    pub fn add(&mut self, title: &str, priority: Priority, is_work: bool) -> Result<&Task> {
        let task = Task::new(title, priority, TaskKind::from_is_work(is_work))?;
        info!("Added task: {task}");
        let index = self.tasks.len();
        self.tasks.push(task);
        Ok(&self.tasks[index])
    }

    /// Case-insensitive ascending by title. Stable.
    pub fn sort_by_title(&mut self) {
        self.tasks.sort_by_cached_key(|t| t.title().to_lowercase());
        info!("Tasks sorted by name");
    }

    /// Descending by priority rank. Stable.
    pub fn sort_by_priority(&mut self) {
        self.tasks.sort_by_key(|t| Reverse(t.priority().rank()));
        info!("Tasks sorted by priority");
    }

    /// Tasks whose title contains `term`, ignoring case, in store order.
    ///
    /// A blank term returns every task.
    pub fn search(&self, term: &str) -> Vec<&Task> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.tasks.iter().collect();
        }
        let found: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.title().to_lowercase().contains(&needle))
            .collect();
        info!("Found {} tasks matching '{}'", found.len(), needle);
        found
    }

    /// Replace the whole list with the contents of `path`.
    ///
    /// # Errors
    /// I/O, parse and schema failures are returned with the store untouched.
    pub fn load(&mut self, path: &Path) -> Result<LoadOutcome> {
        let text = match read_if_exists(path) {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!("No saved tasks found at {}", path.display());
                return Ok(LoadOutcome::NotFound);
            }
            Err(e) => {
                warn!("Error loading tasks from {}: {e}", path.display());
                return Err(e.into());
            }
        };
        let tasks = TaskCodec::deserialize(&text).inspect_err(|e| {
            warn!("Error loading tasks from {}: {e}", path.display());
        })?;
        self.tasks = tasks;
        info!("Loaded {} tasks from {}", self.tasks.len(), path.display());
        Ok(LoadOutcome::Loaded(self.tasks.len()))
    }

    /// Write the list to `path`, replacing any previous file atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = TaskCodec::serialize(&self.tasks)?;
        atomic_write(path, &text).inspect_err(|e| {
            warn!("Error saving tasks to {}: {e}", path.display());
        })?;
        info!("Tasks saved to: {}", path.display());
        Ok(())
    }
}
