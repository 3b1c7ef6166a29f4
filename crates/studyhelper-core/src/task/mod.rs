//! Task domain model.
//!
//! A task is one of two variants, work or personal. The variant is fixed
//! when the task is created and travels through persistence as an explicit
//! `"type"` discriminator (see [`codec`]).

pub mod codec;
pub mod store;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub use codec::TaskCodec;
pub use store::TaskStore;

/// Variant of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Work,
    Personal,
}

impl TaskKind {
    pub fn from_is_work(is_work: bool) -> Self {
        if is_work {
            TaskKind::Work
        } else {
            TaskKind::Personal
        }
    }

    /// Discriminator value written to the task file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Work => "Work",
            TaskKind::Personal => "Personal",
        }
    }

    /// Case-insensitive inverse of [`TaskKind::as_str`].
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("work") {
            Some(TaskKind::Work)
        } else if value.eq_ignore_ascii_case("personal") {
            Some(TaskKind::Personal)
        } else {
            None
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority.
///
/// Unrecognised values read from disk are kept verbatim in `Other` so they
/// survive a save and rank below `Low`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
    Other(String),
}

impl Priority {
    /// Sort rank: High=3, Medium=2, Low=1, anything else 0.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
            Priority::Other(_) => 0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Other(s) => s,
        }
    }

    /// Lenient conversion used by the codec; never fails.
    pub fn from_stored(value: &str) -> Self {
        value
            .parse()
            .unwrap_or_else(|_| Priority::Other(value.to_string()))
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("unknown priority '{s}' (expected high, medium or low)")),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Priority::from_stored(&value))
    }
}

/// A task in the list.
///
/// The kind has no setter: it is decided once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    priority: Priority,
    kind: TaskKind,
}

impl Task {
    /// Builds a task, rejecting a blank title.
    pub fn new(
        title: impl Into<String>,
        priority: Priority,
        kind: TaskKind,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        ValidationError::require_text("title", &title)?;
        Ok(Self::from_parts(title, priority, kind))
    }

    /// Builds a task without validation. Stored records are trusted as-is.
    pub(crate) fn from_parts(title: String, priority: Priority, kind: TaskKind) -> Self {
        Self {
            title,
            priority,
            kind,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn priority(&self) -> &Priority {
        &self.priority
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn is_work(&self) -> bool {
        self.kind == TaskKind::Work
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.title, self.kind, self.priority)
    }
}
