//! JSON encoding of the task list.
//!
//! ```text
//! [
//!   { "title": "Write report", "priority": "High", "type": "Work" },
//!   { "title": "Gym", "priority": "Low", "type": "Personal" }
//! ]
//! ```
//!
//! Decoding is all-or-nothing: one bad record fails the whole document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Priority, Task, TaskKind};
use crate::error::{CoreError, ParseError, Result, SchemaError};

const DISCRIMINATOR: &str = "type";

#[derive(Serialize)]
struct TaskRecordOut<'a> {
    title: &'a str,
    priority: &'a Priority,
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct TaskRecordIn {
    title: String,
    #[serde(default)]
    priority: Priority,
}

pub struct TaskCodec;

impl TaskCodec {
    /// Encode tasks as a pretty-printed JSON array.
    pub fn serialize(tasks: &[Task]) -> Result<String> {
        let records: Vec<_> = tasks
            .iter()
            .map(|t| TaskRecordOut {
                title: t.title(),
                priority: t.priority(),
                kind: t.kind().as_str(),
            })
            .collect();
        serde_json::to_string_pretty(&records).map_err(CoreError::Encode)
    }

    /// Decode a JSON array of task records.
    ///
    /// # Errors
    /// - [`ParseError::Document`] if the text is not a JSON array.
    /// - [`SchemaError`] if a record's `type` is missing or not Work/Personal.
    /// - [`ParseError::Record`] if a record's other fields have the wrong shape.
    pub fn deserialize(text: &str) -> Result<Vec<Task>> {
        let values: Vec<Value> = serde_json::from_str(text).map_err(ParseError::Document)?;
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| decode_record(index, value))
            .collect()
    }
}

fn decode_record(index: usize, value: Value) -> Result<Task> {
    let kind = match value.get(DISCRIMINATOR) {
        None | Some(Value::Null) => {
            return Err(SchemaError::MissingDiscriminator { index }.into())
        }
        Some(Value::String(s)) => {
            TaskKind::parse(s).ok_or_else(|| SchemaError::UnknownDiscriminator {
                index,
                value: s.clone(),
            })?
        }
        Some(other) => {
            return Err(SchemaError::UnknownDiscriminator {
                index,
                value: other.to_string(),
            }
            .into())
        }
    };
    let record: TaskRecordIn =
        serde_json::from_value(value).map_err(|source| ParseError::Record { index, source })?;
    Ok(Task::from_parts(record.title, record.priority, kind))
}
