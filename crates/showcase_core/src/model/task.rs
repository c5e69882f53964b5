//! Task record model.
//!
//! # Responsibility
//! - Define the record stored by the task-list unit.
//! - Generate identifiers that stay unique under rapid successive adds.
//!
//! # Invariants
//! - `id` is drawn from a collision-resistant generator, never the wall clock.
//! - `text` is never blank once a record exists; the add path rejects it.
//! - `done` is the only field that changes after creation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque identifier for one task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an identifier received from the host (e.g. parsed user input).
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// First eight hex characters, used by compact terminal views.
    pub fn short(&self) -> String {
        self.0.simple().to_string().chars().take(8).collect()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    /// Draft content exactly as entered, surrounding whitespace included.
    pub text: String,
    pub done: bool,
}

impl TaskRecord {
    /// Creates an open (not done) record with a generated id.
    ///
    /// Blank-text rejection happens in the task-list unit, not here.
    pub(crate) fn open(text: String) -> Self {
        Self {
            id: TaskId::generate(),
            text,
            done: false,
        }
    }

    pub(crate) fn toggle(&mut self) {
        self.done = !self.done;
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskId, TaskRecord};

    #[test]
    fn open_record_starts_not_done() {
        let record = TaskRecord::open("  write docs ".to_string());
        assert!(!record.done);
        assert_eq!(record.text, "  write docs ");
        assert!(!record.id.as_uuid().is_nil());
    }

    #[test]
    fn toggle_flips_done_only() {
        let mut record = TaskRecord::open("ship".to_string());
        let id = record.id;
        record.toggle();
        assert!(record.done);
        assert_eq!(record.id, id);
        assert_eq!(record.text, "ship");
    }

    #[test]
    fn short_id_is_eight_hex_chars() {
        let short = TaskId::generate().short();
        assert_eq!(short.len(), 8);
        assert!(short.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn task_id_serializes_as_plain_uuid_string() {
        let id = TaskId::generate();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }
}
