//! Domain records owned by the showcase units.
//!
//! # Responsibility
//! - Define the task record kept by the task-list unit.
//! - Define the static presentational config consumed by the card renderer.
//!
//! # Invariants
//! - Every task record is identified by a `TaskId` that is never reused.
//! - Presentational config is read-only input; nothing in core mutates it.

pub mod showcase;
pub mod task;
