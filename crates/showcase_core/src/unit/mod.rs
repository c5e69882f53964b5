//! Stateful showcase units.
//!
//! # Responsibility
//! - Hold the two stateful units as explicit state structs with transitions.
//! - Keep each unit's state exclusively owned; units never reference each other.
//!
//! # Invariants
//! - Units are parameterless on creation.
//! - Invalid input is absorbed as a no-op, never surfaced as an error.

pub mod clock;
pub mod counter;
pub mod task_list;
