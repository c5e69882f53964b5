//! Deterministic text renderers.
//!
//! # Responsibility
//! - Map unit state or static config to terminal text.
//!
//! # Invariants
//! - Renderers hold no state and have no side effects.
//! - Equal inputs always produce byte-identical output.

pub mod card;
pub mod views;
