//! Domain model for todo items.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - A validly constructed item always has a non-empty trimmed title.
//! - `updated_at` never moves behind `created_at`.

pub mod todo;
