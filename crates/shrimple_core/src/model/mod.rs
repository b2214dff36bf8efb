//! Domain model for persisted reminders.
//!
//! # Responsibility
//! - Define the canonical record shared by the codec, query and mutation
//!   layers.
//!
//! # Invariants
//! - A reminder is addressed only by its position in the store; there is no
//!   stable identity that survives deletion or reordering.

pub mod reminder;
