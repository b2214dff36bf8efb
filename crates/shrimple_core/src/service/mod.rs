//! Use-case services over the repository seam.
//!
//! # Responsibility
//! - Orchestrate load / filter / mutate / persist flows for callers.
//! - Keep the CLI free of business logic.

pub mod reminder_service;

pub use reminder_service::{ReminderService, ServiceError, ServiceResult};
