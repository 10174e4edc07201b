//! Domain model for users, projects, sections and comments.
//!
//! # Responsibility
//! - Define the canonical data structures shared by store, service and
//!   export layers.
//! - Keep identifier and timestamp conventions in one place.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - Timestamps are unix epoch milliseconds.
//! - A project's section order is user-assigned and must be preserved.

pub mod project;
pub mod user;

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current wall-clock time as unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
