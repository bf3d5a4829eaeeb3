//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `sprintcoach_db`, run the
//! pure progress logic from `sprintcoach_core`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod progress;
pub mod sprints;
pub mod users;
