//! Domain types and pure progress logic for the sprint coach.
//!
//! The `core` crate contains no database or HTTP dependencies; callers
//! pre-load rows and pass them in.

pub mod error;
pub mod progress;
pub mod skill;
pub mod types;
