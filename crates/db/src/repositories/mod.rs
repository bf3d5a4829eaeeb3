//! Repository layer.
//!
//! Each repository is a zero-sized struct whose async methods take the
//! pool as the first argument. Multi-step writes run inside a single
//! transaction.

pub mod progress_repo;
pub mod user_repo;

pub use progress_repo::ProgressRepo;
pub use user_repo::UserRepo;
