//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row. Skill names stay plain strings at this
//! layer; the core crate constrains them to the fixed set before any
//! write.

pub mod skill_state;
pub mod sprint_log;
pub mod user;
