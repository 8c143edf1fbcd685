//! Utility modules.
//!
//! - `exec`: external command execution (terraform, import script)
//! - `path`: path expansion and normalization

pub mod exec;
pub mod path;
