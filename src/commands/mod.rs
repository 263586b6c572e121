//! CLI command implementations.

pub mod check;
pub mod environments;
pub mod show;
