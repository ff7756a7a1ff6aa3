//! CLI commands

pub mod check;
pub mod dump;
pub mod list;
pub mod new;
