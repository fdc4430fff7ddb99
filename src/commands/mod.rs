//! Subcommand handlers for the mediastrip binary.

pub mod blanket;
pub mod compact;
pub mod completions;
pub mod config;
pub mod locate;
pub mod targeted;
