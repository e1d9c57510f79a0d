//! Command-line interface.
//!
//! Argument parsing lives in [`args`]; command implementations and the
//! dispatcher live in [`commands`].

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{Command, CommandDispatcher, CommandResult};
