//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing and subcommand handlers.

mod args;
mod commands;

pub use args::{Args, Command, ConfigAction};
pub use commands::{
    capture_and_submit, handle_config_action, list_styles, submit_file, CommandError, RunContext,
};
