/// Handles argument parsing.
pub mod args;

/// Interactive question flow for the scaffold commands.
pub mod questions;

/// Orchestrates one scaffold command end to end.
pub mod runner;

pub use args::{
    get_log_level_from_verbose, parse_cli, Cli, Commands, EntityArgs, PageArgs, SharedArgs,
};
pub use runner::run;
