//! CLI module - argument parsing, prompts and subcommands

pub mod args;
pub mod outcomes;
mod prompts;

pub use args::{Cli, Commands, TABLES_DIR_NAME};
pub use prompts::*;
