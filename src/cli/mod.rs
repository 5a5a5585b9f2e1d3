//! CLI module for bridge-env
//!
//! Provides command-line interface for:
//! - check: Load and validate the deployment environment
//! - schema: Print the schema derived for a bridge mode

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, check_raw, run, run_command, schema};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_failure, write_failure_to, write_json, write_json_to};
