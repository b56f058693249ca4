//! CLI module for sdif
//!
//! Provides the command-line interface for:
//! - check: validate every record in a file
//! - dump: decode a file to JSON lines
//! - rewrite: decode and re-encode a file in canonical form

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, dump, rewrite, run};
pub use errors::{CliError, CliResult};
