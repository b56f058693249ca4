//! CLI argument definitions using clap
//!
//! Commands:
//! - sdif check <file>
//! - sdif dump <file>
//! - sdif rewrite <file> [--output <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sdif - a strict, schema-driven codec for SDIF v3 swim data files
#[derive(Parser, Debug)]
#[command(name = "sdif")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate every record in a file and report per-line errors
    Check {
        /// Path to the SDIF file
        file: PathBuf,

        /// Tolerate blank compatibility-relaxed mandatory fields
        #[arg(long)]
        lenient: bool,
    },

    /// Decode a file and print one JSON object per record
    Dump {
        /// Path to the SDIF file
        file: PathBuf,

        /// Tolerate blank compatibility-relaxed mandatory fields
        #[arg(long)]
        lenient: bool,
    },

    /// Decode a file and re-encode it in canonical fixed-width form
    Rewrite {
        /// Path to the SDIF file
        file: PathBuf,

        /// Tolerate blank compatibility-relaxed mandatory fields
        #[arg(long)]
        lenient: bool,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
