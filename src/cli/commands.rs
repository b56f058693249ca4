//! CLI command implementations.
//!
//! The codec core never touches files; these commands are the surrounding
//! tool that reads a file, runs it through the engine, and writes results
//! to stdout or a file.

use std::fs;
use std::path::Path;

use crate::codec::{encode_records, Mode, Registry, RECORD_SEP};
use crate::records::{standard_registry, AnyRecord};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Check { file, lenient } => check(&file, mode_for(lenient)),
        Command::Dump { file, lenient } => dump(&file, mode_for(lenient)),
        Command::Rewrite {
            file,
            lenient,
            output,
        } => rewrite(&file, mode_for(lenient), output.as_deref()),
    }
}

fn mode_for(lenient: bool) -> Mode {
    if lenient {
        Mode::Lenient
    } else {
        Mode::Strict
    }
}

/// Splits a file body into (1-based line number, line) pairs, skipping
/// blank lines such as the tail after a trailing separator.
fn numbered_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .split(RECORD_SEP)
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
}

/// Validates every record in a file, reporting each bad line on stderr.
pub fn check(path: &Path, mode: Mode) -> CliResult<()> {
    let input = fs::read_to_string(path)?;
    let registry = standard_registry()?;

    let mut records = 0usize;
    let mut failures = 0usize;
    for (number, line) in numbered_lines(&input) {
        match registry.decode_line(line, mode) {
            Ok(_) => records += 1,
            Err(error) => {
                failures += 1;
                eprintln!("{}: line {}: {}", path.display(), number, error);
            }
        }
    }

    if failures > 0 {
        return Err(CliError::CheckFailed {
            records: records + failures,
            failures,
        });
    }
    println!("{}: {} records OK", path.display(), records);
    Ok(())
}

/// Decodes a file and prints one JSON object per record.
pub fn dump(path: &Path, mode: Mode) -> CliResult<()> {
    let input = fs::read_to_string(path)?;
    let registry = standard_registry()?;
    for line in dump_lines(&registry, &input, mode)? {
        println!("{}", line);
    }
    Ok(())
}

fn dump_lines(
    registry: &Registry<AnyRecord>,
    input: &str,
    mode: Mode,
) -> CliResult<Vec<String>> {
    let mut lines = Vec::new();
    for (number, line) in numbered_lines(input) {
        let record = registry
            .decode_line(line, mode)
            .map_err(|e| CliError::decode(number, e))?;
        lines.push(serde_json::to_string(&record)?);
    }
    Ok(lines)
}

/// Decodes a file and re-encodes it in canonical fixed-width form.
pub fn rewrite(path: &Path, mode: Mode, output: Option<&Path>) -> CliResult<()> {
    let input = fs::read_to_string(path)?;
    let registry = standard_registry()?;
    let body = rewrite_body(&registry, &input, mode)?;
    match output {
        Some(path) => fs::write(path, body)?,
        None => print!("{}", body),
    }
    Ok(())
}

fn rewrite_body(
    registry: &Registry<AnyRecord>,
    input: &str,
    mode: Mode,
) -> CliResult<String> {
    let mut records = Vec::new();
    for (number, line) in numbered_lines(input) {
        let record = registry
            .decode_line(line, mode)
            .map_err(|e| CliError::decode(number, e))?;
        records.push(record);
    }
    let encoded = encode_records(records.iter(), mode)?;
    Ok(format!("{}{}", encoded, RECORD_SEP))
}
