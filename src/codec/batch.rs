//! Batch encode and decode.
//!
//! A file body is a sequence of fixed-width record lines joined by CR+LF.
//! Batch decoding is lazy and line-independent: each line dispatches through
//! the registry on its own, so one malformed record surfaces as one `Err`
//! item without poisoning the rest of the iterator.

use super::errors::CodecResult;
use super::record::EncodeLine;
use super::registry::Registry;
use super::value::Mode;

/// The line separator between records.
pub const RECORD_SEP: &str = "\r\n";

/// Encodes records into one CR+LF-joined body.
pub fn encode_records<'a, T, I>(records: I, mode: Mode) -> CodecResult<String>
where
    T: EncodeLine + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut lines = Vec::new();
    for record in records {
        lines.push(record.encode_line(mode)?);
    }
    Ok(lines.join(RECORD_SEP))
}

/// Decodes a CR+LF-joined body into typed records, in input order.
///
/// Blank lines (including the empty tail after a trailing separator) are
/// skipped.
pub fn decode_records<'a, T>(
    registry: &'a Registry<T>,
    input: &'a str,
    mode: Mode,
) -> impl Iterator<Item = CodecResult<T>> + 'a {
    decode_lines(registry, input.split(RECORD_SEP), mode)
}

/// Decodes pre-split record lines, in input order.
pub fn decode_lines<'a, T, I>(
    registry: &'a Registry<T>,
    lines: I,
    mode: Mode,
) -> impl Iterator<Item = CodecResult<T>> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .map(move |line| registry.decode_line(line, mode))
}
