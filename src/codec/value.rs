//! Per-field value conversion.
//!
//! [`encode_value`] and [`decode_value`] convert between one typed in-memory
//! value and its fixed-width text for one field. All the per-type formatting
//! rules live here: justification, padding, numeric-alpha coercion, date and
//! time shapes, and the lossy decimal truncation.
//!
//! Both directions take a [`Mode`] selecting which notion of "required"
//! applies to an absent value. Strict mode enforces the structural mandatory
//! flag (`m1`); lenient mode enforces only what the record model itself
//! cannot tolerate losing (`!optional`), so structurally-mandatory fields
//! that compatibility relaxed pass through blank.

use chrono::NaiveDate;

use crate::codes::DomainCode;
use crate::decimal::Decimal;
use crate::schema::{FieldDef, FieldType, NativeType};
use crate::time::{Time, TimeCode, TimeValue};

use super::errors::{CodecError, CodecResult};

/// Mandatory-field enforcement mode, passed explicitly on every encode and
/// decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Enforce the structural mandatory flag (`m1`).
    Strict,
    /// Enforce only fields the record model cannot represent as absent.
    Lenient,
}

impl Mode {
    /// Whether `field` must carry a value under this mode.
    pub fn requires(self, field: &FieldDef) -> bool {
        match self {
            Mode::Strict => field.m1,
            Mode::Lenient => !field.optional,
        }
    }
}

/// A typed in-memory field value, the unit the record codec moves between
/// record structs and field text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(u64),
    Dec(Decimal),
    Date(NaiveDate),
    Logical(bool),
    /// The short code of a domain code value.
    Code(String),
    Time(TimeValue),
}

impl FieldValue {
    /// Returns the value kind for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Int(_) => "int",
            FieldValue::Dec(_) => "dec",
            FieldValue::Date(_) => "date",
            FieldValue::Logical(_) => "logical",
            FieldValue::Code(_) => "code",
            FieldValue::Time(_) => "time",
        }
    }
}

fn mismatch(def: &FieldDef, expected: &'static str, value: &FieldValue) -> CodecError {
    CodecError::ValueMismatch {
        field: def.name.to_string(),
        expected,
        actual: value.kind(),
    }
}

fn fit(def: &FieldDef, text: &str) -> CodecResult<()> {
    let width = text.chars().count();
    if width > def.len {
        return Err(CodecError::ValueTooWide {
            field: def.name.to_string(),
            len: def.len,
            width,
        });
    }
    Ok(())
}

fn left_justified(def: &FieldDef, text: &str) -> CodecResult<String> {
    fit(def, text)?;
    Ok(format!("{:<width$}", text, width = def.len))
}

fn right_justified(def: &FieldDef, text: &str) -> CodecResult<String> {
    fit(def, text)?;
    Ok(format!("{:>width$}", text, width = def.len))
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Encodes one field value into exactly `def.len` characters.
///
/// An absent value encodes as blanks when the field is not required under
/// `mode`, and fails otherwise.
pub fn encode_value(def: &FieldDef, value: Option<&FieldValue>, mode: Mode) -> CodecResult<String> {
    let Some(value) = value else {
        if mode.requires(def) {
            return Err(CodecError::missing(def.name));
        }
        return Ok(" ".repeat(def.len));
    };

    match def.record_type {
        FieldType::Alpha => {
            let text = match value {
                FieldValue::Text(s) => s,
                other => return Err(mismatch(def, "text", other)),
            };
            // Alpha fields containing only numeric data are right justified.
            if is_numeric(text) {
                right_justified(def, text)
            } else {
                left_justified(def, text)
            }
        }

        FieldType::Usps => {
            let text = match value {
                FieldValue::Text(s) => s,
                other => return Err(mismatch(def, "text", other)),
            };
            left_justified(def, &text.to_uppercase())
        }

        FieldType::Const
        | FieldType::Name
        | FieldType::Phone
        | FieldType::PostalCode
        | FieldType::Ussnum => {
            let text = match value {
                FieldValue::Text(s) => s,
                other => return Err(mismatch(def, "text", other)),
            };
            left_justified(def, text)
        }

        FieldType::Code => {
            let code = match value {
                FieldValue::Code(c) => c,
                other => return Err(mismatch(def, "code", other)),
            };
            left_justified(def, code)
        }

        FieldType::Date => {
            let date = match value {
                FieldValue::Date(d) => d,
                other => return Err(mismatch(def, "date", other)),
            };
            let encoded = date.format("%m%d%Y").to_string();
            fit(def, &encoded)?;
            Ok(encoded)
        }

        FieldType::Dec => {
            let dec = match value {
                FieldValue::Dec(d) => d,
                other => return Err(mismatch(def, "dec", other)),
            };
            // Lossy by design: decimal text wider than the field is
            // truncated, never rejected.
            let truncated: String = dec.to_string().chars().take(def.len).collect();
            right_justified(def, &truncated)
        }

        FieldType::Int => {
            let n = match value {
                FieldValue::Int(n) => n,
                other => return Err(mismatch(def, "int", other)),
            };
            right_justified(def, &n.to_string())
        }

        FieldType::Logical => {
            let flag = match value {
                FieldValue::Logical(b) => b,
                other => return Err(mismatch(def, "logical", other)),
            };
            Ok(if *flag { "T" } else { "F" }.to_string())
        }

        FieldType::Time => {
            let time = match value {
                FieldValue::Time(t) => t,
                other => return Err(mismatch(def, "time", other)),
            };
            match time {
                TimeValue::Time(t) => right_justified(def, &t.format()),
                TimeValue::Code(c) => left_justified(def, c.code()),
            }
        }
    }
}

/// Decodes the text of one field back into a typed value.
///
/// Blank text decodes to `None` when the field is not required under
/// `mode`, and fails otherwise.
pub fn decode_value(def: &FieldDef, raw: &str, mode: Mode) -> CodecResult<Option<FieldValue>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        if mode.requires(def) {
            return Err(CodecError::missing(def.name));
        }
        return Ok(None);
    }

    let value = match def.record_type {
        FieldType::Alpha
        | FieldType::Const
        | FieldType::Name
        | FieldType::Phone
        | FieldType::PostalCode
        | FieldType::Usps
        | FieldType::Ussnum => FieldValue::Text(trimmed.to_string()),

        FieldType::Code => {
            let NativeType::Code(table) = def.native else {
                return Err(CodecError::ValueMismatch {
                    field: def.name.to_string(),
                    expected: "code",
                    actual: def.native.type_name(),
                });
            };
            if !table.contains(trimmed) {
                return Err(CodecError::malformed(def.name, table.name, trimmed));
            }
            FieldValue::Code(trimmed.to_string())
        }

        FieldType::Date => FieldValue::Date(decode_date(def, raw)?),

        FieldType::Dec => {
            let dec: Decimal = trimmed
                .parse()
                .map_err(|_| CodecError::malformed(def.name, "decimal", trimmed))?;
            FieldValue::Dec(dec)
        }

        FieldType::Int => {
            let n: u64 = trimmed
                .parse()
                .map_err(|_| CodecError::malformed(def.name, "integer", trimmed))?;
            FieldValue::Int(n)
        }

        FieldType::Logical => match trimmed {
            "T" => FieldValue::Logical(true),
            "F" => FieldValue::Logical(false),
            _ => return Err(CodecError::malformed(def.name, "logical flag", trimmed)),
        },

        FieldType::Time => {
            // A time literal never collides with an explanation code, but
            // the time parse must come first.
            if let Ok(time) = trimmed.parse::<Time>() {
                FieldValue::Time(TimeValue::Time(time))
            } else if let Some(code) = TimeCode::from_code(trimmed) {
                FieldValue::Time(TimeValue::Code(code))
            } else {
                return Err(CodecError::malformed(def.name, "time", trimmed));
            }
        }
    };

    Ok(Some(value))
}

/// Parses a date from its positional MMDDYYYY layout.
fn decode_date(def: &FieldDef, raw: &str) -> CodecResult<NaiveDate> {
    let chars: Vec<char> = raw.chars().collect();
    let malformed = || CodecError::malformed(def.name, "MMDDYYYY date", raw.trim());
    if chars.len() != 8 {
        return Err(malformed());
    }
    let component = |range: std::ops::Range<usize>| -> CodecResult<u32> {
        chars[range]
            .iter()
            .collect::<String>()
            .trim()
            .parse()
            .map_err(|_| malformed())
    };
    let month = component(0..2)?;
    let day = component(2..4)?;
    let year = component(4..8)?;
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(malformed)
}
