//! Codec error types.
//!
//! Unlike schema errors, every error here is a data error: a value that
//! cannot be represented in its field, or field text that cannot be parsed
//! back. All of them are recoverable by the caller; the codec never
//! substitutes defaults or silently drops a field.

use thiserror::Error;

/// Result type for encode and decode operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Encoding and decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// An absent or blank value for a field required under the active mode.
    #[error("missing value for mandatory field '{field}'")]
    MissingMandatoryValue { field: String },

    /// Content wider than the field for a type that must not truncate.
    #[error("value for field '{field}' is too wide to encode: {width} characters into {len}")]
    ValueTooWide {
        field: String,
        len: usize,
        width: usize,
    },

    /// Field text that does not parse as the expected type.
    #[error("malformed {expected} for field '{field}': {value:?}")]
    MalformedValue {
        field: String,
        expected: String,
        value: String,
    },

    /// A field value of the wrong kind for its field type.
    #[error("field '{field}' holds a {actual} value where {expected} is required")]
    ValueMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A line handed to a typed decode whose identifier names another type.
    #[error("expected a {expected:?} record, found identifier {found:?}")]
    RecordTypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A line whose identifier has no registered schema.
    #[error("no schema registered for record identifier {identifier:?}")]
    UnknownRecordType { identifier: String },
}

impl CodecError {
    /// A missing-mandatory-value error for the named field.
    pub fn missing(field: &str) -> Self {
        CodecError::MissingMandatoryValue {
            field: field.to_string(),
        }
    }

    /// A malformed-value error for the named field.
    pub fn malformed(field: &str, expected: impl Into<String>, value: impl Into<String>) -> Self {
        CodecError::MalformedValue {
            field: field.to_string(),
            expected: expected.into(),
            value: value.into(),
        }
    }
}
