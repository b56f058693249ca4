//! Schema definition errors.
//!
//! Everything in here is a programming error in a schema declaration, not a
//! data error: these are raised while registering record schemas, before any
//! encoding or decoding happens, and callers are expected to treat them as
//! fatal at startup.

use thiserror::Error;

/// Result type for schema declaration and registration.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Invalid record schema declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("record identifier {identifier:?} must be exactly 2 characters")]
    BadIdentifier { identifier: String },

    #[error("record '{identifier}': field '{field}' has zero width")]
    ZeroWidthField { identifier: String, field: String },

    #[error("record '{identifier}': field '{field}' extends past the record body")]
    FieldOutOfBounds { identifier: String, field: String },

    #[error(
        "record '{identifier}': fields '{first}' and '{second}' overlap or are out of order"
    )]
    FieldRangeConflict {
        identifier: String,
        first: String,
        second: String,
    },

    #[error(
        "record '{identifier}': field '{field}' is marked both primary and secondary mandatory"
    )]
    MandatoryConflict { identifier: String, field: String },

    #[error(
        "record '{identifier}': {field_type} field '{field}' must be {expected} wide, not {actual}"
    )]
    FixedWidthMismatch {
        identifier: String,
        field: String,
        field_type: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("record '{identifier}': coded field '{field}' has no code table")]
    MissingCodeTable { identifier: String, field: String },

    #[error("duplicate registration for record identifier '{identifier}'")]
    DuplicateIdentifier { identifier: String },
}
