//! Record schema subsystem.
//!
//! Schemas are declarative: each record type names its fields, their byte
//! ranges, native value types, and mandatory flags. The resolver normalizes
//! a declaration into runtime field definitions and rejects invalid
//! declarations at registration time, so the codec never has to revalidate.

mod errors;
mod resolver;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use resolver::{resolve, validate, FieldDef, IDENTIFIER_FIELD};
pub use types::{
    FieldMetadata, FieldSpec, FieldType, NativeType, RecordSchema, RECORD_CONTENT_LEN,
};
