//! Fixed-width record codec.
//!
//! The engine that moves typed records to and from 160-character lines:
//! per-field value conversion, record buffer assembly, identifier-dispatched
//! batch decoding, and the strict/lenient mandatory-field policy. Every
//! operation is a pure function of its inputs plus an immutable registry.

mod batch;
mod errors;
mod record;
mod registry;
mod value;

pub use batch::{decode_lines, decode_records, encode_records, RECORD_SEP};
pub use errors::{CodecError, CodecResult};
pub use record::{decode_record, encode_record, EncodeLine, FieldMap, Record};
pub use registry::Registry;
pub use value::{decode_value, encode_value, FieldValue, Mode};
