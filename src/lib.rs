//! sdif - a strict, schema-driven codec for SDIF v3 fixed-width swim data
//!
//! Records are 160-character lines identified by their leading 2-character
//! type code. Schemas are declarative; the codec engine resolves them once,
//! then encodes and decodes records with explicit strict/lenient handling
//! of mandatory fields.

pub mod cli;
pub mod codec;
pub mod codes;
pub mod decimal;
pub mod records;
pub mod schema;
pub mod time;
