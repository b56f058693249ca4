//! Field definition resolution.
//!
//! Resolution turns a declared [`RecordSchema`] into the ordered list of
//! runtime [`FieldDef`]s the codec iterates: the synthetic leading
//! `identifier` field, then one definition per declared field with its
//! field type inferred and both mandatory flags settled.
//!
//! `m1` is the structural mandatory flag: true exactly when the record
//! cannot tolerate an absent value, unless the declaration overrides it.
//! `m2` marks fields expected in lenient/compatibility use despite being
//! structurally optional. The two flags never both hold for one field;
//! a declaration where they would is rejected at validation time.

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldMetadata, FieldSpec, FieldType, NativeType, RecordSchema, RECORD_CONTENT_LEN};

/// Name of the synthetic leading identifier field.
pub const IDENTIFIER_FIELD: &str = "identifier";

/// The resolved, runtime-ready description of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    /// 1-based offset of the first character.
    pub start: usize,
    /// Field width in characters.
    pub len: usize,
    /// Primary mandatory: required under strict validation.
    pub m1: bool,
    /// Secondary mandatory: expected under lenient/compatibility use.
    pub m2: bool,
    /// Whether the record tolerates an absent value.
    pub optional: bool,
    /// Resolved positional semantics.
    pub record_type: FieldType,
    /// Native value type, consulted when decoding coded fields.
    pub native: NativeType,
}

fn identifier_def() -> FieldDef {
    FieldDef {
        name: IDENTIFIER_FIELD,
        start: 1,
        len: 2,
        m1: true,
        m2: false,
        optional: false,
        record_type: FieldType::Const,
        native: NativeType::Str,
    }
}

/// Infers positional semantics from the declared native type.
///
/// An explicit type on the metadata always wins; otherwise the mapping is
/// total over the closed set of native type tags.
fn infer_type(meta: &FieldMetadata, native: NativeType) -> FieldType {
    if let Some(explicit) = meta.field_type {
        return explicit;
    }
    match native {
        NativeType::Str => FieldType::Alpha,
        NativeType::Int => FieldType::Int,
        NativeType::Date => FieldType::Date,
        NativeType::Dec => FieldType::Dec,
        NativeType::Logical => FieldType::Logical,
        NativeType::Time => FieldType::Time,
        NativeType::Code(_) => FieldType::Code,
    }
}

fn resolve_spec(spec: &FieldSpec) -> FieldDef {
    let m1 = spec.meta.override_m1.unwrap_or(!spec.optional);
    FieldDef {
        name: spec.name,
        start: spec.meta.start,
        len: spec.meta.len,
        m1,
        m2: spec.meta.m2,
        optional: spec.optional,
        record_type: infer_type(&spec.meta, spec.native),
        native: spec.native,
    }
}

/// Resolves a schema into its ordered field definitions, identifier first.
pub fn resolve(schema: &RecordSchema) -> Vec<FieldDef> {
    let mut defs = Vec::with_capacity(schema.fields.len() + 1);
    defs.push(identifier_def());
    defs.extend(schema.fields.iter().map(resolve_spec));
    defs
}

/// Resolves a schema and checks every declaration invariant.
///
/// Returns the resolved definitions on success. Callers register schemas
/// through this function exactly once, so codec paths can assume a schema
/// that resolves cleanly.
pub fn validate(schema: &RecordSchema) -> SchemaResult<Vec<FieldDef>> {
    let identifier = schema.identifier;
    if identifier.chars().count() != 2 {
        return Err(SchemaError::BadIdentifier {
            identifier: identifier.to_string(),
        });
    }

    let defs = resolve(schema);

    for def in &defs {
        if def.len == 0 {
            return Err(SchemaError::ZeroWidthField {
                identifier: identifier.to_string(),
                field: def.name.to_string(),
            });
        }
        if def.start < 1 || def.start - 1 + def.len > RECORD_CONTENT_LEN {
            return Err(SchemaError::FieldOutOfBounds {
                identifier: identifier.to_string(),
                field: def.name.to_string(),
            });
        }
        if def.m1 && def.m2 {
            return Err(SchemaError::MandatoryConflict {
                identifier: identifier.to_string(),
                field: def.name.to_string(),
            });
        }
        let fixed_width = match def.record_type {
            FieldType::Date => Some(8),
            FieldType::Logical => Some(1),
            _ => None,
        };
        if let Some(expected) = fixed_width {
            if def.len != expected {
                return Err(SchemaError::FixedWidthMismatch {
                    identifier: identifier.to_string(),
                    field: def.name.to_string(),
                    field_type: def.record_type.type_name(),
                    expected,
                    actual: def.len,
                });
            }
        }
        if def.record_type == FieldType::Code && !matches!(def.native, NativeType::Code(_)) {
            return Err(SchemaError::MissingCodeTable {
                identifier: identifier.to_string(),
                field: def.name.to_string(),
            });
        }
    }

    // Field intervals must appear in increasing offset order without
    // overlapping: each field must start at or after the previous end.
    for pair in defs.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.start < prev.start + prev.len {
            return Err(SchemaError::FieldRangeConflict {
                identifier: identifier.to_string(),
                first: prev.name.to_string(),
                second: next.name.to_string(),
            });
        }
    }

    Ok(defs)
}
