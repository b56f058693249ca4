//! Schema type definitions for fixed-width records.
//!
//! A record schema names its 2-character identifier and lists its fields in
//! byte order. Each field carries positional metadata ([`FieldMetadata`]),
//! the native value type it decodes into ([`NativeType`]), and whether the
//! record tolerates the value being absent.

use crate::codes::CodeTable;

/// Length of one record body in characters, excluding the line separator.
pub const RECORD_CONTENT_LEN: usize = 160;

/// Positional field semantics.
///
/// The field type selects the justification, padding, and conversion rules
/// applied by the value codec. It is usually inferred from the field's
/// native type; a handful of fields override it (state codes, phone
/// numbers, registration numbers) to pick up format-specific handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Free text, left-justified; purely numeric content is right-justified.
    Alpha,
    /// Fixed literal text, e.g. the record identifier.
    Const,
    /// Short code drawn from a closed code table.
    Code,
    /// Calendar date, MMDDYYYY.
    Date,
    /// Fixed-point decimal, right-justified, truncated to the field width.
    Dec,
    /// Non-negative integer, right-justified.
    Int,
    /// One-character boolean flag, `T` or `F`.
    Logical,
    /// Athlete name, "last, first".
    Name,
    /// Phone number.
    Phone,
    /// Postal code.
    PostalCode,
    /// USPS state abbreviation; upper-cased on encode.
    Usps,
    /// USS registration number.
    Ussnum,
    /// Swim time, or a time explanation code.
    Time,
}

impl FieldType {
    /// Returns the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Alpha => "alpha",
            FieldType::Const => "const",
            FieldType::Code => "code",
            FieldType::Date => "date",
            FieldType::Dec => "dec",
            FieldType::Int => "int",
            FieldType::Logical => "logical",
            FieldType::Name => "name",
            FieldType::Phone => "phone",
            FieldType::PostalCode => "postal_code",
            FieldType::Usps => "usps",
            FieldType::Ussnum => "ussnum",
            FieldType::Time => "time",
        }
    }
}

/// The native value type a field decodes into.
///
/// This is the closed set of declared-field-type tags the resolver infers
/// positional semantics from. Coded fields carry a reference to their code
/// table so the decoder can validate short codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeType {
    Str,
    Int,
    Date,
    Dec,
    Logical,
    Time,
    Code(&'static CodeTable),
}

impl NativeType {
    /// Returns the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            NativeType::Str => "str",
            NativeType::Int => "int",
            NativeType::Date => "date",
            NativeType::Dec => "dec",
            NativeType::Logical => "logical",
            NativeType::Time => "time",
            NativeType::Code(_) => "code",
        }
    }
}

/// Positional metadata attached to one schema field.
///
/// Byte offsets are 1-based: a field with `start = 12, len = 2` occupies
/// characters 12-13 of the record body. Created once at schema declaration
/// time and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    /// 1-based offset of the first character.
    pub start: usize,
    /// Field width in characters.
    pub len: usize,
    /// Explicit field type; when absent the type is inferred from the
    /// field's native type.
    pub field_type: Option<FieldType>,
    /// Secondary mandatory: the field is expected in lenient/compatibility
    /// use despite being structurally optional.
    pub m2: bool,
    /// Explicit override of the primary mandatory flag, which otherwise
    /// follows from optionality.
    pub override_m1: Option<bool>,
}

/// One declared field of a record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, matching the record struct's field.
    pub name: &'static str,
    /// Native value type.
    pub native: NativeType,
    /// Whether the record tolerates an absent value.
    pub optional: bool,
    /// Positional metadata.
    pub meta: FieldMetadata,
}

impl FieldSpec {
    /// Declares a structurally required field.
    pub fn required(name: &'static str, start: usize, len: usize, native: NativeType) -> Self {
        Self {
            name,
            native,
            optional: false,
            meta: FieldMetadata {
                start,
                len,
                field_type: None,
                m2: false,
                override_m1: None,
            },
        }
    }

    /// Declares a structurally optional field.
    pub fn optional(name: &'static str, start: usize, len: usize, native: NativeType) -> Self {
        Self {
            optional: true,
            ..Self::required(name, start, len, native)
        }
    }

    /// Overrides the inferred field type.
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.meta.field_type = Some(field_type);
        self
    }

    /// Marks the field secondary mandatory.
    pub fn secondary_mandatory(mut self) -> Self {
        self.meta.m2 = true;
        self
    }

    /// Overrides the primary mandatory flag.
    pub fn override_mandatory(mut self, m1: bool) -> Self {
        self.meta.override_m1 = Some(m1);
        self
    }
}

/// An ordered, named set of fields for one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    /// The 2-character record type identifier.
    pub identifier: &'static str,
    /// Declared fields, in byte order.
    pub fields: Vec<FieldSpec>,
}

impl RecordSchema {
    /// Creates a schema for the given identifier.
    pub fn new(identifier: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { identifier, fields }
    }
}
