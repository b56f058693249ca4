//! Conversion helpers between record structs and field maps.
//!
//! Record implementations move values in and out of the codec's
//! [`FieldMap`] with these. The `put_*` family inserts only present values;
//! the `take_*` family removes and narrows a value, failing if the map
//! holds a value of the wrong kind for the field.

use chrono::NaiveDate;

use crate::codec::{CodecError, CodecResult, FieldMap, FieldValue};
use crate::codes::DomainCode;
use crate::decimal::Decimal;
use crate::time::{Time, TimeValue};

pub(crate) fn put_text(values: &mut FieldMap, name: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        values.insert(name, FieldValue::Text(value.to_string()));
    }
}

pub(crate) fn put_int(values: &mut FieldMap, name: &'static str, value: Option<u64>) {
    if let Some(value) = value {
        values.insert(name, FieldValue::Int(value));
    }
}

pub(crate) fn put_date(values: &mut FieldMap, name: &'static str, value: Option<NaiveDate>) {
    if let Some(value) = value {
        values.insert(name, FieldValue::Date(value));
    }
}

pub(crate) fn put_dec(values: &mut FieldMap, name: &'static str, value: Option<Decimal>) {
    if let Some(value) = value {
        values.insert(name, FieldValue::Dec(value));
    }
}

pub(crate) fn put_logical(values: &mut FieldMap, name: &'static str, value: Option<bool>) {
    if let Some(value) = value {
        values.insert(name, FieldValue::Logical(value));
    }
}

pub(crate) fn put_code<C: DomainCode>(values: &mut FieldMap, name: &'static str, value: Option<C>) {
    if let Some(value) = value {
        values.insert(name, FieldValue::Code(value.code().to_string()));
    }
}

pub(crate) fn put_time(values: &mut FieldMap, name: &'static str, value: Option<TimeValue>) {
    if let Some(value) = value {
        values.insert(name, FieldValue::Time(value));
    }
}

fn wrong_kind(name: &'static str, expected: &'static str, value: &FieldValue) -> CodecError {
    CodecError::ValueMismatch {
        field: name.to_string(),
        expected,
        actual: value.kind(),
    }
}

pub(crate) fn take_text(values: &mut FieldMap, name: &'static str) -> CodecResult<Option<String>> {
    match values.remove(name) {
        None => Ok(None),
        Some(FieldValue::Text(s)) => Ok(Some(s)),
        Some(other) => Err(wrong_kind(name, "text", &other)),
    }
}

pub(crate) fn take_int(values: &mut FieldMap, name: &'static str) -> CodecResult<Option<u64>> {
    match values.remove(name) {
        None => Ok(None),
        Some(FieldValue::Int(n)) => Ok(Some(n)),
        Some(other) => Err(wrong_kind(name, "int", &other)),
    }
}

pub(crate) fn take_date(values: &mut FieldMap, name: &'static str) -> CodecResult<Option<NaiveDate>> {
    match values.remove(name) {
        None => Ok(None),
        Some(FieldValue::Date(d)) => Ok(Some(d)),
        Some(other) => Err(wrong_kind(name, "date", &other)),
    }
}

pub(crate) fn take_dec(values: &mut FieldMap, name: &'static str) -> CodecResult<Option<Decimal>> {
    match values.remove(name) {
        None => Ok(None),
        Some(FieldValue::Dec(d)) => Ok(Some(d)),
        Some(other) => Err(wrong_kind(name, "dec", &other)),
    }
}

pub(crate) fn take_logical(values: &mut FieldMap, name: &'static str) -> CodecResult<Option<bool>> {
    match values.remove(name) {
        None => Ok(None),
        Some(FieldValue::Logical(b)) => Ok(Some(b)),
        Some(other) => Err(wrong_kind(name, "logical", &other)),
    }
}

pub(crate) fn take_code<C: DomainCode>(
    values: &mut FieldMap,
    name: &'static str,
) -> CodecResult<Option<C>> {
    match values.remove(name) {
        None => Ok(None),
        Some(FieldValue::Code(code)) => match C::from_code(&code) {
            Some(value) => Ok(Some(value)),
            None => Err(CodecError::malformed(name, C::table().name, code)),
        },
        Some(other) => Err(wrong_kind(name, "code", &other)),
    }
}

pub(crate) fn take_time_value(
    values: &mut FieldMap,
    name: &'static str,
) -> CodecResult<Option<TimeValue>> {
    match values.remove(name) {
        None => Ok(None),
        Some(FieldValue::Time(t)) => Ok(Some(t)),
        Some(other) => Err(wrong_kind(name, "time", &other)),
    }
}

/// Narrows a time field to a literal time, rejecting explanation codes.
pub(crate) fn take_time(values: &mut FieldMap, name: &'static str) -> CodecResult<Option<Time>> {
    match take_time_value(values, name)? {
        None => Ok(None),
        Some(TimeValue::Time(t)) => Ok(Some(t)),
        Some(TimeValue::Code(_)) => Err(CodecError::ValueMismatch {
            field: name.to_string(),
            expected: "time literal",
            actual: "time code",
        }),
    }
}

/// Unwraps a structurally required value.
pub(crate) fn require<T>(value: Option<T>, name: &'static str) -> CodecResult<T> {
    value.ok_or_else(|| CodecError::missing(name))
}
