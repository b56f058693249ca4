//! Record schema registry.
//!
//! The registry maps record type identifiers to validated schemas and their
//! decode dispatch. It is an explicit value constructed once at startup and
//! passed to batch decoding, not process-global state, so tests can build
//! isolated registries with whatever record sets they need.
//!
//! Registration is the one place schema declarations are validated; after
//! construction the registry is read-only and safe to share across threads.

use std::collections::HashMap;

use crate::schema::{validate, FieldDef, RecordSchema, SchemaError, SchemaResult};

use super::errors::{CodecError, CodecResult};
use super::record::{decode_record, Record};
use super::value::Mode;

struct Registration<T> {
    schema: RecordSchema,
    fields: Vec<FieldDef>,
    decode: fn(&str, Mode) -> CodecResult<T>,
}

/// Maps 2-character record identifiers to schemas and decoders producing `T`.
pub struct Registry<T> {
    records: HashMap<&'static str, Registration<T>>,
}

fn decode_into<R, T>(line: &str, mode: Mode) -> CodecResult<T>
where
    R: Record,
    T: From<R>,
{
    decode_record::<R>(line, mode).map(T::from)
}

impl<T> Registry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Registers a record type, validating its schema.
    ///
    /// Fails on any schema declaration error and on a duplicate identifier.
    /// Either failure is a configuration error callers should treat as
    /// fatal at startup.
    pub fn register<R>(&mut self) -> SchemaResult<()>
    where
        R: Record,
        T: From<R>,
    {
        let schema = R::schema();
        let fields = validate(&schema)?;
        if self.records.contains_key(schema.identifier) {
            return Err(SchemaError::DuplicateIdentifier {
                identifier: schema.identifier.to_string(),
            });
        }
        self.records.insert(
            schema.identifier,
            Registration {
                schema,
                fields,
                decode: decode_into::<R, T>,
            },
        );
        Ok(())
    }

    /// Returns the registered schema for an identifier.
    pub fn schema(&self, identifier: &str) -> Option<&RecordSchema> {
        self.records.get(identifier).map(|r| &r.schema)
    }

    /// Returns the resolved field definitions for an identifier.
    pub fn fields(&self, identifier: &str) -> Option<&[FieldDef]> {
        self.records.get(identifier).map(|r| r.fields.as_slice())
    }

    /// Returns true if the identifier has a registered schema.
    pub fn contains(&self, identifier: &str) -> bool {
        self.records.contains_key(identifier)
    }

    /// Iterates over the registered identifiers.
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.records.keys().copied()
    }

    /// Number of registered record types.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Decodes one line, dispatching on its leading 2-character identifier.
    pub fn decode_line(&self, line: &str, mode: Mode) -> CodecResult<T> {
        let identifier: String = line.chars().take(2).collect();
        let registration = self
            .records
            .get(identifier.as_str())
            .ok_or(CodecError::UnknownRecordType { identifier })?;
        (registration.decode)(line, mode)
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode_record, FieldMap, FieldValue};
    use crate::schema::{FieldSpec, NativeType};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Ping {
        tag: String,
    }

    impl Record for Ping {
        const IDENTIFIER: &'static str = "P0";

        fn schema() -> RecordSchema {
            RecordSchema::new(
                "P0",
                vec![FieldSpec::required("tag", 3, 6, NativeType::Str)],
            )
        }

        fn to_values(&self) -> FieldMap {
            let mut values = FieldMap::new();
            values.insert("tag", FieldValue::Text(self.tag.clone()));
            values
        }

        fn from_values(mut values: FieldMap) -> CodecResult<Self> {
            match values.remove("tag") {
                Some(FieldValue::Text(tag)) => Ok(Ping { tag }),
                _ => Err(CodecError::missing("tag")),
            }
        }
    }

    #[test]
    fn test_register_and_dispatch() {
        let mut registry: Registry<Ping> = Registry::new();
        registry.register::<Ping>().unwrap();
        assert!(registry.contains("P0"));
        assert_eq!(registry.len(), 1);
        assert!(registry.schema("P0").is_some());
        assert_eq!(registry.fields("P0").unwrap()[0].name, "identifier");

        let line = encode_record(&Ping { tag: "hello".into() }, Mode::Strict).unwrap();
        let decoded = registry.decode_line(&line, Mode::Strict).unwrap();
        assert_eq!(decoded.tag, "hello");
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry: Registry<Ping> = Registry::new();
        registry.register::<Ping>().unwrap();
        assert!(matches!(
            registry.register::<Ping>(),
            Err(SchemaError::DuplicateIdentifier { .. })
        ));
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let registry: Registry<Ping> = Registry::new();
        let result = registry.decode_line("ZZ somebody", Mode::Strict);
        assert!(matches!(
            result,
            Err(CodecError::UnknownRecordType { identifier }) if identifier == "ZZ"
        ));
    }

    #[test]
    fn test_invalid_schema_rejected_at_registration() {
        struct Broken;

        impl Record for Broken {
            const IDENTIFIER: &'static str = "B9";

            fn schema() -> RecordSchema {
                RecordSchema::new(
                    "B9",
                    vec![
                        FieldSpec::required("a", 3, 10, NativeType::Str),
                        FieldSpec::required("b", 5, 10, NativeType::Str),
                    ],
                )
            }

            fn to_values(&self) -> FieldMap {
                FieldMap::new()
            }

            fn from_values(_: FieldMap) -> CodecResult<Self> {
                Ok(Broken)
            }
        }

        let mut registry: Registry<Broken> = Registry::new();
        assert!(matches!(
            registry.register::<Broken>(),
            Err(SchemaError::FieldRangeConflict { .. })
        ));
    }
}
