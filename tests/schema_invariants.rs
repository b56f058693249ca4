//! Schema invariants over the standard record set, checked through the
//! public registry API.

use sdif::codec::{CodecResult, FieldMap, Record, Registry};
use sdif::records::{standard_registry, AnyRecord};
use sdif::schema::{FieldSpec, NativeType, RecordSchema, SchemaError, RECORD_CONTENT_LEN};

#[test]
fn standard_registry_builds() {
    let registry = standard_registry().unwrap();
    assert_eq!(registry.len(), 9);
}

#[test]
fn m1_and_m2_are_never_both_set() {
    let registry = standard_registry().unwrap();
    for identifier in registry.identifiers() {
        for field in registry.fields(identifier).unwrap() {
            assert!(
                !(field.m1 && field.m2),
                "{}/{} is both primary and secondary mandatory",
                identifier,
                field.name
            );
        }
    }
}

#[test]
fn every_schema_leads_with_the_identifier_field() {
    let registry = standard_registry().unwrap();
    for identifier in registry.identifiers() {
        let fields = registry.fields(identifier).unwrap();
        let first = &fields[0];
        assert_eq!(first.name, "identifier");
        assert_eq!((first.start, first.len), (1, 2));
        assert!(first.m1);
    }
}

#[test]
fn field_ranges_are_ordered_and_in_bounds() {
    let registry = standard_registry().unwrap();
    for identifier in registry.identifiers() {
        let fields = registry.fields(identifier).unwrap();
        let mut previous_end = 0usize;
        for field in fields {
            let start = field.start - 1;
            assert!(
                start >= previous_end,
                "{}/{} overlaps its predecessor",
                identifier,
                field.name
            );
            previous_end = start + field.len;
            assert!(previous_end <= RECORD_CONTENT_LEN);
        }
    }
}

#[test]
fn mandatory_fields_are_not_optional() {
    let registry = standard_registry().unwrap();
    for identifier in registry.identifiers() {
        for field in registry.fields(identifier).unwrap() {
            if field.m1 {
                assert!(
                    !field.optional,
                    "{}/{} is mandatory but optional",
                    identifier,
                    field.name
                );
            }
        }
    }
}

#[derive(Debug)]
struct Custom;

impl Record for Custom {
    const IDENTIFIER: &'static str = "X9";

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "X9",
            vec![FieldSpec::optional("payload", 3, 20, NativeType::Str)],
        )
    }

    fn to_values(&self) -> FieldMap {
        FieldMap::new()
    }

    fn from_values(_: FieldMap) -> CodecResult<Self> {
        Ok(Custom)
    }
}

#[test]
fn registries_are_isolated() {
    // The registry is an explicit value, not process state: registering a
    // custom record in one registry must not leak into another.
    let mut custom: Registry<AnyRecord> = standard_registry().unwrap();
    // AnyRecord has no Custom variant, so register into a dedicated registry.
    let mut private: Registry<Custom> = Registry::new();
    private.register::<Custom>().unwrap();

    assert!(!custom.contains("X9"));
    assert!(private.contains("X9"));

    // Re-registering a taken identifier fails loudly in either registry.
    assert!(matches!(
        private.register::<Custom>(),
        Err(SchemaError::DuplicateIdentifier { .. })
    ));
    assert!(matches!(
        custom.register::<sdif::records::Meet>(),
        Err(SchemaError::DuplicateIdentifier { .. })
    ));
}
