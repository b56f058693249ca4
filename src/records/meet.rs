//! The B1 meet record.

use chrono::NaiveDate;
use serde::Serialize;

use crate::codec::{CodecResult, FieldMap, Record};
use crate::codes::{CourseStatusCode, DomainCode, MeetTypeCode, OrganizationCode};
use crate::schema::{FieldSpec, FieldType, NativeType, RecordSchema};

use super::convert::{put_code, put_date, put_int, put_text, require, take_code, take_date, take_int, take_text};

/// B1: the meet name, address, dates, and course. Each file carries at
/// most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meet {
    pub organization: Option<OrganizationCode>,
    pub meet_name: String,
    pub meet_address_1: String,
    pub meet_address_2: Option<String>,
    pub meet_city: Option<String>,
    pub meet_state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub meet_type: Option<MeetTypeCode>,
    pub meet_start: NaiveDate,
    pub meet_end: Option<NaiveDate>,
    pub pool_altitude_ft: Option<u64>,
    pub course: Option<CourseStatusCode>,
}

impl Record for Meet {
    const IDENTIFIER: &'static str = "B1";

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "B1",
            vec![
                FieldSpec::optional("organization", 3, 1, NativeType::Code(OrganizationCode::table())),
                FieldSpec::required("meet_name", 12, 30, NativeType::Str),
                FieldSpec::required("meet_address_1", 42, 22, NativeType::Str),
                FieldSpec::optional("meet_address_2", 64, 22, NativeType::Str),
                FieldSpec::optional("meet_city", 86, 20, NativeType::Str).secondary_mandatory(),
                FieldSpec::optional("meet_state", 106, 2, NativeType::Str)
                    .with_type(FieldType::Usps)
                    .secondary_mandatory(),
                FieldSpec::optional("postal_code", 108, 10, NativeType::Str),
                FieldSpec::optional("country", 118, 3, NativeType::Str),
                FieldSpec::optional("meet_type", 121, 1, NativeType::Code(MeetTypeCode::table()))
                    .secondary_mandatory(),
                FieldSpec::required("meet_start", 122, 8, NativeType::Date),
                FieldSpec::optional("meet_end", 130, 8, NativeType::Date).secondary_mandatory(),
                FieldSpec::optional("pool_altitude_ft", 138, 4, NativeType::Int),
                FieldSpec::optional("course", 150, 1, NativeType::Code(CourseStatusCode::table())),
            ],
        )
    }

    fn to_values(&self) -> FieldMap {
        let mut values = FieldMap::new();
        put_code(&mut values, "organization", self.organization);
        put_text(&mut values, "meet_name", Some(&self.meet_name));
        put_text(&mut values, "meet_address_1", Some(&self.meet_address_1));
        put_text(&mut values, "meet_address_2", self.meet_address_2.as_deref());
        put_text(&mut values, "meet_city", self.meet_city.as_deref());
        put_text(&mut values, "meet_state", self.meet_state.as_deref());
        put_text(&mut values, "postal_code", self.postal_code.as_deref());
        put_text(&mut values, "country", self.country.as_deref());
        put_code(&mut values, "meet_type", self.meet_type);
        put_date(&mut values, "meet_start", Some(self.meet_start));
        put_date(&mut values, "meet_end", self.meet_end);
        put_int(&mut values, "pool_altitude_ft", self.pool_altitude_ft);
        put_code(&mut values, "course", self.course);
        values
    }

    fn from_values(mut values: FieldMap) -> CodecResult<Self> {
        Ok(Self {
            organization: take_code(&mut values, "organization")?,
            meet_name: require(take_text(&mut values, "meet_name")?, "meet_name")?,
            meet_address_1: require(take_text(&mut values, "meet_address_1")?, "meet_address_1")?,
            meet_address_2: take_text(&mut values, "meet_address_2")?,
            meet_city: take_text(&mut values, "meet_city")?,
            meet_state: take_text(&mut values, "meet_state")?,
            postal_code: take_text(&mut values, "postal_code")?,
            country: take_text(&mut values, "country")?,
            meet_type: take_code(&mut values, "meet_type")?,
            meet_start: require(take_date(&mut values, "meet_start")?, "meet_start")?,
            meet_end: take_date(&mut values, "meet_end")?,
            pool_altitude_ft: take_int(&mut values, "pool_altitude_ft")?,
            course: take_code(&mut values, "course")?,
        })
    }
}
