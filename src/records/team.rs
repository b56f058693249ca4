//! Team records: C1 identification and C2 entry.

use serde::Serialize;

use crate::codec::{CodecResult, FieldMap, Record};
use crate::codes::{DomainCode, OrganizationCode};
use crate::schema::{FieldSpec, FieldType, NativeType, RecordSchema};

use super::convert::{put_code, put_int, put_text, require, take_code, take_int, take_text};

/// C1: team name, code, and address. More than one may appear per meet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamId {
    pub organization: Option<OrganizationCode>,
    pub team_code: String,
    pub name: String,
    pub abbreviation: Option<String>,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub team_code5: Option<String>,
}

impl Record for TeamId {
    const IDENTIFIER: &'static str = "C1";

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "C1",
            vec![
                FieldSpec::optional("organization", 3, 1, NativeType::Code(OrganizationCode::table())),
                FieldSpec::required("team_code", 12, 6, NativeType::Str),
                FieldSpec::required("name", 18, 30, NativeType::Str),
                FieldSpec::optional("abbreviation", 48, 16, NativeType::Str),
                FieldSpec::optional("address_1", 64, 22, NativeType::Str),
                FieldSpec::optional("address_2", 86, 22, NativeType::Str),
                FieldSpec::optional("city", 108, 20, NativeType::Str),
                FieldSpec::optional("state", 128, 2, NativeType::Str).with_type(FieldType::Usps),
                FieldSpec::optional("postal_code", 130, 10, NativeType::Str)
                    .with_type(FieldType::PostalCode),
                FieldSpec::optional("country", 140, 3, NativeType::Str),
                FieldSpec::optional("region", 143, 1, NativeType::Str),
                FieldSpec::optional("team_code5", 150, 1, NativeType::Str),
            ],
        )
    }

    fn to_values(&self) -> FieldMap {
        let mut values = FieldMap::new();
        put_code(&mut values, "organization", self.organization);
        put_text(&mut values, "team_code", Some(&self.team_code));
        put_text(&mut values, "name", Some(&self.name));
        put_text(&mut values, "abbreviation", self.abbreviation.as_deref());
        put_text(&mut values, "address_1", self.address_1.as_deref());
        put_text(&mut values, "address_2", self.address_2.as_deref());
        put_text(&mut values, "city", self.city.as_deref());
        put_text(&mut values, "state", self.state.as_deref());
        put_text(&mut values, "postal_code", self.postal_code.as_deref());
        put_text(&mut values, "country", self.country.as_deref());
        put_text(&mut values, "region", self.region.as_deref());
        put_text(&mut values, "team_code5", self.team_code5.as_deref());
        values
    }

    fn from_values(mut values: FieldMap) -> CodecResult<Self> {
        Ok(Self {
            organization: take_code(&mut values, "organization")?,
            team_code: require(take_text(&mut values, "team_code")?, "team_code")?,
            name: require(take_text(&mut values, "name")?, "name")?,
            abbreviation: take_text(&mut values, "abbreviation")?,
            address_1: take_text(&mut values, "address_1")?,
            address_2: take_text(&mut values, "address_2")?,
            city: take_text(&mut values, "city")?,
            state: take_text(&mut values, "state")?,
            postal_code: take_text(&mut values, "postal_code")?,
            country: take_text(&mut values, "country")?,
            region: take_text(&mut values, "region")?,
            team_code5: take_text(&mut values, "team_code5")?,
        })
    }
}

/// C2: the team coach and entry counts, following the C1 record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamEntry {
    pub organization: Option<OrganizationCode>,
    pub team_code: Option<String>,
    pub coach_name: Option<String>,
    pub coach_phone: Option<String>,
    pub n_entries: Option<u64>,
    pub n_athletes: Option<u64>,
    pub n_relay_entries: Option<u64>,
    pub n_split_records: Option<u64>,
    pub short_name: Option<String>,
    pub team_code5: Option<String>,
}

impl Record for TeamEntry {
    const IDENTIFIER: &'static str = "C2";

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "C2",
            vec![
                FieldSpec::optional("organization", 3, 1, NativeType::Code(OrganizationCode::table()))
                    .secondary_mandatory(),
                FieldSpec::optional("team_code", 12, 6, NativeType::Str).secondary_mandatory(),
                FieldSpec::optional("coach_name", 18, 30, NativeType::Str).secondary_mandatory(),
                FieldSpec::optional("coach_phone", 48, 12, NativeType::Str)
                    .with_type(FieldType::Phone),
                FieldSpec::optional("n_entries", 60, 6, NativeType::Int),
                FieldSpec::optional("n_athletes", 66, 6, NativeType::Int),
                FieldSpec::optional("n_relay_entries", 72, 5, NativeType::Int),
                FieldSpec::optional("n_split_records", 83, 6, NativeType::Int),
                FieldSpec::optional("short_name", 89, 16, NativeType::Str),
                FieldSpec::optional("team_code5", 150, 1, NativeType::Str),
            ],
        )
    }

    fn to_values(&self) -> FieldMap {
        let mut values = FieldMap::new();
        put_code(&mut values, "organization", self.organization);
        put_text(&mut values, "team_code", self.team_code.as_deref());
        put_text(&mut values, "coach_name", self.coach_name.as_deref());
        put_text(&mut values, "coach_phone", self.coach_phone.as_deref());
        put_int(&mut values, "n_entries", self.n_entries);
        put_int(&mut values, "n_athletes", self.n_athletes);
        put_int(&mut values, "n_relay_entries", self.n_relay_entries);
        put_int(&mut values, "n_split_records", self.n_split_records);
        put_text(&mut values, "short_name", self.short_name.as_deref());
        put_text(&mut values, "team_code5", self.team_code5.as_deref());
        values
    }

    fn from_values(mut values: FieldMap) -> CodecResult<Self> {
        Ok(Self {
            organization: take_code(&mut values, "organization")?,
            team_code: take_text(&mut values, "team_code")?,
            coach_name: take_text(&mut values, "coach_name")?,
            coach_phone: take_text(&mut values, "coach_phone")?,
            n_entries: take_int(&mut values, "n_entries")?,
            n_athletes: take_int(&mut values, "n_athletes")?,
            n_relay_entries: take_int(&mut values, "n_relay_entries")?,
            n_split_records: take_int(&mut values, "n_split_records")?,
            short_name: take_text(&mut values, "short_name")?,
            team_code5: take_text(&mut values, "team_code5")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_record, encode_record, Mode};

    #[test]
    fn test_team_id_round_trip() {
        let record = TeamId {
            organization: Some(OrganizationCode::Uss),
            team_code: "PNSKC".into(),
            name: "King Aquatic Club".into(),
            abbreviation: Some("KING".into()),
            address_1: None,
            address_2: None,
            city: Some("Seattle".into()),
            state: Some("WA".into()),
            postal_code: Some("98106".into()),
            country: Some("USA".into()),
            region: Some("4".into()),
            team_code5: None,
        };
        let line = encode_record(&record, Mode::Strict).unwrap();
        let decoded: TeamId = decode_record(&line, Mode::Strict).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_team_entry_round_trip_with_blanks() {
        // Every C2 field is structurally optional; an all-blank body is a
        // legal record in both modes.
        let record = TeamEntry {
            organization: None,
            team_code: None,
            coach_name: None,
            coach_phone: None,
            n_entries: None,
            n_athletes: None,
            n_relay_entries: None,
            n_split_records: None,
            short_name: None,
            team_code5: None,
        };
        let line = encode_record(&record, Mode::Strict).unwrap();
        assert_eq!(line.trim_end(), "C2");
        let decoded: TeamEntry = decode_record(&line, Mode::Strict).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_numeric_team_code_right_justified() {
        // Alpha fields holding purely numeric content are right justified.
        let record = TeamId {
            organization: None,
            team_code: "1234".into(),
            name: "Numeric Swim Club".into(),
            abbreviation: None,
            address_1: None,
            address_2: None,
            city: None,
            state: None,
            postal_code: None,
            country: None,
            region: None,
            team_code5: None,
        };
        let line = encode_record(&record, Mode::Strict).unwrap();
        assert_eq!(&line[11..17], "  1234");
    }
}
