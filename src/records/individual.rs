//! Individual swimmer records: D0 event entries and D3 supplemental info.

use chrono::NaiveDate;
use serde::Serialize;

use crate::codec::{CodecResult, FieldMap, Record};
use crate::codes::{
    AttachCode, CourseStatusCode, DomainCode, EthnicityCode, EventSexCode, OrganizationCode,
    SexCode, StrokeCode,
};
use crate::decimal::Decimal;
use crate::schema::{FieldSpec, FieldType, NativeType, RecordSchema};
use crate::time::{Time, TimeValue};

use super::convert::{
    put_code, put_date, put_dec, put_int, put_logical, put_text, put_time, require, take_code,
    take_date, take_dec, take_int, take_logical, take_text, take_time, take_time_value,
};

/// D0: one swimmer in one individual event, with seed, prelim, swim-off,
/// and finals results.
///
/// The event age field packs two 2-byte limits: digits or `UN` for no lower
/// limit, digits or `OV` for no upper limit; single-digit ages are
/// zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualEvent {
    pub organization: Option<OrganizationCode>,
    pub name: String,
    pub ussn: Option<String>,
    pub attached: Option<AttachCode>,
    pub citizen: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub age_or_class: Option<String>,
    pub sex: SexCode,
    pub event_sex: Option<EventSexCode>,
    pub event_distance: Option<u64>,
    pub stroke: Option<StrokeCode>,
    pub event_number: Option<String>,
    pub event_age: Option<String>,
    pub date_of_swim: Option<NaiveDate>,
    pub seed_time: Option<Time>,
    pub seed_time_course: Option<CourseStatusCode>,
    pub prelim_time: Option<TimeValue>,
    pub prelim_time_course: Option<CourseStatusCode>,
    pub swim_off_time: Option<TimeValue>,
    pub swim_off_time_course: Option<CourseStatusCode>,
    pub finals_time: Option<TimeValue>,
    pub finals_time_course: Option<CourseStatusCode>,
    pub prelim_heat_number: Option<u64>,
    pub prelim_lane_number: Option<u64>,
    pub finals_heat_number: Option<u64>,
    pub finals_lane_number: Option<u64>,
    pub prelim_place_ranking: Option<u64>,
    pub finals_place_ranking: Option<u64>,
    pub points_scored_finals: Option<Decimal>,
    pub event_time_class: Option<String>,
    pub flight_status: Option<String>,
}

impl Record for IndividualEvent {
    const IDENTIFIER: &'static str = "D0";

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "D0",
            vec![
                FieldSpec::optional("organization", 3, 1, NativeType::Code(OrganizationCode::table())),
                FieldSpec::required("name", 12, 28, NativeType::Str).with_type(FieldType::Name),
                FieldSpec::optional("ussn", 40, 12, NativeType::Str).secondary_mandatory(),
                FieldSpec::optional("attached", 52, 1, NativeType::Code(AttachCode::table())),
                FieldSpec::optional("citizen", 53, 3, NativeType::Str),
                FieldSpec::optional("birthdate", 56, 8, NativeType::Date).secondary_mandatory(),
                FieldSpec::optional("age_or_class", 64, 2, NativeType::Str),
                FieldSpec::required("sex", 66, 1, NativeType::Code(SexCode::table())),
                FieldSpec::optional("event_sex", 67, 1, NativeType::Code(EventSexCode::table())),
                FieldSpec::optional("event_distance", 68, 4, NativeType::Int),
                FieldSpec::optional("stroke", 72, 1, NativeType::Code(StrokeCode::table())),
                FieldSpec::optional("event_number", 73, 4, NativeType::Str),
                FieldSpec::optional("event_age", 77, 4, NativeType::Str),
                FieldSpec::optional("date_of_swim", 81, 8, NativeType::Date),
                FieldSpec::optional("seed_time", 89, 8, NativeType::Time),
                FieldSpec::optional("seed_time_course", 97, 1, NativeType::Code(CourseStatusCode::table())),
                FieldSpec::optional("prelim_time", 98, 8, NativeType::Time).with_type(FieldType::Time),
                FieldSpec::optional("prelim_time_course", 106, 1, NativeType::Code(CourseStatusCode::table())),
                FieldSpec::optional("swim_off_time", 107, 8, NativeType::Time).with_type(FieldType::Time),
                FieldSpec::optional("swim_off_time_course", 115, 1, NativeType::Code(CourseStatusCode::table())),
                FieldSpec::optional("finals_time", 116, 8, NativeType::Time).with_type(FieldType::Time),
                FieldSpec::optional("finals_time_course", 124, 1, NativeType::Code(CourseStatusCode::table())),
                FieldSpec::optional("prelim_heat_number", 125, 2, NativeType::Int),
                FieldSpec::optional("prelim_lane_number", 127, 2, NativeType::Int),
                FieldSpec::optional("finals_heat_number", 129, 2, NativeType::Int),
                FieldSpec::optional("finals_lane_number", 131, 2, NativeType::Int),
                FieldSpec::optional("prelim_place_ranking", 133, 3, NativeType::Int),
                FieldSpec::optional("finals_place_ranking", 136, 3, NativeType::Int),
                FieldSpec::optional("points_scored_finals", 139, 4, NativeType::Dec),
                FieldSpec::optional("event_time_class", 143, 2, NativeType::Str),
                FieldSpec::optional("flight_status", 145, 1, NativeType::Str),
            ],
        )
    }

    fn to_values(&self) -> FieldMap {
        let mut values = FieldMap::new();
        put_code(&mut values, "organization", self.organization);
        put_text(&mut values, "name", Some(&self.name));
        put_text(&mut values, "ussn", self.ussn.as_deref());
        put_code(&mut values, "attached", self.attached);
        put_text(&mut values, "citizen", self.citizen.as_deref());
        put_date(&mut values, "birthdate", self.birthdate);
        put_text(&mut values, "age_or_class", self.age_or_class.as_deref());
        put_code(&mut values, "sex", Some(self.sex));
        put_code(&mut values, "event_sex", self.event_sex);
        put_int(&mut values, "event_distance", self.event_distance);
        put_code(&mut values, "stroke", self.stroke);
        put_text(&mut values, "event_number", self.event_number.as_deref());
        put_text(&mut values, "event_age", self.event_age.as_deref());
        put_date(&mut values, "date_of_swim", self.date_of_swim);
        put_time(&mut values, "seed_time", self.seed_time.map(TimeValue::from));
        put_code(&mut values, "seed_time_course", self.seed_time_course);
        put_time(&mut values, "prelim_time", self.prelim_time);
        put_code(&mut values, "prelim_time_course", self.prelim_time_course);
        put_time(&mut values, "swim_off_time", self.swim_off_time);
        put_code(&mut values, "swim_off_time_course", self.swim_off_time_course);
        put_time(&mut values, "finals_time", self.finals_time);
        put_code(&mut values, "finals_time_course", self.finals_time_course);
        put_int(&mut values, "prelim_heat_number", self.prelim_heat_number);
        put_int(&mut values, "prelim_lane_number", self.prelim_lane_number);
        put_int(&mut values, "finals_heat_number", self.finals_heat_number);
        put_int(&mut values, "finals_lane_number", self.finals_lane_number);
        put_int(&mut values, "prelim_place_ranking", self.prelim_place_ranking);
        put_int(&mut values, "finals_place_ranking", self.finals_place_ranking);
        put_dec(&mut values, "points_scored_finals", self.points_scored_finals);
        put_text(&mut values, "event_time_class", self.event_time_class.as_deref());
        put_text(&mut values, "flight_status", self.flight_status.as_deref());
        values
    }

    fn from_values(mut values: FieldMap) -> CodecResult<Self> {
        Ok(Self {
            organization: take_code(&mut values, "organization")?,
            name: require(take_text(&mut values, "name")?, "name")?,
            ussn: take_text(&mut values, "ussn")?,
            attached: take_code(&mut values, "attached")?,
            citizen: take_text(&mut values, "citizen")?,
            birthdate: take_date(&mut values, "birthdate")?,
            age_or_class: take_text(&mut values, "age_or_class")?,
            sex: require(take_code(&mut values, "sex")?, "sex")?,
            event_sex: take_code(&mut values, "event_sex")?,
            event_distance: take_int(&mut values, "event_distance")?,
            stroke: take_code(&mut values, "stroke")?,
            event_number: take_text(&mut values, "event_number")?,
            event_age: take_text(&mut values, "event_age")?,
            date_of_swim: take_date(&mut values, "date_of_swim")?,
            seed_time: take_time(&mut values, "seed_time")?,
            seed_time_course: take_code(&mut values, "seed_time_course")?,
            prelim_time: take_time_value(&mut values, "prelim_time")?,
            prelim_time_course: take_code(&mut values, "prelim_time_course")?,
            swim_off_time: take_time_value(&mut values, "swim_off_time")?,
            swim_off_time_course: take_code(&mut values, "swim_off_time_course")?,
            finals_time: take_time_value(&mut values, "finals_time")?,
            finals_time_course: take_code(&mut values, "finals_time_course")?,
            prelim_heat_number: take_int(&mut values, "prelim_heat_number")?,
            prelim_lane_number: take_int(&mut values, "prelim_lane_number")?,
            finals_heat_number: take_int(&mut values, "finals_heat_number")?,
            finals_lane_number: take_int(&mut values, "finals_lane_number")?,
            prelim_place_ranking: take_int(&mut values, "prelim_place_ranking")?,
            finals_place_ranking: take_int(&mut values, "finals_place_ranking")?,
            points_scored_finals: take_dec(&mut values, "points_scored_finals")?,
            event_time_class: take_text(&mut values, "event_time_class")?,
            flight_status: take_text(&mut values, "flight_status")?,
        })
    }
}

/// D3: supplemental swimmer information introduced with version 3, keyed by
/// the new 14-character USS number. Follows the swimmer's first D0 record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualInfo {
    pub uss_number: Option<String>,
    pub preferred_first_name: Option<String>,
    pub ethnicity_1: Option<EthnicityCode>,
    pub ethnicity_2: Option<EthnicityCode>,
    pub junior_high: Option<bool>,
    pub senior_high: Option<bool>,
    pub ymca_ywca: Option<bool>,
    pub college: Option<bool>,
    pub summer_league: Option<bool>,
    pub masters: Option<bool>,
    pub disabled_sports_org: Option<bool>,
    pub water_polo: Option<bool>,
    pub no_affiliation: Option<bool>,
}

impl Record for IndividualInfo {
    const IDENTIFIER: &'static str = "D3";

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "D3",
            vec![
                FieldSpec::optional("uss_number", 3, 14, NativeType::Str)
                    .with_type(FieldType::Ussnum)
                    .secondary_mandatory(),
                FieldSpec::optional("preferred_first_name", 17, 15, NativeType::Str),
                FieldSpec::optional("ethnicity_1", 32, 1, NativeType::Code(EthnicityCode::table())),
                FieldSpec::optional("ethnicity_2", 33, 1, NativeType::Code(EthnicityCode::table())),
                FieldSpec::optional("junior_high", 34, 1, NativeType::Logical),
                FieldSpec::optional("senior_high", 35, 1, NativeType::Logical),
                FieldSpec::optional("ymca_ywca", 36, 1, NativeType::Logical),
                FieldSpec::optional("college", 37, 1, NativeType::Logical),
                FieldSpec::optional("summer_league", 38, 1, NativeType::Logical),
                FieldSpec::optional("masters", 39, 1, NativeType::Logical),
                FieldSpec::optional("disabled_sports_org", 40, 1, NativeType::Logical),
                FieldSpec::optional("water_polo", 41, 1, NativeType::Logical),
                FieldSpec::optional("no_affiliation", 42, 1, NativeType::Logical),
            ],
        )
    }

    fn to_values(&self) -> FieldMap {
        let mut values = FieldMap::new();
        put_text(&mut values, "uss_number", self.uss_number.as_deref());
        put_text(&mut values, "preferred_first_name", self.preferred_first_name.as_deref());
        put_code(&mut values, "ethnicity_1", self.ethnicity_1);
        put_code(&mut values, "ethnicity_2", self.ethnicity_2);
        put_logical(&mut values, "junior_high", self.junior_high);
        put_logical(&mut values, "senior_high", self.senior_high);
        put_logical(&mut values, "ymca_ywca", self.ymca_ywca);
        put_logical(&mut values, "college", self.college);
        put_logical(&mut values, "summer_league", self.summer_league);
        put_logical(&mut values, "masters", self.masters);
        put_logical(&mut values, "disabled_sports_org", self.disabled_sports_org);
        put_logical(&mut values, "water_polo", self.water_polo);
        put_logical(&mut values, "no_affiliation", self.no_affiliation);
        values
    }

    fn from_values(mut values: FieldMap) -> CodecResult<Self> {
        Ok(Self {
            uss_number: take_text(&mut values, "uss_number")?,
            preferred_first_name: take_text(&mut values, "preferred_first_name")?,
            ethnicity_1: take_code(&mut values, "ethnicity_1")?,
            ethnicity_2: take_code(&mut values, "ethnicity_2")?,
            junior_high: take_logical(&mut values, "junior_high")?,
            senior_high: take_logical(&mut values, "senior_high")?,
            ymca_ywca: take_logical(&mut values, "ymca_ywca")?,
            college: take_logical(&mut values, "college")?,
            summer_league: take_logical(&mut values, "summer_league")?,
            masters: take_logical(&mut values, "masters")?,
            disabled_sports_org: take_logical(&mut values, "disabled_sports_org")?,
            water_polo: take_logical(&mut values, "water_polo")?,
            no_affiliation: take_logical(&mut values, "no_affiliation")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_record, encode_record, CodecError, Mode};
    use crate::time::TimeCode;

    fn sample_event() -> IndividualEvent {
        IndividualEvent {
            organization: Some(OrganizationCode::Uss),
            name: "Smith, Tim".into(),
            ussn: Some("123456789012".into()),
            attached: Some(AttachCode::Attached),
            citizen: Some("USA".into()),
            birthdate: NaiveDate::from_ymd_opt(2008, 7, 1),
            age_or_class: Some("15".into()),
            sex: SexCode::Male,
            event_sex: Some(EventSexCode::Male),
            event_distance: Some(100),
            stroke: Some(StrokeCode::Butterfly),
            event_number: Some("12".into()),
            event_age: Some("1314".into()),
            date_of_swim: NaiveDate::from_ymd_opt(2023, 4, 15),
            seed_time: Some("1:02.41".parse().unwrap()),
            seed_time_course: Some(CourseStatusCode::ShortYards),
            prelim_time: Some(TimeValue::Time("1:01.88".parse().unwrap())),
            prelim_time_course: Some(CourseStatusCode::ShortYards),
            swim_off_time: None,
            swim_off_time_course: None,
            finals_time: Some(TimeValue::Time("59.99".parse().unwrap())),
            finals_time_course: Some(CourseStatusCode::ShortYards),
            prelim_heat_number: Some(3),
            prelim_lane_number: Some(4),
            finals_heat_number: Some(1),
            finals_lane_number: Some(5),
            prelim_place_ranking: Some(7),
            finals_place_ranking: Some(2),
            points_scored_finals: Some("17".parse().unwrap()),
            event_time_class: Some("23".into()),
            flight_status: None,
        }
    }

    #[test]
    fn test_event_round_trip() {
        let record = sample_event();
        let line = encode_record(&record, Mode::Strict).unwrap();
        assert_eq!(line.len(), 160);
        let decoded: IndividualEvent = decode_record(&line, Mode::Strict).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_event_with_disqualified_finals() {
        let mut record = sample_event();
        record.finals_time = Some(TimeValue::Code(TimeCode::Disqualified));
        let line = encode_record(&record, Mode::Strict).unwrap();
        assert_eq!(&line[115..123], "DQ      ");
        let decoded: IndividualEvent = decode_record(&line, Mode::Strict).unwrap();
        assert_eq!(decoded.finals_time, Some(TimeValue::Code(TimeCode::Disqualified)));
    }

    #[test]
    fn test_seed_time_rejects_explanation_code() {
        // The seed time field narrows to a literal time; a DQ there is a
        // producer error, not a legal value.
        let record = sample_event();
        let line = encode_record(&record, Mode::Strict).unwrap();
        let patched = format!("{}DQ      {}", &line[..88], &line[96..]);
        let result: CodecResult<IndividualEvent> = decode_record(&patched, Mode::Strict);
        assert!(matches!(result, Err(CodecError::ValueMismatch { .. })));
    }

    #[test]
    fn test_info_round_trip() {
        let record = IndividualInfo {
            uss_number: Some("011553CATADURA".into()),
            preferred_first_name: Some("Cat".into()),
            ethnicity_1: Some(EthnicityCode::Caucasian),
            ethnicity_2: None,
            junior_high: Some(false),
            senior_high: Some(true),
            ymca_ywca: Some(false),
            college: None,
            summer_league: Some(false),
            masters: Some(false),
            disabled_sports_org: None,
            water_polo: Some(false),
            no_affiliation: None,
        };
        let line = encode_record(&record, Mode::Strict).unwrap();
        assert_eq!(&line[2..16], "011553CATADURA");
        assert_eq!(&line[34..35], "T");
        let decoded: IndividualInfo = decode_record(&line, Mode::Strict).unwrap();
        assert_eq!(decoded, record);
    }
}
