//! Relay records: E0 relay events and F0 relay legs.

use chrono::NaiveDate;
use serde::Serialize;

use crate::codec::{CodecResult, FieldMap, Record};
use crate::codes::{
    CourseStatusCode, DomainCode, EventSexCode, EventTimeClassCode, OrderCode, OrganizationCode,
    SexCode, StrokeCode,
};
use crate::decimal::Decimal;
use crate::schema::{FieldSpec, FieldType, NativeType, RecordSchema};
use crate::time::TimeValue;

use super::convert::{
    put_code, put_date, put_dec, put_int, put_text, put_time, require, take_code, take_date,
    take_dec, take_int, take_text, take_time_value,
};

/// E0: one relay squad in one relay event.
///
/// The relay team name is a single character concatenated with the team
/// abbreviation from the C1 record, producing names like "Dolphins A".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayEvent {
    pub organization: Option<OrganizationCode>,
    pub relay_team_name: String,
    pub team_code: String,
    pub n_f0_records: Option<u64>,
    pub event_sex: EventSexCode,
    pub relay_distance: u64,
    pub stroke: StrokeCode,
    pub event_number: Option<String>,
    pub event_age: String,
    pub total_athlete_age: u64,
    pub swim_date: Option<NaiveDate>,
    pub seed_time: Option<TimeValue>,
    pub seed_course: Option<CourseStatusCode>,
    pub prelim_time: Option<TimeValue>,
    pub prelim_course: Option<CourseStatusCode>,
    pub swimoff_time: Option<TimeValue>,
    pub swimoff_course: Option<CourseStatusCode>,
    pub finals_time: Option<TimeValue>,
    pub finals_course: Option<CourseStatusCode>,
    pub prelim_heat: Option<u64>,
    pub prelim_lane: Option<u64>,
    pub finals_heat: Option<u64>,
    pub finals_lane: Option<u64>,
    pub prelim_place: Option<u64>,
    pub finals_place: Option<u64>,
    pub finals_points: Option<Decimal>,
    pub event_time_class_lower: Option<EventTimeClassCode>,
    pub event_time_class_upper: Option<EventTimeClassCode>,
}

impl Record for RelayEvent {
    const IDENTIFIER: &'static str = "E0";

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "E0",
            vec![
                FieldSpec::optional("organization", 3, 1, NativeType::Code(OrganizationCode::table()))
                    .secondary_mandatory(),
                FieldSpec::required("relay_team_name", 12, 1, NativeType::Str),
                FieldSpec::required("team_code", 13, 6, NativeType::Str),
                FieldSpec::optional("n_f0_records", 19, 2, NativeType::Int),
                FieldSpec::required("event_sex", 21, 1, NativeType::Code(EventSexCode::table())),
                FieldSpec::required("relay_distance", 22, 4, NativeType::Int),
                FieldSpec::required("stroke", 26, 1, NativeType::Code(StrokeCode::table())),
                FieldSpec::optional("event_number", 27, 4, NativeType::Str),
                FieldSpec::required("event_age", 31, 4, NativeType::Str),
                FieldSpec::required("total_athlete_age", 35, 3, NativeType::Int),
                FieldSpec::optional("swim_date", 38, 8, NativeType::Date),
                FieldSpec::optional("seed_time", 46, 8, NativeType::Time),
                FieldSpec::optional("seed_course", 54, 1, NativeType::Code(CourseStatusCode::table())),
                FieldSpec::optional("prelim_time", 55, 8, NativeType::Time),
                FieldSpec::optional("prelim_course", 63, 1, NativeType::Code(CourseStatusCode::table())),
                FieldSpec::optional("swimoff_time", 64, 8, NativeType::Time),
                FieldSpec::optional("swimoff_course", 72, 1, NativeType::Code(CourseStatusCode::table())),
                FieldSpec::optional("finals_time", 73, 8, NativeType::Time),
                FieldSpec::optional("finals_course", 81, 1, NativeType::Code(CourseStatusCode::table())),
                FieldSpec::optional("prelim_heat", 82, 2, NativeType::Int),
                FieldSpec::optional("prelim_lane", 84, 2, NativeType::Int),
                FieldSpec::optional("finals_heat", 86, 2, NativeType::Int),
                FieldSpec::optional("finals_lane", 88, 2, NativeType::Int),
                FieldSpec::optional("prelim_place", 90, 3, NativeType::Int),
                FieldSpec::optional("finals_place", 93, 3, NativeType::Int),
                FieldSpec::optional("finals_points", 96, 4, NativeType::Dec),
                FieldSpec::optional("event_time_class_lower", 100, 1, NativeType::Code(EventTimeClassCode::table())),
                FieldSpec::optional("event_time_class_upper", 101, 1, NativeType::Code(EventTimeClassCode::table())),
            ],
        )
    }

    fn to_values(&self) -> FieldMap {
        let mut values = FieldMap::new();
        put_code(&mut values, "organization", self.organization);
        put_text(&mut values, "relay_team_name", Some(&self.relay_team_name));
        put_text(&mut values, "team_code", Some(&self.team_code));
        put_int(&mut values, "n_f0_records", self.n_f0_records);
        put_code(&mut values, "event_sex", Some(self.event_sex));
        put_int(&mut values, "relay_distance", Some(self.relay_distance));
        put_code(&mut values, "stroke", Some(self.stroke));
        put_text(&mut values, "event_number", self.event_number.as_deref());
        put_text(&mut values, "event_age", Some(&self.event_age));
        put_int(&mut values, "total_athlete_age", Some(self.total_athlete_age));
        put_date(&mut values, "swim_date", self.swim_date);
        put_time(&mut values, "seed_time", self.seed_time);
        put_code(&mut values, "seed_course", self.seed_course);
        put_time(&mut values, "prelim_time", self.prelim_time);
        put_code(&mut values, "prelim_course", self.prelim_course);
        put_time(&mut values, "swimoff_time", self.swimoff_time);
        put_code(&mut values, "swimoff_course", self.swimoff_course);
        put_time(&mut values, "finals_time", self.finals_time);
        put_code(&mut values, "finals_course", self.finals_course);
        put_int(&mut values, "prelim_heat", self.prelim_heat);
        put_int(&mut values, "prelim_lane", self.prelim_lane);
        put_int(&mut values, "finals_heat", self.finals_heat);
        put_int(&mut values, "finals_lane", self.finals_lane);
        put_int(&mut values, "prelim_place", self.prelim_place);
        put_int(&mut values, "finals_place", self.finals_place);
        put_dec(&mut values, "finals_points", self.finals_points);
        put_code(&mut values, "event_time_class_lower", self.event_time_class_lower);
        put_code(&mut values, "event_time_class_upper", self.event_time_class_upper);
        values
    }

    fn from_values(mut values: FieldMap) -> CodecResult<Self> {
        Ok(Self {
            organization: take_code(&mut values, "organization")?,
            relay_team_name: require(take_text(&mut values, "relay_team_name")?, "relay_team_name")?,
            team_code: require(take_text(&mut values, "team_code")?, "team_code")?,
            n_f0_records: take_int(&mut values, "n_f0_records")?,
            event_sex: require(take_code(&mut values, "event_sex")?, "event_sex")?,
            relay_distance: require(take_int(&mut values, "relay_distance")?, "relay_distance")?,
            stroke: require(take_code(&mut values, "stroke")?, "stroke")?,
            event_number: take_text(&mut values, "event_number")?,
            event_age: require(take_text(&mut values, "event_age")?, "event_age")?,
            total_athlete_age: require(take_int(&mut values, "total_athlete_age")?, "total_athlete_age")?,
            swim_date: take_date(&mut values, "swim_date")?,
            seed_time: take_time_value(&mut values, "seed_time")?,
            seed_course: take_code(&mut values, "seed_course")?,
            prelim_time: take_time_value(&mut values, "prelim_time")?,
            prelim_course: take_code(&mut values, "prelim_course")?,
            swimoff_time: take_time_value(&mut values, "swimoff_time")?,
            swimoff_course: take_code(&mut values, "swimoff_course")?,
            finals_time: take_time_value(&mut values, "finals_time")?,
            finals_course: take_code(&mut values, "finals_course")?,
            prelim_heat: take_int(&mut values, "prelim_heat")?,
            prelim_lane: take_int(&mut values, "prelim_lane")?,
            finals_heat: take_int(&mut values, "finals_heat")?,
            finals_lane: take_int(&mut values, "finals_lane")?,
            prelim_place: take_int(&mut values, "prelim_place")?,
            finals_place: take_int(&mut values, "finals_place")?,
            finals_points: take_dec(&mut values, "finals_points")?,
            event_time_class_lower: take_code(&mut values, "event_time_class_lower")?,
            event_time_class_upper: take_code(&mut values, "event_time_class_upper")?,
        })
    }
}

/// F0: one athlete on a relay team, with leg order and leg time. Must
/// follow an E0 record to attach to the right squad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayName {
    pub organization: Option<OrganizationCode>,
    pub team_code: String,
    pub relay_team_name: Option<String>,
    pub swimmer_name: String,
    pub uss_number: Option<String>,
    pub citizen: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub age_or_class: Option<String>,
    pub sex: SexCode,
    pub prelim_order: OrderCode,
    pub swimoff_order: OrderCode,
    pub finals_order: OrderCode,
    pub leg_time: Option<TimeValue>,
    pub course: Option<CourseStatusCode>,
    pub takeoff_time: Option<Decimal>,
    pub uss_number_new: Option<String>,
    pub preferred_first_name: Option<String>,
}

impl Record for RelayName {
    const IDENTIFIER: &'static str = "F0";

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "F0",
            vec![
                FieldSpec::optional("organization", 3, 1, NativeType::Code(OrganizationCode::table()))
                    .secondary_mandatory(),
                FieldSpec::required("team_code", 16, 6, NativeType::Str),
                FieldSpec::optional("relay_team_name", 22, 1, NativeType::Str),
                FieldSpec::required("swimmer_name", 23, 28, NativeType::Str)
                    .with_type(FieldType::Name),
                FieldSpec::optional("uss_number", 51, 12, NativeType::Str),
                FieldSpec::optional("citizen", 63, 3, NativeType::Str),
                FieldSpec::optional("birthdate", 66, 8, NativeType::Date).secondary_mandatory(),
                FieldSpec::optional("age_or_class", 74, 2, NativeType::Str),
                FieldSpec::required("sex", 76, 1, NativeType::Code(SexCode::table())),
                FieldSpec::required("prelim_order", 77, 1, NativeType::Code(OrderCode::table())),
                FieldSpec::required("swimoff_order", 78, 1, NativeType::Code(OrderCode::table())),
                FieldSpec::required("finals_order", 79, 1, NativeType::Code(OrderCode::table())),
                FieldSpec::optional("leg_time", 80, 8, NativeType::Time),
                FieldSpec::optional("course", 88, 1, NativeType::Code(CourseStatusCode::table())),
                FieldSpec::optional("takeoff_time", 89, 4, NativeType::Dec),
                FieldSpec::optional("uss_number_new", 93, 14, NativeType::Str)
                    .with_type(FieldType::Ussnum)
                    .secondary_mandatory(),
                FieldSpec::optional("preferred_first_name", 107, 15, NativeType::Str),
            ],
        )
    }

    fn to_values(&self) -> FieldMap {
        let mut values = FieldMap::new();
        put_code(&mut values, "organization", self.organization);
        put_text(&mut values, "team_code", Some(&self.team_code));
        put_text(&mut values, "relay_team_name", self.relay_team_name.as_deref());
        put_text(&mut values, "swimmer_name", Some(&self.swimmer_name));
        put_text(&mut values, "uss_number", self.uss_number.as_deref());
        put_text(&mut values, "citizen", self.citizen.as_deref());
        put_date(&mut values, "birthdate", self.birthdate);
        put_text(&mut values, "age_or_class", self.age_or_class.as_deref());
        put_code(&mut values, "sex", Some(self.sex));
        put_code(&mut values, "prelim_order", Some(self.prelim_order));
        put_code(&mut values, "swimoff_order", Some(self.swimoff_order));
        put_code(&mut values, "finals_order", Some(self.finals_order));
        put_time(&mut values, "leg_time", self.leg_time);
        put_code(&mut values, "course", self.course);
        put_dec(&mut values, "takeoff_time", self.takeoff_time);
        put_text(&mut values, "uss_number_new", self.uss_number_new.as_deref());
        put_text(&mut values, "preferred_first_name", self.preferred_first_name.as_deref());
        values
    }

    fn from_values(mut values: FieldMap) -> CodecResult<Self> {
        Ok(Self {
            organization: take_code(&mut values, "organization")?,
            team_code: require(take_text(&mut values, "team_code")?, "team_code")?,
            relay_team_name: take_text(&mut values, "relay_team_name")?,
            swimmer_name: require(take_text(&mut values, "swimmer_name")?, "swimmer_name")?,
            uss_number: take_text(&mut values, "uss_number")?,
            citizen: take_text(&mut values, "citizen")?,
            birthdate: take_date(&mut values, "birthdate")?,
            age_or_class: take_text(&mut values, "age_or_class")?,
            sex: require(take_code(&mut values, "sex")?, "sex")?,
            prelim_order: require(take_code(&mut values, "prelim_order")?, "prelim_order")?,
            swimoff_order: require(take_code(&mut values, "swimoff_order")?, "swimoff_order")?,
            finals_order: require(take_code(&mut values, "finals_order")?, "finals_order")?,
            leg_time: take_time_value(&mut values, "leg_time")?,
            course: take_code(&mut values, "course")?,
            takeoff_time: take_dec(&mut values, "takeoff_time")?,
            uss_number_new: take_text(&mut values, "uss_number_new")?,
            preferred_first_name: take_text(&mut values, "preferred_first_name")?,
        })
    }
}
