//! Full-record and batch round trips through the public API.

use chrono::NaiveDate;

use sdif::codec::{
    decode_records, encode_record, encode_records, CodecError, Mode, RECORD_SEP,
};
use sdif::codes::{
    AttachCode, CourseStatusCode, EventSexCode, FileCode, MeetTypeCode, OrganizationCode, SexCode,
    StrokeCode,
};
use sdif::records::{
    standard_registry, AnyRecord, FileDescription, FileTerminator, IndividualEvent, Meet, TeamId,
};
use sdif::time::TimeValue;

fn file_description() -> FileDescription {
    FileDescription {
        organization: Some(OrganizationCode::Masters),
        sdif_version: Some("V3".into()),
        file_code: FileCode::VendorDefined,
        software_name: Some("hi, mom".into()),
        software_version: Some("beta".into()),
        contact_name: "Joe Bloggs".into(),
        contact_phone: "+15555551212".into(),
        file_creation: NaiveDate::from_ymd_opt(2023, 2, 18).unwrap(),
        submitted_by_lsc: None,
    }
}

fn meet() -> Meet {
    Meet {
        organization: Some(OrganizationCode::Uss),
        meet_name: "Spring Invitational".into(),
        meet_address_1: "100 Natatorium Way".into(),
        meet_address_2: None,
        meet_city: Some("Federal Way".into()),
        meet_state: Some("WA".into()),
        postal_code: Some("98003".into()),
        country: Some("USA".into()),
        meet_type: Some(MeetTypeCode::Invitational),
        meet_start: NaiveDate::from_ymd_opt(2023, 4, 14).unwrap(),
        meet_end: Some(NaiveDate::from_ymd_opt(2023, 4, 16).unwrap()),
        pool_altitude_ft: None,
        course: Some(CourseStatusCode::ShortYards),
    }
}

fn team() -> TeamId {
    TeamId {
        organization: Some(OrganizationCode::Uss),
        team_code: "PNSKC".into(),
        name: "King Aquatic Club".into(),
        abbreviation: Some("KING".into()),
        address_1: None,
        address_2: None,
        city: Some("Seattle".into()),
        state: Some("WA".into()),
        postal_code: None,
        country: None,
        region: Some("4".into()),
        team_code5: None,
    }
}

fn individual_event() -> IndividualEvent {
    IndividualEvent {
        organization: Some(OrganizationCode::Uss),
        name: "Smith, Tim".into(),
        ussn: Some("123456789012".into()),
        attached: Some(AttachCode::Attached),
        citizen: None,
        birthdate: NaiveDate::from_ymd_opt(2008, 7, 1),
        age_or_class: Some("15".into()),
        sex: SexCode::Male,
        event_sex: Some(EventSexCode::Male),
        event_distance: Some(100),
        stroke: Some(StrokeCode::Freestyle),
        event_number: Some("7".into()),
        event_age: Some("1314".into()),
        date_of_swim: NaiveDate::from_ymd_opt(2023, 4, 15),
        seed_time: Some("52.10".parse().unwrap()),
        seed_time_course: Some(CourseStatusCode::ShortYards),
        prelim_time: Some(TimeValue::Time("51.88".parse().unwrap())),
        prelim_time_course: Some(CourseStatusCode::ShortYards),
        swim_off_time: None,
        swim_off_time_course: None,
        finals_time: Some(TimeValue::Time("51.02".parse().unwrap())),
        finals_time_course: Some(CourseStatusCode::ShortYards),
        prelim_heat_number: Some(2),
        prelim_lane_number: Some(4),
        finals_heat_number: Some(1),
        finals_lane_number: Some(3),
        prelim_place_ranking: Some(5),
        finals_place_ranking: Some(1),
        points_scored_finals: Some("20".parse().unwrap()),
        event_time_class: None,
        flight_status: None,
    }
}

fn terminator() -> FileTerminator {
    FileTerminator {
        organization: Some(OrganizationCode::Uss),
        file_code: FileCode::MeetResults,
        notes: "end of transmission".into(),
        n_b_records: Some(1),
        n_meets: Some(1),
        n_c_records: Some(1),
        n_teams: Some(1),
        n_d_records: Some(1),
        n_swimmers: Some(1),
        n_e_records: None,
        n_f_records: None,
        n_g_records: None,
        batch_number: None,
        n_new_members: None,
        n_renew_members: None,
        n_member_changes: None,
        n_member_deletes: None,
    }
}

#[test]
fn fully_populated_record_round_trips() {
    let record = file_description();
    let body = encode_records([&AnyRecord::from(record.clone())], Mode::Strict).unwrap();
    let registry = standard_registry().unwrap();
    let decoded: Vec<AnyRecord> = decode_records(&registry, &body, Mode::Strict)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(decoded, vec![AnyRecord::from(record)]);
}

#[test]
fn batch_dispatches_by_identifier_in_order() {
    let records = vec![
        AnyRecord::from(file_description()),
        AnyRecord::from(meet()),
        AnyRecord::from(team()),
        AnyRecord::from(individual_event()),
        AnyRecord::from(terminator()),
    ];
    let body = encode_records(records.iter(), Mode::Strict).unwrap();

    // Five fixed-width lines joined by CR+LF.
    assert_eq!(body.len(), 5 * 160 + 4 * RECORD_SEP.len());

    let registry = standard_registry().unwrap();
    let decoded: Vec<AnyRecord> = decode_records(&registry, &body, Mode::Strict)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(decoded, records);

    let identifiers: Vec<&str> = decoded.iter().map(|r| r.identifier()).collect();
    assert_eq!(identifiers, vec!["A0", "B1", "C1", "D0", "Z0"]);
}

#[test]
fn batch_tolerates_trailing_separator() {
    let body = encode_records([&AnyRecord::from(terminator())], Mode::Strict).unwrap();
    let with_tail = format!("{}{}", body, RECORD_SEP);
    let registry = standard_registry().unwrap();
    let decoded: Vec<_> = decode_records(&registry, &with_tail, Mode::Strict).collect();
    assert_eq!(decoded.len(), 1);
    assert!(decoded[0].is_ok());
}

#[test]
fn unknown_record_type_surfaces_per_line() {
    let registry = standard_registry().unwrap();
    let good = encode_record(&terminator(), Mode::Strict).unwrap();
    let body = format!("G0 splits are not supported{}{}", RECORD_SEP, good);
    let results: Vec<_> = decode_records(&registry, &body, Mode::Strict).collect();
    assert_eq!(results.len(), 2);
    assert!(matches!(
        results[0],
        Err(CodecError::UnknownRecordType { ref identifier }) if identifier == "G0"
    ));
    assert!(results[1].is_ok());
}

#[test]
fn hytek_signon_line_round_trips() {
    // A real Hy-Tek Meet Manager sign-on record, byte for byte.
    let original = "A02V3      02                              Hy-Tek, Ltd         WMM 8.0Ea Hy-Tek, Ltd     -USS866-456-511102182023                                               ";
    assert_eq!(original.len(), 160);

    let registry = standard_registry().unwrap();
    let decoded: Vec<AnyRecord> = decode_records(&registry, original, Mode::Strict)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(decoded.len(), 1);

    let AnyRecord::FileDescription(description) = &decoded[0] else {
        panic!("expected a file description record");
    };
    assert_eq!(description.organization, Some(OrganizationCode::Masters));
    assert_eq!(description.file_code, FileCode::MeetResults);
    assert_eq!(description.contact_phone, "866-456-5111");
    assert_eq!(
        description.file_creation,
        NaiveDate::from_ymd_opt(2023, 2, 18).unwrap()
    );

    let reencoded = encode_records(decoded.iter(), Mode::Strict).unwrap();
    assert_eq!(reencoded, original);
}

#[test]
fn blank_required_fields_fail_in_both_modes() {
    // Strip the contact fields from an A0 line. They are structurally
    // mandatory and the record model cannot hold their absence, so strict
    // and lenient decoding both reject the line.
    let record = file_description();
    let line = encode_record(&record, Mode::Strict).unwrap();
    let blanked = format!("{}{}{}", &line[..73], " ".repeat(32), &line[105..]);
    assert_eq!(blanked.len(), 160);

    let registry = standard_registry().unwrap();
    for mode in [Mode::Strict, Mode::Lenient] {
        let result: Vec<_> = decode_records(&registry, &blanked, mode).collect();
        assert!(matches!(
            result[0],
            Err(CodecError::MissingMandatoryValue { .. })
        ));
    }
}

#[test]
fn encode_rejects_too_wide_values() {
    let mut record = meet();
    record.meet_name = "An Absurdly Long Meet Name That Cannot Fit".into();
    let result = encode_record(&record, Mode::Strict);
    assert!(matches!(result, Err(CodecError::ValueTooWide { len: 30, .. })));
}

#[test]
fn every_encoded_record_is_exactly_one_body_wide() {
    for record in [
        AnyRecord::from(file_description()),
        AnyRecord::from(meet()),
        AnyRecord::from(team()),
        AnyRecord::from(individual_event()),
        AnyRecord::from(terminator()),
    ] {
        let body = encode_records([&record], Mode::Strict).unwrap();
        assert_eq!(body.chars().count(), 160, "{} width", record.identifier());
    }
}
