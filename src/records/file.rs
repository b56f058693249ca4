//! File-level records: the A0 sign-on and Z0 terminator.

use chrono::NaiveDate;
use serde::Serialize;

use crate::codec::{CodecResult, FieldMap, Record};
use crate::codes::{DomainCode, FileCode, OrganizationCode};
use crate::schema::{FieldSpec, FieldType, NativeType, RecordSchema};

use super::convert::{put_code, put_date, put_int, put_text, require, take_code, take_date, take_int, take_text};

/// A0: identifies the file, the type of data transmitted, and a contact
/// for questions about it. Every file begins with exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDescription {
    pub organization: Option<OrganizationCode>,
    pub sdif_version: Option<String>,
    pub file_code: FileCode,
    pub software_name: Option<String>,
    pub software_version: Option<String>,
    pub contact_name: String,
    pub contact_phone: String,
    pub file_creation: NaiveDate,
    pub submitted_by_lsc: Option<String>,
}

impl Record for FileDescription {
    const IDENTIFIER: &'static str = "A0";

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "A0",
            vec![
                FieldSpec::optional("organization", 3, 1, NativeType::Code(OrganizationCode::table()))
                    .secondary_mandatory(),
                FieldSpec::optional("sdif_version", 4, 8, NativeType::Str),
                FieldSpec::required("file_code", 12, 2, NativeType::Code(FileCode::table())),
                FieldSpec::optional("software_name", 44, 20, NativeType::Str),
                FieldSpec::optional("software_version", 64, 10, NativeType::Str),
                FieldSpec::required("contact_name", 74, 20, NativeType::Str),
                FieldSpec::required("contact_phone", 94, 12, NativeType::Str)
                    .with_type(FieldType::Phone),
                FieldSpec::required("file_creation", 106, 8, NativeType::Date),
                FieldSpec::optional("submitted_by_lsc", 156, 2, NativeType::Str),
            ],
        )
    }

    fn to_values(&self) -> FieldMap {
        let mut values = FieldMap::new();
        put_code(&mut values, "organization", self.organization);
        put_text(&mut values, "sdif_version", self.sdif_version.as_deref());
        put_code(&mut values, "file_code", Some(self.file_code));
        put_text(&mut values, "software_name", self.software_name.as_deref());
        put_text(&mut values, "software_version", self.software_version.as_deref());
        put_text(&mut values, "contact_name", Some(&self.contact_name));
        put_text(&mut values, "contact_phone", Some(&self.contact_phone));
        put_date(&mut values, "file_creation", Some(self.file_creation));
        put_text(&mut values, "submitted_by_lsc", self.submitted_by_lsc.as_deref());
        values
    }

    fn from_values(mut values: FieldMap) -> CodecResult<Self> {
        Ok(Self {
            organization: take_code(&mut values, "organization")?,
            sdif_version: take_text(&mut values, "sdif_version")?,
            file_code: require(take_code(&mut values, "file_code")?, "file_code")?,
            software_name: take_text(&mut values, "software_name")?,
            software_version: take_text(&mut values, "software_version")?,
            contact_name: require(take_text(&mut values, "contact_name")?, "contact_name")?,
            contact_phone: require(take_text(&mut values, "contact_phone")?, "contact_phone")?,
            file_creation: require(take_date(&mut values, "file_creation")?, "file_creation")?,
            submitted_by_lsc: take_text(&mut values, "submitted_by_lsc")?,
        })
    }
}

/// Z0: marks the logical end of file and carries record and swim counts
/// for convenience. Every file ends with exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTerminator {
    pub organization: Option<OrganizationCode>,
    pub file_code: FileCode,
    pub notes: String,
    pub n_b_records: Option<u64>,
    pub n_meets: Option<u64>,
    pub n_c_records: Option<u64>,
    pub n_teams: Option<u64>,
    pub n_d_records: Option<u64>,
    pub n_swimmers: Option<u64>,
    pub n_e_records: Option<u64>,
    pub n_f_records: Option<u64>,
    pub n_g_records: Option<u64>,
    pub batch_number: Option<u64>,
    pub n_new_members: Option<u64>,
    pub n_renew_members: Option<u64>,
    pub n_member_changes: Option<u64>,
    pub n_member_deletes: Option<u64>,
}

impl Record for FileTerminator {
    const IDENTIFIER: &'static str = "Z0";

    fn schema() -> RecordSchema {
        RecordSchema::new(
            "Z0",
            vec![
                FieldSpec::optional("organization", 3, 1, NativeType::Code(OrganizationCode::table()))
                    .secondary_mandatory(),
                FieldSpec::required("file_code", 12, 2, NativeType::Code(FileCode::table())),
                FieldSpec::required("notes", 14, 30, NativeType::Str),
                FieldSpec::optional("n_b_records", 44, 3, NativeType::Int),
                FieldSpec::optional("n_meets", 47, 3, NativeType::Int),
                FieldSpec::optional("n_c_records", 50, 4, NativeType::Int),
                FieldSpec::optional("n_teams", 54, 4, NativeType::Int),
                FieldSpec::optional("n_d_records", 58, 6, NativeType::Int),
                FieldSpec::optional("n_swimmers", 64, 6, NativeType::Int),
                FieldSpec::optional("n_e_records", 70, 5, NativeType::Int),
                FieldSpec::optional("n_f_records", 75, 6, NativeType::Int),
                FieldSpec::optional("n_g_records", 81, 6, NativeType::Int),
                FieldSpec::optional("batch_number", 87, 5, NativeType::Int),
                FieldSpec::optional("n_new_members", 92, 3, NativeType::Int),
                FieldSpec::optional("n_renew_members", 95, 3, NativeType::Int),
                FieldSpec::optional("n_member_changes", 98, 3, NativeType::Int),
                FieldSpec::optional("n_member_deletes", 101, 3, NativeType::Int),
            ],
        )
    }

    fn to_values(&self) -> FieldMap {
        let mut values = FieldMap::new();
        put_code(&mut values, "organization", self.organization);
        put_code(&mut values, "file_code", Some(self.file_code));
        put_text(&mut values, "notes", Some(&self.notes));
        put_int(&mut values, "n_b_records", self.n_b_records);
        put_int(&mut values, "n_meets", self.n_meets);
        put_int(&mut values, "n_c_records", self.n_c_records);
        put_int(&mut values, "n_teams", self.n_teams);
        put_int(&mut values, "n_d_records", self.n_d_records);
        put_int(&mut values, "n_swimmers", self.n_swimmers);
        put_int(&mut values, "n_e_records", self.n_e_records);
        put_int(&mut values, "n_f_records", self.n_f_records);
        put_int(&mut values, "n_g_records", self.n_g_records);
        put_int(&mut values, "batch_number", self.batch_number);
        put_int(&mut values, "n_new_members", self.n_new_members);
        put_int(&mut values, "n_renew_members", self.n_renew_members);
        put_int(&mut values, "n_member_changes", self.n_member_changes);
        put_int(&mut values, "n_member_deletes", self.n_member_deletes);
        values
    }

    fn from_values(mut values: FieldMap) -> CodecResult<Self> {
        Ok(Self {
            organization: take_code(&mut values, "organization")?,
            file_code: require(take_code(&mut values, "file_code")?, "file_code")?,
            notes: require(take_text(&mut values, "notes")?, "notes")?,
            n_b_records: take_int(&mut values, "n_b_records")?,
            n_meets: take_int(&mut values, "n_meets")?,
            n_c_records: take_int(&mut values, "n_c_records")?,
            n_teams: take_int(&mut values, "n_teams")?,
            n_d_records: take_int(&mut values, "n_d_records")?,
            n_swimmers: take_int(&mut values, "n_swimmers")?,
            n_e_records: take_int(&mut values, "n_e_records")?,
            n_f_records: take_int(&mut values, "n_f_records")?,
            n_g_records: take_int(&mut values, "n_g_records")?,
            batch_number: take_int(&mut values, "batch_number")?,
            n_new_members: take_int(&mut values, "n_new_members")?,
            n_renew_members: take_int(&mut values, "n_renew_members")?,
            n_member_changes: take_int(&mut values, "n_member_changes")?,
            n_member_deletes: take_int(&mut values, "n_member_deletes")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_record, encode_record, Mode};

    fn sample_description() -> FileDescription {
        FileDescription {
            organization: Some(OrganizationCode::Masters),
            sdif_version: Some("V3".into()),
            file_code: FileCode::MeetResults,
            software_name: Some("swimware".into()),
            software_version: Some("1.2".into()),
            contact_name: "Joe Bloggs".into(),
            contact_phone: "+15555551212".into(),
            file_creation: NaiveDate::from_ymd_opt(2023, 2, 18).unwrap(),
            submitted_by_lsc: None,
        }
    }

    #[test]
    fn test_description_layout() {
        let line = encode_record(&sample_description(), Mode::Strict).unwrap();
        assert_eq!(line.len(), 160);
        assert_eq!(&line[0..2], "A0");
        assert_eq!(&line[2..3], "2");
        assert_eq!(&line[3..11], "V3      ");
        assert_eq!(&line[11..13], "02");
        assert_eq!(&line[105..113], "02182023");
    }

    #[test]
    fn test_description_round_trip() {
        let record = sample_description();
        let line = encode_record(&record, Mode::Strict).unwrap();
        let decoded: FileDescription = decode_record(&line, Mode::Strict).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_terminator_round_trip() {
        let record = FileTerminator {
            organization: Some(OrganizationCode::Uss),
            file_code: FileCode::MeetResults,
            notes: "end of results".into(),
            n_b_records: Some(1),
            n_meets: Some(1),
            n_c_records: Some(12),
            n_teams: Some(12),
            n_d_records: Some(340),
            n_swimmers: Some(118),
            n_e_records: Some(24),
            n_f_records: Some(96),
            n_g_records: None,
            batch_number: Some(1),
            n_new_members: None,
            n_renew_members: None,
            n_member_changes: None,
            n_member_deletes: None,
        };
        let line = encode_record(&record, Mode::Strict).unwrap();
        let decoded: FileTerminator = decode_record(&line, Mode::Strict).unwrap();
        assert_eq!(decoded, record);
    }
}
