//! Swim time values.
//!
//! A swim time is an elapsed duration with centisecond resolution, written
//! as `[minutes:]SS.CC` in record fields (`1:23.45`, `59.90`). Fields that
//! carry a time may instead carry a TIME explanation code (code table 020)
//! when no time was recorded, so the native value of a `time` field is the
//! [`TimeValue`] union.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codes::{CodeTable, DomainCode};

/// `(minutes:)?seconds.centiseconds`, anchored at both ends.
static TIME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn time_pattern() -> &'static Regex {
    TIME_PATTERN.get_or_init(|| {
        Regex::new(r"^(?:(\d+):)?(\d{1,2})\.(\d{2})$").expect("valid time pattern")
    })
}

/// Error returned when a string is not a valid swim time literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time literal: {0:?}")]
pub struct ParseTimeError(pub String);

/// An elapsed swim time, stored as total centiseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    centiseconds: u32,
}

impl Time {
    /// Creates a time from total centiseconds.
    pub fn from_centiseconds(centiseconds: u32) -> Self {
        Self { centiseconds }
    }

    /// Total centiseconds in this time.
    pub fn centiseconds(&self) -> u32 {
        self.centiseconds
    }

    /// Formats as `[minutes:]SS.CC`.
    ///
    /// Minutes are omitted when zero; seconds and centiseconds are always
    /// two digits each. `Time::from_str("1.23").format()` is `"01.23"`.
    pub fn format(&self) -> String {
        let c = self.centiseconds % 100;
        let s = (self.centiseconds / 100) % 60;
        let m = self.centiseconds / (100 * 60);
        if m > 0 {
            format!("{}:{:02}.{:02}", m, s, c)
        } else {
            format!("{:02}.{:02}", s, c)
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl FromStr for Time {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = time_pattern()
            .captures(s)
            .ok_or_else(|| ParseTimeError(s.to_string()))?;

        let part = |i: usize| -> Result<u32, ParseTimeError> {
            match captures.get(i) {
                Some(m) => m
                    .as_str()
                    .parse::<u32>()
                    .map_err(|_| ParseTimeError(s.to_string())),
                None => Ok(0),
            }
        };

        let minutes = part(1)?;
        let seconds = part(2)?;
        let centiseconds = part(3)?;

        let total = minutes
            .checked_mul(60 * 100)
            .and_then(|m| m.checked_add(seconds * 100))
            .and_then(|t| t.checked_add(centiseconds))
            .ok_or_else(|| ParseTimeError(s.to_string()))?;

        Ok(Time::from_centiseconds(total))
    }
}

impl Serialize for Time {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// TIME Code 020: explanation codes standing in for an unrecorded time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeCode {
    NoTime,
    NoSwim,
    DidNotFinish,
    Disqualified,
    Scratch,
}

static TIME_CODE_TABLE: CodeTable = CodeTable {
    name: "time explanation code",
    codes: &["NT", "NS", "DNF", "DQ", "SCR"],
};

impl DomainCode for TimeCode {
    fn table() -> &'static CodeTable {
        &TIME_CODE_TABLE
    }

    fn code(&self) -> &'static str {
        match self {
            TimeCode::NoTime => "NT",
            TimeCode::NoSwim => "NS",
            TimeCode::DidNotFinish => "DNF",
            TimeCode::Disqualified => "DQ",
            TimeCode::Scratch => "SCR",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "NT" => Some(TimeCode::NoTime),
            "NS" => Some(TimeCode::NoSwim),
            "DNF" => Some(TimeCode::DidNotFinish),
            "DQ" => Some(TimeCode::Disqualified),
            "SCR" => Some(TimeCode::Scratch),
            _ => None,
        }
    }
}

/// The native value of a `time` field: either a measured time or an
/// explanation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Time(Time),
    Code(TimeCode),
}

impl From<Time> for TimeValue {
    fn from(time: Time) -> Self {
        TimeValue::Time(time)
    }
}

impl From<TimeCode> for TimeValue {
    fn from(code: TimeCode) -> Self {
        TimeValue::Code(code)
    }
}
