//! Fixed-point decimal values.
//!
//! Decimal record fields carry plain decimal text such as `1.234` or `28.5`
//! (points scored, relay takeoff times). Values are stored exactly as scaled
//! integers so that formatting reproduces the parsed text, including
//! trailing zeros. Equality is numeric: `1.10 == 1.1`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parsing rejects fractions longer than this; record fields are far
/// narrower, and the cap keeps cross-scale comparison in i128 range.
const MAX_SCALE: usize = 18;

/// Error returned when a string is not a valid decimal literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal literal: {0:?}")]
pub struct ParseDecimalError(pub String);

/// A fixed-point decimal number: `units / 10^scale`.
#[derive(Debug, Clone, Copy)]
pub struct Decimal {
    units: i64,
    scale: u32,
}

impl Decimal {
    /// Creates a decimal from scaled integer units.
    ///
    /// `Decimal::new(1234, 3)` is `1.234`; `Decimal::new(50, 2)` is `0.50`.
    pub fn new(units: i64, scale: u32) -> Self {
        Self { units, scale }
    }

    /// The scaled integer value.
    pub fn units(&self) -> i64 {
        self.units
    }

    /// The number of digits after the decimal point.
    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.units);
        }
        let sign = if self.units < 0 { "-" } else { "" };
        let magnitude = self.units.unsigned_abs();
        let divisor = 10u64.pow(self.scale);
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            magnitude / divisor,
            magnitude % divisor,
            width = self.scale as usize
        )
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDecimalError(s.to_string());

        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, s.strip_prefix('+').unwrap_or(s)),
        };

        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };

        let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(err());
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(err());
        }
        if frac_part.len() > MAX_SCALE {
            return Err(err());
        }

        let mut units: i64 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            units = units
                .checked_mul(10)
                .and_then(|u| u.checked_add(i64::from(b - b'0')))
                .ok_or_else(err)?;
        }

        Ok(Decimal {
            units: sign * units,
            scale: frac_part.len() as u32,
        })
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        // Numeric comparison: scale both sides to the wider scale.
        let left = i128::from(self.units) * 10i128.pow(other.scale);
        let right = i128::from(other.units) * 10i128.pow(self.scale);
        left == right
    }
}

impl Eq for Decimal {}

impl Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        for text in ["0", "7", "1.234", "0.50", "-0.5", "123.4", "28.50"] {
            assert_eq!(dec(text).to_string(), text);
        }
    }

    #[test]
    fn test_parse_fraction_only() {
        assert_eq!(dec(".5"), dec("0.5"));
        assert_eq!(dec(".5").to_string(), "0.5");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", ".", "1.2.3", "1a", "--1", "1e3", " 1"] {
            assert!(bad.parse::<Decimal>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_equality_is_numeric() {
        assert_eq!(dec("1.10"), dec("1.1"));
        assert_eq!(dec("1"), dec("1.000"));
        assert_ne!(dec("1.10"), dec("1.11"));
        assert_eq!(dec("-0.50"), dec("-0.5"));
    }

    #[test]
    fn test_trailing_zeros_survive_formatting() {
        assert_eq!(dec("1.200").to_string(), "1.200");
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!("12345678901234567890".parse::<Decimal>().is_err());
        assert!("0.1234567890123456789".parse::<Decimal>().is_err());
    }
}
