//! StartDate value object
//!
//! Only the canonical `yyyy-MM-dd` shape is accepted, and the day must exist
//! in the calendar (`2024-02-30` is rejected).

use chrono::NaiveDate;

use crate::error::{RosterError, RosterResult};

const FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StartDate(NaiveDate);

impl StartDate {
    pub fn parse(raw: &str) -> RosterResult<Self> {
        let invalid =
            || RosterError::validation("Invalid start date. Must be in yyyy-MM-dd format");

        // chrono tolerates unpadded fields, so pin the shape first
        if !has_iso_shape(raw) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(raw, FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl std::fmt::Display for StartDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

fn has_iso_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_date() {
        let date = StartDate::parse("2024-09-01").unwrap();
        assert_eq!(date.to_string(), "2024-09-01");
    }

    #[test]
    fn accepts_leap_day() {
        assert!(StartDate::parse("2024-02-29").is_ok());
        assert!(StartDate::parse("2023-02-29").is_err());
    }

    #[test]
    fn rejects_impossible_day() {
        let err = StartDate::parse("2024-02-30").unwrap_err();
        assert!(matches!(err, RosterError::Validation(_)));
        assert!(err.to_string().contains("yyyy-MM-dd"));
    }

    #[test]
    fn rejects_non_canonical_shapes() {
        for raw in ["2024-9-01", "2024/09/01", "01-09-2024", "2024-09-011", "tomorrow", ""] {
            assert!(StartDate::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }
}
