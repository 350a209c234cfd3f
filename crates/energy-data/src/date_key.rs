//! Validated calendar date keys.
//!
//! Every day record is keyed by an ISO `YYYY-MM-DD` string. [`DateKey`]
//! wraps a [`NaiveDate`] so malformed keys are rejected once at the edge and
//! never reach the generator.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Length of a canonical `YYYY-MM-DD` key.
const DATE_KEY_LEN: usize = 10;

/// Byte offsets of the two separators in a canonical key.
const SEPARATOR_POSITIONS: [usize; 2] = [4, 7];

/// Format string for canonical date keys.
const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar date key in canonical `YYYY-MM-DD` form.
///
/// # Example
///
/// ```
/// use energy_data::DateKey;
///
/// let key = DateKey::parse("2026-10-17").expect("valid date");
/// assert!(key.is_weekend());
/// assert_eq!(key.to_string(), "2026-10-17");
/// assert!(DateKey::parse("2026-02-30").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

/// `DDDD-DD-DD` with ASCII digits only; chrono alone accepts signs,
/// leading spaces and unpadded fields.
fn has_canonical_shape(value: &str) -> bool {
    value.len() == DATE_KEY_LEN
        && value.bytes().enumerate().all(|(index, byte)| {
            if SEPARATOR_POSITIONS.contains(&index) {
                byte == b'-'
            } else {
                byte.is_ascii_digit()
            }
        })
}

impl DateKey {
    /// Parses a strict `YYYY-MM-DD` key.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidDate`] when the input is not a
    /// zero-padded ISO calendar date.
    pub fn parse(value: &str) -> Result<Self, GenerationError> {
        let invalid = || GenerationError::InvalidDate {
            value: value.to_owned(),
        };
        if !has_canonical_shape(value) {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Wraps an already valid calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the day of the week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns `true` on Saturdays and Sundays.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns the key `days` calendar days earlier, if representable.
    #[must_use]
    pub fn days_before(&self, days: u64) -> Option<Self> {
        self.0
            .checked_sub_days(chrono::Days::new(days))
            .map(Self)
    }

    /// Stable per-date value mixed into seeded RNG streams.
    pub(crate) fn seed_mix(&self) -> u64 {
        let ordinal = u64::from(self.0.num_days_from_ce().unsigned_abs());
        ordinal.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateKey {
    type Error = GenerationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.to_string()
    }
}
