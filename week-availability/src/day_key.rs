use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::Error;

const KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical identifier of a calendar day, formatted as `YYYY-MM-DD`.
///
/// A key is derived from a date and two identical calendar days always give
/// the same key. Keys are ordered chronologically.
///
/// ```
/// use chrono::NaiveDate;
/// use week_availability::DayKey;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// let key = DayKey::from(date);
/// assert_eq!(key.as_str(), "2024-03-09");
/// assert_eq!(key.date(), date);
/// assert_eq!(key, DayKey::from(date));
/// ```
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct DayKey {
    date: NaiveDate,
    repr: Box<str>,
}

impl DayKey {
    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// Get the calendar day identified by this key.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        let repr = date.format(KEY_FORMAT).to_string().into_boxed_str();
        Self { date, repr }
    }
}

impl FromStr for DayKey {
    type Err = Error;

    /// Parse a key, only the canonical `YYYY-MM-DD` form is accepted.
    ///
    /// ```
    /// use week_availability::DayKey;
    ///
    /// assert!("2024-01-01".parse::<DayKey>().is_ok());
    /// assert!("2024-1-1".parse::<DayKey>().is_err());
    /// assert!("2023-02-29".parse::<DayKey>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, KEY_FORMAT)
            .map_err(|_| Error::InvalidDayKey(s.to_string()))?;

        let key = Self::from(date);

        if key.as_str() != s {
            return Err(Error::InvalidDayKey(s.to_string()));
        }

        Ok(key)
    }
}

impl TryFrom<String> for DayKey {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> String {
        key.repr.into()
    }
}

impl AsRef<str> for DayKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for DayKey {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for DayKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl fmt::Debug for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
