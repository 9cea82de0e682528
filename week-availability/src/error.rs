use std::fmt;

use chrono::NaiveDate;

use crate::day_key::DayKey;
use crate::TimeSlot;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The day was never created by a week derivation.
    UnknownKey(DayKey),
    /// The slot is not part of the catalog the day was created with.
    UnknownSlot { day: DayKey, slot: TimeSlot },
    Catalog(slot_catalog::Error),
    InvalidDayKey(String),
    /// The week containing this date leaves the supported range of dates.
    OutOfRange(NaiveDate),
}

impl From<slot_catalog::Error> for Error {
    fn from(catalog_err: slot_catalog::Error) -> Self {
        Self::Catalog(catalog_err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey(day) => write!(f, "no availability recorded for {day}"),
            Self::UnknownSlot { day, slot } => write!(f, "{day} has no slot at {slot}"),
            Self::Catalog(catalog_err) => write!(f, "{catalog_err}"),
            Self::InvalidDayKey(raw) => {
                write!(f, "`{raw}` is not a day key: expected YYYY-MM-DD")
            }
            Self::OutOfRange(date) => {
                write!(f, "the week of {date} is outside of supported dates")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(catalog_err) => Some(catalog_err),
            _ => None,
        }
    }
}
