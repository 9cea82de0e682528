use std::fmt::{Debug, Display};
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::error::Error;

/// A half-hour window of a day, identified by the time it starts at.
///
/// Slots are ordered by time of day and displayed without padding the hour,
/// which is also the label they are keyed by (`9:00`, `9:30`, `16:30`).
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    /// Length of a slot, in minutes.
    pub const DURATION_MINUTES: u16 = 30;

    /// Create a new slot, this may return `None` if the input is out of range
    /// or does not start on a half-hour.
    ///
    /// ```
    /// use slot_catalog::TimeSlot;
    ///
    /// assert!(TimeSlot::new(9, 30).is_some());
    /// assert!(TimeSlot::new(9, 15).is_none()); // not aligned on a half-hour
    /// assert!(TimeSlot::new(24, 0).is_none()); // hours are out of bound
    /// ```
    #[inline]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || (minute != 0 && minute != 30) {
            None
        } else {
            Some(Self { hour, minute })
        }
    }

    /// Get the hour this slot starts at.
    ///
    /// ```
    /// use slot_catalog::TimeSlot;
    ///
    /// let slot = TimeSlot::new(16, 30).unwrap();
    /// assert_eq!(slot.hour(), 16);
    /// ```
    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Get the minute this slot starts at, either 0 or 30.
    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Get the total number of minutes from *00:00* to the start of the slot.
    ///
    /// ```
    /// use slot_catalog::TimeSlot;
    ///
    /// let slot = TimeSlot::new(9, 30).unwrap();
    /// assert_eq!(slot.mins_from_midnight(), 9 * 60 + 30);
    /// ```
    #[inline]
    pub fn mins_from_midnight(self) -> u16 {
        u16::from(self.minute) + 60 * u16::from(self.hour)
    }

    /// Build a slot from the number of minutes from midnight to its start and
    /// return `None` if it does not match a slot of the day.
    ///
    /// ```
    /// use slot_catalog::TimeSlot;
    ///
    /// assert_eq!(TimeSlot::from_mins_from_midnight(570), TimeSlot::new(9, 30));
    /// assert!(TimeSlot::from_mins_from_midnight(575).is_none());
    /// assert!(TimeSlot::from_mins_from_midnight(24 * 60).is_none());
    /// ```
    #[inline]
    pub fn from_mins_from_midnight(minutes: u16) -> Option<Self> {
        let hour = (minutes / 60).try_into().ok()?;
        let minute = (minutes % 60).try_into().ok()?;
        Self::new(hour, minute)
    }

    /// Get the slot following this one in the same day.
    ///
    /// ```
    /// use slot_catalog::TimeSlot;
    ///
    /// let slot = TimeSlot::new(9, 30).unwrap();
    /// assert_eq!(slot.next(), TimeSlot::new(10, 0));
    /// assert!(TimeSlot::new(23, 30).unwrap().next().is_none());
    /// ```
    #[inline]
    pub fn next(self) -> Option<Self> {
        Self::from_mins_from_midnight(self.mins_from_midnight() + Self::DURATION_MINUTES)
    }

    /// Get the time of day this slot starts at.
    #[inline]
    pub fn start_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour.into(), self.minute.into(), 0)
            .expect("slot hours and minutes are always valid")
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl Debug for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{self}")
    }
}

impl FromStr for TimeSlot {
    type Err = Error;

    /// Parse a slot from its label, the hour may or may not be padded.
    ///
    /// ```
    /// use slot_catalog::TimeSlot;
    ///
    /// assert_eq!("9:30".parse(), Ok(TimeSlot::new(9, 30).unwrap()));
    /// assert_eq!("09:30".parse(), Ok(TimeSlot::new(9, 30).unwrap()));
    /// assert!("9:45".parse::<TimeSlot>().is_err());
    /// assert!("noon".parse::<TimeSlot>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| Error::InvalidSlot(s.to_string()))?;

        Self::try_from(time).map_err(|_| Error::InvalidSlot(s.to_string()))
    }
}

impl TryFrom<NaiveTime> for TimeSlot {
    type Error = Error;

    #[inline]
    fn try_from(time: NaiveTime) -> Result<Self, Self::Error> {
        let exact = time.second() == 0 && time.nanosecond() == 0;
        let slot = u8::try_from(time.hour())
            .ok()
            .zip(u8::try_from(time.minute()).ok())
            .and_then(|(hour, minute)| Self::new(hour, minute));

        match slot {
            Some(slot) if exact => Ok(slot),
            _ => Err(Error::InvalidSlot(time.to_string())),
        }
    }
}

impl From<TimeSlot> for NaiveTime {
    #[inline]
    fn from(slot: TimeSlot) -> NaiveTime {
        slot.start_time()
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> String {
        slot.to_string()
    }
}
