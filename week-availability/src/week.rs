use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::day_key::DayKey;

/// The lower bound of dates handled by the model
pub const DATE_START: NaiveDate = NaiveDate::from_ymd_opt(1, 1, 1).unwrap();

/// The upper bound of dates handled by the model
pub const DATE_END: NaiveDate = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();

pub const DAYS_IN_WEEK: usize = 7;

/// Seven consecutive calendar days, from a Monday to the following Sunday.
///
/// Days are computed with calendar arithmetic, a window always holds exactly
/// seven distinct days whatever the length of these days on a local clock.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeekWindow {
    monday: NaiveDate,
}

/// Compute the week, starting on Monday, containing given date.
///
/// Returns `None` if this week is not entirely included in
/// [`DATE_START`]..=[`DATE_END`]. As [`DATE_END`] is a Friday, the last days
/// of the calendar, from 9999-12-27 to 9999-12-31, are rejected.
///
/// ```
/// use chrono::{Datelike, NaiveDate, Weekday};
/// use week_availability::week_of;
///
/// let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// let week = week_of(wednesday).unwrap();
///
/// assert_eq!(week.monday(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(week.sunday(), NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
/// assert_eq!(week.dates()[2], wednesday);
/// assert_eq!(week.dates()[0].weekday(), Weekday::Mon);
///
/// let new_years_eve = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
/// assert!(week_of(new_years_eve).is_none());
/// ```
pub fn week_of(anchor: NaiveDate) -> Option<WeekWindow> {
    WeekWindow::containing(anchor)
}

impl WeekWindow {
    /// Compute the week containing given date, see [`week_of`].
    pub fn containing(anchor: NaiveDate) -> Option<Self> {
        let offset = anchor.weekday().num_days_from_monday();
        let monday = anchor.checked_sub_days(Days::new(offset.into()))?;
        let sunday = monday.checked_add_days(Days::new(6))?;

        if monday < DATE_START || sunday > DATE_END {
            return None;
        }

        debug_assert_eq!(monday.weekday(), Weekday::Mon);
        Some(Self { monday })
    }

    /// First day of the week.
    pub fn monday(self) -> NaiveDate {
        self.monday
    }

    /// Last day of the week.
    pub fn sunday(self) -> NaiveDate {
        self.monday + Days::new(6)
    }

    /// Iterate over the days of the week in ascending order.
    pub fn iter(self) -> impl ExactSizeIterator<Item = NaiveDate> {
        (0..DAYS_IN_WEEK).map(move |offset| self.monday + Days::new(offset as u64))
    }

    /// Get the days of the week in ascending order.
    pub fn dates(self) -> [NaiveDate; DAYS_IN_WEEK] {
        std::array::from_fn(|offset| self.monday + Days::new(offset as u64))
    }

    /// Get the keys of the days of the week in ascending order.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use week_availability::week_of;
    ///
    /// let week = week_of(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()).unwrap();
    /// let keys = week.day_keys();
    /// assert_eq!(keys[0], "2024-02-26");
    /// assert_eq!(keys[6], "2024-03-03");
    /// ```
    pub fn day_keys(self) -> [DayKey; DAYS_IN_WEEK] {
        self.dates().map(DayKey::from)
    }

    /// Check if a date belongs to this week.
    pub fn contains(self, date: NaiveDate) -> bool {
        self.monday <= date && date <= self.sunday()
    }

    /// Get the position of a date in the week, 0 being Monday.
    pub fn index_of(self, date: NaiveDate) -> Option<usize> {
        self.contains(date).then(|| date.weekday().num_days_from_monday() as usize)
    }

    /// Get the week `weeks` weeks after this one, or before it if `weeks` is
    /// negative.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use week_availability::week_of;
    ///
    /// let week = week_of(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()).unwrap();
    /// let next = week.shifted(1).unwrap();
    /// assert_eq!(next.monday(), NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
    /// assert_eq!(next.shifted(-1), Some(week));
    /// ```
    pub fn shifted(self, weeks: i64) -> Option<Self> {
        let days = weeks.checked_mul(DAYS_IN_WEEK as i64)?;

        let monday = if days >= 0 {
            self.monday.checked_add_days(Days::new(days.unsigned_abs()))?
        } else {
            self.monday.checked_sub_days(Days::new(days.unsigned_abs()))?
        };

        Self::containing(monday)
    }
}

impl IntoIterator for WeekWindow {
    type Item = NaiveDate;
    type IntoIter = std::array::IntoIter<NaiveDate, DAYS_IN_WEEK>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates().into_iter()
    }
}
