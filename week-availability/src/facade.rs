use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::day_key::DayKey;
use crate::error::{Error, Result};
use crate::fill::{InitialFillPolicy, Uniform};
use crate::record::DayRecord;
use crate::state::AvailabilityState;
use crate::store::DayAvailabilityStore;
use crate::week::{week_of, WeekWindow, DAYS_IN_WEEK};
use crate::{TimeSlot, TimeSlotCatalog};

/// A day of the displayed week, with its availability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekDay<'a> {
    pub date: NaiveDate,
    pub key: DayKey,
    pub record: &'a DayRecord,
}

impl WeekDay<'_> {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// Entry point for a presentation layer editing weekly availability.
///
/// Picking an anchor date selects the week to display and creates the days of
/// this week that were never displayed before. Edits are kept in memory until
/// [`AvailabilityFacade::commit`] hands them out.
#[derive(Clone, Debug)]
pub struct AvailabilityFacade<P = Uniform> {
    catalog: TimeSlotCatalog,
    store: DayAvailabilityStore<P>,
    anchor: Option<NaiveDate>,
    week: Option<WeekWindow>,
}

impl<P: InitialFillPolicy> AvailabilityFacade<P> {
    /// Create a model with no day and no selected week yet.
    ///
    /// ```
    /// use week_availability::fill::WeekdaysOnly;
    /// use week_availability::{AvailabilityFacade, TimeSlotCatalog};
    ///
    /// let availability = AvailabilityFacade::new(TimeSlotCatalog::default(), WeekdaysOnly);
    /// assert!(availability.current_week().is_empty());
    /// assert!(availability.commit().is_empty());
    /// ```
    pub fn new(catalog: TimeSlotCatalog, policy: P) -> Self {
        Self::with_store(catalog, DayAvailabilityStore::new(policy))
    }

    /// Create a model resuming from a previously committed state.
    pub fn with_state(catalog: TimeSlotCatalog, state: AvailabilityState, policy: P) -> Self {
        Self::with_store(catalog, DayAvailabilityStore::with_state(state, policy))
    }

    /// Create a model displaying the current week of the local calendar.
    pub fn starting_today(catalog: TimeSlotCatalog, policy: P) -> Result<Self> {
        let mut facade = Self::new(catalog, policy);
        facade.set_anchor_date(Local::now().date_naive())?;
        Ok(facade)
    }

    fn with_store(catalog: TimeSlotCatalog, store: DayAvailabilityStore<P>) -> Self {
        Self {
            catalog,
            store,
            anchor: None,
            week: None,
        }
    }

    // --
    // -- Week selection
    // --

    /// Select the week containing `date` and create its missing days.
    ///
    /// Selecting another date of the current week does not alter any day. If
    /// the week is out of supported dates, the current selection is kept.
    pub fn set_anchor_date(&mut self, date: NaiveDate) -> Result<()> {
        let week = week_of(date).ok_or_else(|| {
            #[cfg(feature = "log")]
            log::warn!("ignored anchor date {date}: its week is out of supported dates");

            Error::OutOfRange(date)
        })?;

        let _created = self.store.ensure(week.day_keys(), &self.catalog);

        #[cfg(feature = "log")]
        log::debug!(
            monday = week.monday().to_string().as_str(),
            created = _created;
            "selected week of {date}"
        );

        self.anchor = Some(date);
        self.week = Some(week);
        Ok(())
    }

    /// Move the anchor date `weeks` weeks later, or earlier if `weeks` is
    /// negative. Does nothing until an anchor date has been set.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use week_availability::fill::Uniform;
    /// use week_availability::{AvailabilityFacade, TimeSlotCatalog};
    ///
    /// let mut availability = AvailabilityFacade::new(TimeSlotCatalog::default(), Uniform(false));
    /// availability.set_anchor_date(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())?;
    /// availability.shift_weeks(-1)?;
    /// assert_eq!(availability.anchor_date(), NaiveDate::from_ymd_opt(2023, 12, 27));
    /// # Ok::<(), week_availability::Error>(())
    /// ```
    pub fn shift_weeks(&mut self, weeks: i64) -> Result<()> {
        let Some(anchor) = self.anchor else {
            return Ok(());
        };

        let shifted = weeks
            .checked_mul(DAYS_IN_WEEK as i64)
            .and_then(|days| {
                if days >= 0 {
                    anchor.checked_add_days(Days::new(days.unsigned_abs()))
                } else {
                    anchor.checked_sub_days(Days::new(days.unsigned_abs()))
                }
            })
            .ok_or(Error::OutOfRange(anchor))?;

        self.set_anchor_date(shifted)
    }

    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.anchor
    }

    /// The selected week, if an anchor date has been set.
    pub fn week(&self) -> Option<WeekWindow> {
        self.week
    }

    pub fn catalog(&self) -> &TimeSlotCatalog {
        &self.catalog
    }

    /// Days of the selected week from Monday to Sunday, empty until an anchor
    /// date has been set.
    pub fn current_week(&self) -> Vec<WeekDay<'_>> {
        let Some(week) = self.week else {
            return Vec::new();
        };

        week.iter()
            .map(|date| {
                let key = DayKey::from(date);

                let record = self
                    .store
                    .get(&key)
                    .expect("days of the selected week are always ensured");

                WeekDay { date, key, record }
            })
            .collect()
    }

    // --
    // -- Reads and edits
    // --

    pub fn day(&self, day: &DayKey) -> Option<&DayRecord> {
        self.store.get(day)
    }

    /// See [`DayAvailabilityStore::available_count`].
    pub fn available_count(&self, day: &DayKey) -> usize {
        self.store.available_count(day)
    }

    pub fn toggle_off_day(&mut self, day: &DayKey) -> Result<bool> {
        self.store.toggle_off_day(day)
    }

    pub fn toggle_slot(&mut self, day: &DayKey, slot: TimeSlot) -> Result<bool> {
        self.store.toggle_slot(day, slot)
    }

    pub fn store(&self) -> &DayAvailabilityStore<P> {
        &self.store
    }

    /// Get a copy of the availability of every visited day, to be handed to
    /// storage. The model itself is left unchanged.
    pub fn commit(&self) -> AvailabilityState {
        #[cfg(feature = "log")]
        log::debug!(days = self.store.snapshot().len(); "committed availability");

        self.store.snapshot().clone()
    }

    /// Forget all edits. Days of the selected week are created again from the
    /// fill policy.
    pub fn reset(&mut self) {
        self.store.reset();

        if let Some(week) = self.week {
            self.store.ensure(week.day_keys(), &self.catalog);
        }
    }
}

impl<P: InitialFillPolicy + Default> Default for AvailabilityFacade<P> {
    fn default() -> Self {
        Self::new(TimeSlotCatalog::default(), P::default())
    }
}
