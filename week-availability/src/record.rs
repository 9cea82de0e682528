use std::collections::BTreeMap;

use crate::day_key::DayKey;
use crate::fill::InitialFillPolicy;
use crate::{TimeSlot, TimeSlotCatalog};

/// Availability of a single day.
///
/// Slots of a record are exactly the slots of the catalog it was created
/// with. Switching a day off keeps its slots so that they are restored when
/// the day is switched back on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DayRecord {
    is_off_day: bool,
    slots: BTreeMap<TimeSlot, bool>,
}

impl DayRecord {
    /// Create a record from known values, typically loaded from storage.
    ///
    /// ```
    /// use week_availability::{DayRecord, TimeSlot};
    ///
    /// let morning = TimeSlot::new(9, 0).unwrap();
    /// let record = DayRecord::new(true, [(morning, true)]);
    /// assert!(record.is_off_day());
    /// assert_eq!(record.available_count(), 1);
    /// assert_eq!(record.effective_available_count(), 0);
    /// ```
    pub fn new(is_off_day: bool, slots: impl IntoIterator<Item = (TimeSlot, bool)>) -> Self {
        Self {
            is_off_day,
            slots: slots.into_iter().collect(),
        }
    }

    /// Create the record of a working day, asking `policy` the initial value
    /// of each slot of the catalog.
    pub(crate) fn filled(
        day: &DayKey,
        catalog: &TimeSlotCatalog,
        policy: &mut impl InitialFillPolicy,
    ) -> Self {
        let slots = catalog
            .iter()
            .map(|slot| (slot, policy.is_available(day, slot)))
            .collect();

        Self {
            is_off_day: false,
            slots,
        }
    }

    pub fn is_off_day(&self) -> bool {
        self.is_off_day
    }

    /// Get the stored flag of a slot, `None` if the slot is not part of this
    /// day.
    pub fn slot(&self, slot: TimeSlot) -> Option<bool> {
        self.slots.get(&slot).copied()
    }

    /// Iterate over slots and their flag, in time order.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = (TimeSlot, bool)> + '_ {
        self.slots
            .iter()
            .map(|(slot, available)| (*slot, *available))
    }

    /// Check that the slots of this day are exactly the slots of `catalog`.
    pub fn covers(&self, catalog: &TimeSlotCatalog) -> bool {
        self.slots.len() == catalog.len() && self.slots.keys().copied().eq(catalog.iter())
    }

    /// Number of slots flagged available, whether or not the day is off.
    pub fn available_count(&self) -> usize {
        self.slots.values().filter(|available| **available).count()
    }

    /// Number of slots that can actually be booked: none on an off day.
    pub fn effective_available_count(&self) -> usize {
        if self.is_off_day {
            0
        } else {
            self.available_count()
        }
    }

    /// Total duration of available slots, in minutes.
    ///
    /// ```
    /// use week_availability::{DayRecord, TimeSlot};
    ///
    /// let record = DayRecord::new(
    ///     false,
    ///     [
    ///         (TimeSlot::new(9, 0).unwrap(), true),
    ///         (TimeSlot::new(9, 30).unwrap(), true),
    ///         (TimeSlot::new(10, 0).unwrap(), true),
    ///         (TimeSlot::new(10, 30).unwrap(), false),
    ///     ],
    /// );
    ///
    /// assert_eq!(record.available_minutes(), 90);
    /// ```
    pub fn available_minutes(&self) -> u32 {
        minutes_of(self.available_count())
    }

    /// Total duration of bookable slots, in minutes: zero on an off day.
    pub fn effective_available_minutes(&self) -> u32 {
        minutes_of(self.effective_available_count())
    }

    pub(crate) fn toggle_off_day(&mut self) -> bool {
        self.is_off_day = !self.is_off_day;
        self.is_off_day
    }

    pub(crate) fn toggle_slot(&mut self, slot: TimeSlot) -> Option<bool> {
        let available = self.slots.get_mut(&slot)?;
        *available = !*available;
        Some(*available)
    }
}

fn minutes_of(count: usize) -> u32 {
    let count = u32::try_from(count).expect("a day has at most 48 slots");
    count * u32::from(TimeSlot::DURATION_MINUTES)
}
