use crate::day_key::DayKey;
use crate::error::{Error, Result};
use crate::fill::{InitialFillPolicy, Uniform};
use crate::record::DayRecord;
use crate::state::AvailabilityState;
use crate::{TimeSlot, TimeSlotCatalog};

/// Owner of the availability of every visited day.
///
/// Days are created lazily by [`DayAvailabilityStore::ensure`] and are then
/// only mutated slot by slot, a day that already exists is never reset.
#[derive(Clone, Debug, Default)]
pub struct DayAvailabilityStore<P = Uniform> {
    state: AvailabilityState,
    policy: P,
}

impl<P: InitialFillPolicy> DayAvailabilityStore<P> {
    /// Create an empty store, new days will be filled using `policy`.
    pub fn new(policy: P) -> Self {
        Self {
            state: AvailabilityState::new(),
            policy,
        }
    }

    /// Create a store from a previously committed state, days missing from
    /// this state will be filled using `policy`.
    pub fn with_state(state: AvailabilityState, policy: P) -> Self {
        Self { state, policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Create a record for each day that does not have one yet, days that
    /// already exist are left untouched. Return the number of created days.
    ///
    /// ```
    /// use week_availability::fill::Uniform;
    /// use week_availability::{DayAvailabilityStore, DayKey, TimeSlot, TimeSlotCatalog};
    ///
    /// let catalog = TimeSlotCatalog::default();
    /// let day: DayKey = "2024-01-01".parse().unwrap();
    /// let mut store = DayAvailabilityStore::new(Uniform(true));
    ///
    /// assert_eq!(store.ensure([day.clone()], &catalog), 1);
    /// store.toggle_slot(&day, TimeSlot::new(9, 0).unwrap()).unwrap();
    ///
    /// assert_eq!(store.ensure([day.clone()], &catalog), 0);
    /// assert_eq!(store.available_count(&day), 15);
    /// ```
    pub fn ensure(
        &mut self,
        day_keys: impl IntoIterator<Item = DayKey>,
        catalog: &TimeSlotCatalog,
    ) -> usize {
        let mut created = 0;

        for day in day_keys {
            let policy = &mut self.policy;

            if self
                .state
                .insert_with(&day, || DayRecord::filled(&day, catalog, policy))
            {
                #[cfg(feature = "log")]
                log::debug!(
                    day = day.as_str(),
                    available = self.available_count(&day);
                    "created availability record"
                );

                created += 1;
            }
        }

        created
    }

    /// Switch a day on or off and return the new off day status.
    pub fn toggle_off_day(&mut self, day: &DayKey) -> Result<bool> {
        let record = self.record_mut(day)?;
        Ok(record.toggle_off_day())
    }

    /// Flip the availability of a slot and return its new value.
    pub fn toggle_slot(&mut self, day: &DayKey, slot: TimeSlot) -> Result<bool> {
        let record = self.record_mut(day)?;

        record.toggle_slot(slot).ok_or_else(|| {
            #[cfg(feature = "log")]
            log::warn!(day = day.as_str(); "no slot at {slot}, the catalog might have changed");

            Error::UnknownSlot {
                day: day.clone(),
                slot,
            }
        })
    }

    /// Number of available slots of a day, ignoring its off day status. An
    /// unknown day has no available slot.
    pub fn available_count(&self, day: &DayKey) -> usize {
        self.state.get(day).map_or(0, DayRecord::available_count)
    }

    pub fn get(&self, day: &DayKey) -> Option<&DayRecord> {
        self.state.get(day)
    }

    pub fn contains(&self, day: &DayKey) -> bool {
        self.state.contains_key(day)
    }

    /// Read-only view over all the days of the store.
    pub fn snapshot(&self) -> &AvailabilityState {
        &self.state
    }

    /// Forget about all days.
    pub fn reset(&mut self) {
        #[cfg(feature = "log")]
        log::debug!(days = self.state.len(); "reset availability store");

        self.state.clear()
    }

    pub fn into_state(self) -> AvailabilityState {
        self.state
    }

    fn record_mut(&mut self, day: &DayKey) -> Result<&mut DayRecord> {
        self.state.get_mut(day).ok_or_else(|| {
            #[cfg(feature = "log")]
            log::warn!(day = day.as_str(); "mutation of a day that was never ensured");

            Error::UnknownKey(day.clone())
        })
    }
}
