use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::day_key::DayKey;
use crate::record::DayRecord;

/// Availability of every day visited so far, indexed by day key.
///
/// Days are iterated in chronological order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AvailabilityState {
    days: BTreeMap<DayKey, DayRecord>,
}

impl AvailabilityState {
    /// Create a state that holds no day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of days recorded.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Get the record of a day, if it was ever created.
    pub fn get(&self, day: &DayKey) -> Option<&DayRecord> {
        self.days.get(day)
    }

    pub fn contains_key(&self, day: &DayKey) -> bool {
        self.days.contains_key(day)
    }

    /// Iterate over days in chronological order.
    pub fn iter(&self) -> btree_map::Iter<'_, DayKey, DayRecord> {
        self.days.iter()
    }

    /// Iterate over recorded days in chronological order.
    pub fn keys(&self) -> btree_map::Keys<'_, DayKey, DayRecord> {
        self.days.keys()
    }

    pub(crate) fn get_mut(&mut self, day: &DayKey) -> Option<&mut DayRecord> {
        self.days.get_mut(day)
    }

    /// Insert a record for a day that is not in the state yet. Existing
    /// records are never replaced.
    pub(crate) fn insert_with(
        &mut self,
        day: &DayKey,
        make_record: impl FnOnce() -> DayRecord,
    ) -> bool {
        match self.days.entry(day.clone()) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(entry) => {
                entry.insert(make_record());
                true
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.days.clear()
    }
}

impl FromIterator<(DayKey, DayRecord)> for AvailabilityState {
    fn from_iter<I: IntoIterator<Item = (DayKey, DayRecord)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AvailabilityState {
    type Item = (DayKey, DayRecord);
    type IntoIter = btree_map::IntoIter<DayKey, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}

impl<'a> IntoIterator for &'a AvailabilityState {
    type Item = (&'a DayKey, &'a DayRecord);
    type IntoIter = btree_map::Iter<'a, DayKey, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
