use std::sync::Arc;

use crate::error::{Error, Result};
use crate::time_slot::TimeSlot;

/// First hour covered by the default catalog.
pub const DEFAULT_START_HOUR: u8 = 9;

/// Hour at which the default catalog stops, its own slots are excluded.
pub const DEFAULT_END_HOUR: u8 = 17;

/// The fixed and ordered list of slots of a working day.
///
/// The list is immutable and wrapped by an `Arc` so this is safe and fast to
/// clone.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct TimeSlotCatalog {
    start_hour: u8,
    end_hour: u8,
    slots: Arc<[TimeSlot]>,
}

impl TimeSlotCatalog {
    /// Generate the slots `H:00` and `H:30` for each hour `H` in
    /// `[start_hour, end_hour)`.
    ///
    /// ```
    /// use slot_catalog::TimeSlotCatalog;
    ///
    /// let catalog = TimeSlotCatalog::generate(8, 12).unwrap();
    /// let labels: Vec<_> = catalog.iter().map(|slot| slot.to_string()).collect();
    /// assert_eq!(labels, ["8:00", "8:30", "9:00", "9:30", "10:00", "10:30", "11:00", "11:30"]);
    ///
    /// assert!(TimeSlotCatalog::generate(12, 12).is_err());
    /// assert!(TimeSlotCatalog::generate(20, 25).is_err());
    /// ```
    pub fn generate(start_hour: u8, end_hour: u8) -> Result<Self> {
        if end_hour <= start_hour || end_hour > 24 {
            return Err(Error::InvalidCatalogConfiguration {
                start_hour,
                end_hour,
            });
        }

        let slots = (start_hour..end_hour)
            .flat_map(|hour| {
                [0, 30].map(move |minute| {
                    TimeSlot::new(hour, minute).expect("catalog hours are below 24")
                })
            })
            .collect();

        Ok(Self {
            start_hour,
            end_hour,
            slots,
        })
    }

    /// First hour covered by this catalog.
    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    /// Hour this catalog stops at, which is not covered.
    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    /// Number of slots in the catalog, two per covered hour.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// A catalog always covers at least one hour, this is here for
    /// consistency with `len`.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over the slots in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = TimeSlot> + '_ {
        self.slots.iter().copied()
    }

    /// Get all the slots as a sorted slice.
    pub fn as_slice(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Get the slot at given position in the catalog.
    pub fn get(&self, index: usize) -> Option<TimeSlot> {
        self.slots.get(index).copied()
    }

    /// Get the earliest slot of the catalog.
    ///
    /// ```
    /// use slot_catalog::TimeSlotCatalog;
    ///
    /// assert_eq!(TimeSlotCatalog::default().first().to_string(), "9:00");
    /// ```
    pub fn first(&self) -> TimeSlot {
        self.slots[0]
    }

    /// Get the latest slot of the catalog.
    ///
    /// ```
    /// use slot_catalog::TimeSlotCatalog;
    ///
    /// assert_eq!(TimeSlotCatalog::default().last().to_string(), "16:30");
    /// ```
    pub fn last(&self) -> TimeSlot {
        self.slots[self.slots.len() - 1]
    }

    /// Check if a slot belongs to this catalog.
    ///
    /// ```
    /// use slot_catalog::{TimeSlot, TimeSlotCatalog};
    ///
    /// let catalog = TimeSlotCatalog::default();
    /// assert!(catalog.contains(TimeSlot::new(12, 30).unwrap()));
    /// assert!(!catalog.contains(TimeSlot::new(17, 0).unwrap()));
    /// ```
    pub fn contains(&self, slot: TimeSlot) -> bool {
        self.position(slot).is_some()
    }

    /// Get the position of a slot in the catalog.
    ///
    /// ```
    /// use slot_catalog::{TimeSlot, TimeSlotCatalog};
    ///
    /// let catalog = TimeSlotCatalog::default();
    /// assert_eq!(catalog.position(TimeSlot::new(9, 30).unwrap()), Some(1));
    /// assert_eq!(catalog.position(TimeSlot::new(8, 30).unwrap()), None);
    /// ```
    pub fn position(&self, slot: TimeSlot) -> Option<usize> {
        self.slots.binary_search(&slot).ok()
    }
}

impl Default for TimeSlotCatalog {
    fn default() -> Self {
        Self::generate(DEFAULT_START_HOUR, DEFAULT_END_HOUR)
            .expect("default catalog hours are valid")
    }
}

impl<'a> IntoIterator for &'a TimeSlotCatalog {
    type Item = &'a TimeSlot;
    type IntoIter = std::slice::Iter<'a, TimeSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
