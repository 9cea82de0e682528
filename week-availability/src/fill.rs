//! Policies deciding the availability of slots of a day that was never seen
//! before.
//!
//! Any closure `FnMut(&DayKey, TimeSlot) -> bool` can be used as a policy:
//!
//! ```
//! use chrono::NaiveDate;
//! use week_availability::{AvailabilityFacade, DayKey, TimeSlot, TimeSlotCatalog};
//!
//! let mornings = |_: &DayKey, slot: TimeSlot| slot.hour() < 12;
//! let mut availability = AvailabilityFacade::new(TimeSlotCatalog::default(), mornings);
//! availability.set_anchor_date(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())?;
//!
//! let monday: DayKey = "2024-01-01".parse()?;
//! assert_eq!(availability.available_count(&monday), 6);
//! # Ok::<(), week_availability::Error>(())
//! ```

use chrono::{Datelike, Weekday};

use crate::day_key::DayKey;
use crate::TimeSlot;

/// Assigns a default availability to the slots of a freshly created day.
pub trait InitialFillPolicy {
    /// Check if `slot` starts as available for the newly created `day`.
    fn is_available(&mut self, day: &DayKey, slot: TimeSlot) -> bool;
}

impl<F> InitialFillPolicy for F
where
    F: FnMut(&DayKey, TimeSlot) -> bool,
{
    fn is_available(&mut self, day: &DayKey, slot: TimeSlot) -> bool {
        self(day, slot)
    }
}

/// Give the same availability to every slot.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Uniform(pub bool);

impl InitialFillPolicy for Uniform {
    fn is_available(&mut self, _day: &DayKey, _slot: TimeSlot) -> bool {
        self.0
    }
}

/// Mark all slots available from Monday to Friday and none during weekends.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct WeekdaysOnly;

impl InitialFillPolicy for WeekdaysOnly {
    fn is_available(&mut self, day: &DayKey, _slot: TimeSlot) -> bool {
        !matches!(day.date().weekday(), Weekday::Sat | Weekday::Sun)
    }
}

#[cfg(feature = "random-fill")]
pub use random::RandomFill;

#[cfg(feature = "random-fill")]
mod random {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::InitialFillPolicy;
    use crate::day_key::DayKey;
    use crate::TimeSlot;

    /// Mark each slot available independently at random.
    #[derive(Clone, Debug)]
    pub struct RandomFill<R = StdRng> {
        rng: R,
        probability: f64,
    }

    impl RandomFill<StdRng> {
        /// Probability for a slot to start available, about two slots out of
        /// three.
        pub const DEFAULT_PROBABILITY: f64 = 0.7;

        /// Fill from a generator seeded by the operating system.
        pub fn new() -> Self {
            Self {
                rng: StdRng::from_entropy(),
                probability: Self::DEFAULT_PROBABILITY,
            }
        }

        /// Fill from a seeded generator, the same seed always produces the
        /// same days.
        ///
        /// ```
        /// use chrono::NaiveDate;
        /// use week_availability::fill::RandomFill;
        /// use week_availability::{AvailabilityFacade, TimeSlotCatalog};
        ///
        /// let anchor = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        /// let catalog = TimeSlotCatalog::default();
        /// let mut first = AvailabilityFacade::new(catalog.clone(), RandomFill::seeded(7));
        /// let mut second = AvailabilityFacade::new(catalog, RandomFill::seeded(7));
        /// first.set_anchor_date(anchor).unwrap();
        /// second.set_anchor_date(anchor).unwrap();
        /// assert_eq!(first.commit(), second.commit());
        /// ```
        pub fn seeded(seed: u64) -> Self {
            Self {
                rng: StdRng::seed_from_u64(seed),
                probability: Self::DEFAULT_PROBABILITY,
            }
        }
    }

    impl Default for RandomFill<StdRng> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<R: Rng> RandomFill<R> {
        /// Fill from any generator, return `None` if `probability` is not in
        /// `[0, 1]`.
        pub fn with_rng(rng: R, probability: f64) -> Option<Self> {
            (0.0..=1.0)
                .contains(&probability)
                .then_some(Self { rng, probability })
        }

        pub fn probability(&self) -> f64 {
            self.probability
        }
    }

    impl<R: Rng> InitialFillPolicy for RandomFill<R> {
        fn is_available(&mut self, _day: &DayKey, _slot: TimeSlot) -> bool {
            self.rng.gen_bool(self.probability)
        }
    }
}
