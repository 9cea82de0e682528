//! Independent availability models for several users or sessions.
//!
//! Each partition owns its own [`AvailabilityFacade`] behind a mutex: edits of
//! a single partition are applied one at a time while distinct partitions can
//! be edited in parallel.
//!
//! ```
//! use chrono::NaiveDate;
//! use week_availability::fill::Uniform;
//! use week_availability::partition::PartitionedAvailability;
//! use week_availability::{DayKey, TimeSlotCatalog};
//!
//! const ALICE: u32 = 1;
//! const BOB: u32 = 2;
//!
//! let users: PartitionedAvailability<u32, Uniform> =
//!     PartitionedAvailability::new(TimeSlotCatalog::default(), |_: &u32| Uniform(true));
//!
//! let anchor = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
//! let monday: DayKey = "2024-01-01".parse()?;
//!
//! users.with_partition(&ALICE, |availability| {
//!     availability.set_anchor_date(anchor)?;
//!     availability.toggle_off_day(&monday)
//! })?;
//!
//! users.with_partition(&BOB, |availability| availability.set_anchor_date(anchor))?;
//!
//! let alice = users.commit(&ALICE).unwrap();
//! let bob = users.commit(&BOB).unwrap();
//! assert!(alice.get(&monday).unwrap().is_off_day());
//! assert!(!bob.get(&monday).unwrap().is_off_day());
//! # Ok::<(), week_availability::Error>(())
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::facade::AvailabilityFacade;
use crate::fill::InitialFillPolicy;
use crate::state::AvailabilityState;
use crate::TimeSlotCatalog;

type Partition<P> = Arc<Mutex<AvailabilityFacade<P>>>;

/// A set of availability models indexed by a partition key.
pub struct PartitionedAvailability<K, P> {
    catalog: TimeSlotCatalog,
    make_policy: Box<dyn Fn(&K) -> P + Send + Sync>,
    partitions: RwLock<HashMap<K, Partition<P>>>,
}

impl<K, P> PartitionedAvailability<K, P>
where
    K: Clone + Eq + Hash,
    P: InitialFillPolicy,
{
    /// Create an empty set of partitions. Each partition is created on first
    /// access with the policy built by `make_policy`.
    pub fn new(
        catalog: TimeSlotCatalog,
        make_policy: impl Fn(&K) -> P + Send + Sync + 'static,
    ) -> Self {
        Self {
            catalog,
            make_policy: Box::new(make_policy),
            partitions: RwLock::default(),
        }
    }

    /// Get the model of a partition, creating it if necessary.
    pub fn partition(&self, key: &K) -> Partition<P> {
        {
            let partitions = self
                .partitions
                .read()
                .unwrap_or_else(PoisonError::into_inner);

            if let Some(partition) = partitions.get(key) {
                return partition.clone();
            }
        }

        let mut partitions = self
            .partitions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        partitions
            .entry(key.clone())
            .or_insert_with(|| {
                let policy = (self.make_policy)(key);
                let facade = AvailabilityFacade::new(self.catalog.clone(), policy);
                Arc::new(Mutex::new(facade))
            })
            .clone()
    }

    /// Run `func` with exclusive access to the model of a partition.
    pub fn with_partition<T>(
        &self,
        key: &K,
        func: impl FnOnce(&mut AvailabilityFacade<P>) -> T,
    ) -> T {
        let partition = self.partition(key);
        let mut facade = partition.lock().unwrap_or_else(PoisonError::into_inner);
        func(&mut facade)
    }

    /// Commit the state of an existing partition.
    pub fn commit(&self, key: &K) -> Option<AvailabilityState> {
        let partition = {
            let partitions = self
                .partitions
                .read()
                .unwrap_or_else(PoisonError::into_inner);

            partitions.get(key)?.clone()
        };

        let facade = partition.lock().unwrap_or_else(PoisonError::into_inner);
        Some(facade.commit())
    }

    /// Drop a partition and return its last state.
    pub fn remove(&self, key: &K) -> Option<AvailabilityState> {
        let partition = self
            .partitions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)?;

        let facade = partition.lock().unwrap_or_else(PoisonError::into_inner);
        Some(facade.commit())
    }

    pub fn len(&self) -> usize {
        self.partitions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
