#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod day_key;
pub mod error;
pub mod facade;
pub mod fill;
pub mod partition;
pub mod record;
pub mod state;
pub mod store;
pub mod week;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::day_key::DayKey;
pub use crate::error::{Error, Result};
pub use crate::facade::{AvailabilityFacade, WeekDay};
pub use crate::fill::InitialFillPolicy;
pub use crate::record::DayRecord;
pub use crate::state::AvailabilityState;
pub use crate::store::DayAvailabilityStore;
pub use crate::week::{week_of, WeekWindow};
pub use slot_catalog::{TimeSlot, TimeSlotCatalog};

pub use slot_catalog::Error as CatalogError;
