#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod error;
pub mod time_slot;

#[cfg(test)]
mod tests;

pub use catalog::TimeSlotCatalog;
pub use error::{Error, Result};
pub use time_slot::TimeSlot;
