//! Invariant checker shared by unit tests and the fuzz target.

use arbitrary::Arbitrary;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::fill::WeekdaysOnly;
use crate::week::{week_of, DAYS_IN_WEEK};
use crate::{AvailabilityFacade, DayKey, Error, TimeSlotCatalog};

/// What to do with the model.
#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    SetAnchor { days_from_epoch: i32 },
    ShiftWeeks(i8),
    ToggleOffDay { weekday: u8 },
    ToggleSlot { weekday: u8, slot: u8 },
    Reset,
}

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub start_hour: u8,
    pub end_hour: u8,
    pub operations: Vec<Operation>,
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch is a valid date")
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_availability(data: Data) -> bool {
    let Ok(catalog) = TimeSlotCatalog::generate(data.start_hour, data.end_hour) else {
        return false;
    };

    let mut facade = AvailabilityFacade::new(catalog.clone(), WeekdaysOnly);

    for operation in data.operations {
        let before = facade.commit();

        match operation {
            Operation::SetAnchor { days_from_epoch } => {
                let offset = Duration::days(days_from_epoch.into());

                let Some(date) = epoch().checked_add_signed(offset) else {
                    continue;
                };

                match facade.set_anchor_date(date) {
                    Ok(()) => check_week(&facade, date),
                    Err(err) => {
                        assert_eq!(err, Error::OutOfRange(date));
                        assert!(week_of(date).is_none());
                        assert_eq!(facade.commit(), before);
                        continue;
                    }
                }
            }
            Operation::ShiftWeeks(weeks) => {
                let anchor = facade.anchor_date();

                if facade.shift_weeks(weeks.into()).is_err() {
                    assert_eq!(facade.anchor_date(), anchor);
                    assert_eq!(facade.commit(), before);
                    continue;
                }

                if let Some(anchor) = facade.anchor_date() {
                    check_week(&facade, anchor);
                }
            }
            Operation::ToggleOffDay { weekday } => {
                let Some(day) = nth_day(&facade, weekday) else {
                    continue;
                };

                let was_off = facade.day(&day).expect("day is ensured").is_off_day();
                let count = facade.available_count(&day);
                assert_eq!(facade.toggle_off_day(&day), Ok(!was_off));
                assert_eq!(facade.available_count(&day), count);
            }
            Operation::ToggleSlot { weekday, slot } => {
                let Some(day) = nth_day(&facade, weekday) else {
                    continue;
                };

                let slot = catalog
                    .get(usize::from(slot) % catalog.len())
                    .expect("index is in catalog bounds");

                let record = facade.day(&day).expect("day is ensured");
                let was_available = record.slot(slot).expect("slot is in catalog");
                let count = record.available_count();
                let toggled = facade.toggle_slot(&day, slot);
                assert_eq!(toggled, Ok(!was_available));

                let expected_count = if was_available { count - 1 } else { count + 1 };
                assert_eq!(facade.available_count(&day), expected_count);
            }
            Operation::Reset => {
                facade.reset();

                let expected_len = if facade.week().is_some() {
                    DAYS_IN_WEEK
                } else {
                    0
                };
                assert_eq!(facade.commit().len(), expected_len);
                continue;
            }
        }

        // Days known before the operation are never dropped, and only the
        // toggled day may have changed.
        let after = facade.commit();
        let changed = before
            .iter()
            .filter(|&(key, record)| after.get(key) != Some(record));
        assert!(changed.count() <= 1);
        assert!(before.keys().all(|key| after.contains_key(key)));

        for (key, record) in &after {
            assert!(record.covers(&catalog), "{key} does not match the catalog");
        }
    }

    true
}

fn check_week<P: crate::InitialFillPolicy>(facade: &AvailabilityFacade<P>, anchor: NaiveDate) {
    let week = facade.current_week();
    assert_eq!(week.len(), DAYS_IN_WEEK);
    assert_eq!(week[0].weekday(), Weekday::Mon);
    assert!(week.iter().any(|day| day.date == anchor));

    for (prev, next) in week.iter().zip(&week[1..]) {
        assert_eq!(prev.date.succ_opt(), Some(next.date));
        assert!(prev.key < next.key);
    }

    let index = anchor.weekday().num_days_from_monday() as usize;
    assert_eq!(week[index].date, anchor);
}

fn nth_day<P: crate::InitialFillPolicy>(
    facade: &AvailabilityFacade<P>,
    weekday: u8,
) -> Option<DayKey> {
    let week = facade.week()?;
    let date = week.dates()[usize::from(weekday) % DAYS_IN_WEEK];
    Some(DayKey::from(date))
}
