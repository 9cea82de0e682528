use arbitrary::{Arbitrary, Unstructured};

use crate::date;
use crate::fuzzing::{run_fuzz_availability, Data, Operation};

fn days_from_epoch(date: chrono::NaiveDate) -> i32 {
    (date - date!("1970-01-01")).num_days().try_into().unwrap()
}

fn set_anchor(days_from_epoch: i32) -> Operation {
    Operation::SetAnchor { days_from_epoch }
}

fn toggle_slot(weekday: u8, slot: u8) -> Operation {
    Operation::ToggleSlot { weekday, slot }
}

#[test]
fn no_fuzz_with_invalid_catalog() {
    let data = Data {
        start_hour: 17,
        end_hour: 9,
        operations: Vec::new(),
    };

    assert!(!run_fuzz_availability(data));
}

#[test]
fn navigate_and_toggle() {
    let data = Data {
        start_hour: 9,
        end_hour: 17,
        operations: vec![
            toggle_slot(0, 0),
            set_anchor(days_from_epoch(date!("2024-01-03"))),
            toggle_slot(0, 0),
            toggle_slot(9, 200),
            Operation::ToggleOffDay { weekday: 5 },
            Operation::ShiftWeeks(-3),
            Operation::ShiftWeeks(3),
            Operation::ToggleOffDay { weekday: 5 },
            Operation::Reset,
            toggle_slot(6, 15),
        ],
    };

    assert!(run_fuzz_availability(data));
}

#[test]
fn out_of_range_anchors() {
    let data = Data {
        start_hour: 0,
        end_hour: 24,
        operations: vec![
            set_anchor(days_from_epoch(date!("9999-12-26"))),
            Operation::ShiftWeeks(1),
            set_anchor(days_from_epoch(date!("9999-12-31"))),
            set_anchor(i32::MIN),
            set_anchor(i32::MAX),
            Operation::ShiftWeeks(i8::MIN),
        ],
    };

    assert!(run_fuzz_availability(data));
}

#[test]
fn arbitrary_inputs() {
    let mut seed: u32 = 0x5eed;

    for _ in 0..64 {
        let bytes: Vec<u8> = (0..512)
            .map(|_| {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (seed >> 16) as u8
            })
            .collect();

        let Ok(data) = Data::arbitrary(&mut Unstructured::new(&bytes)) else {
            continue;
        };

        run_fuzz_availability(data);
    }
}
