use crate::catalog::{DEFAULT_END_HOUR, DEFAULT_START_HOUR};
use crate::{Error, TimeSlot, TimeSlotCatalog};

#[test]
fn default_working_day() {
    let catalog = TimeSlotCatalog::default();
    assert_eq!(catalog.len(), 16);
    assert_eq!(catalog.start_hour(), DEFAULT_START_HOUR);
    assert_eq!(catalog.end_hour(), DEFAULT_END_HOUR);
    assert_eq!(catalog.first().to_string(), "9:00");
    assert_eq!(catalog.last().to_string(), "16:30");
}

#[test]
fn slots_are_consecutive_half_hours() {
    let catalog = TimeSlotCatalog::generate(0, 24).unwrap();
    assert_eq!(catalog.len(), 48);

    for (prev, next) in catalog.iter().zip(catalog.iter().skip(1)) {
        assert_eq!(prev.next(), Some(next));
    }

    assert_eq!(catalog.last().next(), None);
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(
        TimeSlotCatalog::generate(9, 17).unwrap(),
        TimeSlotCatalog::default(),
    );
}

#[test]
fn single_hour() {
    let catalog = TimeSlotCatalog::generate(23, 24).unwrap();
    let labels: Vec<_> = catalog.iter().map(String::from).collect();
    assert_eq!(labels, ["23:00", "23:30"]);
}

#[test]
fn reject_invalid_hours() {
    for (start_hour, end_hour) in [(17, 9), (9, 9), (0, 0), (10, 25), (24, 30)] {
        assert_eq!(
            TimeSlotCatalog::generate(start_hour, end_hour),
            Err(Error::InvalidCatalogConfiguration {
                start_hour,
                end_hour,
            }),
        );
    }
}

#[test]
fn position_follows_order() {
    let catalog = TimeSlotCatalog::default();

    for (index, slot) in catalog.iter().enumerate() {
        assert_eq!(catalog.position(slot), Some(index));
        assert_eq!(catalog.get(index), Some(slot));
    }

    assert_eq!(catalog.get(catalog.len()), None);
    assert!(!catalog.contains(TimeSlot::new(8, 30).unwrap()));
    assert!(!catalog.contains(TimeSlot::new(17, 0).unwrap()));
}

#[test]
fn iterate_by_reference() {
    let catalog = TimeSlotCatalog::generate(12, 13).unwrap();
    let mut labels = Vec::new();

    for slot in &catalog {
        labels.push(slot.to_string());
    }

    assert_eq!(labels, ["12:00", "12:30"]);
}
