use crate::{date, DayKey, Error};

#[test]
fn derive_from_date() {
    assert_eq!(DayKey::from(date!("2024-01-01")).as_str(), "2024-01-01");
    assert_eq!(DayKey::from(date!("0987-11-30")).as_str(), "0987-11-30");

    let key = DayKey::from(date!("2024-07-14"));
    assert_eq!(format!("{key:?}"), "2024-07-14");
}

#[test]
fn derivation_is_idempotent() {
    let first = DayKey::from(date!("2024-03-09"));
    let second: DayKey = "2024-03-09".parse().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.date(), second.date());
}

#[test]
fn reject_non_canonical_keys() {
    for raw in [
        "2024-1-1",
        "2024-02-30",
        "24-01-01",
        "2024/01/01",
        "",
        "2024-01-01T00:00",
    ] {
        assert_eq!(
            raw.parse::<DayKey>(),
            Err(Error::InvalidDayKey(raw.to_string())),
        );
    }
}

#[test]
fn chronological_order() {
    let mut keys = vec![
        DayKey::from(date!("2024-01-10")),
        DayKey::from(date!("2023-12-31")),
        DayKey::from(date!("2024-01-02")),
    ];

    keys.sort();

    let keys: Vec<_> = keys.iter().map(DayKey::as_str).collect();
    assert_eq!(keys, ["2023-12-31", "2024-01-02", "2024-01-10"]);
}
