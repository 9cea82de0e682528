use chrono::NaiveTime;

use crate::{Error, TimeSlot};

#[test]
fn display_without_padding() {
    assert_eq!(TimeSlot::new(9, 0).unwrap().to_string(), "9:00");
    assert_eq!(TimeSlot::new(0, 30).unwrap().to_string(), "0:30");
    assert_eq!(TimeSlot::new(16, 30).unwrap().to_string(), "16:30");
    assert_eq!(format!("{:?}", TimeSlot::new(9, 30).unwrap()), "9:30");
}

#[test]
fn parse_labels() {
    assert_eq!("9:00".parse(), Ok(TimeSlot::new(9, 0).unwrap()));
    assert_eq!("09:00".parse(), Ok(TimeSlot::new(9, 0).unwrap()));
    assert_eq!("23:30".parse(), Ok(TimeSlot::new(23, 30).unwrap()));

    for raw in ["9:15", "24:00", "9", "", "9:00:00", "nine"] {
        assert_eq!(
            raw.parse::<TimeSlot>(),
            Err(Error::InvalidSlot(raw.to_string())),
        );
    }
}

#[test]
fn label_roundtrip() {
    for minutes in (0..24 * 60).step_by(30) {
        let slot = TimeSlot::from_mins_from_midnight(minutes).unwrap();
        assert_eq!(slot.to_string().parse(), Ok(slot));
    }
}

#[test]
fn ordered_by_time_of_day() {
    let morning = TimeSlot::new(9, 30).unwrap();
    let noon = TimeSlot::new(12, 0).unwrap();
    assert!(morning < noon);
    assert!(TimeSlot::new(9, 0).unwrap() < morning);
}

#[test]
fn convert_naive_time() {
    let time = NaiveTime::from_hms_opt(10, 30, 0).unwrap();
    let slot = TimeSlot::try_from(time).unwrap();
    assert_eq!(slot, TimeSlot::new(10, 30).unwrap());
    assert_eq!(NaiveTime::from(slot), time);

    assert!(TimeSlot::try_from(NaiveTime::from_hms_opt(10, 30, 1).unwrap()).is_err());
    assert!(TimeSlot::try_from(NaiveTime::from_hms_opt(10, 45, 0).unwrap()).is_err());
}
