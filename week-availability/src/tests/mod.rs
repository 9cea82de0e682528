mod day_key;

#[cfg(feature = "fuzzing")]
mod fuzzing;

#[cfg(feature = "serde")]
mod serialization;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! key {
    ( $key: expr ) => {{
        $key.parse::<$crate::DayKey>().expect("invalid day key literal")
    }};
}

#[macro_export]
macro_rules! slot {
    ( $slot: expr ) => {{
        $slot.parse::<$crate::TimeSlot>().expect("invalid slot literal")
    }};
}
