use std::env;

use chrono::{Local, NaiveDate};

use week_availability::fill::WeekdaysOnly;
use week_availability::{AvailabilityFacade, TimeSlotCatalog};

fn main() {
    let anchor = match env::args().nth(1) {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .unwrap_or_else(|err| panic!("Usage: ./week [YYYY-MM-DD] ({err})")),
        None => Local::now().date_naive(),
    };

    let mut availability = AvailabilityFacade::new(TimeSlotCatalog::default(), WeekdaysOnly);

    if let Err(err) = availability.set_anchor_date(anchor) {
        panic!("{err}");
    }

    let catalog = availability.catalog();
    println!(" - anchor: {anchor}");
    println!(
        " - slots: {} from {} to {}",
        catalog.len(),
        catalog.first(),
        catalog.last()
    );

    if let Some(week) = availability.week() {
        println!(" - week of {}", week.monday().format("%B %-d, %Y"));
    }

    for day in availability.current_week() {
        println!("---");
        println!("{} ({}):", day.date.format("%A, %-d %B"), day.key);

        if day.record.is_off_day() {
            println!(" (off day)");
            continue;
        }

        let minutes = day.record.effective_available_minutes();

        println!(
            " - {}/{} slots, {}h{:02} available",
            day.record.available_count(),
            catalog.len(),
            minutes / 60,
            minutes % 60,
        );

        let available: Vec<_> = day
            .record
            .slots()
            .filter(|(_, available)| *available)
            .map(|(slot, _)| slot.to_string())
            .collect();

        if available.is_empty() {
            println!(" (empty)");
        } else {
            println!(" - {}", available.join(", "));
        }
    }
}
