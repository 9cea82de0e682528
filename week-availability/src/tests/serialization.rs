use crate::fill::Uniform;
use crate::{date, key, slot, AvailabilityFacade, AvailabilityState, TimeSlotCatalog};

#[test]
fn state_as_json() {
    let catalog = TimeSlotCatalog::generate(9, 10).unwrap();
    let mut availability = AvailabilityFacade::new(catalog, Uniform(false));
    let monday = key!("2024-01-01");

    availability.set_anchor_date(date!("2024-01-03")).unwrap();
    availability.toggle_slot(&monday, slot!("9:30")).unwrap();
    availability.toggle_off_day(&key!("2024-01-07")).unwrap();

    let json = serde_json::to_value(availability.commit()).unwrap();

    assert_eq!(
        json["2024-01-01"],
        serde_json::json!({ "isOffDay": false, "slots": { "9:00": false, "9:30": true } }),
    );

    assert_eq!(json["2024-01-07"]["isOffDay"], serde_json::json!(true));
}

#[test]
fn state_from_json() {
    let json =
        r#"{ "2024-01-01": { "isOffDay": true, "slots": { "9:00": true, "9:30": false } } }"#;

    let state: AvailabilityState = serde_json::from_str(json).unwrap();
    let record = state.get(&key!("2024-01-01")).unwrap();
    assert!(record.is_off_day());
    assert_eq!(record.slot(slot!("9:00")), Some(true));
    assert_eq!(record.available_count(), 1);
}

#[test]
fn committed_state_round_trip() {
    let catalog = TimeSlotCatalog::default();
    let mut availability = AvailabilityFacade::new(catalog.clone(), Uniform(true));
    let tuesday = key!("2024-01-02");

    availability.set_anchor_date(date!("2024-01-03")).unwrap();
    availability.toggle_off_day(&key!("2024-01-06")).unwrap();
    availability.toggle_slot(&tuesday, slot!("14:30")).unwrap();

    let committed = availability.commit();
    let json = serde_json::to_value(&committed).unwrap();
    let restored: AvailabilityState = serde_json::from_value(json).unwrap();
    assert_eq!(restored, committed);

    let record = restored.get(&tuesday).unwrap();
    assert_eq!(record.slot(slot!("14:30")), Some(false));
    assert_eq!(record.available_count(), 15);
    assert!(restored.get(&key!("2024-01-06")).unwrap().is_off_day());

    // Editing resumes from the restored state
    let mut resumed = AvailabilityFacade::with_state(catalog, restored, Uniform(false));
    resumed.set_anchor_date(date!("2024-01-04")).unwrap();
    assert_eq!(resumed.available_count(&tuesday), 15);
    assert_eq!(resumed.commit(), committed);
}

#[test]
fn reject_invalid_keys() {
    let invalid_key = r#"{ "2024-13-01": { "isOffDay": false, "slots": {} } }"#;
    assert!(serde_json::from_str::<AvailabilityState>(invalid_key).is_err());

    let invalid_slot = r#"{ "2024-01-01": { "isOffDay": false, "slots": { "9:15": true } } }"#;
    assert!(serde_json::from_str::<AvailabilityState>(invalid_slot).is_err());
}
