mod common;

use common::fixed_clock;

use salon_calendar::error::Error;
use salon_calendar::load_calendar;
use salon_calendar::service::CalendarService;
use salon_calendar::store::AssignmentStore;
use uuid::Uuid;

const SALON_5: &str = "00000000-0000-0000-0000-00000000a001";
const DR_DEMIR: &str = "00000000-0000-0000-0000-00000000b001";
const APPROVED_SURGERY: &str = "00000000-0000-0000-0000-00000000d001";
const APPROVER: &str = "00000000-0000-0000-0000-00000000e001";

#[test]
fn snapshot_loads_into_a_working_calendar() {
    let store = load_calendar("tests/data/seed_calendar.json").unwrap();

    assert_eq!(store.rooms().unwrap().len(), 2);
    assert_eq!(store.physicians().unwrap().len(), 2);
    assert_eq!(store.waiting_list().unwrap().len(), 1);

    let salon_5 = Uuid::parse_str(SALON_5).unwrap();
    let dr_demir = Uuid::parse_str(DR_DEMIR).unwrap();

    let service = CalendarService::new(store, fixed_clock(2025, 12, 1));
    let slots = service.find_available_dates(salon_5, dr_demir, None).unwrap();

    // 2025-12-08 carries three of four patients, 2025-12-09 is empty.
    assert_eq!(slots.len(), 2);

    assert_eq!(slots[0].date.to_string(), "2025-12-08");
    assert_eq!(slots[0].current_patient_count, 3);
    assert_eq!(slots[0].max_capacity, 4);
    assert_eq!(
        slots[0].patients.iter().map(|p| p.patient_name.as_str()).collect::<Vec<_>>(),
        vec!["Ali Çelik", "Fatma Yılmaz", "Zeynep Arslan"]
    );

    assert_eq!(slots[1].date.to_string(), "2025-12-09");
    assert_eq!(slots[1].current_patient_count, 0);
    assert!(slots[1].patients.is_empty());
}

#[test]
fn approval_state_survives_a_snapshot_load() {
    let store = load_calendar("tests/data/seed_calendar.json").unwrap();

    let approved = store
        .surgery(Uuid::parse_str(APPROVED_SURGERY).unwrap())
        .unwrap()
        .unwrap();
    assert!(approved.is_approved);
    assert_eq!(approved.approved_by, Some(Uuid::parse_str(APPROVER).unwrap()));
}

#[test]
fn missing_snapshot_file_is_an_io_error() {
    let result = load_calendar("tests/data/does_not_exist.json");
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn malformed_snapshot_is_a_deserialization_error() {
    let result = load_calendar("tests/data/malformed.json");
    assert!(matches!(result, Err(Error::DeserializationError(_))));
}

#[test]
fn mixed_state_surgery_fails_the_load() {
    let result = load_calendar("tests/data/mixed_state_calendar.json");
    assert!(matches!(result, Err(Error::InvalidRecord(_))));
}
