mod common;

use common::*;

use salon_calendar::error::Error;
use salon_calendar::service::{CalendarService, Session, User};
use salon_calendar::store::AssignmentStore;
use uuid::Uuid;

fn coordinator() -> Session {
    Session::authenticated(User::new("coordinator"))
}

#[test]
fn move_to_waiting_list_clears_room_and_date() {
    let (mut store, room, _) = store_with_room("Salon 1");
    let surgery = add_scheduled(&mut store, "Patient One", room.id, date(2025, 12, 8));

    let mut service = CalendarService::new(store, fixed_clock(2025, 12, 1));
    let session = coordinator();

    let moved = service.move_to_waiting_list(&session, surgery.id).unwrap();
    assert!(moved.is_waiting_list);
    assert_eq!(moved.room_id, None);
    assert_eq!(moved.surgery_date, None);

    // Idempotent in effect: re-applying yields the same state.
    let moved_again = service.move_to_waiting_list(&session, surgery.id).unwrap();
    assert_eq!(moved_again.is_waiting_list, moved.is_waiting_list);
    assert_eq!(moved_again.room_id, None);
    assert_eq!(moved_again.surgery_date, None);

    let stored = service.store().surgery(surgery.id).unwrap().unwrap();
    assert!(stored.validate_state().is_ok());
}

#[test]
fn assign_from_waiting_list_places_the_case() {
    let (store, room, physician) = store_with_room("Salon 1");
    let mut service = CalendarService::new(store, fixed_clock(2025, 12, 1));
    let session = coordinator();

    let surgery = service
        .create_surgery(&session, new_waiting_case("Patient One"))
        .unwrap();
    assert!(surgery.is_waiting_list);

    let target = date(2025, 12, 9);
    let assigned = service
        .assign_from_waiting_list(&session, surgery.id, room.id, target, Some(physician.id))
        .unwrap();

    assert!(!assigned.is_waiting_list);
    assert_eq!(assigned.room_id, Some(room.id));
    assert_eq!(assigned.surgery_date, Some(target));
    assert_eq!(assigned.responsible_physician_id, Some(physician.id));
    assert!(assigned.validate_state().is_ok());
}

#[test]
fn assignment_trusts_the_caller_about_the_date() {
    // The write path does not re-validate weekday or capacity; an
    // administrative caller can place a case on a Saturday.
    let (store, room, _) = store_with_room("Salon 1");
    let mut service = CalendarService::new(store, fixed_clock(2025, 12, 1));
    let session = coordinator();

    let surgery = service
        .create_surgery(&session, new_waiting_case("Patient One"))
        .unwrap();

    let saturday = date(2025, 12, 6);
    let assigned = service
        .assign_from_waiting_list(&session, surgery.id, room.id, saturday, None)
        .unwrap();

    assert_eq!(assigned.surgery_date, Some(saturday));
}

#[test]
fn operations_require_a_current_user() {
    let (mut store, room, _) = store_with_room("Salon 1");
    let surgery = add_scheduled(&mut store, "Patient One", room.id, date(2025, 12, 8));

    let mut service = CalendarService::new(store, fixed_clock(2025, 12, 1));
    let anonymous = Session::anonymous();

    assert!(matches!(
        service.move_to_waiting_list(&anonymous, surgery.id),
        Err(Error::Unauthorized)
    ));
    assert!(matches!(
        service.assign_from_waiting_list(&anonymous, surgery.id, room.id, date(2025, 12, 9), None),
        Err(Error::Unauthorized)
    ));
    assert!(matches!(
        service.bulk_move_to_waiting_list_by_month(&anonymous, 2025, 12),
        Err(Error::Unauthorized)
    ));
    assert!(matches!(
        service.create_surgery(&anonymous, new_waiting_case("Someone")),
        Err(Error::Unauthorized)
    ));

    // The failed calls left the record untouched.
    let stored = service.store().surgery(surgery.id).unwrap().unwrap();
    assert!(!stored.is_waiting_list);
}

#[test]
fn unknown_surgery_is_a_labeled_error() {
    let (store, room, _) = store_with_room("Salon 1");
    let mut service = CalendarService::new(store, fixed_clock(2025, 12, 1));
    let session = coordinator();

    assert!(matches!(
        service.move_to_waiting_list(&session, Uuid::new_v4()),
        Err(Error::SurgeryNotFound(_))
    ));
    assert!(matches!(
        service.assign_from_waiting_list(&session, Uuid::new_v4(), room.id, date(2025, 12, 9), None),
        Err(Error::SurgeryNotFound(_))
    ));
}

#[test]
fn bulk_move_by_month_moves_only_that_months_scheduled_cases() {
    let (mut store, room, _) = store_with_room("Salon 1");

    let december_first = add_scheduled(&mut store, "December One", room.id, date(2025, 12, 8));
    let december_second = add_scheduled(&mut store, "December Two", room.id, date(2025, 12, 31));
    let january = add_scheduled(&mut store, "January", room.id, date(2026, 1, 5));

    let already_waiting = salon_calendar::domain::surgery::Surgery::create(new_waiting_case("Waiting"));
    store.insert_surgery(already_waiting.clone()).unwrap();

    let mut service = CalendarService::new(store, fixed_clock(2025, 12, 1));
    let session = coordinator();

    let count = service
        .bulk_move_to_waiting_list_by_month(&session, 2025, 12)
        .unwrap();
    assert_eq!(count, 2);

    let store = service.store();
    assert!(store.surgery(december_first.id).unwrap().unwrap().is_waiting_list);
    assert!(store.surgery(december_second.id).unwrap().unwrap().is_waiting_list);

    let untouched = store.surgery(january.id).unwrap().unwrap();
    assert!(!untouched.is_waiting_list);
    assert_eq!(untouched.surgery_date, Some(date(2026, 1, 5)));

    assert!(store.surgery(already_waiting.id).unwrap().unwrap().is_waiting_list);
    assert_eq!(store.waiting_list().unwrap().len(), 3);
}

#[test]
fn bulk_move_of_an_empty_month_returns_zero() {
    let (store, _, _) = store_with_room("Salon 1");
    let mut service = CalendarService::new(store, fixed_clock(2025, 12, 1));

    let count = service
        .bulk_move_to_waiting_list_by_month(&coordinator(), 2027, 6)
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn create_surgery_into_waiting_discards_placement() {
    let (store, room, _) = store_with_room("Salon 1");
    let mut service = CalendarService::new(store, fixed_clock(2025, 12, 1));

    let mut new = new_waiting_case("Patient One");
    new.room_id = Some(room.id);
    new.surgery_date = Some(date(2025, 12, 8));

    let surgery = service.create_surgery(&coordinator(), new).unwrap();
    assert!(surgery.is_waiting_list);
    assert_eq!(surgery.room_id, None);
    assert_eq!(surgery.surgery_date, None);
}

#[test]
fn approval_records_the_approver() {
    let (store, _, _) = store_with_room("Salon 1");
    let mut service = CalendarService::new(store, fixed_clock(2025, 12, 1));

    let user = User::new("chief");
    let session = Session::authenticated(user.clone());

    let surgery = service
        .create_surgery(&session, new_waiting_case("Patient One"))
        .unwrap();

    let approved = service.approve_surgery(&session, surgery.id).unwrap();
    assert!(approved.is_approved);
    assert_eq!(approved.approved_by, Some(user.id));

    let unapproved = service.unapprove_surgery(&session, surgery.id).unwrap();
    assert!(!unapproved.is_approved);
    assert_eq!(unapproved.approved_by, None);
}

#[test]
fn transitions_append_to_the_activity_log() {
    let (mut store, room, _) = store_with_room("Salon 1");
    let surgery = add_scheduled(&mut store, "Patient One", room.id, date(2025, 12, 8));

    let mut service = CalendarService::new(store, fixed_clock(2025, 12, 1));
    let session = coordinator();

    service.move_to_waiting_list(&session, surgery.id).unwrap();
    service
        .assign_from_waiting_list(&session, surgery.id, room.id, date(2025, 12, 9), None)
        .unwrap();

    let actions: Vec<&str> = service
        .store()
        .activity_log()
        .iter()
        .map(|e| e.action.as_str())
        .collect();
    assert_eq!(
        actions,
        vec!["surgery_moved_to_waiting_list", "surgery_assigned_from_waiting_list"]
    );

    // The move entry keeps the prior placement for the audit trail.
    let details = &service.store().activity_log()[0].details;
    assert_eq!(details["old_surgery_date"], serde_json::json!("2025-12-08"));
}

#[test]
fn physician_assignment_goes_through_replace_semantics() {
    let (mut store, room, physician) = store_with_room("Salon 1");
    let other = salon_calendar::domain::physician::Physician::new("Dr. Mehmet Kaya");
    store.insert_physician(other.clone()).unwrap();

    let mut service = CalendarService::new(store, fixed_clock(2025, 12, 1));
    let session = coordinator();
    let day = date(2025, 12, 8);

    service
        .assign_physician(&session, room.id, physician.id, day)
        .unwrap();
    let replacement = service
        .assign_physician(&session, room.id, other.id, day)
        .unwrap();

    let store = service.store();
    assert!(store.assigned_dates(room.id, physician.id, day, day).unwrap().is_empty());
    assert_eq!(store.assigned_dates(room.id, other.id, day, day).unwrap(), vec![day]);

    // Explicit removal clears the day entirely.
    service.remove_assignment(&session, replacement.id).unwrap();
    assert!(service
        .store()
        .assigned_dates(room.id, other.id, day, day)
        .unwrap()
        .is_empty());
}

#[test]
fn delete_surgery_is_a_hard_remove() {
    let (store, _, _) = store_with_room("Salon 1");
    let mut service = CalendarService::new(store, fixed_clock(2025, 12, 1));
    let session = coordinator();

    let surgery = service
        .create_surgery(&session, new_waiting_case("Patient One"))
        .unwrap();

    service.delete_surgery(&session, surgery.id).unwrap();
    assert!(service.store().surgery(surgery.id).unwrap().is_none());

    assert!(matches!(
        service.delete_surgery(&session, surgery.id),
        Err(Error::SurgeryNotFound(_))
    ));
}
