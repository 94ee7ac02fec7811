#![allow(dead_code)]

use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use salon_calendar::clock::FixedClock;
use salon_calendar::domain::assignment::DailyAssignment;
use salon_calendar::domain::physician::Physician;
use salon_calendar::domain::room::Room;
use salon_calendar::domain::surgery::{NewSurgery, Surgery};
use salon_calendar::store::{AssignmentStore, MemoryStore};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn fixed_clock(year: i32, month: u32, day: u32) -> Arc<FixedClock> {
    Arc::new(FixedClock(date(year, month, day)))
}

/// Store seeded with one room and one physician, returned alongside their
/// records.
pub fn store_with_room(room_name: &str) -> (MemoryStore, Room, Physician) {
    let mut store = MemoryStore::new();
    let room = Room::new(room_name, 1);
    let physician = Physician::new("Dr. Ayşe Demir");

    store.insert_room(room.clone()).unwrap();
    store.insert_physician(physician.clone()).unwrap();

    (store, room, physician)
}

pub fn assign(store: &mut MemoryStore, room_id: Uuid, physician_id: Uuid, on: NaiveDate) {
    store
        .replace_assignment(DailyAssignment::new(room_id, physician_id, on))
        .unwrap();
}

pub fn new_waiting_case(patient_name: &str) -> NewSurgery {
    NewSurgery {
        patient_name: patient_name.to_string(),
        protocol_number: format!("P-{}", patient_name.len()),
        indication: "Kolelitiazis".to_string(),
        procedure_name: "Laparoskopik kolesistektomi".to_string(),
        responsible_physician_id: None,
        phone_number_1: "555-0100".to_string(),
        phone_number_2: String::new(),
        room_id: None,
        surgery_date: None,
        is_waiting_list: true,
    }
}

pub fn scheduled_surgery(patient_name: &str, room_id: Uuid, on: NaiveDate) -> Surgery {
    let mut new = new_waiting_case(patient_name);
    new.room_id = Some(room_id);
    new.surgery_date = Some(on);
    new.is_waiting_list = false;
    Surgery::create(new)
}

pub fn add_scheduled(store: &mut MemoryStore, patient_name: &str, room_id: Uuid, on: NaiveDate) -> Surgery {
    let surgery = scheduled_surgery(patient_name, room_id, on);
    store.insert_surgery(surgery.clone()).unwrap();
    surgery
}
