use std::collections::{HashMap, HashSet};

use chrono::{Days, NaiveDate};
use log::{debug, info};
use uuid::Uuid;

use crate::clock::Clock;
use crate::domain::capacity::capacity_for;
use crate::domain::slot::{day_name, is_weekend, AvailableSlot};
use crate::domain::surgery::{PatientSummary, Surgery};
use crate::error::{Error, Result};
use crate::store::AssignmentStore;

/// The scan looks this many days past today, boundary inclusive.
pub const SCAN_HORIZON_DAYS: u64 = 90;

/// The scan stops after collecting this many candidate dates.
pub const MAX_SLOTS: usize = 5;

/// Finds the next free operating dates for a room and physician.
///
/// Walks the calendar from today through the horizon in order and offers a
/// date when all three gates hold: it is a weekday, the physician is
/// assigned to the room that day, and the room's scheduled surgeries are
/// strictly below its capacity. The first `MAX_SLOTS` qualifying dates are
/// returned, chronological.
///
/// The result is a point-in-time snapshot, not a reservation: nothing
/// stops the offered occupancy from changing before a caller commits.
///
/// `patient_id` identifies the case the caller intends to place; the scan
/// itself does not use it beyond logging, and the patient's own record is
/// not excluded from the counts.
///
/// An unknown room fails with [`Error::RoomNotFound`]; a scan that finds
/// no qualifying date returns an empty list, which is a normal outcome.
pub fn find_available_dates<S: AssignmentStore + ?Sized>(
    store: &S,
    clock: &dyn Clock,
    room_id: Uuid,
    physician_id: Uuid,
    patient_id: Option<Uuid>,
) -> Result<Vec<AvailableSlot>> {
    let room = store
        .room(room_id)?
        .ok_or_else(|| Error::RoomNotFound(room_id.to_string()))?;

    let max_capacity = capacity_for(&room.name);

    let today = clock.today();
    let end_date = today + Days::new(SCAN_HORIZON_DAYS);

    debug!(
        "Scanning {} for physician {} from {} to {} (capacity {}, patient {:?})",
        room.name, physician_id, today, end_date, max_capacity, patient_id
    );

    let assigned_dates: HashSet<NaiveDate> = store
        .assigned_dates(room_id, physician_id, today, end_date)?
        .into_iter()
        .collect();

    let surgeries = store.scheduled_surgeries_in_range(room_id, today, end_date)?;
    let patients_by_date = group_by_date(store, surgeries)?;

    let mut slots = Vec::new();
    let mut current = today;

    while current <= end_date && slots.len() < MAX_SLOTS {
        if !is_weekend(current) && assigned_dates.contains(&current) {
            let patients = patients_by_date.get(&current).cloned().unwrap_or_default();

            if patients.len() < max_capacity as usize {
                slots.push(AvailableSlot {
                    date: current,
                    day_name: day_name(current).to_string(),
                    current_patient_count: patients.len(),
                    max_capacity,
                    patients,
                });
            }
        }

        current = current + Days::new(1);
    }

    info!(
        "Scan of {} found {} available date(s) within {} days",
        room.name,
        slots.len(),
        SCAN_HORIZON_DAYS
    );

    Ok(slots)
}

/// Groups the room's scheduled surgeries by date as patient summaries,
/// joining the responsible physician's name for display.
///
/// Each day's list is sorted by patient name. Callers get a stable order
/// regardless of store iteration order; no other ordering is promised.
fn group_by_date<S: AssignmentStore + ?Sized>(
    store: &S,
    surgeries: Vec<Surgery>,
) -> Result<HashMap<NaiveDate, Vec<PatientSummary>>> {
    let mut by_date: HashMap<NaiveDate, Vec<PatientSummary>> = HashMap::new();

    for surgery in surgeries {
        let Some(date) = surgery.surgery_date else {
            continue;
        };

        let responsible_physician_name = match surgery.responsible_physician_id {
            Some(id) => store.physician(id)?.map(|p| p.name),
            None => None,
        };

        by_date.entry(date).or_default().push(PatientSummary {
            id: surgery.id,
            patient_name: surgery.patient_name,
            protocol_number: surgery.protocol_number,
            procedure_name: surgery.procedure_name,
            indication: surgery.indication,
            responsible_physician_name,
        });
    }

    for patients in by_date.values_mut() {
        patients.sort_by(|a, b| a.patient_name.cmp(&b.patient_name));
    }

    Ok(by_date)
}
