use chrono::NaiveDate;
use log::warn;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::assignment::DailyAssignment;
use crate::domain::physician::Physician;
use crate::domain::room::Room;
use crate::domain::surgery::Surgery;
use crate::error::Result;
use crate::store::{AssignmentStore, MemoryStore};

/// A full calendar snapshot as loaded from JSON: rooms, physicians, the
/// daily assignment table, and the surgery records.
#[derive(Debug, Deserialize)]
pub struct CalendarSnapshotDto {
    #[serde(default)]
    pub rooms: Vec<RoomDto>,
    #[serde(default)]
    pub physicians: Vec<PhysicianDto>,
    #[serde(default)]
    pub assignments: Vec<AssignmentDto>,
    #[serde(default)]
    pub surgeries: Vec<SurgeryDto>,
}

#[derive(Debug, Deserialize)]
pub struct RoomDto {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub order_index: i32,
}

#[derive(Debug, Deserialize)]
pub struct PhysicianDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AssignmentDto {
    pub id: Uuid,
    pub room_id: Uuid,
    pub physician_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct SurgeryDto {
    pub id: Uuid,
    pub patient_name: String,
    pub protocol_number: String,
    #[serde(default)]
    pub indication: String,
    #[serde(default)]
    pub procedure_name: String,
    pub responsible_physician_id: Option<Uuid>,
    #[serde(default)]
    pub phone_number_1: String,
    #[serde(default)]
    pub phone_number_2: String,
    pub room_id: Option<Uuid>,
    pub surgery_date: Option<NaiveDate>,
    pub is_waiting_list: bool,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub approved_by: Option<Uuid>,
    #[serde(default)]
    pub order_index: i32,
}

impl CalendarSnapshotDto {
    /// Builds the in-memory store from the snapshot.
    ///
    /// Every surgery must satisfy the waiting/scheduled exclusivity
    /// invariant; a mixed-state record fails the whole load. Dangling
    /// references (a surgery or assignment pointing at an unknown room or
    /// physician) are kept but logged, matching how the persistent store
    /// treats them.
    pub fn into_store(self) -> Result<MemoryStore> {
        let mut store = MemoryStore::new();

        for room_dto in self.rooms {
            store.insert_room(Room {
                id: room_dto.id,
                name: room_dto.name,
                order_index: room_dto.order_index,
            })?;
        }

        for physician_dto in self.physicians {
            store.insert_physician(Physician {
                id: physician_dto.id,
                name: physician_dto.name,
            })?;
        }

        for assignment_dto in self.assignments {
            if store.room(assignment_dto.room_id)?.is_none() {
                warn!(
                    "Assignment {} references unknown room {}",
                    assignment_dto.id, assignment_dto.room_id
                );
            }
            store.replace_assignment(DailyAssignment {
                id: assignment_dto.id,
                room_id: assignment_dto.room_id,
                physician_id: assignment_dto.physician_id,
                date: assignment_dto.date,
            })?;
        }

        for surgery_dto in self.surgeries {
            let surgery = Surgery {
                id: surgery_dto.id,
                patient_name: surgery_dto.patient_name,
                protocol_number: surgery_dto.protocol_number,
                indication: surgery_dto.indication,
                procedure_name: surgery_dto.procedure_name,
                responsible_physician_id: surgery_dto.responsible_physician_id,
                phone_number_1: surgery_dto.phone_number_1,
                phone_number_2: surgery_dto.phone_number_2,
                room_id: surgery_dto.room_id,
                surgery_date: surgery_dto.surgery_date,
                is_waiting_list: surgery_dto.is_waiting_list,
                is_approved: surgery_dto.is_approved,
                approved_by: surgery_dto.approved_by,
                order_index: surgery_dto.order_index,
            };
            surgery.validate_state()?;

            if let Some(room_id) = surgery.room_id {
                if store.room(room_id)?.is_none() {
                    warn!("Surgery {} references unknown room {}", surgery.id, room_id);
                }
            }

            store.insert_surgery(surgery)?;
        }

        Ok(store)
    }
}
