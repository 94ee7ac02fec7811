use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{Error, Result};

/// A surgery case, either scheduled on the calendar or on the waiting list.
///
/// The record is always in exactly one of two states:
/// - waiting: `is_waiting_list == true`, no room, no date;
/// - scheduled: `is_waiting_list == false`, room and date both set.
///
/// A mixed state (for example a date without a room) is never stored; use
/// the constructors and the transition helpers to keep the fields in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surgery {
    pub id: Uuid,
    pub patient_name: String,
    pub protocol_number: String,
    pub indication: String,
    pub procedure_name: String,
    pub responsible_physician_id: Option<Uuid>,
    pub phone_number_1: String,
    pub phone_number_2: String,
    pub room_id: Option<Uuid>,
    pub surgery_date: Option<NaiveDate>,
    pub is_waiting_list: bool,
    pub is_approved: bool,
    pub approved_by: Option<Uuid>,
    pub order_index: i32,
}

/// Fields supplied when creating a surgery case.
#[derive(Debug, Clone)]
pub struct NewSurgery {
    pub patient_name: String,
    pub protocol_number: String,
    pub indication: String,
    pub procedure_name: String,
    pub responsible_physician_id: Option<Uuid>,
    pub phone_number_1: String,
    pub phone_number_2: String,
    pub room_id: Option<Uuid>,
    pub surgery_date: Option<NaiveDate>,
    pub is_waiting_list: bool,
}

/// Partial update of the editable surgery fields. `None` leaves a field
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct SurgeryUpdate {
    pub patient_name: Option<String>,
    pub protocol_number: Option<String>,
    pub indication: Option<String>,
    pub procedure_name: Option<String>,
    pub responsible_physician_id: Option<Option<Uuid>>,
    pub phone_number_1: Option<String>,
    pub phone_number_2: Option<String>,
}

impl Surgery {
    /// Creates the record, forcing the room/date/waiting fields into a
    /// consistent state. A waiting case drops any room or date it was
    /// submitted with.
    pub fn create(new: NewSurgery) -> Surgery {
        let (room_id, surgery_date) = if new.is_waiting_list {
            (None, None)
        } else {
            (new.room_id, new.surgery_date)
        };

        Surgery {
            id: Uuid::new_v4(),
            patient_name: new.patient_name,
            protocol_number: new.protocol_number,
            indication: new.indication,
            procedure_name: new.procedure_name,
            responsible_physician_id: new.responsible_physician_id,
            phone_number_1: new.phone_number_1,
            phone_number_2: new.phone_number_2,
            room_id,
            surgery_date,
            is_waiting_list: new.is_waiting_list,
            is_approved: false,
            approved_by: None,
            order_index: 0,
        }
    }

    /// Clears the calendar placement and flags the case as waiting.
    /// Applying this to a case that is already waiting is a no-op.
    pub fn move_to_waiting(&mut self) {
        self.is_waiting_list = true;
        self.room_id = None;
        self.surgery_date = None;
    }

    /// Places the case on the calendar. The optional physician re-points
    /// the responsible physician at the same time.
    pub fn schedule(&mut self, room_id: Uuid, date: NaiveDate, physician_id: Option<Uuid>) {
        self.is_waiting_list = false;
        self.room_id = Some(room_id);
        self.surgery_date = Some(date);
        if let Some(physician_id) = physician_id {
            self.responsible_physician_id = Some(physician_id);
        }
    }

    pub fn apply_update(&mut self, update: SurgeryUpdate) {
        if let Some(patient_name) = update.patient_name {
            self.patient_name = patient_name;
        }
        if let Some(protocol_number) = update.protocol_number {
            self.protocol_number = protocol_number;
        }
        if let Some(indication) = update.indication {
            self.indication = indication;
        }
        if let Some(procedure_name) = update.procedure_name {
            self.procedure_name = procedure_name;
        }
        if let Some(responsible_physician_id) = update.responsible_physician_id {
            self.responsible_physician_id = responsible_physician_id;
        }
        if let Some(phone_number_1) = update.phone_number_1 {
            self.phone_number_1 = phone_number_1;
        }
        if let Some(phone_number_2) = update.phone_number_2 {
            self.phone_number_2 = phone_number_2;
        }
    }

    /// Checks the waiting/scheduled exclusivity invariant. Used when
    /// accepting records from an external snapshot.
    pub fn validate_state(&self) -> Result<()> {
        let consistent = if self.is_waiting_list {
            self.room_id.is_none() && self.surgery_date.is_none()
        } else {
            self.room_id.is_some() && self.surgery_date.is_some()
        };

        if consistent {
            Ok(())
        } else {
            Err(Error::InvalidRecord(format!(
                "surgery '{}' mixes waiting and scheduled state (waiting={}, room={:?}, date={:?})",
                self.patient_name, self.is_waiting_list, self.room_id, self.surgery_date
            )))
        }
    }
}

/// Per-date patient detail attached to a slot, so a coordinator can see who
/// already occupies the day before picking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientSummary {
    pub id: Uuid,
    pub patient_name: String,
    pub protocol_number: String,
    pub procedure_name: String,
    pub indication: String,
    pub responsible_physician_name: Option<String>,
}
