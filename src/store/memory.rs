use std::collections::HashMap;

use chrono::NaiveDate;
use log::{debug, info};
use uuid::Uuid;

use crate::domain::assignment::DailyAssignment;
use crate::domain::physician::Physician;
use crate::domain::room::Room;
use crate::domain::surgery::Surgery;
use crate::error::{Error, Result};
use crate::store::{ActivityEntry, AssignmentStore};

/// In-memory calendar tables.
///
/// Stands in for the persistent store in the demo binary and in tests.
/// All reads see every prior write immediately, which is the visibility
/// the scan relies on.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rooms: HashMap<Uuid, Room>,
    physicians: HashMap<Uuid, Physician>,
    assignments: Vec<DailyAssignment>,
    surgeries: HashMap<Uuid, Surgery>,
    activity: Vec<ActivityEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Entries of the audit trail, oldest first.
    pub fn activity_log(&self) -> &[ActivityEntry] {
        &self.activity
    }

    /// A helper to log the current state of the calendar tables.
    pub fn print_summary(&self) {
        info!("--- Calendar Summary ---");
        info!("Rooms: {}", self.rooms.len());
        info!("Physicians: {}", self.physicians.len());
        info!("Daily assignments: {}", self.assignments.len());

        let waiting = self.surgeries.values().filter(|s| s.is_waiting_list).count();
        info!("Surgeries: {} ({} waiting)", self.surgeries.len(), waiting);

        for room in self.rooms.values() {
            let scheduled = self
                .surgeries
                .values()
                .filter(|s| s.room_id == Some(room.id))
                .count();
            info!("  - {}: {} scheduled", room.name, scheduled);
        }
        info!("------------------------");
    }
}

impl AssignmentStore for MemoryStore {
    fn room(&self, room_id: Uuid) -> Result<Option<Room>> {
        Ok(self.rooms.get(&room_id).cloned())
    }

    fn rooms(&self) -> Result<Vec<Room>> {
        let mut rooms: Vec<Room> = self.rooms.values().cloned().collect();
        rooms.sort_by_key(|r| r.order_index);
        Ok(rooms)
    }

    fn insert_room(&mut self, room: Room) -> Result<()> {
        debug!("Adding room '{}' ({})", room.name, room.id);
        self.rooms.insert(room.id, room);
        Ok(())
    }

    fn physician(&self, physician_id: Uuid) -> Result<Option<Physician>> {
        Ok(self.physicians.get(&physician_id).cloned())
    }

    fn physicians(&self) -> Result<Vec<Physician>> {
        let mut physicians: Vec<Physician> = self.physicians.values().cloned().collect();
        physicians.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(physicians)
    }

    fn insert_physician(&mut self, physician: Physician) -> Result<()> {
        debug!("Adding physician '{}' ({})", physician.name, physician.id);
        self.physicians.insert(physician.id, physician);
        Ok(())
    }

    fn assigned_dates(
        &self,
        room_id: Uuid,
        physician_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<NaiveDate>> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| {
                a.room_id == room_id
                    && a.physician_id == physician_id
                    && a.date >= from
                    && a.date <= to
            })
            .map(|a| a.date)
            .collect())
    }

    fn replace_assignment(&mut self, assignment: DailyAssignment) -> Result<DailyAssignment> {
        // At most one physician per room per date
        self.assignments
            .retain(|a| !(a.room_id == assignment.room_id && a.date == assignment.date));

        debug!(
            "Assigning physician {} to room {} on {}",
            assignment.physician_id, assignment.room_id, assignment.date
        );
        self.assignments.push(assignment.clone());
        Ok(assignment)
    }

    fn delete_assignment(&mut self, assignment_id: Uuid) -> Result<()> {
        let before = self.assignments.len();
        self.assignments.retain(|a| a.id != assignment_id);

        if self.assignments.len() == before {
            return Err(Error::AssignmentNotFound(assignment_id.to_string()));
        }
        Ok(())
    }

    fn surgery(&self, surgery_id: Uuid) -> Result<Option<Surgery>> {
        Ok(self.surgeries.get(&surgery_id).cloned())
    }

    fn scheduled_surgeries_in_range(
        &self,
        room_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Surgery>> {
        Ok(self
            .surgeries
            .values()
            .filter(|s| {
                !s.is_waiting_list
                    && s.room_id == Some(room_id)
                    && s.surgery_date.is_some_and(|d| d >= from && d <= to)
            })
            .cloned()
            .collect())
    }

    fn scheduled_surgeries_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Surgery>> {
        Ok(self
            .surgeries
            .values()
            .filter(|s| {
                !s.is_waiting_list && s.surgery_date.is_some_and(|d| d >= from && d <= to)
            })
            .cloned()
            .collect())
    }

    fn waiting_list(&self) -> Result<Vec<Surgery>> {
        Ok(self
            .surgeries
            .values()
            .filter(|s| s.is_waiting_list)
            .cloned()
            .collect())
    }

    fn insert_surgery(&mut self, surgery: Surgery) -> Result<()> {
        debug!("Adding surgery for '{}' ({})", surgery.patient_name, surgery.id);
        self.surgeries.insert(surgery.id, surgery);
        Ok(())
    }

    fn update_surgery(&mut self, surgery: Surgery) -> Result<()> {
        if !self.surgeries.contains_key(&surgery.id) {
            return Err(Error::SurgeryNotFound(surgery.id.to_string()));
        }
        self.surgeries.insert(surgery.id, surgery);
        Ok(())
    }

    fn delete_surgery(&mut self, surgery_id: Uuid) -> Result<()> {
        if self.surgeries.remove(&surgery_id).is_none() {
            return Err(Error::SurgeryNotFound(surgery_id.to_string()));
        }
        Ok(())
    }

    fn record_activity(&mut self, entry: ActivityEntry) -> Result<()> {
        self.activity.push(entry);
        Ok(())
    }
}
