use chrono::{DateTime, Local, NaiveDate};
use uuid::Uuid;

use crate::domain::assignment::DailyAssignment;
use crate::domain::physician::Physician;
use crate::domain::room::Room;
use crate::domain::surgery::Surgery;
use crate::error::Result;

pub mod memory;

pub use memory::MemoryStore;

/// One row of the audit trail kept by the persistence collaborator.
///
/// The calendar only appends entries; querying and retention are the
/// store's concern.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub user_id: Uuid,
    pub action: String,
    pub details: serde_json::Value,
    pub recorded_at: DateTime<Local>,
}

impl ActivityEntry {
    pub fn new(user_id: Uuid, action: impl Into<String>, details: serde_json::Value) -> Self {
        ActivityEntry {
            user_id,
            action: action.into(),
            details,
            recorded_at: Local::now(),
        }
    }
}

/// Data contract of the persistent calendar tables.
///
/// Every operation is a single isolated statement; no transaction spans
/// multiple calls. Errors carry the underlying storage message and are
/// never retried here.
pub trait AssignmentStore: std::fmt::Debug {
    // --- rooms & physicians ---

    fn room(&self, room_id: Uuid) -> Result<Option<Room>>;
    fn rooms(&self) -> Result<Vec<Room>>;
    fn insert_room(&mut self, room: Room) -> Result<()>;

    fn physician(&self, physician_id: Uuid) -> Result<Option<Physician>>;
    fn physicians(&self) -> Result<Vec<Physician>>;
    fn insert_physician(&mut self, physician: Physician) -> Result<()>;

    // --- daily assignments ---

    /// Dates within `from..=to` on which the physician covers the room.
    fn assigned_dates(
        &self,
        room_id: Uuid,
        physician_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<NaiveDate>>;

    /// Inserts the assignment, displacing any existing assignment for the
    /// same room and date (at most one physician per room per date).
    fn replace_assignment(&mut self, assignment: DailyAssignment) -> Result<DailyAssignment>;

    fn delete_assignment(&mut self, assignment_id: Uuid) -> Result<()>;

    // --- surgeries ---

    fn surgery(&self, surgery_id: Uuid) -> Result<Option<Surgery>>;

    /// Scheduled (non-waiting) surgeries for one room with a date within
    /// `from..=to`.
    fn scheduled_surgeries_in_range(
        &self,
        room_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Surgery>>;

    /// Scheduled (non-waiting) surgeries across all rooms with a date
    /// within `from..=to`.
    fn scheduled_surgeries_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Surgery>>;

    /// All cases currently on the waiting list.
    fn waiting_list(&self) -> Result<Vec<Surgery>>;

    fn insert_surgery(&mut self, surgery: Surgery) -> Result<()>;

    /// Overwrites the stored record with the same id.
    fn update_surgery(&mut self, surgery: Surgery) -> Result<()>;

    fn delete_surgery(&mut self, surgery_id: Uuid) -> Result<()>;

    // --- audit trail ---

    fn record_activity(&mut self, entry: ActivityEntry) -> Result<()>;
}
