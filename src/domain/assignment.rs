use chrono::NaiveDate;
use uuid::Uuid;

/// Binding of one physician to one room for one calendar date.
///
/// At most one assignment exists per room per date. Writes go through the
/// store with replace semantics: assigning a physician to an already
/// covered room+date removes the previous assignment first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyAssignment {
    pub id: Uuid,
    pub room_id: Uuid,
    pub physician_id: Uuid,
    pub date: NaiveDate,
}

impl DailyAssignment {
    pub fn new(room_id: Uuid, physician_id: Uuid, date: NaiveDate) -> Self {
        DailyAssignment {
            id: Uuid::new_v4(),
            room_id,
            physician_id,
            date,
        }
    }
}
