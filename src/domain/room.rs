use uuid::Uuid;

/// An operating room ("salon").
///
/// The daily patient capacity is not stored on the record; it is derived
/// from the display name by the capacity policy (see `domain::capacity`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Uuid,
    pub name: String,

    /// Position of the room in calendar views.
    pub order_index: i32,
}

impl Room {
    pub fn new(name: impl Into<String>, order_index: i32) -> Self {
        Room {
            id: Uuid::new_v4(),
            name: name.into(),
            order_index,
        }
    }
}
