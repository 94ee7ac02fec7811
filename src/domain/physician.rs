use uuid::Uuid;

/// An attending physician ("doctor").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Physician {
    pub id: Uuid,
    pub name: String,
}

impl Physician {
    pub fn new(name: impl Into<String>) -> Self {
        Physician {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
