use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse calendar snapshot JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("Surgery not found: {0}")]
    SurgeryNotFound(String),

    #[error("Assignment not found: {0}")]
    AssignmentNotFound(String),

    #[error("Unauthorized: no authenticated user for this operation")]
    Unauthorized,

    #[error("Storage operation failed: {0}")]
    Storage(String),

    #[error("Invalid surgery record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, Error>;
