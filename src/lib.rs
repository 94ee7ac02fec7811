use crate::api::snapshot_dto::CalendarSnapshotDto;
use crate::error::Result;
use crate::loader::parser::parse_json_file;
use crate::store::MemoryStore;

pub mod api;
pub mod clock;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod scheduler;
pub mod service;
pub mod store;

/// Loads a calendar snapshot from a JSON file into an in-memory store.
pub fn load_calendar(file_path: &str) -> Result<MemoryStore> {
    let snapshot: CalendarSnapshotDto = parse_json_file::<CalendarSnapshotDto>(file_path)?;
    log::info!("Calendar snapshot '{}' parsed successfully.", file_path);

    let store = snapshot.into_store()?;
    log::info!("Calendar store constructed successfully.");

    Ok(store)
}
