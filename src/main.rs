use std::sync::Arc;

use salon_calendar::api::slot_dto::ScanResponseDto;
use salon_calendar::clock::SystemClock;
use salon_calendar::service::CalendarService;
use salon_calendar::store::AssignmentStore;
use salon_calendar::{load_calendar, logger};

fn main() {
    logger::init();

    let file_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/data/seed_calendar.json".to_string());

    log::info!("Loading calendar snapshot from '{}'...", file_path);

    let store = match load_calendar(&file_path) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Error during loading of calendar snapshot: {}", e);
            return;
        }
    };

    store.print_summary();

    let rooms = store.rooms().unwrap_or_default();
    let physicians = store.physicians().unwrap_or_default();

    let service = CalendarService::new(store, Arc::new(SystemClock));

    // Scan the first room/physician pairing as a demonstration.
    if let (Some(room), Some(physician)) = (rooms.first(), physicians.first()) {
        log::info!("Scanning '{}' for {}...", room.name, physician.name);

        let result = service.find_available_dates(room.id, physician.id, None);
        let response = ScanResponseDto::from_result(result);

        match serde_json::to_string_pretty(&response) {
            Ok(json) => log::info!("Scan result:\n{}", json),
            Err(e) => log::error!("Failed to serialize scan result: {}", e),
        }
    } else {
        log::warn!("Snapshot contains no room/physician pairing to scan.");
    }
}
