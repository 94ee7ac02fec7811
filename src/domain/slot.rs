use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::surgery::PatientSummary;

/// A candidate (room, date) pairing produced by the availability scan,
/// annotated with enough detail for a coordinator to choose among dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableSlot {
    pub date: NaiveDate,
    /// Localized weekday name as rendered in the calendar UI.
    pub day_name: String,
    pub current_patient_count: usize,
    pub max_capacity: u32,
    pub patients: Vec<PatientSummary>,
}

/// Turkish weekday names, matching the locale the calendar is rendered in.
pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Pazartesi",
        Weekday::Tue => "Salı",
        Weekday::Wed => "Çarşamba",
        Weekday::Thu => "Perşembe",
        Weekday::Fri => "Cuma",
        Weekday::Sat => "Cumartesi",
        Weekday::Sun => "Pazar",
    }
}

/// Operating days are Monday through Friday; no holiday calendar exists.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
