use serde::Serialize;
use uuid::Uuid;

use crate::domain::slot::AvailableSlot;
use crate::domain::surgery::PatientSummary;
use crate::error::Result;

/// Wire shape of the availability scan result.
///
/// A scan that finds nothing is still `success: true` with an empty slot
/// list; only hard failures (unknown room, storage errors) produce
/// `success: false` with a message.
#[derive(Debug, Serialize)]
pub struct ScanResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<SlotDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDto {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub day_name: String,
    pub current_patient_count: usize,
    pub max_capacity: u32,
    pub patients: Vec<PatientSummaryDto>,
}

#[derive(Debug, Serialize)]
pub struct PatientSummaryDto {
    pub id: Uuid,
    pub patient_name: String,
    pub protocol_number: String,
    pub procedure_name: String,
    pub indication: String,
    pub responsible_physician: Option<PhysicianNameDto>,
}

#[derive(Debug, Serialize)]
pub struct PhysicianNameDto {
    pub name: String,
}

impl ScanResponseDto {
    pub fn from_result(result: Result<Vec<AvailableSlot>>) -> Self {
        match result {
            Ok(slots) => ScanResponseDto {
                success: true,
                slots: Some(slots.into_iter().map(SlotDto::from).collect()),
                error: None,
            },
            Err(e) => ScanResponseDto {
                success: false,
                slots: None,
                error: Some(e.to_string()),
            },
        }
    }
}

impl From<AvailableSlot> for SlotDto {
    fn from(slot: AvailableSlot) -> Self {
        SlotDto {
            date: slot.date.format("%Y-%m-%d").to_string(),
            day_name: slot.day_name,
            current_patient_count: slot.current_patient_count,
            max_capacity: slot.max_capacity,
            patients: slot.patients.into_iter().map(PatientSummaryDto::from).collect(),
        }
    }
}

impl From<PatientSummary> for PatientSummaryDto {
    fn from(summary: PatientSummary) -> Self {
        PatientSummaryDto {
            id: summary.id,
            patient_name: summary.patient_name,
            protocol_number: summary.protocol_number,
            procedure_name: summary.procedure_name,
            indication: summary.indication,
            responsible_physician: summary
                .responsible_physician_name
                .map(|name| PhysicianNameDto { name }),
        }
    }
}
