pub mod slot_dto;
pub mod snapshot_dto;
