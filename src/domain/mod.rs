pub mod assignment;
pub mod capacity;
pub mod physician;
pub mod room;
pub mod slot;
pub mod surgery;
