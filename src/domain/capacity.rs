/// Daily patient capacity applied to every room without a special rule.
pub const DEFAULT_CAPACITY: u32 = 3;

/// Maximum number of scheduled surgeries a room takes per day.
///
/// The mapping is keyed on the room's display name: "Salon 5" holds four
/// patients, every other room (including "Salon 6") holds three. Renaming
/// a room changes its capacity, so the names here must match the room
/// records exactly.
pub fn capacity_for(room_name: &str) -> u32 {
    match room_name {
        "Salon 5" => 4,
        "Salon 6" => 3,
        _ => DEFAULT_CAPACITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salon_5_takes_four_patients() {
        assert_eq!(capacity_for("Salon 5"), 4);
    }

    #[test]
    fn salon_6_takes_three_patients() {
        assert_eq!(capacity_for("Salon 6"), 3);
    }

    #[test]
    fn unlisted_rooms_fall_back_to_default() {
        assert_eq!(capacity_for("Salon 1"), 3);
        assert_eq!(capacity_for("Anything Else"), DEFAULT_CAPACITY);
    }
}
