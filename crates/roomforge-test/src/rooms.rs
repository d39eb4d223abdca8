//! Room and inventory builders.
//!
//! All builders panic on invalid room numbers; they are for tests only.

use roomforge_core::{Room, RoomStatus};

/// Creates an available room from its number.
pub fn room(number: u32) -> Room {
    Room::from_number(number).unwrap_or_else(|e| panic!("bad fixture room {number}: {e}"))
}

/// Creates a booked room from its number.
pub fn booked(number: u32) -> Room {
    room(number).with_status(RoomStatus::Booked)
}

/// Creates available rooms from their numbers, in the given order.
pub fn rooms(numbers: &[u32]) -> Vec<Room> {
    numbers.iter().map(|&n| room(n)).collect()
}

/// Creates available rooms at the given positions of one floor.
pub fn floor(floor: u32, positions: &[u32]) -> Vec<Room> {
    positions.iter().map(|&p| room(floor * 100 + p)).collect()
}

/// Creates the standard 97-room inventory: floors 1 to 9 with ten rooms
/// each and seven rooms on floor 10, all available.
pub fn standard_inventory() -> Vec<Room> {
    let mut inventory = Vec::with_capacity(97);
    for f in 1..=9 {
        inventory.extend(floor(f, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
    }
    inventory.extend(floor(10, &[1, 2, 3, 4, 5, 6, 7]));
    inventory
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_inventory_shape() {
        let inventory = standard_inventory();
        assert_eq!(inventory.len(), 97);
        assert_eq!(inventory[0].number(), 101);
        assert_eq!(inventory[9].number(), 110);
        assert_eq!(inventory[96].number(), 1007);
        assert!(inventory.iter().all(Room::is_available));
    }

    #[test]
    fn test_floor_builder() {
        let rooms = floor(3, &[2, 9]);
        assert_eq!(rooms[0].number(), 302);
        assert_eq!(rooms[1].floor(), 3);
        assert!(!booked(302).is_available());
    }
}
