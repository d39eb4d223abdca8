//! Per-session room selection.

use roomforge_core::{Room, RoomId, RoomSet, TravelTime};

/// Rooms a guest or clerk has picked but not yet booked.
///
/// Each session owns its own selection; the hotel keeps none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    rooms: RoomSet,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an available room. Returns false if the room is booked, already
    /// selected, or the selection is full.
    pub fn select(&mut self, room: &Room) -> bool {
        if !room.is_available() {
            return false;
        }
        self.rooms.insert(room.clone())
    }

    /// Removes a room by id. Returns false if it was not selected.
    pub fn deselect(&mut self, id: &RoomId) -> bool {
        self.rooms.remove(id)
    }

    pub fn clear(&mut self) {
        self.rooms.clear();
    }

    pub fn rooms(&self) -> &RoomSet {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn contains(&self, id: &RoomId) -> bool {
        self.rooms.contains(id)
    }

    /// Travel time across the selected rooms.
    pub fn travel_time(&self) -> TravelTime {
        self.rooms.travel_time()
    }
}

impl From<RoomSet> for Selection {
    fn from(rooms: RoomSet) -> Self {
        Self { rooms }
    }
}
