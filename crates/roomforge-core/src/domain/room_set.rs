//! RoomSet - an ordered group of rooms for one party

use std::collections::HashSet;
use std::fmt;

use smallvec::SmallVec;

use super::room::{Room, RoomId};
use crate::error::{Result, RoomForgeError};
use crate::travel::{travel_time, TravelTime};

/// Largest number of rooms a single party may hold.
pub const MAX_PARTY_SIZE: usize = 5;

/// An ordered sequence of distinct rooms, at most [`MAX_PARTY_SIZE`] long.
///
/// Used both for allocator results and for user selections. An empty set
/// means "no selection possible".
///
/// # Examples
///
/// ```
/// use roomforge_core::{Room, RoomSet, TravelTime};
///
/// let rooms = vec![Room::from_number(103).unwrap(), Room::from_number(107).unwrap()];
/// let set = RoomSet::new(rooms).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.travel_time(), TravelTime::of(4));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<Room>", try_from = "Vec<Room>")
)]
pub struct RoomSet {
    rooms: SmallVec<[Room; MAX_PARTY_SIZE]>,
}

impl RoomSet {
    /// Creates an empty room set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a room set, rejecting duplicate ids and oversized groups.
    pub fn new(rooms: impl IntoIterator<Item = Room>) -> Result<Self> {
        let rooms: SmallVec<[Room; MAX_PARTY_SIZE]> = rooms.into_iter().collect();
        if rooms.len() > MAX_PARTY_SIZE {
            return Err(RoomForgeError::RoomSetTooLarge {
                len: rooms.len(),
                max: MAX_PARTY_SIZE,
            });
        }

        let mut seen = HashSet::with_capacity(rooms.len());
        for room in &rooms {
            if !seen.insert(room.id()) {
                return Err(RoomForgeError::DuplicateRoomId(room.id().clone()));
            }
        }

        Ok(RoomSet { rooms })
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Returns true when the set already holds [`MAX_PARTY_SIZE`] rooms.
    pub fn is_full(&self) -> bool {
        self.rooms.len() >= MAX_PARTY_SIZE
    }

    pub fn as_slice(&self) -> &[Room] {
        &self.rooms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    pub fn contains(&self, id: &RoomId) -> bool {
        self.rooms.iter().any(|r| r.id() == id)
    }

    /// Returns the ids in set order.
    pub fn ids(&self) -> Vec<RoomId> {
        self.rooms.iter().map(|r| r.id().clone()).collect()
    }

    /// Returns the room numbers in set order.
    pub fn numbers(&self) -> Vec<u32> {
        self.rooms.iter().map(Room::number).collect()
    }

    /// Travel time across this set.
    pub fn travel_time(&self) -> TravelTime {
        travel_time(&self.rooms)
    }

    /// Appends a room if it is new and the set is not full.
    ///
    /// Returns whether the room was added.
    pub fn insert(&mut self, room: Room) -> bool {
        if self.is_full() || self.contains(room.id()) {
            return false;
        }
        self.rooms.push(room);
        true
    }

    /// Removes the room with this id, keeping the order of the rest.
    ///
    /// Returns whether a room was removed.
    pub fn remove(&mut self, id: &RoomId) -> bool {
        let before = self.rooms.len();
        self.rooms.retain(|r| r.id() != id);
        self.rooms.len() != before
    }

    pub fn clear(&mut self) {
        self.rooms.clear();
    }

    pub fn into_vec(self) -> Vec<Room> {
        self.rooms.into_vec()
    }
}

impl fmt::Debug for RoomSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rooms.iter().map(Room::number)).finish()
    }
}

impl fmt::Display for RoomSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, room) in self.rooms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", room.number())?;
        }
        write!(f, "]")
    }
}

impl From<RoomSet> for Vec<Room> {
    fn from(set: RoomSet) -> Self {
        set.into_vec()
    }
}

impl TryFrom<Vec<Room>> for RoomSet {
    type Error = RoomForgeError;

    fn try_from(rooms: Vec<Room>) -> Result<Self> {
        RoomSet::new(rooms)
    }
}

impl<'a> IntoIterator for &'a RoomSet {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

impl IntoIterator for RoomSet {
    type Item = Room;
    type IntoIter = smallvec::IntoIter<[Room; MAX_PARTY_SIZE]>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.into_iter()
    }
}
