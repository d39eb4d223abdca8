//! Room - a bookable unit of the hotel inventory

use std::fmt;

use crate::error::{Result, RoomForgeError};

/// Lowest floor of the hotel.
pub const MIN_FLOOR: u32 = 1;

/// Highest floor of the hotel.
///
/// Rooms on this floor are numbered `1000 + position`.
pub const MAX_FLOOR: u32 = 10;

/// Unique, immutable identity of a room.
///
/// # Examples
///
/// ```
/// use roomforge_core::RoomId;
///
/// let id = RoomId::for_number(305);
/// assert_eq!(id.as_str(), "room-305");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RoomId(String);

impl RoomId {
    /// Creates a room id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        RoomId(id.into())
    }

    /// Returns the conventional id `room-<number>`.
    pub fn for_number(number: u32) -> Self {
        RoomId(format!("room-{}", number))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        RoomId(s.to_string())
    }
}

/// Availability of a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoomStatus {
    /// Free to be selected and booked.
    #[default]
    Available,

    /// Held by a booking.
    Booked,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Available => write!(f, "available"),
            RoomStatus::Booked => write!(f, "booked"),
        }
    }
}

/// A hotel room.
///
/// The room number encodes its floor and position: `floor * 100 + position`.
/// Floors 1 to 9 allow positions 1 to 100 (position 100 is written as the
/// next hundred, so room 200 is position 100 on floor 1). The top floor
/// allows positions 1 to 99.
///
/// Only `status` may change after creation.
///
/// # Examples
///
/// ```
/// use roomforge_core::{Room, RoomStatus};
///
/// let room = Room::from_number(1004).unwrap();
/// assert_eq!(room.floor(), 10);
/// assert_eq!(room.position(), 4);
/// assert_eq!(room.status(), RoomStatus::Available);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRoom"))]
pub struct Room {
    id: RoomId,
    number: u32,
    floor: u32,
    status: RoomStatus,
}

impl Room {
    /// Creates an available room, validating that `number` and `floor` agree.
    pub fn new(id: RoomId, number: u32, floor: u32) -> Result<Self> {
        validate(number, floor)?;
        Ok(Room {
            id,
            number,
            floor,
            status: RoomStatus::Available,
        })
    }

    /// Creates an available room from its number alone.
    ///
    /// The floor is derived from the number and the id is `room-<number>`.
    pub fn from_number(number: u32) -> Result<Self> {
        let floor = number.saturating_sub(1) / 100;
        Room::new(RoomId::for_number(number), number, floor)
    }

    /// Returns this room with the given status.
    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn status(&self) -> RoomStatus {
        self.status
    }

    pub fn set_status(&mut self, status: RoomStatus) {
        self.status = status;
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }

    /// Returns the room's index along its floor, which is also its
    /// distance in minutes from the floor's elevator.
    #[inline]
    pub fn position(&self) -> u32 {
        position_of(self.number)
    }
}

// Unchecked wire form; deserialization goes through `Room::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRoom {
    id: RoomId,
    number: u32,
    floor: u32,
    #[serde(default)]
    status: RoomStatus,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRoom> for Room {
    type Error = RoomForgeError;

    fn try_from(raw: RawRoom) -> Result<Self> {
        Ok(Room::new(raw.id, raw.number, raw.floor)?.with_status(raw.status))
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

// A remainder of 0 stands for position 100.
#[inline]
fn position_of(number: u32) -> u32 {
    match number % 100 {
        0 => 100,
        p => p,
    }
}

fn validate(number: u32, floor: u32) -> Result<()> {
    let invalid = |reason| RoomForgeError::InvalidRoom {
        number,
        floor,
        reason,
    };

    if !(MIN_FLOOR..=MAX_FLOOR).contains(&floor) {
        return Err(invalid("floor out of range"));
    }

    let max_position = if floor == MAX_FLOOR { 99 } else { 100 };
    let base = floor * 100;
    if number <= base || number > base + max_position {
        return Err(invalid("number does not belong to floor"));
    }

    Ok(())
}
