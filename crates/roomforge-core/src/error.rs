//! Error types for RoomForge

use thiserror::Error;

use crate::domain::RoomId;

/// Main error type for RoomForge operations.
///
/// The travel-time metric and the allocator never produce these; they are
/// raised at construction boundaries and by the booking workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomForgeError {
    /// Room number and floor do not agree with the numbering scheme.
    #[error("Invalid room {number} on floor {floor}: {reason}")]
    InvalidRoom {
        number: u32,
        floor: u32,
        reason: &'static str,
    },

    /// The same room id appears twice where ids must be unique.
    #[error("Duplicate room id: {0}")]
    DuplicateRoomId(RoomId),

    /// A room set was built with more rooms than a party may hold.
    #[error("Room set of {len} rooms exceeds the maximum of {max}")]
    RoomSetTooLarge { len: usize, max: usize },

    /// No room with this id exists in the inventory.
    #[error("Unknown room: {0}")]
    UnknownRoom(RoomId),

    /// The room exists but is not available for booking.
    #[error("Room is not available: {0}")]
    RoomUnavailable(RoomId),

    /// A booking was requested with nothing selected.
    #[error("No rooms selected")]
    EmptySelection,

    /// Occupancy percentage outside 0..=100.
    #[error("Invalid occupancy percentage: {0}")]
    InvalidOccupancy(u8),

    /// The hotel layout cannot produce a valid inventory.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

/// Result type alias for RoomForge operations
pub type Result<T> = std::result::Result<T, RoomForgeError>;
