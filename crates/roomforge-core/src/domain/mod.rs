//! Domain types for hotel rooms.
//!
//! - [`Room`]: a single room with its number, floor and availability
//! - [`RoomSet`]: an ordered, duplicate-free group of at most [`MAX_PARTY_SIZE`] rooms

mod room;
mod room_set;


pub use room::{Room, RoomId, RoomStatus, MAX_FLOOR, MIN_FLOOR};
pub use room_set::{RoomSet, MAX_PARTY_SIZE};
