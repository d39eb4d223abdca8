//! RoomForge Core - Core types for room allocation
//!
//! This crate provides the fundamental abstractions for RoomForge:
//! - Room types (identity, number encoding, availability)
//! - Room sets bounded by the maximum party size
//! - The travel-time metric used to score a room set
//! - The shared error type

pub mod domain;
pub mod error;
pub mod travel;

pub use domain::{Room, RoomId, RoomSet, RoomStatus, MAX_PARTY_SIZE};
pub use error::{Result, RoomForgeError};
pub use travel::{travel_time, travel_time_of, TravelTime};
