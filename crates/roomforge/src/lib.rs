//! RoomForge - Hotel Room Allocation in Rust
//!
//! Picks the group of free rooms with the lowest travel time for a party,
//! and runs the front-desk workflow around it: selections, bookings and
//! occupancy simulation.
//!
//! # Example
//!
//! ```rust
//! use roomforge::prelude::*;
//!
//! let hotel = Hotel::standard().unwrap();
//! assert_eq!(hotel.rooms().len(), 97);
//!
//! let selection = hotel.select_optimal(3);
//! assert_eq!(selection.rooms().numbers(), vec![101, 102, 103]);
//! assert_eq!(selection.travel_time(), TravelTime::of(2));
//! ```

// Core types
pub use roomforge_core::{
    travel_time, travel_time_of, Result, Room, RoomForgeError, RoomId, RoomSet, RoomStatus,
    TravelTime, MAX_PARTY_SIZE,
};

// Configuration
pub use roomforge_config::{
    AllocatorConfig, ConfigError, HotelLayoutConfig, OccupancyConfig, RoomForgeConfig,
};

// Allocation
pub use roomforge_solver::{
    find_optimal_rooms, Allocation, AllocationStats, AllocationStrategy, RoomAllocator,
};

mod hotel;
pub use hotel::{Booking, BookingRequest, Hotel, OccupancyStats, Selection};

/// Console output, available with the `console` feature.
#[cfg(feature = "console")]
pub mod console {
    pub use roomforge_console::{init, RoomForgeConsoleLayer, DEFAULT_FILTER};
}

pub mod prelude {
    pub use super::{
        find_optimal_rooms, Allocation, AllocationStrategy, Booking, BookingRequest, Hotel,
        OccupancyStats, Room, RoomAllocator, RoomForgeConfig, RoomForgeError, RoomId, RoomSet,
        RoomStatus, Selection, TravelTime,
    };
}
