//! RoomForge Allocation Engine
//!
//! This crate picks the group of available rooms with the lowest travel time
//! for a party:
//! - RoomAllocator: entry point and phase sequencing
//! - Phases (single-floor windows, exhaustive cross-floor search)
//! - Combination enumeration for the exhaustive phase
//! - Allocation scope and statistics
//!
//! Logging levels:
//! - **INFO**: Allocation start/end, phase summaries
//! - **DEBUG**: New best candidates
//! - **TRACE**: Individual candidate evaluations

pub mod allocator;
pub mod phase;
pub mod scope;
pub mod stats;

pub use allocator::{find_optimal_rooms, Allocation, AllocationStrategy, RoomAllocator};
pub use phase::{
    exhaustive::{Combinations, ExhaustivePhase},
    single_floor::SingleFloorPhase,
    AllocationPhase,
};
pub use scope::AllocationScope;
pub use stats::{AllocationStats, PhaseStats};
