//! Shared test fixtures for RoomForge crates.
//!
//! This crate provides room builders and brute-force oracles for testing.
//! It depends only on `roomforge-core` so every other crate can use it as a
//! dev-dependency.
//!
//! - [`rooms`] - room and inventory builders
//! - [`oracle`] - exhaustive reference answers for allocator tests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! roomforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use roomforge_test::rooms::{booked, room, standard_inventory};
//! use roomforge_test::oracle::brute_force_min;
//! ```

pub mod oracle;
pub mod rooms;

// Re-export commonly used fixtures at crate root for convenience
pub use oracle::{brute_force_min, brute_force_window};
pub use rooms::{booked, floor, room, rooms, standard_inventory};
