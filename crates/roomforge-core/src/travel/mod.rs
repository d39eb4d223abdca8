//! Travel-time metric.
//!
//! Scores a group of rooms by the time it takes to walk through them in
//! `(floor, position)` order:
//!
//! - Moving between floors costs [`MINUTES_PER_FLOOR`] per floor crossed.
//! - On the same floor, walking costs one minute per position.
//! - Changing floors always routes through the elevator at position 0, so the
//!   walk costs both rooms' positions.
//!
//! The visiting order is fixed by sorting. It is not the cheapest tour over
//! the rooms and must not be used as a lower bound over other orderings.

mod time;

#[cfg(test)]
mod tests;

use crate::domain::Room;

pub use time::TravelTime;

/// Vertical travel cost for crossing one floor.
pub const MINUTES_PER_FLOOR: u64 = 2;

/// Computes the travel time across `rooms`.
///
/// Input order does not matter. Fewer than two rooms cost nothing.
///
/// # Examples
///
/// ```
/// use roomforge_core::{travel_time, Room, TravelTime};
///
/// let a = Room::from_number(105).unwrap();
/// let b = Room::from_number(302).unwrap();
///
/// // 2 floors * 2 min + (5 + 2) min to and from the elevator
/// assert_eq!(travel_time(&[a, b]), TravelTime::of(11));
/// ```
pub fn travel_time(rooms: &[Room]) -> TravelTime {
    sorted_travel_time(rooms.iter().collect())
}

/// Computes the travel time across borrowed rooms.
///
/// Same metric as [`travel_time`], for callers that hold references into
/// a larger inventory.
pub fn travel_time_of<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> TravelTime {
    sorted_travel_time(rooms.into_iter().collect())
}

fn sorted_travel_time(mut rooms: Vec<&Room>) -> TravelTime {
    if rooms.len() <= 1 {
        return TravelTime::ZERO;
    }

    rooms.sort_by_key(|r| (r.floor(), r.position()));

    rooms
        .windows(2)
        .map(|pair| pair_cost(pair[0], pair[1]))
        .sum()
}

/// Cost of walking from `from` to `to`.
pub fn pair_cost(from: &Room, to: &Room) -> TravelTime {
    let floors = u64::from(from.floor().abs_diff(to.floor()));
    let vertical = floors * MINUTES_PER_FLOOR;

    let horizontal = if from.floor() == to.floor() {
        u64::from(from.position().abs_diff(to.position()))
    } else {
        u64::from(from.position()) + u64::from(to.position())
    };

    TravelTime::of(vertical + horizontal)
}
