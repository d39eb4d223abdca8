//! Occupancy statistics.

use std::collections::BTreeMap;

use roomforge_core::Room;

/// Snapshot of how full the hotel is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyStats {
    pub total_rooms: usize,
    pub booked_rooms: usize,
    pub available_rooms: usize,
    /// Booked share of all rooms, rounded to a whole percent.
    pub occupancy_rate: u32,
    /// Floor with the highest booked share, 0 when nothing is booked.
    pub most_occupied_floor: u32,
    /// Rounded booked share of `most_occupied_floor`.
    pub highest_floor_rate: u32,
    pub booking_count: usize,
}

impl OccupancyStats {
    pub(crate) fn collect(rooms: &[Room], booking_count: usize) -> Self {
        let total_rooms = rooms.len();
        let booked_rooms = rooms.iter().filter(|r| !r.is_available()).count();

        // floor -> (total, booked)
        let mut floors: BTreeMap<u32, (usize, usize)> = BTreeMap::new();
        for room in rooms {
            let entry = floors.entry(room.floor()).or_default();
            entry.0 += 1;
            if !room.is_available() {
                entry.1 += 1;
            }
        }

        let mut most_occupied_floor = 0;
        let mut best: Option<(usize, usize)> = None;
        for (&floor, &(total, booked)) in &floors {
            if booked == 0 {
                continue;
            }
            // booked / total > best_booked / best_total, without division
            let better = match best {
                None => true,
                Some((best_total, best_booked)) => booked * best_total > best_booked * total,
            };
            if better {
                most_occupied_floor = floor;
                best = Some((total, booked));
            }
        }

        Self {
            total_rooms,
            booked_rooms,
            available_rooms: total_rooms - booked_rooms,
            occupancy_rate: rounded_percent(booked_rooms, total_rooms),
            most_occupied_floor,
            highest_floor_rate: best.map_or(0, |(total, booked)| rounded_percent(booked, total)),
            booking_count,
        }
    }
}

// Half-up rounding of part / whole as a percentage.
fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u32
}
