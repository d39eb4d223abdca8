//! Brute-force reference answers.
//!
//! These recompute allocator results the slow, obvious way so tests can
//! compare against them. Subsets are enumerated recursively with a start
//! index, in input order; ties keep the first subset found.

use std::collections::BTreeMap;

use roomforge_core::{travel_time, Room, TravelTime};

/// Returns the cheapest size-`k` subset of the available rooms in `pool`.
///
/// Returns `None` when fewer than `k` rooms are available.
pub fn brute_force_min(pool: &[Room], k: usize) -> Option<(Vec<Room>, TravelTime)> {
    let available: Vec<Room> = pool.iter().filter(|r| r.is_available()).cloned().collect();
    if k == 0 || available.len() < k {
        return None;
    }

    let mut subsets = Vec::new();
    collect_subsets(&available, k, 0, &mut Vec::new(), &mut subsets);

    let mut best: Option<(Vec<Room>, TravelTime)> = None;
    for subset in subsets {
        let time = travel_time(&subset);
        if best.as_ref().map_or(true, |(_, b)| time < *b) {
            best = Some((subset, time));
        }
    }
    best
}

/// Returns the cheapest contiguous window of `k` available rooms on any
/// single floor, scanning floors from lowest to highest.
pub fn brute_force_window(pool: &[Room], k: usize) -> Option<(Vec<Room>, TravelTime)> {
    if k == 0 {
        return None;
    }

    let mut by_floor: BTreeMap<u32, Vec<Room>> = BTreeMap::new();
    for room in pool.iter().filter(|r| r.is_available()) {
        by_floor.entry(room.floor()).or_default().push(room.clone());
    }

    let mut best: Option<(Vec<Room>, TravelTime)> = None;
    for (_, mut rooms) in by_floor {
        rooms.sort_by_key(Room::position);
        if rooms.len() < k {
            continue;
        }
        for start in 0..=rooms.len() - k {
            let window = rooms[start..start + k].to_vec();
            let time = travel_time(&window);
            if best.as_ref().map_or(true, |(_, b)| time < *b) {
                best = Some((window, time));
            }
        }
    }
    best
}

fn collect_subsets(
    pool: &[Room],
    k: usize,
    start: usize,
    current: &mut Vec<Room>,
    out: &mut Vec<Vec<Room>>,
) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }
    for i in start..pool.len() {
        current.push(pool[i].clone());
        collect_subsets(pool, k, i + 1, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::{booked, rooms};

    #[test]
    fn test_brute_force_min_skips_booked() {
        let pool = vec![booked(101), booked(102)]
            .into_iter()
            .chain(rooms(&[105, 106, 301]))
            .collect::<Vec<_>>();
        let (best, time) = brute_force_min(&pool, 2).unwrap();
        assert_eq!(best.iter().map(Room::number).collect::<Vec<_>>(), vec![105, 106]);
        assert_eq!(time, TravelTime::of(1));
    }

    #[test]
    fn test_brute_force_min_infeasible() {
        assert!(brute_force_min(&rooms(&[101]), 2).is_none());
        assert!(brute_force_min(&rooms(&[101]), 0).is_none());
    }

    #[test]
    fn test_brute_force_window_first_tie_wins() {
        let (best, time) = brute_force_window(&rooms(&[103, 102, 101, 201, 202]), 2).unwrap();
        assert_eq!(best.iter().map(Room::number).collect::<Vec<_>>(), vec![101, 102]);
        assert_eq!(time, TravelTime::of(1));
    }
}
