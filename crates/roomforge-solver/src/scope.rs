//! Allocation scope.
//!
//! Holds the read-only candidate pool for one allocation together with the
//! best room group found so far. Phases only borrow rooms from the
//! inventory snapshot; nothing here outlives the call.

use roomforge_core::{travel_time_of, Room, TravelTime};
use tracing::{debug, trace};

use crate::stats::AllocationStats;

/// Best candidate seen so far.
#[derive(Debug, Clone)]
struct Best<'a> {
    rooms: Vec<&'a Room>,
    travel_time: TravelTime,
}

/// Working state of a single allocation.
///
/// # Example
///
/// ```
/// use roomforge_core::{Room, RoomStatus, TravelTime};
/// use roomforge_solver::AllocationScope;
///
/// let inventory = vec![
///     Room::from_number(101).unwrap(),
///     Room::from_number(102).unwrap().with_status(RoomStatus::Booked),
///     Room::from_number(104).unwrap(),
/// ];
/// let mut scope = AllocationScope::new(&inventory, 2);
/// assert_eq!(scope.candidates().len(), 2);
///
/// let pair: Vec<&Room> = scope.candidates().to_vec();
/// assert!(scope.offer(&pair));
/// assert_eq!(scope.best_travel_time(), Some(TravelTime::of(3)));
/// ```
#[derive(Debug)]
pub struct AllocationScope<'a> {
    candidates: Vec<&'a Room>,
    party_size: usize,
    best: Option<Best<'a>>,
    stats: AllocationStats,
}

impl<'a> AllocationScope<'a> {
    /// Creates a scope over the available rooms of `inventory`, in inventory order.
    pub fn new(inventory: &'a [Room], party_size: usize) -> Self {
        let candidates = inventory.iter().filter(|r| r.is_available()).collect();
        let mut stats = AllocationStats::default();
        stats.start();
        Self {
            candidates,
            party_size,
            best: None,
            stats,
        }
    }

    /// Available rooms, in inventory order.
    pub fn candidates(&self) -> &[&'a Room] {
        &self.candidates
    }

    pub fn party_size(&self) -> usize {
        self.party_size
    }

    /// Returns true when there are enough available rooms for the party.
    pub fn is_feasible(&self) -> bool {
        self.party_size > 0 && self.candidates.len() >= self.party_size
    }

    /// Scores `rooms` and keeps them if strictly cheaper than the current best.
    ///
    /// Ties keep the earlier candidate. Returns whether `rooms` became the best.
    pub fn offer(&mut self, rooms: &[&'a Room]) -> bool {
        let time = travel_time_of(rooms.iter().copied());
        let improved = match &self.best {
            None => true,
            Some(best) => time < best.travel_time,
        };

        trace!(
            event = "evaluate",
            travel_time = time.minutes(),
            accepted = improved,
        );

        if improved {
            debug!(
                event = "new_best",
                travel_time = time.minutes(),
                rooms = ?rooms.iter().map(|r| r.number()).collect::<Vec<_>>(),
            );
            self.best = Some(Best {
                rooms: rooms.to_vec(),
                travel_time: time,
            });
        }
        improved
    }

    /// Returns true once any candidate of the full party size has been kept.
    pub fn has_best(&self) -> bool {
        self.best
            .as_ref()
            .is_some_and(|b| b.rooms.len() == self.party_size)
    }

    pub fn best_rooms(&self) -> Option<&[&'a Room]> {
        self.best.as_ref().map(|b| b.rooms.as_slice())
    }

    pub fn best_travel_time(&self) -> Option<TravelTime> {
        self.best.as_ref().map(|b| b.travel_time)
    }

    pub fn stats(&self) -> &AllocationStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut AllocationStats {
        &mut self.stats
    }

    /// Consumes the scope, returning the best rooms and the final statistics.
    pub fn finish(mut self) -> (Option<(Vec<&'a Room>, TravelTime)>, AllocationStats) {
        self.stats.finish();
        (self.best.map(|b| (b.rooms, b.travel_time)), self.stats)
    }
}
