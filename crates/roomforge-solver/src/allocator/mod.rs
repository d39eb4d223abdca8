//! Room allocator.
//!
//! Runs the single-floor phase first and returns its answer whenever any
//! floor can hold the whole party. Only when no floor can does it fall back
//! to the exhaustive phase over the full available pool. A same-floor
//! answer is therefore preferred even when some cross-floor group would
//! score lower.


use std::fmt;

use roomforge_config::AllocatorConfig;
use roomforge_core::{Room, RoomSet, TravelTime, MAX_PARTY_SIZE};
use tracing::{debug, info, warn};

use crate::phase::exhaustive::ExhaustivePhase;
use crate::phase::single_floor::SingleFloorPhase;
use crate::phase::AllocationPhase;
use crate::scope::AllocationScope;
use crate::stats::AllocationStats;

/// Which search produced an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationStrategy {
    /// A contiguous window on one floor.
    SingleFloor,

    /// The cheapest combination across floors.
    Exhaustive,

    /// No selection possible: invalid party size or too few available rooms.
    Infeasible,
}

impl fmt::Display for AllocationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationStrategy::SingleFloor => write!(f, "SingleFloor"),
            AllocationStrategy::Exhaustive => write!(f, "Exhaustive"),
            AllocationStrategy::Infeasible => write!(f, "Infeasible"),
        }
    }
}

/// Result of one allocation.
#[derive(Debug, Clone)]
pub struct Allocation {
    /// Chosen rooms, empty when infeasible.
    pub rooms: RoomSet,
    /// Travel time across `rooms`.
    pub travel_time: TravelTime,
    pub strategy: AllocationStrategy,
    pub stats: AllocationStats,
}

impl Allocation {
    fn infeasible(stats: AllocationStats) -> Self {
        Self {
            rooms: RoomSet::empty(),
            travel_time: TravelTime::ZERO,
            strategy: AllocationStrategy::Infeasible,
            stats,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Picks the group of available rooms with the lowest travel time.
///
/// The allocator holds no state between calls. The inventory slice is
/// treated as a consistent snapshot for the duration of one call.
///
/// # Example
///
/// ```
/// use roomforge_core::{Room, TravelTime};
/// use roomforge_solver::{AllocationStrategy, RoomAllocator};
///
/// let inventory: Vec<Room> = [101, 102, 103, 201]
///     .iter()
///     .map(|&n| Room::from_number(n).unwrap())
///     .collect();
///
/// let allocation = RoomAllocator::default().allocate(&inventory, 2);
/// assert_eq!(allocation.rooms.numbers(), vec![101, 102]);
/// assert_eq!(allocation.travel_time, TravelTime::of(1));
/// assert_eq!(allocation.strategy, AllocationStrategy::SingleFloor);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoomAllocator {
    config: AllocatorConfig,
}

impl RoomAllocator {
    /// Creates an allocator with the given limits.
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Largest party size this allocator accepts.
    pub fn max_party_size(&self) -> usize {
        self.config.max_party_size.min(MAX_PARTY_SIZE)
    }

    /// Returns the best room group for `party_size`, or an empty set when
    /// no selection is possible.
    pub fn find_optimal_rooms(&self, inventory: &[Room], party_size: usize) -> RoomSet {
        self.allocate(inventory, party_size).rooms
    }

    /// Allocates rooms for a party, reporting how the answer was found.
    pub fn allocate(&self, inventory: &[Room], party_size: usize) -> Allocation {
        let mut scope = AllocationScope::new(inventory, party_size);

        if party_size == 0 || party_size > self.max_party_size() {
            debug!(
                event = "allocation_rejected",
                party_size = party_size as u64,
                max_party_size = self.max_party_size() as u64,
            );
            let (_, stats) = scope.finish();
            return Allocation::infeasible(stats);
        }

        info!(
            event = "allocation_start",
            candidate_count = scope.candidates().len() as u64,
            party_size = party_size as u64,
        );

        if !scope.is_feasible() {
            let (_, stats) = scope.finish();
            let allocation = Allocation::infeasible(stats);
            log_end(&allocation);
            return allocation;
        }

        let mut single_floor = SingleFloorPhase::new();
        single_floor.solve(&mut scope, 0);

        let strategy = if scope.has_best() {
            AllocationStrategy::SingleFloor
        } else {
            let mut exhaustive =
                ExhaustivePhase::with_combination_limit(self.config.combination_limit);
            exhaustive.solve(&mut scope, 1);
            AllocationStrategy::Exhaustive
        };

        let (best, stats) = scope.finish();
        let allocation = match best {
            Some((rooms, travel_time)) => match RoomSet::new(rooms.into_iter().cloned()) {
                Ok(rooms) => Allocation {
                    rooms,
                    travel_time,
                    strategy,
                    stats,
                },
                Err(e) => {
                    warn!(
                        event = "inconsistent_inventory",
                        error = %e,
                        "Inventory snapshot violates room invariants; returning no allocation",
                    );
                    Allocation::infeasible(stats)
                }
            },
            None => Allocation::infeasible(stats),
        };

        log_end(&allocation);
        allocation
    }
}

fn log_end(allocation: &Allocation) {
    info!(
        event = "allocation_end",
        strategy = %allocation.strategy,
        score = %allocation.travel_time,
        rooms = %allocation.rooms,
        evaluations = allocation.stats.evaluations(),
        duration_ms = allocation.stats.elapsed().as_millis() as u64,
    );
}

/// Returns the best room group for `party_size` using default limits.
///
/// Shorthand for `RoomAllocator::default().find_optimal_rooms(..)`.
pub fn find_optimal_rooms(inventory: &[Room], party_size: usize) -> RoomSet {
    RoomAllocator::default().find_optimal_rooms(inventory, party_size)
}
