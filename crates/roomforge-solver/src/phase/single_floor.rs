//! Single-floor window phase.
//!
//! Groups the available rooms by floor, sorts each floor by position and
//! scores every contiguous run of `party_size` rooms. Floors are visited
//! from lowest to highest and windows from left to right, so on equal
//! travel time the lowest floor and earliest window win.

use std::collections::BTreeMap;

use roomforge_core::Room;
use tracing::info;

use super::AllocationPhase;
use crate::scope::AllocationScope;
use crate::stats::PhaseStats;

/// Same-floor contiguous window search.
///
/// # Example
///
/// ```
/// use roomforge_core::Room;
/// use roomforge_solver::{AllocationPhase, AllocationScope, SingleFloorPhase};
///
/// let inventory: Vec<Room> = [101, 102, 103, 201]
///     .iter()
///     .map(|&n| Room::from_number(n).unwrap())
///     .collect();
///
/// let mut scope = AllocationScope::new(&inventory, 2);
/// SingleFloorPhase::new().solve(&mut scope, 0);
///
/// let best: Vec<u32> = scope.best_rooms().unwrap().iter().map(|r| r.number()).collect();
/// assert_eq!(best, vec![101, 102]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleFloorPhase;

impl SingleFloorPhase {
    pub fn new() -> Self {
        SingleFloorPhase
    }
}

impl AllocationPhase for SingleFloorPhase {
    fn solve(&mut self, scope: &mut AllocationScope<'_>, phase_index: usize) {
        let mut phase_stats = PhaseStats::new(phase_index, self.phase_type_name());
        let party_size = scope.party_size();

        info!(
            event = "phase_start",
            phase = "Single Floor",
            phase_index = phase_index,
        );

        let mut floors: BTreeMap<u32, Vec<&Room>> = BTreeMap::new();
        for &room in scope.candidates() {
            floors.entry(room.floor()).or_default().push(room);
        }

        if party_size > 0 {
            for (_, mut rooms) in floors {
                if rooms.len() < party_size {
                    continue;
                }
                rooms.sort_by_key(|r| r.position());

                for window in rooms.windows(party_size) {
                    let improved = scope.offer(window);
                    scope.stats_mut().record_window(improved);
                    phase_stats.record_evaluation(improved);
                }
            }
        }

        let best = scope
            .best_travel_time()
            .map(|t| format!("{t}"))
            .unwrap_or_else(|| "none".to_string());

        info!(
            event = "phase_end",
            phase = "Single Floor",
            phase_index = phase_index,
            duration_ms = phase_stats.elapsed_ms(),
            steps = phase_stats.evaluations,
            speed = phase_stats.evaluations_per_second(),
            score = %best,
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "SingleFloor"
    }
}
