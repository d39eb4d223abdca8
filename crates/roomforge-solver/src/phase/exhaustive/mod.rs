//! Exhaustive cross-floor phase.
//!
//! Scores every size-`party_size` subset of the available pool. Subsets are
//! produced in lexicographic index order over the pool, which is the
//! inventory order, so on equal travel time the first subset wins.
//!
//! Cost is `C(n, k)` evaluations of `O(k log k)` each, where `n` is the pool
//! size and `k <= 5`. This is bounded but large for big inventories; set a
//! combination limit when `n` is not under the caller's control.

mod combinations;


use roomforge_core::Room;
use smallvec::SmallVec;
use tracing::{info, warn};

use super::AllocationPhase;
use crate::scope::AllocationScope;
use crate::stats::PhaseStats;

pub use combinations::{binomial, Combinations};

/// Exhaustive search over all combinations of the available pool.
///
/// # Example
///
/// ```
/// use roomforge_core::Room;
/// use roomforge_solver::{AllocationPhase, AllocationScope, ExhaustivePhase};
///
/// let inventory: Vec<Room> = [101, 201, 202, 305]
///     .iter()
///     .map(|&n| Room::from_number(n).unwrap())
///     .collect();
///
/// let mut scope = AllocationScope::new(&inventory, 3);
/// ExhaustivePhase::new().solve(&mut scope, 1);
///
/// let best: Vec<u32> = scope.best_rooms().unwrap().iter().map(|r| r.number()).collect();
/// assert_eq!(best, vec![101, 201, 202]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExhaustivePhase {
    /// Maximum number of combinations to score (None = unlimited).
    combination_limit: Option<u64>,
}

impl ExhaustivePhase {
    /// Creates an unlimited exhaustive phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a phase that stops after scoring `limit` combinations.
    pub fn with_combination_limit(limit: Option<u64>) -> Self {
        Self {
            combination_limit: limit,
        }
    }

    pub fn combination_limit(&self) -> Option<u64> {
        self.combination_limit
    }
}

impl AllocationPhase for ExhaustivePhase {
    fn solve(&mut self, scope: &mut AllocationScope<'_>, phase_index: usize) {
        let mut phase_stats = PhaseStats::new(phase_index, self.phase_type_name());
        let party_size = scope.party_size();
        let pool: Vec<&Room> = scope.candidates().to_vec();

        info!(
            event = "phase_start",
            phase = "Exhaustive",
            phase_index = phase_index,
            candidate_count = pool.len() as u64,
            combination_count = %binomial(pool.len(), party_size),
        );

        if party_size > 0 && !pool.is_empty() {
            let mut selection: SmallVec<[&Room; 5]> = SmallVec::with_capacity(party_size);

            for indices in Combinations::new(pool.len(), party_size) {
                if let Some(limit) = self.combination_limit {
                    if phase_stats.evaluations >= limit {
                        warn!(
                            event = "combination_limit",
                            limit = limit,
                            candidate_count = pool.len() as u64,
                            "Exhaustive search stopped at combination limit; result may not be optimal",
                        );
                        scope.stats_mut().truncated = true;
                        break;
                    }
                }

                selection.clear();
                selection.extend(indices.iter().map(|&i| pool[i]));

                let improved = scope.offer(&selection);
                scope.stats_mut().record_combination(improved);
                phase_stats.record_evaluation(improved);
            }
        }

        let best = scope
            .best_travel_time()
            .map(|t| format!("{t}"))
            .unwrap_or_else(|| "none".to_string());

        info!(
            event = "phase_end",
            phase = "Exhaustive",
            phase_index = phase_index,
            duration_ms = phase_stats.elapsed_ms(),
            steps = phase_stats.evaluations,
            speed = phase_stats.evaluations_per_second(),
            score = %best,
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "Exhaustive"
    }
}
