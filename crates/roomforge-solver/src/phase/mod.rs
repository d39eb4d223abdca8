//! Allocation phases for different search strategies
//!
//! Phases are the building blocks of an allocation:
//! - SingleFloorPhase: Slides a window over each floor's available rooms
//! - ExhaustivePhase: Scores every combination of the whole available pool

pub mod exhaustive;
pub mod single_floor;

use std::fmt::Debug;

use crate::scope::AllocationScope;

/// A phase of the allocation process.
///
/// Phases are executed in sequence by the allocator. Each phase offers
/// candidates to the scope, which keeps the cheapest one.
pub trait AllocationPhase: Send + Debug {
    /// Executes this phase.
    ///
    /// `phase_index` is the phase's position in the allocator's sequence and
    /// is only used for logging.
    fn solve(&mut self, scope: &mut AllocationScope<'_>, phase_index: usize);

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
