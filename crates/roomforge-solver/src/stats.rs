//! Allocation statistics.
//!
//! Stack-allocated counters for allocation and phase performance tracking.

use std::time::{Duration, Instant};

/// Allocation-level statistics.
///
/// Tracks aggregate metrics across all phases of one allocation.
///
/// # Example
///
/// ```
/// use roomforge_solver::stats::AllocationStats;
///
/// let mut stats = AllocationStats::default();
/// stats.start();
/// stats.record_window(true);
/// stats.record_combination(false);
/// stats.record_combination(true);
///
/// assert_eq!(stats.windows_evaluated, 1);
/// assert_eq!(stats.combinations_evaluated, 2);
/// assert_eq!(stats.improvements, 2);
/// assert_eq!(stats.evaluations(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AllocationStats {
    start_time: Option<Instant>,
    finished: Option<Duration>,
    /// Same-floor windows scored.
    pub windows_evaluated: u64,
    /// Cross-floor combinations scored.
    pub combinations_evaluated: u64,
    /// Candidates that became the new best.
    pub improvements: u64,
    /// Whether a combination limit cut the exhaustive search short.
    pub truncated: bool,
}

impl AllocationStats {
    /// Marks the start of allocation.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.finished = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.finished = Some(self.elapsed());
    }

    /// Returns the elapsed time since allocation started.
    pub fn elapsed(&self) -> Duration {
        if let Some(finished) = self.finished {
            return finished;
        }
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a scored window and whether it became the new best.
    pub fn record_window(&mut self, improved: bool) {
        self.windows_evaluated += 1;
        if improved {
            self.improvements += 1;
        }
    }

    /// Records a scored combination and whether it became the new best.
    pub fn record_combination(&mut self, improved: bool) {
        self.combinations_evaluated += 1;
        if improved {
            self.improvements += 1;
        }
    }

    /// Total candidates scored.
    pub fn evaluations(&self) -> u64 {
        self.windows_evaluated + self.combinations_evaluated
    }
}

/// Phase-level statistics.
///
/// # Example
///
/// ```
/// use roomforge_solver::stats::PhaseStats;
///
/// let mut stats = PhaseStats::new(1, "Exhaustive");
/// stats.record_evaluation(true);
/// stats.record_evaluation(false);
///
/// assert_eq!(stats.phase_index, 1);
/// assert_eq!(stats.phase_type, "Exhaustive");
/// assert_eq!(stats.evaluations, 2);
/// assert_eq!(stats.improvements, 1);
/// ```
#[derive(Debug)]
pub struct PhaseStats {
    /// Index of this phase (0-based).
    pub phase_index: usize,
    /// Type name of the phase.
    pub phase_type: &'static str,
    start_time: Instant,
    /// Candidates scored in this phase.
    pub evaluations: u64,
    /// Candidates that became the new best in this phase.
    pub improvements: u64,
}

impl PhaseStats {
    /// Creates new phase statistics.
    pub fn new(phase_index: usize, phase_type: &'static str) -> Self {
        Self {
            phase_index,
            phase_type,
            start_time: Instant::now(),
            evaluations: 0,
            improvements: 0,
        }
    }

    /// Returns the elapsed time for this phase.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    /// Records a scored candidate.
    pub fn record_evaluation(&mut self, improved: bool) {
        self.evaluations += 1;
        if improved {
            self.improvements += 1;
        }
    }

    /// Returns candidates scored per second.
    pub fn evaluations_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.evaluations as f64 / secs) as u64
        } else {
            0
        }
    }
}
