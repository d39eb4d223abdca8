//! Combination enumeration.
//!
//! Yields every size-`k` subset of `0..n` as ascending index lists, in
//! lexicographic order. This is the same order a depth-first search that
//! carries a start index produces, but the search stack is the index list
//! itself, so no state is shared across calls.

use roomforge_core::MAX_PARTY_SIZE;
use smallvec::SmallVec;

/// Index list of one combination.
pub type CombinationIndices = SmallVec<[usize; MAX_PARTY_SIZE]>;

/// Iterator over all `k`-combinations of `0..n`.
///
/// # Example
///
/// ```
/// use roomforge_solver::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(4, 2).map(|c| c.to_vec()).collect();
/// assert_eq!(
///     all,
///     vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: CombinationIndices,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Creates an iterator over the `k`-combinations of `0..n`.
    ///
    /// Yields nothing when `k > n`, and a single empty combination when `k == 0`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    // Moves to the next combination in place. Returns false when exhausted.
    fn advance(&mut self) -> bool {
        // Rightmost slot that can still move right.
        let mut slot = self.k;
        loop {
            if slot == 0 {
                return false;
            }
            slot -= 1;
            if self.indices[slot] < self.n - self.k + slot {
                break;
            }
        }

        self.indices[slot] += 1;
        for next in slot + 1..self.k {
            self.indices[next] = self.indices[next - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = CombinationIndices;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.indices.clone())
    }
}

/// Number of `k`-combinations of `n` items.
///
/// # Example
///
/// ```
/// use roomforge_solver::phase::exhaustive::binomial;
///
/// assert_eq!(binomial(97, 5), 64_446_024);
/// assert_eq!(binomial(3, 5), 0);
/// ```
pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u128, |acc, i| acc * (n - i) as u128 / (i + 1) as u128)
}
