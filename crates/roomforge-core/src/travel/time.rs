//! TravelTime - Single-level cost in minutes

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative travel cost in minutes.
///
/// Lower is better.
///
/// # Examples
///
/// ```
/// use roomforge_core::TravelTime;
///
/// let short = TravelTime::of(3);
/// let long = TravelTime::of(12);
///
/// assert!(short < long);
/// assert_eq!(short + long, TravelTime::of(15));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TravelTime {
    minutes: u64,
}

impl TravelTime {
    /// No travel at all.
    pub const ZERO: TravelTime = TravelTime { minutes: 0 };

    /// Creates a travel time of the given minutes.
    #[inline]
    pub const fn of(minutes: u64) -> Self {
        TravelTime { minutes }
    }

    /// Returns the travel time in minutes.
    #[inline]
    pub const fn minutes(&self) -> u64 {
        self.minutes
    }
}

impl Ord for TravelTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minutes.cmp(&other.minutes)
    }
}

impl PartialOrd for TravelTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for TravelTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        TravelTime::of(self.minutes + other.minutes)
    }
}

impl Sum for TravelTime {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(TravelTime::ZERO, Add::add)
    }
}

impl From<TravelTime> for u64 {
    fn from(t: TravelTime) -> Self {
        t.minutes
    }
}

impl fmt::Debug for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TravelTime({})", self.minutes)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}min", self.minutes)
    }
}
