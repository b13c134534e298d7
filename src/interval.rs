// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Interval
//!
//! An [`Interval`] is a half-open range `[start, end)` of non-negative integers.
//! It can only be obtained through validating constructors, so any value of the
//! type is known to be non-empty and to have non-negative bounds.

use std::{cmp::Ordering, fmt, ops::Range};

/// Number of bounds a loosely-typed interval (a slice) must hold.
pub const INTERVAL_BOUNDS: usize = 2;

/// Error returned when a pair of bounds does not describe a valid [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    /// A loosely-typed interval did not hold exactly [`INTERVAL_BOUNDS`] bounds.
    Arity(usize),
    /// The start bound was negative.
    NegativeStart(i64),
    /// The end bound was negative.
    NegativeEnd(i64),
    /// The end bound was not strictly greater than the start bound.
    Empty { start: i64, end: i64 },
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalError::Arity(n) => write!(
                f,
                "interval must hold exactly {INTERVAL_BOUNDS} bounds, but held {n}"
            ),
            IntervalError::NegativeStart(start) => {
                write!(f, "interval start must be non-negative, but was {start}")
            }
            IntervalError::NegativeEnd(end) => {
                write!(f, "interval end must be non-negative, but was {end}")
            }
            IntervalError::Empty { start, end } => {
                write!(f, "interval must be non-empty, but was [{start}..{end})")
            }
        }
    }
}

impl std::error::Error for IntervalError {}

/// A non-empty half-open range `[start, end)` of non-negative integers.
///
/// Intervals order by `start` first and `end` second.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Deserialize, ::serde::Serialize),
    serde(try_from = "(i64, i64)", into = "(i64, i64)")
)]
pub struct Interval {
    /// Start of the interval (inclusive)
    start: i64,
    /// End of the interval (exclusive)
    end: i64,
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// What is left of an interval after another one is taken out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalDifference {
    /// Nothing is left.
    Empty,
    /// A single interval is left. This is the unchanged interval if there was no overlap.
    Single(Interval),
    /// The middle was removed, leaving a leading and a trailing part.
    Split(Interval, Interval),
}

impl Interval {
    /// Creates a new [`Interval`] covering `[start, end)`.
    ///
    /// # Errors
    ///
    /// Fails if either bound is negative, or if `end <= start`.
    pub fn new(start: i64, end: i64) -> Result<Self, IntervalError> {
        if start < 0 {
            return Err(IntervalError::NegativeStart(start));
        }
        if end < 0 {
            return Err(IntervalError::NegativeEnd(end));
        }
        if end <= start {
            return Err(IntervalError::Empty { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates an interval from bounds already known to be valid.
    pub(crate) fn span(start: i64, end: i64) -> Self {
        debug_assert!(0 <= start && start < end, "invalid span [{start}..{end})");
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// The number of integer points this interval holds.
    #[must_use]
    pub fn interval_length(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    #[must_use]
    pub fn contains(&self, point: i64) -> bool {
        self.start <= point && point < self.end
    }

    /// Returns whether `self` is a superset (A ⊇ B) of `other`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns whether the two intervals share at least one point.
    ///
    /// Intervals that merely touch (`a.end == b.start`) do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Returns whether the two intervals intersect or are adjacent.
    ///
    /// This is the condition under which [`Self::merge`] succeeds.
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Combines two intervals together, if they overlap or are adjacent.
    ///
    /// If the intervals are disjoint (ie, have a gap in between them), this
    /// method returns `None`.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Option<Self> {
        let (start, end) = (self.start.min(other.start), self.end.max(other.end));
        self.touches(other).then(|| Self::span(start, end))
    }

    /// Returns the points shared by both intervals, if any.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        match start.cmp(&end) {
            Ordering::Less => Some(Self::span(start, end)),
            Ordering::Equal | Ordering::Greater => None,
        }
    }

    /// Takes `other` out of `self`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> IntervalDifference {
        if !self.intersects(other) {
            return IntervalDifference::Single(*self);
        }
        // both parts are non-empty: we know other.start < self.end and other.end > self.start
        let left = (self.start < other.start).then(|| Self::span(self.start, other.start));
        let right = (other.end < self.end).then(|| Self::span(other.end, self.end));
        match (left, right) {
            // total overlap
            (None, None) => IntervalDifference::Empty,
            // start removed
            (None, Some(right)) => IntervalDifference::Single(right),
            // end removed
            (Some(left), None) => IntervalDifference::Single(left),
            // split in the middle
            (Some(left), Some(right)) => IntervalDifference::Split(left, right),
        }
    }
}

impl TryFrom<(i64, i64)> for Interval {
    type Error = IntervalError;

    fn try_from((start, end): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl TryFrom<Range<i64>> for Interval {
    type Error = IntervalError;

    fn try_from(value: Range<i64>) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}

impl TryFrom<&[i64]> for Interval {
    type Error = IntervalError;

    fn try_from(value: &[i64]) -> Result<Self, Self::Error> {
        match *value {
            [start, end] => Self::new(start, end),
            _ => Err(IntervalError::Arity(value.len())),
        }
    }
}

impl From<Interval> for (i64, i64) {
    fn from(value: Interval) -> Self {
        (value.start, value.end)
    }
}

impl From<Interval> for Range<i64> {
    fn from(value: Interval) -> Self {
        value.start..value.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ival(start: i64, end: i64) -> Interval {
        Interval::new(start, end).unwrap()
    }

    fn from_slice(bounds: &[i64]) -> Result<Interval, IntervalError> {
        Interval::try_from(bounds)
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!(from_slice(&[]), Err(IntervalError::Arity(0)));
        assert_eq!(from_slice(&[1]), Err(IntervalError::Arity(1)));
        assert_eq!(from_slice(&[1, 2, 3]), Err(IntervalError::Arity(3)));
        assert_eq!(from_slice(&[1, 2]), Ok(ival(1, 2)));
        // arity is checked before the bounds themselves
        assert_eq!(from_slice(&[-1]), Err(IntervalError::Arity(1)));
        assert_eq!(from_slice(&[-1, 2]), Err(IntervalError::NegativeStart(-1)));
    }

    #[test]
    fn rejects_negative_bounds() {
        assert_eq!(Interval::new(-5, 8), Err(IntervalError::NegativeStart(-5)));
        assert_eq!(Interval::new(10, -18), Err(IntervalError::NegativeEnd(-18)));
        // the start is checked first
        assert_eq!(Interval::new(-1, -2), Err(IntervalError::NegativeStart(-1)));
    }

    #[test]
    fn rejects_empty_and_inverted() {
        assert_eq!(
            Interval::new(15, 14),
            Err(IntervalError::Empty { start: 15, end: 14 })
        );
        assert_eq!(
            Interval::new(20, 20),
            Err(IntervalError::Empty { start: 20, end: 20 })
        );
        assert!(Interval::try_from(0..1).is_ok());
        assert!(Interval::try_from((0, 0)).is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            IntervalError::Arity(3).to_string(),
            "interval must hold exactly 2 bounds, but held 3"
        );
        assert_eq!(
            IntervalError::NegativeEnd(-18).to_string(),
            "interval end must be non-negative, but was -18"
        );
        assert_eq!(
            IntervalError::Empty { start: 20, end: 20 }.to_string(),
            "interval must be non-empty, but was [20..20)"
        );
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{:?}", ival(1, 3)), "1..3");
        assert_eq!(ival(1, 3).to_string(), "[1, 3)");
        assert_eq!(Range::from(ival(4, 9)), 4..9);
    }

    #[test]
    fn intersects_excludes_touching() {
        assert!(ival(1, 5).intersects(&ival(4, 8)));
        assert!(ival(4, 8).intersects(&ival(1, 5)));
        assert!(ival(1, 10).intersects(&ival(3, 4)));
        assert!(!ival(1, 5).intersects(&ival(5, 8)));
        assert!(!ival(5, 8).intersects(&ival(1, 5)));
        assert!(!ival(1, 2).intersects(&ival(7, 8)));

        assert!(ival(1, 5).touches(&ival(5, 8)));
        assert!(ival(5, 8).touches(&ival(1, 5)));
        assert!(!ival(1, 4).touches(&ival(5, 8)));
    }

    #[test]
    fn merge() {
        assert_eq!(ival(1, 3).merge(&ival(2, 6)), Some(ival(1, 6)));
        assert_eq!(ival(1, 10).merge(&ival(10, 20)), Some(ival(1, 20)));
        assert_eq!(ival(1, 15).merge(&ival(5, 10)), Some(ival(1, 15)));
        assert_eq!(ival(1, 3).merge(&ival(4, 6)), None);
    }

    #[test]
    fn intersect() {
        assert_eq!(ival(1, 5).intersect(&ival(3, 8)), Some(ival(3, 5)));
        assert_eq!(ival(1, 5).intersect(&ival(5, 8)), None);
        assert_eq!(ival(2, 3).intersect(&ival(0, 9)), Some(ival(2, 3)));
    }

    #[test]
    fn difference() {
        use IntervalDifference::*;

        assert_eq!(ival(1, 10).difference(&ival(3, 5)), Split(ival(1, 3), ival(5, 10)));
        assert_eq!(ival(1, 10).difference(&ival(0, 3)), Single(ival(3, 10)));
        assert_eq!(ival(1, 10).difference(&ival(7, 12)), Single(ival(1, 7)));
        assert_eq!(ival(3, 7).difference(&ival(1, 10)), Empty);
        assert_eq!(ival(3, 7).difference(&ival(3, 7)), Empty);
        assert_eq!(ival(10, 20).difference(&ival(1, 5)), Single(ival(10, 20)));
        // touching is not overlapping
        assert_eq!(ival(10, 20).difference(&ival(5, 10)), Single(ival(10, 20)));
    }

    #[quickcheck]
    fn qc_intersects_matches_shared_points(a: Interval, b: Interval) -> bool {
        let shared = (a.start()..a.end()).any(|p| b.contains(p));
        a.intersects(&b) == shared && b.intersects(&a) == shared
    }

    #[quickcheck]
    fn qc_difference_keeps_exactly_outside_points(a: Interval, b: Interval) -> bool {
        let remaining = match a.difference(&b) {
            IntervalDifference::Empty => vec![],
            IntervalDifference::Single(x) => vec![x],
            IntervalDifference::Split(x, y) => vec![x, y],
        };
        (a.start()..a.end()).all(|p| remaining.iter().any(|r| r.contains(p)) != b.contains(p))
            && remaining.iter().all(|r| a.is_superset(r))
    }
}
