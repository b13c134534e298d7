// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # IntervalSet
//!
//! An [`IntervalSet`] is an ordered collection of [`Interval`]s that are pairwise
//! disjoint and never adjacent. Inserting merges with every stored interval the new
//! one overlaps or touches, and removing trims or splits every stored interval the
//! removed range overlaps.
//!
//! The intervals are kept in a [`BTreeMap`] from start to end. Since stored intervals
//! never overlap, ordering them by start also orders them by end, which lets both
//! mutations find the affected intervals with a single range lookup and walk only
//! those, for `O(k log N)` per operation.

use crate::interval::{Interval, IntervalDifference, IntervalError};
use smallvec::SmallVec;
use std::{
    collections::{BTreeMap, btree_map},
    fmt,
    iter::FusedIterator,
};
use tracing::{debug, trace};

#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Deserialize, ::serde::Serialize),
    serde(from = "Vec<Interval>", into = "Vec<Interval>")
)]
pub struct IntervalSet(BTreeMap<i64, i64>);

impl fmt::Debug for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl IntervalSet {
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of (merged) intervals in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn first(&self) -> Option<Interval> {
        self.0.first_key_value().map(|(&s, &e)| Interval::span(s, e))
    }

    #[must_use]
    pub fn last(&self) -> Option<Interval> {
        self.0.last_key_value().map(|(&s, &e)| Interval::span(s, e))
    }

    /// The total length of all intervals, summed
    #[must_use]
    pub fn total_interval_length(&self) -> u64 {
        self.iter().map(|i| i.interval_length()).sum()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterator over the intervals of this set, in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    /// Returns a snapshot of the intervals of this set, in ascending order.
    #[must_use]
    pub fn list(&self) -> Vec<Interval> {
        self.iter().collect()
    }

    #[must_use]
    pub fn contains(&self, point: i64) -> bool {
        self.0
            .range(..=point)
            .next_back()
            .is_some_and(|(_, &end)| point < end)
    }

    /// Returns whether any interval of this set intersects `interval`.
    ///
    /// Like [`Interval::intersects`], merely touching an interval does not count.
    #[must_use]
    pub fn overlaps(&self, interval: &Interval) -> bool {
        // the only candidate is the last interval starting before `interval` ends
        self.0
            .range(..interval.end())
            .next_back()
            .is_some_and(|(_, &end)| end > interval.start())
    }

    /// Adds `[start, end)` to the set, merging it with any interval it overlaps or
    /// touches.
    ///
    /// # Errors
    ///
    /// Fails without modifying the set if the bounds are not a valid [`Interval`].
    pub fn insert(&mut self, start: i64, end: i64) -> Result<(), IntervalError> {
        let interval = Interval::new(start, end)
            .inspect_err(|error| debug!(start, end, %error, "rejected interval insert"))?;
        self.insert_interval(interval);
        Ok(())
    }

    /// Takes `[start, end)` out of the set, trimming or splitting any interval it
    /// overlaps.
    ///
    /// # Errors
    ///
    /// Fails without modifying the set if the bounds are not a valid [`Interval`].
    pub fn remove(&mut self, start: i64, end: i64) -> Result<(), IntervalError> {
        let interval = Interval::new(start, end)
            .inspect_err(|error| debug!(start, end, %error, "rejected interval remove"))?;
        self.remove_interval(interval);
        Ok(())
    }

    pub fn insert_interval(&mut self, interval: Interval) {
        let (mut start, mut end) = (interval.start(), interval.end());
        let mut merged = 0usize;

        // every interval that can merge starts at or before `end`. we walk those
        // backwards: ends are descending too, so the first one ending before `start`
        // (with a gap) means no earlier one can touch us either.
        loop {
            let Some((&c_start, &c_end)) = self.0.range(..=end).next_back() else {
                break;
            };
            if c_end < start {
                break;
            }
            self.0.remove(&c_start);
            start = start.min(c_start);
            end = end.max(c_end);
            merged += 1;
        }
        self.0.insert(start, end);

        trace!(
            requested = %interval,
            merged,
            stored = %Interval::span(start, end),
            "inserted interval"
        );
    }

    pub fn remove_interval(&mut self, interval: Interval) {
        // intervals starting exactly at `interval.end()` only touch it, so they are
        // excluded from the window. within the window, walking backwards, everything
        // ending after `interval.start()` intersects.
        let affected: SmallVec<[Interval; 4]> = self
            .0
            .range(..interval.end())
            .rev()
            .map(|(&s, &e)| Interval::span(s, e))
            .take_while(|candidate| candidate.end() > interval.start())
            .collect();

        let mut remainders: SmallVec<[Interval; 2]> = SmallVec::new();
        for candidate in &affected {
            self.0.remove(&candidate.start());
            match candidate.difference(&interval) {
                IntervalDifference::Empty => {}
                IntervalDifference::Single(rest) => remainders.push(rest),
                IntervalDifference::Split(head, tail) => {
                    remainders.push(head);
                    remainders.push(tail);
                }
            }
        }
        // remainders lie outside `interval` and inside what was removed, so they
        // can neither overlap nor touch any surviving interval
        for rest in &remainders {
            self.0.insert(rest.start(), rest.end());
        }

        trace!(
            requested = %interval,
            affected = affected.len(),
            remainders = ?remainders.as_slice(),
            "removed interval"
        );
    }
}

/// Iterator over the intervals of an [`IntervalSet`], created by [`IntervalSet::iter`].
#[derive(Clone)]
pub struct Iter<'a>(btree_map::Iter<'a, i64, i64>);

impl Iterator for Iter<'_> {
    type Item = Interval;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(&s, &e)| Interval::span(s, e))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(&s, &e)| Interval::span(s, e))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = Interval;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Interval> for IntervalSet {
    fn extend<T: IntoIterator<Item = Interval>>(&mut self, iter: T) {
        for interval in iter {
            self.insert_interval(interval);
        }
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        let mut new = Self::new();
        new.extend(iter);
        new
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(value: Vec<Interval>) -> Self {
        Self::from_iter(value)
    }
}

impl From<IntervalSet> for Vec<Interval> {
    fn from(value: IntervalSet) -> Self {
        value.list()
    }
}
