// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Implementation of the quickcheck::Arbitrary trait for intervals, interval sets and traces of
//! operations on them.
//!
//! All generated intervals lie within `[0, Ops::DOMAIN)`, which keeps traces dense enough for
//! merges and splits to happen often, and lets tests compare against a plain bitmap.

use crate::{Interval, IntervalSet};
use quickcheck::{Arbitrary, Gen};

/// Longest interval generated, so that a single insert rarely swallows the whole domain.
const MAX_GENERATED_LENGTH: i64 = 16;

impl Arbitrary for Interval {
    fn arbitrary(g: &mut Gen) -> Self {
        let start = i64::from(u8::arbitrary(g)) % (Ops::DOMAIN - 1);
        let room = (Ops::DOMAIN - start).min(MAX_GENERATED_LENGTH);
        let length = 1 + i64::from(u8::arbitrary(g)) % room;
        Interval::span(start, start + length)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            (self.start(), self.end())
                .shrink()
                .filter_map(|(start, end)| Interval::new(start, end).ok()),
        )
    }
}

impl Arbitrary for IntervalSet {
    fn arbitrary(g: &mut Gen) -> Self {
        Vec::<Interval>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.list().shrink().map(IntervalSet::from))
    }
}

/// A single mutation of an [`IntervalSet`].
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Insert(Interval),
    Remove(Interval),
}

impl Op {
    pub fn apply(&self, set: &mut IntervalSet) {
        match *self {
            Op::Insert(interval) => set.insert_interval(interval),
            Op::Remove(interval) => set.remove_interval(interval),
        }
    }
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        // skew towards inserts so that removes usually find something to cut
        let insert = *g.choose(&[true, true, false]).expect("choices are non-empty");
        if insert {
            Op::Insert(Interval::arbitrary(g))
        } else {
            Op::Remove(Interval::arbitrary(g))
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match *self {
            Op::Insert(interval) => Box::new(interval.shrink().map(Op::Insert)),
            Op::Remove(interval) => Box::new(interval.shrink().map(Op::Remove)),
        }
    }
}

/// A trace of mutations, applied in order.
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ops(pub Vec<Op>);

impl Ops {
    /// Exclusive upper bound of every generated interval.
    pub const DOMAIN: i64 = 64;

    /// Replays the trace on top of `set`.
    pub fn apply(&self, set: &mut IntervalSet) {
        for op in &self.0 {
            op.apply(set);
        }
    }
}

impl Arbitrary for Ops {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(Vec::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Ops))
    }
}

/// Routes `tracing` output of the crate to the test harness, filtered by `RUST_LOG`.
#[cfg(test)]
pub(crate) fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    // several tests race to install the subscriber, only the first one wins
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[quickcheck]
    fn qc_generated_intervals_stay_in_domain(interval: Interval) -> bool {
        0 <= interval.start() && interval.end() <= Ops::DOMAIN
    }

    #[quickcheck]
    fn qc_shrunk_intervals_stay_valid(interval: Interval) -> bool {
        interval
            .shrink()
            .all(|s| s.start() < s.end() && s.end() <= interval.end())
    }

    #[test]
    fn replaying_ops() {
        let ops = Ops(vec![
            Op::Insert(Interval::span(0, 10)),
            Op::Remove(Interval::span(2, 4)),
            Op::Insert(Interval::span(3, 4)),
        ]);
        let mut set = IntervalSet::new();
        ops.apply(&mut set);
        assert_eq!(set.list(), [Interval::span(0, 2), Interval::span(3, 10)]);
    }
}
