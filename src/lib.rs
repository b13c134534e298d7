// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # interval-set: Disjoint Half-Open Integer Intervals
//!
//! This crate provides [`IntervalSet`], an ordered set of non-overlapping, half-open
//! integer intervals. It supports exactly the operations needed to maintain such a
//! set under change:
//!
//! - **insert** adds a range, coalescing it with every stored interval it overlaps
//!   or touches, so the set always holds the minimal disjoint representation.
//! - **remove** takes a range out, trimming the stored intervals it overlaps at
//!   either end, or splitting one in two when the range falls in its middle.
//! - **list** returns a snapshot of the stored intervals, ascending by start.
//!
//! ## Intervals
//!
//! An [`Interval`] is a range `[start, end)` with `0 <= start < end`. Its fields are
//! private, and the only ways to build one validate the bounds, so every `Interval`
//! value is known to be non-empty. The operations on [`IntervalSet`] that take raw
//! bounds validate them first and report an [`IntervalError`] without touching the
//! set.
//!
//! ## Overlap versus Adjacency
//!
//! Two intervals *intersect* when they share at least one point. `[1, 5)` and
//! `[5, 8)` do not intersect, but they are *adjacent*. Insertion merges adjacent
//! intervals, so after inserting both the set holds `[1, 8)`. Removal only cuts what
//! it intersects, so removing `[5, 8)` from a set holding `[1, 5)` changes nothing.
//!
//! ## Getting Started
//!
//! ```rust
//! use interval_set::{IntervalError, IntervalSet};
//!
//! let mut set = IntervalSet::new();
//! set.insert(1, 3)?;
//! set.insert(5, 7)?;
//! set.insert(2, 6)?;
//! assert_eq!(format!("{set:?}"), "{1..7}");
//!
//! set.remove(3, 5)?;
//! let listed: Vec<(i64, i64)> = set.list().into_iter().map(Into::into).collect();
//! assert_eq!(listed, [(1, 3), (5, 7)]);
//!
//! // invalid bounds are rejected and leave the set alone
//! assert_eq!(set.insert(4, 4), Err(IntervalError::Empty { start: 4, end: 4 }));
//! assert_eq!(set.len(), 2);
//! # Ok::<(), IntervalError>(())
//! ```
//!
//! ## Complexity
//!
//! Intervals are stored in a [`BTreeMap`](std::collections::BTreeMap) keyed by start.
//! Both mutations locate the affected intervals with one range lookup and touch only
//! those, so they cost `O(k log N)` for a set of `N` intervals of which `k` are merged,
//! trimmed or split. [`IntervalSet::list`] is `O(N)`.
//!
//! ## Concurrency
//!
//! An [`IntervalSet`] is a plain value. Mutations are multi-step read-modify-write
//! sequences, so sharing one across threads requires wrapping the whole set in a
//! single lock such as [`std::sync::Mutex`].
//!
//! ## Logging
//!
//! Mutations emit [`tracing`] events at `trace` level, and rejected bounds at `debug`
//! level. No subscriber is installed by this crate.
//!
//! ## Features
//!
//! - `json`: Enables conversion of interval sets to and from `serde_json::Value`.
//!   This feature is enabled by default.
//! - `serde`: Provides `serde` support for [`Interval`] and [`IntervalSet`].
//! - `arbitrary`: Implements `quickcheck::Arbitrary` for intervals, interval sets and
//!   traces of operations, useful for property-based testing.
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod interval;
pub use interval::{INTERVAL_BOUNDS, Interval, IntervalDifference, IntervalError};
pub mod interval_set;
pub use interval_set::IntervalSet;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use json::JsonError;
/// Macros usable for tests and initialization
pub mod macros;
#[cfg(any(test, feature = "arbitrary"))]
pub mod test_util;
