// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! JSON representation
//!
//! An [`IntervalSet`] is represented as an array of `[start, end]` pairs in
//! ascending order. Reading a set back re-validates every pair and merges any
//! pairs that overlap or touch.
//!
//! # Examples
//!
//! ```json
//! [[1, 3], [5, 7], [9, 11]]
//! ```
use crate::{Interval, IntervalError, IntervalSet};
use serde_json::Value;
use std::fmt;

/// Error returned when a [`serde_json::Value`] does not describe an [`IntervalSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonError {
    /// The top-level value was not an array.
    ExpectedArray,
    /// The element at `index` was not an array of bounds.
    ExpectedPair { index: usize },
    /// A bound of the element at `index` was not an integer that fits in an `i64`.
    ExpectedInteger { index: usize },
    /// The element at `index` held bounds that are not a valid interval.
    Interval { index: usize, error: IntervalError },
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonError::ExpectedArray => write!(f, "expected an array of intervals"),
            JsonError::ExpectedPair { index } => {
                write!(f, "expected interval {index} to be an array of bounds")
            }
            JsonError::ExpectedInteger { index } => {
                write!(f, "expected the bounds of interval {index} to be integers")
            }
            JsonError::Interval { index, error } => write!(f, "invalid interval {index}: {error}"),
        }
    }
}

impl std::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JsonError::Interval { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Converts an [`IntervalSet`] to a [`serde_json::Value`].
impl From<&IntervalSet> for Value {
    fn from(set: &IntervalSet) -> Self {
        set.iter()
            .map(|ival| Value::from(vec![ival.start(), ival.end()]))
            .collect()
    }
}

impl From<IntervalSet> for Value {
    fn from(set: IntervalSet) -> Self {
        Value::from(&set)
    }
}

impl TryFrom<&Value> for IntervalSet {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let items = value.as_array().ok_or(JsonError::ExpectedArray)?;
        let mut set = IntervalSet::new();
        for (index, item) in items.iter().enumerate() {
            let bounds = item
                .as_array()
                .ok_or(JsonError::ExpectedPair { index })?
                .iter()
                .map(|bound| bound.as_i64().ok_or(JsonError::ExpectedInteger { index }))
                .collect::<Result<Vec<_>, _>>()?;
            let interval = Interval::try_from(bounds.as_slice())
                .map_err(|error| JsonError::Interval { index, error })?;
            set.insert_interval(interval);
        }
        Ok(set)
    }
}
