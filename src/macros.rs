// (c) Copyright 2025 Helsing GmbH. All rights reserved.
/// Convenience macro for creating an [`IntervalSet`](crate::IntervalSet) from ranges.
///
/// The ranges are inserted in order, so overlapping or adjacent ones are merged.
///
/// NOTE! This is mostly useful for tests and initialization, since it panics on
/// ranges that are not valid intervals instead of returning an error.
///
/// ```rust
/// # use interval_set::interval_set;
/// let set = interval_set![1..3, 5..7, 2..6];
/// assert_eq!(format!("{set:?}"), "{1..7}");
/// ```
#[macro_export]
macro_rules! interval_set {
    () => {
        $crate::IntervalSet::new()
    };
    ($($range:expr),+ $(,)?) => {{
        let mut set = $crate::IntervalSet::new();
        $(
            let interval = match $crate::Interval::try_from($range) {
                Ok(interval) => interval,
                Err(err) => panic!("{} is not a valid interval: {err}", stringify!($range)),
            };
            set.insert_interval(interval);
        )+
        set
    }};
}
