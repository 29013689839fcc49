// Interval grid: fixed 15-minute slots between two times of day

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// Fixed interval width. All volume simulation runs at this granularity.
pub const INTERVAL_MINUTES: i64 = 15;

pub const INTERVALS_PER_HOUR: f64 = 60.0 / INTERVAL_MINUTES as f64;

/// Ordered, contiguous sequence of 15-minute intervals between `start` and
/// `end`, half-open at the end: the interval beginning at `end` is excluded,
/// and a trailing fraction shorter than 15 minutes is dropped (floor).
///
/// `end <= start` yields an empty grid rather than an error; downstream
/// simulation over an empty grid produces an empty table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalGrid {
    start: NaiveTime,
    end: NaiveTime,
    count: usize,
}

impl IntervalGrid {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        let span = end.signed_duration_since(start).num_minutes();
        let count = if span <= 0 {
            0
        } else {
            (span / INTERVAL_MINUTES) as usize
        };
        Self { start, end, count }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Start time of interval `i`.
    pub fn start_of(&self, i: usize) -> NaiveTime {
        self.start + Duration::minutes(i as i64 * INTERVAL_MINUTES)
    }

    /// `HH:MM` display label for interval `i`.
    pub fn label_of(&self, i: usize) -> String {
        self.start_of(i).format("%H:%M").to_string()
    }

    pub fn labels(&self) -> Vec<String> {
        (0..self.count).map(|i| self.label_of(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("test: valid time")
    }

    #[test]
    fn one_hour_is_four_intervals() {
        let grid = IntervalGrid::new(t(8, 0), t(9, 0));
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.labels(), vec!["08:00", "08:15", "08:30", "08:45"]);
    }

    #[test]
    fn trailing_fraction_is_floored() {
        // 59 minutes: only 3 whole intervals fit
        let grid = IntervalGrid::new(t(8, 0), t(8, 59));
        assert_eq!(grid.len(), 3);
        // 61 minutes still rounds down to 4
        let grid = IntervalGrid::new(t(8, 0), t(9, 1));
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn full_business_day() {
        let grid = IntervalGrid::new(t(8, 0), t(18, 0));
        assert_eq!(grid.len(), 40);
        assert_eq!(grid.label_of(0), "08:00");
        assert_eq!(grid.label_of(39), "17:45");
    }

    #[test]
    fn end_not_after_start_is_empty() {
        assert!(IntervalGrid::new(t(9, 0), t(9, 0)).is_empty());
        assert!(IntervalGrid::new(t(17, 0), t(8, 0)).is_empty());
        // under one interval wide also yields nothing
        assert!(IntervalGrid::new(t(9, 0), t(9, 14)).is_empty());
    }

    #[test]
    fn interval_starts_are_contiguous() {
        let grid = IntervalGrid::new(t(10, 30), t(12, 0));
        assert_eq!(grid.len(), 6);
        for i in 0..grid.len() {
            assert_eq!(
                grid.start_of(i),
                t(10, 30) + Duration::minutes(i as i64 * 15)
            );
        }
    }
}
