use chrono::{Duration, NaiveDateTime};

/// Derived span during which a subject's samples show a fixed, signal-bearing
/// tower. Half-open in spirit: `end` is the timestamp of the sample that
/// closed the interval.
///
/// Within one subject's sequence these are ordered by `start` and pairwise
/// non-overlapping; `build_tower_intervals` guarantees both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TowerInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub tower_id: i32,
}

impl TowerInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, tower_id: i32) -> Self {
        Self {
            start,
            end,
            tower_id,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl std::fmt::Display for TowerInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "tower {} from {} to {}",
            self.tower_id, self.start, self.end
        )
    }
}
