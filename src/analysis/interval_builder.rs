use anyhow::{Result, bail};

use crate::domain::{RawSample, TowerInterval};
use crate::utils::serial_to_datetime;

/// Build the ordered tower-association intervals for one subject's trace.
///
/// Each consecutive sample pair `(s, next)` where `s` carries a signal
/// becomes the interval `[s.timestamp, next.timestamp)` at `s`'s tower.
/// No-signal samples never open an interval, so a trace of `n` samples yields
/// at most `n - 1` intervals, and empty or single-sample traces yield none.
///
/// The trace must be sorted by timestamp (non-decreasing) with finite
/// values; anything else means an upstream extractor is broken and the whole
/// batch is aborted.
pub fn build_tower_intervals(subject_id: usize, samples: &[RawSample]) -> Result<Vec<TowerInterval>> {
    for sample in samples {
        if !sample.timestamp.is_finite() {
            bail!(
                "Subject {}: non-numeric raw timestamp {} in trace",
                subject_id,
                sample.timestamp
            );
        }
    }
    for window in samples.windows(2) {
        if window[1].timestamp < window[0].timestamp {
            bail!(
                "Subject {}: trace is not sorted by timestamp ({} after {})",
                subject_id,
                window[1].timestamp,
                window[0].timestamp
            );
        }
    }

    let mut intervals = Vec::new();
    for window in samples.windows(2) {
        let (sample, next) = (&window[0], &window[1]);
        if sample.has_signal() {
            intervals.push(TowerInterval::new(
                serial_to_datetime(sample.timestamp)?,
                serial_to_datetime(next.timestamp)?,
                sample.tower_id,
            ));
        }
    }
    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp: f64, tower_id: i32) -> RawSample {
        RawSample {
            timestamp,
            tower_id,
        }
    }

    #[test]
    fn consecutive_samples_become_intervals() {
        let trace = vec![
            sample(731946.00, 7),
            sample(731946.25, 9),
            sample(731946.50, 9),
        ];
        let intervals = build_tower_intervals(0, &trace).unwrap();

        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].tower_id, 7);
        assert_eq!(intervals[1].tower_id, 9);
        assert_eq!(
            intervals[0].end, intervals[1].start,
            "adjacent intervals must share the boundary sample's timestamp"
        );
    }

    #[test]
    fn no_signal_samples_never_open_an_interval() {
        let trace = vec![
            sample(731946.00, 0),
            sample(731946.25, 5),
            sample(731946.50, -1),
            sample(731946.75, 3),
        ];
        let intervals = build_tower_intervals(0, &trace).unwrap();

        // Only the two signal-bearing samples with a successor produce spans
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].tower_id, 5);
        assert_eq!(intervals[1].tower_id, 3);
    }

    #[test]
    fn degenerate_traces_produce_no_intervals() {
        assert!(build_tower_intervals(0, &[]).unwrap().is_empty());
        assert!(
            build_tower_intervals(0, &[sample(731946.0, 12)])
                .unwrap()
                .is_empty(),
            "a single sample has no successor to close an interval"
        );
    }

    #[test]
    fn unsorted_trace_is_a_contract_violation() {
        let trace = vec![sample(731946.5, 1), sample(731946.0, 1)];
        assert!(build_tower_intervals(3, &trace).is_err());
    }

    #[test]
    fn non_finite_timestamp_is_a_contract_violation() {
        let trace = vec![sample(f64::NAN, 1), sample(731946.0, 1)];
        assert!(build_tower_intervals(3, &trace).is_err());
    }

    #[test]
    fn intervals_are_ordered_and_non_overlapping() {
        let trace: Vec<RawSample> = (0..10)
            .map(|i| sample(731946.0 + i as f64 * 0.01, (i % 4) as i32))
            .collect();
        let intervals = build_tower_intervals(0, &trace).unwrap();

        for pair in intervals.windows(2) {
            assert!(pair[0].start < pair[1].start, "ordered by start");
            assert!(pair[0].end <= pair[1].start, "pairwise non-overlapping");
        }
    }
}
