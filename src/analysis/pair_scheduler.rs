use std::collections::HashMap;

use chrono::Duration;
use itertools::Itertools;
use rayon::prelude::*;

use crate::analysis::progress::{ProgressEvent, ProgressSink};
use crate::analysis::proximity_merge::list_proximity_events;
use crate::domain::{ProximityEvent, SubjectPair, TowerInterval};

/// Proximity events per canonical pair. Events within a pair are
/// chronological; no ordering is promised across pairs.
pub type PairResults = HashMap<SubjectPair, Vec<ProximityEvent>>;

/// Run the proximity merge over every unordered subject pair.
///
/// Each pair reads two immutable interval sequences and produces an
/// independent result, so the pairs fan out across the rayon pool and are
/// collected order-independently under their canonical keys.
///
/// This is O(N^2) in the subject count, which is fine for populations in the
/// low hundreds. Larger populations need a pruning pass (e.g. bucketing
/// pairs by tower or coarse time window) before the fan-out; the merge
/// itself cannot be parallelized without changing the scan.
pub fn scan_all_pairs(
    intervals: &HashMap<usize, Vec<TowerInterval>>,
    threshold: Duration,
    progress: &dyn ProgressSink,
) -> PairResults {
    let mut ids: Vec<usize> = intervals.keys().copied().collect();
    ids.sort_unstable();

    let pairs: Vec<(usize, usize)> = ids.into_iter().tuple_combinations().collect();

    pairs
        .into_par_iter()
        .map(|(i, j)| {
            let pair = SubjectPair::new(i, j);
            let (a, b) = (&intervals[&i], &intervals[&j]);

            if a.is_empty() || b.is_empty() {
                progress.event(ProgressEvent::EmptyIntervalList { pair });
            }

            let events: Vec<ProximityEvent> = list_proximity_events(a, b, threshold)
                .into_iter()
                .map(|window| ProximityEvent {
                    subject_low: pair.low(),
                    subject_high: pair.high(),
                    tower_id: window.tower_id,
                    start: window.start,
                    end: window.end,
                })
                .collect();

            progress.event(ProgressEvent::PairScanned {
                pair,
                event_count: events.len(),
            });

            (pair, events)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::progress::NullSink;
    use chrono::{DateTime, NaiveDateTime};

    fn t(secs: i64) -> NaiveDateTime {
        DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
    }

    fn iv(start: i64, end: i64, tower_id: i32) -> TowerInterval {
        TowerInterval::new(t(start), t(end), tower_id)
    }

    #[test]
    fn three_subjects_produce_three_canonical_pairs() {
        let mut intervals = HashMap::new();
        intervals.insert(2, vec![iv(0, 50, 1)]);
        intervals.insert(1, vec![iv(10, 30, 1)]);
        intervals.insert(3, vec![iv(20, 40, 2)]);

        let results = scan_all_pairs(&intervals, Duration::seconds(1), &NullSink);

        assert_eq!(results.len(), 3);
        for (a, b) in [(1, 2), (1, 3), (2, 3)] {
            assert!(
                results.contains_key(&SubjectPair::new(a, b)),
                "missing pair ({a}, {b})"
            );
        }
    }

    #[test]
    fn events_carry_the_canonical_pair_ids() {
        let mut intervals = HashMap::new();
        intervals.insert(7, vec![iv(0, 50, 4)]);
        intervals.insert(2, vec![iv(10, 30, 4)]);

        let results = scan_all_pairs(&intervals, Duration::seconds(1), &NullSink);
        let events = &results[&SubjectPair::new(2, 7)];

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].subject_low, 2);
        assert_eq!(events[0].subject_high, 7);
        assert_eq!(events[0].tower_id, 4);
        assert_eq!((events[0].start, events[0].end), (t(10), t(30)));
    }

    #[test]
    fn subjects_without_intervals_still_get_pair_entries() {
        let mut intervals = HashMap::new();
        intervals.insert(0, vec![iv(0, 50, 1)]);
        intervals.insert(1, Vec::new());

        let results = scan_all_pairs(&intervals, Duration::seconds(1), &NullSink);

        assert_eq!(results.len(), 1);
        assert!(results[&SubjectPair::new(0, 1)].is_empty());
    }

    #[test]
    fn events_within_a_pair_are_chronological() {
        let mut intervals = HashMap::new();
        intervals.insert(0, vec![iv(0, 10, 1), iv(10, 20, 1), iv(25, 60, 1)]);
        intervals.insert(1, vec![iv(0, 30, 1), iv(30, 55, 1)]);

        let results = scan_all_pairs(&intervals, Duration::seconds(1), &NullSink);
        let events = &results[&SubjectPair::new(0, 1)];

        assert!(events.len() >= 2);
        for pair in events.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }
}
