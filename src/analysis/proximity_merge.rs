use chrono::Duration;

use crate::domain::TowerInterval;

/// Find every same-tower overlap between two subjects' interval sequences
/// whose duration strictly exceeds `threshold`.
///
/// Linear two-cursor scan, O(|a| + |b|). Both inputs must be chronologically
/// sorted and internally non-overlapping, which holds by construction for
/// `build_tower_intervals` output; the scan does not re-validate them.
///
/// Emitted windows are exact intersections and pairwise disjoint in time.
/// The advance rule below (earlier start moves on, ties move `b`) fixes the
/// scan order, so identical inputs always produce identical output.
pub fn list_proximity_events(
    a: &[TowerInterval],
    b: &[TowerInterval],
    threshold: Duration,
) -> Vec<TowerInterval> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut events = Vec::new();
    let (mut ai, mut bi) = (0usize, 0usize);

    while ai < a.len() && bi < b.len() {
        let (cur_a, cur_b) = (&a[ai], &b[bi]);

        if cur_b.start >= cur_a.end {
            // b is entirely past the current a interval
            ai += 1;
        } else if cur_a.start >= cur_b.end {
            // a is entirely past the current b interval
            bi += 1;
        } else {
            // the two current intervals overlap in time
            if cur_a.tower_id == cur_b.tower_id {
                let start = cur_a.start.max(cur_b.start);
                let end = cur_a.end.min(cur_b.end);
                if end - start > threshold {
                    events.push(TowerInterval::new(start, end, cur_a.tower_id));
                }
            }
            // advance whichever interval starts earlier; equal starts advance b
            if cur_a.start < cur_b.start {
                ai += 1;
            } else {
                bi += 1;
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDateTime};

    fn t(secs: i64) -> NaiveDateTime {
        DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
    }

    fn iv(start: i64, end: i64, tower_id: i32) -> TowerInterval {
        TowerInterval::new(t(start), t(end), tower_id)
    }

    fn threshold() -> Duration {
        Duration::seconds(1)
    }

    #[test]
    fn overlap_at_shared_tower_is_emitted_with_exact_bounds() {
        let a = vec![iv(0, 10, 1), iv(10, 20, 2)];
        let b = vec![iv(5, 15, 1)];

        let events = list_proximity_events(&a, &b, threshold());

        // [10, 15] overlaps in time too, but the towers differ there
        assert_eq!(events, vec![iv(5, 10, 1)]);
    }

    #[test]
    fn duration_exactly_at_threshold_is_not_emitted() {
        let a = vec![iv(0, 2, 1)];
        let b = vec![iv(0, 1, 1)];

        let events = list_proximity_events(&a, &b, threshold());
        assert!(
            events.is_empty(),
            "a 1s overlap does not strictly exceed the 1s threshold"
        );
    }

    #[test]
    fn duration_just_over_threshold_is_emitted() {
        let a = vec![iv(0, 10, 1)];
        let b = vec![iv(0, 2, 1)];

        let events = list_proximity_events(&a, &b, threshold());
        assert_eq!(events, vec![iv(0, 2, 1)]);
    }

    #[test]
    fn empty_sides_merge_to_nothing() {
        let a = vec![iv(0, 10, 1)];
        assert!(list_proximity_events(&[], &a, threshold()).is_empty());
        assert!(list_proximity_events(&a, &[], threshold()).is_empty());
        assert!(list_proximity_events(&[], &[], threshold()).is_empty());
    }

    #[test]
    fn disjoint_sequences_merge_to_nothing() {
        let a = vec![iv(0, 10, 1), iv(10, 20, 1)];
        let b = vec![iv(30, 40, 1), iv(50, 60, 1)];
        assert!(list_proximity_events(&a, &b, threshold()).is_empty());
    }

    #[test]
    fn chained_overlaps_stay_disjoint() {
        let a = vec![iv(0, 10, 1), iv(10, 20, 1)];
        let b = vec![iv(0, 5, 1), iv(5, 20, 1)];

        let events = list_proximity_events(&a, &b, threshold());
        assert_eq!(events, vec![iv(0, 5, 1), iv(5, 10, 1), iv(10, 20, 1)]);

        for pair in events.windows(2) {
            assert!(pair[0].end <= pair[1].start, "events must not overlap");
        }
    }

    #[test]
    fn merge_is_deterministic() {
        let a = vec![iv(0, 7, 3), iv(9, 14, 4), iv(14, 30, 3)];
        let b = vec![iv(2, 11, 3), iv(11, 25, 3)];

        let first = list_proximity_events(&a, &b, threshold());
        let second = list_proximity_events(&a, &b, threshold());
        assert_eq!(first, second);
    }

    #[test]
    fn merge_is_symmetric_in_its_window_set() {
        let a = vec![iv(0, 7, 3), iv(9, 14, 4), iv(14, 30, 3)];
        let b = vec![iv(2, 11, 3), iv(11, 25, 3), iv(26, 40, 4)];

        let mut ab = list_proximity_events(&a, &b, threshold());
        let mut ba = list_proximity_events(&b, &a, threshold());
        ab.sort_by_key(|e| (e.start, e.end, e.tower_id));
        ba.sort_by_key(|e| (e.start, e.end, e.tower_id));
        assert_eq!(ab, ba);
    }

    #[test]
    fn every_event_is_contained_in_one_interval_per_side() {
        let a = vec![iv(0, 7, 3), iv(9, 14, 4), iv(14, 30, 3)];
        let b = vec![iv(2, 11, 3), iv(11, 25, 3)];

        let events = list_proximity_events(&a, &b, threshold());
        assert!(!events.is_empty());
        for event in &events {
            let contained = |seq: &[TowerInterval]| {
                seq.iter().any(|i| {
                    i.tower_id == event.tower_id && i.start <= event.start && event.end <= i.end
                })
            };
            assert!(contained(&a), "event {} not contained in a", event);
            assert!(contained(&b), "event {} not contained in b", event);
        }
    }

    #[test]
    fn last_intervals_still_participate() {
        // Single-interval sequences exercise the loop bound directly
        let a = vec![iv(0, 100, 9)];
        let b = vec![iv(40, 60, 9)];

        let events = list_proximity_events(&a, &b, threshold());
        assert_eq!(events, vec![iv(40, 60, 9)]);
    }
}
