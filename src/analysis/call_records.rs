use anyhow::{Context, Result};

use crate::config::ANALYSIS;
use crate::data::SubjectStore;
use crate::domain::{CallRecord, Direction};
use crate::utils::maths_utils::value_or_default;
use crate::utils::{datetime_to_unix, serial_to_datetime};

/// Extract the voice calls where both parties are study members, in dataset
/// order. Calls to outside numbers don't resolve through the hashed-number
/// table and are skipped; missed calls get duration 0 no matter what the
/// handset recorded.
pub fn extract_intra_study_calls(store: &SubjectStore) -> Result<Vec<CallRecord>> {
    let mut total_events = 0usize;
    let mut calls = Vec::new();

    for (subject_id, subject) in store.subjects().iter().enumerate() {
        total_events += subject.comm.len();
        for event in &subject.comm {
            if event.description != ANALYSIS.calls.voice_call_description {
                continue;
            }
            let Some(other_party_id) = store.lookup_hashed_number(event.hash_num) else {
                continue;
            };

            let direction: Direction = event.direction.parse().ok().with_context(|| {
                format!(
                    "Subject {}: unknown call direction {:?}",
                    subject_id, event.direction
                )
            })?;
            let duration_secs = match direction {
                Direction::Missed => 0.0,
                _ => value_or_default(event.duration, 0.0),
            };

            calls.push(CallRecord {
                subject_id,
                other_party_id,
                duration_secs,
                direction,
                date: serial_to_datetime(event.date)
                    .context(format!("Subject {}: bad call event date", subject_id))?,
            });
        }
    }

    log::info!("{} total comm events", total_events);
    log::info!("{} total calls within study", calls.len());
    Ok(calls)
}

/// Keep calls inside the configured unix window, inclusive on both ends.
pub fn filter_by_window(calls: Vec<CallRecord>, start_unix: i64, end_unix: i64) -> Vec<CallRecord> {
    let kept: Vec<CallRecord> = calls
        .into_iter()
        .filter(|call| {
            let unix = datetime_to_unix(call.date);
            start_unix <= unix && unix <= end_unix
        })
        .collect();

    log::info!("{} calls after filtering by date", kept.len());
    kept
}
