use crate::domain::SubjectPair;

#[cfg(debug_assertions)]
use crate::config::debug::{PRINT_INTERVAL_SUMMARY, PRINT_MERGE_EVENTS};

/// A progress signal from one stage of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    StageStarted {
        name: &'static str,
    },
    /// Tower intervals built for one subject. A count of zero is a valid
    /// outcome (empty or single-sample trace), not a failure.
    IntervalsBuilt {
        subject_id: usize,
        interval_count: usize,
    },
    /// One side of a pair had no intervals; the merge was a no-op.
    EmptyIntervalList {
        pair: SubjectPair,
    },
    /// One pair fully merged.
    PairScanned {
        pair: SubjectPair,
        event_count: usize,
    },
}

/// Sink for progress events. The batch stages never print directly; the
/// caller decides where events go (log, nothing, a test recorder).
pub trait ProgressSink: Sync {
    fn event(&self, event: ProgressEvent);
}

/// Forwards everything to the `log` facade. The per-subject and per-pair
/// events are debug-build diagnostics gated by the flags in `config::debug`.
pub struct LogSink;

impl ProgressSink for LogSink {
    fn event(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::StageStarted { name } => log::info!("{name}..."),
            ProgressEvent::IntervalsBuilt {
                subject_id,
                interval_count,
            } => {
                #[cfg(debug_assertions)]
                if PRINT_INTERVAL_SUMMARY {
                    log::info!("Subject {}: {} tower intervals", subject_id, interval_count);
                }
                #[cfg(not(debug_assertions))]
                let _ = (subject_id, interval_count);
            }
            ProgressEvent::EmptyIntervalList { pair } => {
                log::info!("Found an empty interval list for pair {}", pair);
            }
            ProgressEvent::PairScanned { pair, event_count } => {
                #[cfg(debug_assertions)]
                if PRINT_MERGE_EVENTS {
                    log::info!("Pair {}: {} proximity events", pair, event_count);
                }
                #[cfg(not(debug_assertions))]
                let _ = (pair, event_count);
            }
        }
    }
}

/// Discards everything. Tests use this.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn event(&self, _event: ProgressEvent) {}
}
