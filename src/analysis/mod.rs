// Batch analysis stages: interval construction, pairwise merge, extractors
pub mod call_records;
pub mod interval_builder;
pub mod pair_scheduler;
pub mod progress;
pub mod proximity_merge;
pub mod survey;

// Re-export commonly used items
pub use interval_builder::build_tower_intervals;
pub use pair_scheduler::{PairResults, scan_all_pairs};
pub use progress::{LogSink, NullSink, ProgressEvent, ProgressSink};
pub use proximity_merge::list_proximity_events;
