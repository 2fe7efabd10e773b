// Domain types and value objects
pub mod call_record;
pub mod proximity_event;
pub mod raw_sample;
pub mod survey_row;
pub mod tower_interval;

// Re-export commonly used types
pub use call_record::{CallRecord, Direction};
pub use proximity_event::{ProximityEvent, SubjectPair};
pub use raw_sample::RawSample;
pub use survey_row::SurveyRow;
pub use tower_interval::TowerInterval;
