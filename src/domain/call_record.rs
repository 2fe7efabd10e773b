use chrono::NaiveDateTime;
use strum_macros::{Display, EnumString};

/// Direction of a handset communication event, as spelled in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Direction {
    Incoming,
    Outgoing,
    Missed,
}

/// One voice call between two study members.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallRecord {
    pub subject_id: usize,
    pub other_party_id: usize,
    /// Seconds; always 0 for missed calls
    pub duration_secs: f64,
    pub direction: Direction,
    pub date: NaiveDateTime,
}
