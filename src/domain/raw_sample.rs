use serde::{Deserialize, Serialize};

/// One timestamped observation of a subject's tower association.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RawSample {
    /// Serial-date value (fractional day count, day 1 = 0001-01-01)
    pub timestamp: f64,
    /// Cell tower the handset was associated with; `<= 0` means no signal
    pub tower_id: i32,
}

impl RawSample {
    pub fn has_signal(&self) -> bool {
        self.tower_id > 0
    }
}
