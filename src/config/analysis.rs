//! Analysis and computation configuration

/// Settings for the pairwise proximity scan
pub struct ProximitySettings {
    // Overlap duration an event must strictly exceed to be emitted (seconds)
    pub threshold_secs: i64,
}

/// Settings for the intra-study call dataset
pub struct CallSettings {
    // Unix-time window the call dataset is clipped to (both ends inclusive)
    pub window_start_unix: i64,
    pub window_end_unix: i64,
    // Comm events with this description are voice calls; everything else
    // (SMS, data) is ignored by the call extractor
    pub voice_call_description: &'static str,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub proximity: ProximitySettings,
    pub calls: CallSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    proximity: ProximitySettings { threshold_secs: 1 },

    calls: CallSettings {
        // 2004-09-24 .. 2005-01-08, the window the source study published
        // (the full 04-05 academic year would be 1094601600..1133740800)
        window_start_unix: 1_095_984_000,
        window_end_unix: 1_105_142_400,
        voice_call_description: "Voice call",
    },
};
