//! File persistence and serialization configuration

/// Directory path for storing the binary subject cache
pub const SUBJECT_CACHE_PATH: &str = "subject_cache";

/// Base filename for the subject cache (without extension)
pub const SUBJECT_CACHE_FILENAME_WITHOUT_EXT: &str = "subjects";

/// Current version of the subject cache serialization format
pub const SUBJECT_CACHE_VERSION: f64 = 1.0;

/// Generate the versioned cache filename
/// Example: "subjects_v1.bin"
pub fn subject_cache_filename() -> String {
    format!(
        "{}_v{}.bin",
        SUBJECT_CACHE_FILENAME_WITHOUT_EXT, SUBJECT_CACHE_VERSION
    )
}

// Output datasets. Downstream consumers key on these names, keep them stable.
/// Pairwise tower-proximity events
pub const PROXIMITY_OUTFILE: &str = "reality-mining-proximity.txt";
/// Intra-study voice calls
pub const CALLS_OUTFILE: &str = "reality-mining-calls.txt";
/// Friendship survey rows
pub const SURVEY_OUTFILE: &str = "reality-mining-survey.txt";
