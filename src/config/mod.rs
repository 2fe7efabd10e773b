//! Configuration module for the prox-miner batch job.

pub mod analysis;
pub mod debug;
pub mod persistence;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig};
pub use persistence::{
    CALLS_OUTFILE, PROXIMITY_OUTFILE, SUBJECT_CACHE_PATH, SUBJECT_CACHE_VERSION, SURVEY_OUTFILE,
    subject_cache_filename,
};
