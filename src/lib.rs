#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod utils;

// Re-export commonly used types
pub use analysis::{PairResults, build_tower_intervals, list_proximity_events, scan_all_pairs};
pub use data::{SubjectCollection, SubjectStore, fetch_subject_data};
pub use domain::{ProximityEvent, RawSample, SubjectPair, TowerInterval};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the study dataset JSON dump
    pub dataset: std::path::PathBuf,

    /// Load from the JSON dump even if a valid binary cache exists
    #[arg(long, default_value_t = false)]
    pub prefer_json: bool,

    /// Also extract the intra-study voice call dataset
    #[arg(long, default_value_t = false)]
    pub calls: bool,

    /// Also extract the friendship survey dataset
    #[arg(long, default_value_t = false)]
    pub survey: bool,

    /// Directory the TSV outputs are written into
    #[arg(long, default_value = ".")]
    pub output_dir: std::path::PathBuf,
}
