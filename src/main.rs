use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::Duration;
use clap::Parser;
use tokio::runtime::Runtime;

use prox_miner::analysis::call_records::{extract_intra_study_calls, filter_by_window};
use prox_miner::analysis::survey::extract_survey_rows;
use prox_miner::analysis::{LogSink, ProgressEvent, ProgressSink, build_tower_intervals, scan_all_pairs};
use prox_miner::config::{ANALYSIS, CALLS_OUTFILE, PROXIMITY_OUTFILE, SURVEY_OUTFILE};
use prox_miner::data::cache_version::write_subject_data_async;
use prox_miner::data::export;
use prox_miner::domain::TowerInterval;
use prox_miner::{Cli, SubjectStore, fetch_subject_data};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Data Loading (Blocking)
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let (collection, source_signature) = rt.block_on(fetch_subject_data(&args))?;

    // D. Background Cache Write
    let cache_data = collection.clone();
    let cache_write = rt.spawn(async move {
        if let Err(e) = write_subject_data_async(source_signature, cache_data).await {
            log::error!("Failed to write cache: {}", e);
        }
    });

    // E. Validity filter + identity tables
    log::info!("Extracting valid subjects and building id tables.");
    let (store, network) = SubjectStore::from_collection(collection);

    let progress = LogSink;

    // F. Tower intervals, once per subject
    progress.event(ProgressEvent::StageStarted {
        name: "Making cell tower intervals",
    });
    let mut intervals: HashMap<usize, Vec<TowerInterval>> = HashMap::new();
    for (subject_id, subject) in store.subjects().iter().enumerate() {
        let built = build_tower_intervals(subject_id, &subject.locs)?;
        progress.event(ProgressEvent::IntervalsBuilt {
            subject_id,
            interval_count: built.len(),
        });
        intervals.insert(subject_id, built);
    }

    // G. Pairwise proximity scan
    progress.event(ProgressEvent::StageStarted {
        name: "Computing cell tower proximity events",
    });
    let threshold = Duration::seconds(ANALYSIS.proximity.threshold_secs);
    let results = scan_all_pairs(&intervals, threshold, &progress);

    // H. Outputs
    std::fs::create_dir_all(&args.output_dir).context(format!(
        "Failed to create output directory: {:?}",
        args.output_dir
    ))?;

    let proximity_path = args.output_dir.join(PROXIMITY_OUTFILE);
    let rows = export::write_proximity_events(&results, &proximity_path)?;
    log::info!("Wrote {} proximity events to {:?}", rows, proximity_path);

    if args.calls {
        progress.event(ProgressEvent::StageStarted {
            name: "Extracting intra-study calls",
        });
        let calls = extract_intra_study_calls(&store)?;
        let calls = filter_by_window(
            calls,
            ANALYSIS.calls.window_start_unix,
            ANALYSIS.calls.window_end_unix,
        );
        let calls_path = args.output_dir.join(CALLS_OUTFILE);
        let rows = export::write_call_records(&calls, &calls_path)?;
        log::info!("Wrote {} call records to {:?}", rows, calls_path);
    }

    if args.survey {
        match &network {
            Some(network) => {
                progress.event(ProgressEvent::StageStarted {
                    name: "Creating network survey dataset",
                });
                let survey_rows = extract_survey_rows(network, &store);
                let survey_path = args.output_dir.join(SURVEY_OUTFILE);
                let rows = export::write_survey_rows(&survey_rows, &survey_path)?;
                log::info!("Wrote {} survey rows to {:?}", rows, survey_path);
            }
            None => log::warn!("Dataset carries no network survey, skipping --survey"),
        }
    }

    // I. Let the cache write finish before tearing the runtime down
    let _ = rt.block_on(cache_write);

    Ok(())
}
