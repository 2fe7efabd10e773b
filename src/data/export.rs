use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::analysis::PairResults;
#[cfg(debug_assertions)]
use crate::config::debug::PRINT_EXPORT_SUMMARY;
use crate::domain::{CallRecord, SurveyRow};
use crate::utils::format_dataset_datetime;

/// Write the proximity events as TSV. Pairs are written in canonical key
/// order so repeated runs produce identical files.
pub fn write_proximity_events(results: &PairResults, path: &Path) -> Result<usize> {
    let file = File::create(path).context(format!("Failed to create output file: {:?}", path))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "id1\tid2\tcellTower\tstart\tend")?;

    let mut rows = 0usize;
    for pair in results.keys().sorted() {
        for event in &results[pair] {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                event.subject_low,
                event.subject_high,
                event.tower_id,
                format_dataset_datetime(event.start),
                format_dataset_datetime(event.end)
            )?;
            rows += 1;
        }
    }
    out.flush()
        .context(format!("Failed to flush output file: {:?}", path))?;

    #[cfg(debug_assertions)]
    if PRINT_EXPORT_SUMMARY {
        log::info!("{} proximity rows written to {:?}", rows, path);
    }
    Ok(rows)
}

/// Write the intra-study call records as TSV, in dataset order.
pub fn write_call_records(records: &[CallRecord], path: &Path) -> Result<usize> {
    let file = File::create(path).context(format!("Failed to create output file: {:?}", path))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "subjectId\totherPartyId\tduration\tdirection\tdate")?;

    for call in records {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            call.subject_id,
            call.other_party_id,
            call.duration_secs,
            call.direction,
            format_dataset_datetime(call.date)
        )?;
    }
    out.flush()
        .context(format!("Failed to flush output file: {:?}", path))?;

    #[cfg(debug_assertions)]
    if PRINT_EXPORT_SUMMARY {
        log::info!("{} call rows written to {:?}", records.len(), path);
    }
    Ok(records.len())
}

/// Write the combined survey rows as TSV.
pub fn write_survey_rows(rows: &[SurveyRow], path: &Path) -> Result<usize> {
    let file = File::create(path).context(format!("Failed to create output file: {:?}", path))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "id1\tid2\tclose-friends?\tinlab-proximity\toutlab-proximity")?;

    for row in rows {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            row.id1, row.id2, row.close_friends, row.inlab_proximity, row.outlab_proximity
        )?;
    }
    out.flush()
        .context(format!("Failed to flush output file: {:?}", path))?;

    #[cfg(debug_assertions)]
    if PRINT_EXPORT_SUMMARY {
        log::info!("{} survey rows written to {:?}", rows.len(), path);
    }
    Ok(rows.len())
}
