//! Pure analysis pipeline.
//!
//! rows -> file records -> classified -> scored -> estimated -> report.
//! Each stage is a pure function; a run owns nothing beyond its inputs, so
//! changing parameters means calling [`analyze`] again.

use crate::aggregation::aggregate;
use crate::classification::classify;
use crate::config::EffortParameters;
use crate::core::{ComponentRow, EstimatedRecord, FileRecord, ScoredRecord};
use crate::effort::{estimate_hours, project_totals};
use crate::errors::Result;
use crate::report::{summarize_input, MigrationReport};
use crate::scoring::score_classification;

pub fn score_records(records: Vec<FileRecord>) -> Vec<ScoredRecord> {
    records
        .into_iter()
        .map(|record| {
            let classification = classify(&record);
            ScoredRecord {
                complexity_score: score_classification(&classification),
                record,
                classification,
            }
        })
        .collect()
}

pub fn estimate_records(
    scored: Vec<ScoredRecord>,
    params: &EffortParameters,
) -> Vec<EstimatedRecord> {
    scored
        .into_iter()
        .map(|scored| EstimatedRecord {
            estimated_hours: estimate_hours(
                scored.classification.size_category,
                scored.classification.complexity,
                params,
            ),
            scored,
        })
        .collect()
}

/// Run the whole analysis.
///
/// Schema problems are reported before parameters are checked, and
/// parameters are checked before any estimate is computed.
pub fn analyze(rows: &[ComponentRow], params: &EffortParameters) -> Result<MigrationReport> {
    let records = aggregate(rows)?;
    let scored = score_records(records);
    log::debug!("Classified {} files", scored.len());

    params.validate()?;
    let estimated = estimate_records(scored, params);
    let totals = project_totals(estimated.iter().map(|e| e.estimated_hours), params)?;
    log::info!(
        "Estimated {:.1} hours across {} files",
        totals.total_hours,
        totals.total_files
    );

    Ok(MigrationReport::assemble(
        summarize_input(rows),
        *params,
        totals,
        &estimated,
    ))
}
