pub mod analyzer;
pub mod categorizer;
pub mod cleaner;
pub mod loader;
pub mod model;
pub mod reporter;

use model::{DatasetReport, PipelineError};
use std::path::Path;
use tracing::info;

/// Runs the whole pipeline: load, clean, categorize, analyze, render.
/// Data flows strictly forward; each stage only sees its predecessor's
/// output.
pub fn run(input: &Path, reports_dir: &Path) -> Result<DatasetReport, PipelineError> {
    let raw = loader::load_csv(input)?;
    let mut records = cleaner::clean_all(raw);
    categorizer::categorize_all(&mut records);

    let report = analyzer::analyze(&records).ok_or(PipelineError::NothingToAnalyze)?;
    reporter::render_all(&records, &report, reports_dir)?;

    info!("Analysis complete: {} records reported", report.record_count);
    Ok(report)
}
