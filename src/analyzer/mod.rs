// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod correlation;
pub mod descriptive;

use crate::model::{DatasetReport, LaptopRecord};
use tracing::info;

/// Computes the full report over the cleaned, categorized record set.
/// Pure function of its input; returns `None` when nothing survived cleaning.
pub fn analyze(records: &[LaptopRecord]) -> Option<DatasetReport> {
    let prices: Vec<u32> = records.iter().map(|r| r.price).collect();
    let price = descriptive::price_summary(&prices)?;

    info!(
        "Price stats over {} records: mean {:.0}, median {:.0}, range {}..{}",
        price.count, price.mean, price.median, price.min, price.max
    );

    let correlation = correlation::correlation_matrix(records);
    let brand_counts = descriptive::brand_counts(records);
    if let Some((brand, count)) = brand_counts.first() {
        info!("Most frequent brand: {brand} ({count} records)");
    }

    Some(DatasetReport {
        record_count: records.len(),
        price,
        correlation,
        brand_counts,
        categories: descriptive::category_summaries(records),
    })
}
