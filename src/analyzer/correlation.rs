// Pairwise-complete Pearson correlation over the numeric fields
use crate::model::{CorrelationMatrix, LaptopRecord};

/// Field order of the correlation matrix.
pub const FIELDS: [&str; 4] = ["price", "ram_gb", "storage_gb", "rating"];

fn field_value(record: &LaptopRecord, field: usize) -> Option<f64> {
    match field {
        0 => Some(record.price as f64),
        1 => record.ram_gb.map(|v| v as f64),
        2 => record.storage_gb.map(|v| v as f64),
        3 => record.rating,
        _ => unreachable!("unknown field index {field}"),
    }
}

/// Builds the 4x4 matrix. Each pair subsets independently to the records
/// where both fields are present, so a missing rating does not throw away a
/// row's price/ram contribution elsewhere.
pub fn correlation_matrix(records: &[LaptopRecord]) -> CorrelationMatrix {
    let mut values = [[None; 4]; 4];
    for i in 0..4 {
        for j in i..4 {
            let (xs, ys): (Vec<f64>, Vec<f64>) = records
                .iter()
                .filter_map(|r| Some((field_value(r, i)?, field_value(r, j)?)))
                .unzip();
            let corr = compute_correlation(&xs, &ys);
            values[i][j] = corr;
            values[j][i] = corr;
        }
    }
    CorrelationMatrix { fields: FIELDS, values }
}

/// Calculates the Pearson correlation coefficient between two slices.
/// Returns None if slices have different lengths, are empty, or either side
/// has zero variance.
pub fn compute_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.is_empty() {
        return None;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let numerator: f64 = x.iter().zip(y.iter()).map(|(xi, yi)| (xi - mean_x) * (yi - mean_y)).sum();
    let denominator_x: f64 = x.iter().map(|xi| (xi - mean_x).powi(2)).sum();
    let denominator_y: f64 = y.iter().map(|yi| (yi - mean_y).powi(2)).sum();
    let denominator = (denominator_x * denominator_y).sqrt();
    if denominator == 0.0 {
        None
    } else {
        // clamp away float drift so the reported value stays in [-1, 1]
        Some((numerator / denominator).clamp(-1.0, 1.0))
    }
}
