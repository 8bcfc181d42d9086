// Core structs: RawRow, LaptopRecord, summary types
use serde::Serialize;
use thiserror::Error;

/// One row as read from the CSV, fields still untyped text.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub line: u64,
    pub brand: String,
    pub model: String,
    pub ram: String,
    pub ssd: String,
    pub price: String,
    pub rating: String,
}

/// Product segment a record belongs to. Assigned exactly once, never missing
/// after categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    General,
    Gaming,
    Ultrabook,
    Apple,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Gaming,
        Category::Ultrabook,
        Category::Apple,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Gaming => "Gaming",
            Category::Ultrabook => "Ultrabook",
            Category::Apple => "Apple",
        }
    }
}

/// One cleaned dataset row. `price` is always present; rows without a
/// parseable price never make it into the cleaned set.
#[derive(Debug, Clone)]
pub struct LaptopRecord {
    pub brand: String,
    pub model: String,
    pub ram_gb: Option<u32>,
    pub storage_gb: Option<u32>,
    pub price: u32,
    pub rating: Option<f64>,
    pub category: Category,
}

/// Descriptive statistics for a price sample.
#[derive(Debug, Clone, Serialize)]
pub struct PriceSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: u32,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: u32,
}

/// Pairwise-complete Pearson correlations over the numeric fields.
/// `values[i][j]` corresponds to `fields[i]` vs `fields[j]`; `None` marks a
/// degenerate pair (no overlapping records or zero variance).
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub fields: [&'static str; 4],
    pub values: [[Option<f64>; 4]; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
    pub price: Option<PriceSummary>,
}

/// Everything the Analyzer produces; the Reporter consumes this read-only.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub record_count: usize,
    pub price: PriceSummary,
    pub correlation: CorrelationMatrix,
    pub brand_counts: Vec<(String, usize)>,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input file: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("input file contains no data rows")]
    Empty,
}

/// Per-field parse failure. Non-fatal: the affected value is excluded
/// (row drop for price, field-level missing otherwise).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no digits in field")]
    NoDigits,
    #[error("value '{0}' is not numeric")]
    NotNumeric(String),
    #[error("value '{0}' is out of range")]
    OutOfRange(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render chart '{chart}': {message}")]
    Render { chart: &'static str, message: String },
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("load failed: {0}")]
    Load(#[from] LoadError),
    #[error("analysis failed: dataset is empty after cleaning")]
    NothingToAnalyze,
    #[error("report failed: {0}")]
    Report(#[from] ReportError),
}
