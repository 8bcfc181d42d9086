// CSV ingestion: raw rows in, no typing yet
use crate::model::{LoadError, RawRow};
use std::path::Path;
use tracing::info;

const REQUIRED_COLUMNS: [&str; 5] = ["model", "ram", "ssd", "price", "rating"];

/// Reads the dataset into untyped rows. Header names are normalized
/// (lowercased, whitespace stripped) before any field access, so
/// `" Price "` and `price` address the same column.
pub fn load_csv(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let col = |name: &str| headers.iter().position(|h| h == name);
    let model_idx = col("model").unwrap();
    let ram_idx = col("ram").unwrap();
    let ssd_idx = col("ssd").unwrap();
    let price_idx = col("price").unwrap();
    let rating_idx = col("rating").unwrap();
    // The source dataset has no brand column; the cleaner derives the brand
    // from the model text when this stays empty.
    let brand_idx = col("brand");

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();
        rows.push(RawRow {
            // header is line 1
            line: i as u64 + 2,
            brand: brand_idx.map(|i| field(i)).unwrap_or_default(),
            model: field(model_idx),
            ram: field(ram_idx),
            ssd: field(ssd_idx),
            price: field(price_idx),
            rating: field(rating_idx),
        });
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn normalize_header(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
