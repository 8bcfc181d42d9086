// Field normalization: currency stripping, capacity extraction, brand aliases
use crate::model::{Category, LaptopRecord, ParseError, RawRow};
use tracing::{info, warn};

/// Known brand spellings, lowercased, mapped to the canonical form. Canonical
/// spellings map to themselves so normalization is idempotent. Unlisted brands
/// pass through trimmed but otherwise unchanged.
pub const BRAND_ALIASES: &[(&str, &str)] = &[
    ("apple", "Apple"),
    ("hp", "HP"),
    ("hewlett-packard", "HP"),
    ("lenovo", "Lenovo"),
    ("dell", "Dell"),
    ("asus", "Asus"),
    ("acer", "Acer"),
    ("msi", "MSI"),
    ("samsung", "Samsung"),
    ("xiaomi", "Xiaomi"),
    ("mi", "Xiaomi"),
    ("redmi", "Xiaomi"),
    ("honor", "Honor"),
    ("huawei", "Huawei"),
    ("avita", "Avita"),
    ("infinix", "Infinix"),
    ("realme", "Realme"),
];

/// Turns raw rows into cleaned records. Rows without a parseable price are
/// dropped with a logged reason; every other parse failure only marks the
/// affected field as missing.
pub fn clean_all(rows: Vec<RawRow>) -> Vec<LaptopRecord> {
    let total = rows.len();
    let mut records = Vec::with_capacity(total);

    for row in rows {
        let price = match parse_price(&row.price) {
            Ok(p) => p,
            Err(e) => {
                warn!("Dropping row {} (price '{}'): {}", row.line, row.price, e);
                continue;
            }
        };

        let brand_source = if row.brand.trim().is_empty() {
            // No brand column in the source data; first token of the model
            // text carries the brand.
            row.model.split_whitespace().next().unwrap_or("")
        } else {
            row.brand.trim()
        };

        records.push(LaptopRecord {
            brand: normalize_brand(brand_source),
            model: row.model.trim().to_string(),
            ram_gb: extract_capacity(&row.ram).ok(),
            storage_gb: extract_capacity(&row.ssd).ok(),
            price,
            rating: parse_rating(&row.rating).ok(),
            category: Category::General,
        });
    }

    let dropped = total - records.len();
    if dropped > 0 {
        warn!("Dropped {dropped} of {total} rows without a usable price");
    }
    log_rating_range(&records);

    records
}

/// Canonicalizes a brand spelling. Idempotent: applying it twice yields the
/// same string.
pub fn normalize_brand(raw: &str) -> String {
    let trimmed = raw.trim();
    let key = trimmed.to_lowercase();
    BRAND_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Strips the currency symbol and thousands separators, then parses what is
/// left. `"₹54,990"` becomes `54990`.
pub fn parse_price(raw: &str) -> Result<u32, ParseError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(ParseError::NoDigits);
    }
    digits
        .parse::<u32>()
        .map_err(|_| ParseError::OutOfRange(raw.trim().to_string()))
}

/// Extracts the leading numeric run from a compound spec string such as
/// `"8 GB"` or `"512 GB SSD"`. The unit token is not validated.
pub fn extract_capacity(raw: &str) -> Result<u32, ParseError> {
    let trimmed = raw.trim();
    let start = trimmed
        .find(|c: char| c.is_ascii_digit())
        .ok_or(ParseError::NoDigits)?;
    let digits: String = trimmed[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits
        .parse::<u32>()
        .map_err(|_| ParseError::OutOfRange(trimmed.to_string()))
}

fn parse_rating(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParseError::NotNumeric(trimmed.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ParseError::OutOfRange(trimmed.to_string()));
    }
    Ok(value)
}

/// The rating scale is not assumed; the observed range is measured at load
/// time and logged so the charts can be read against it.
fn log_rating_range(records: &[LaptopRecord]) {
    let ratings: Vec<f64> = records.iter().filter_map(|r| r.rating).collect();
    if ratings.is_empty() {
        info!("No ratings present in the dataset");
        return;
    }
    let min = ratings.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    info!(
        "Ratings present on {} of {} records, observed range {min:.1}..{max:.1}",
        ratings.len(),
        records.len()
    );
}
