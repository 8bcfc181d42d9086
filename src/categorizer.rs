// Segment assignment: brand check first, then keyword matching on model text
use crate::model::{Category, LaptopRecord};
use tracing::info;

/// Model-text keywords that mark gaming hardware. Matched case-insensitively
/// as substrings.
pub const GAMING_KEYWORDS: &[&str] = &["gaming", "rog", "tuf", "predator", "nitro", "katana"];

/// Model-text keywords for thin and light form factors.
pub const ULTRABOOK_KEYWORDS: &[&str] = &["ultrabook", "thin", "slim", "air", "aero"];

pub fn categorize_all(records: &mut [LaptopRecord]) {
    for record in records.iter_mut() {
        record.category = categorize(record);
    }

    for category in Category::ALL {
        let count = records.iter().filter(|r| r.category == category).count();
        info!("Category {}: {} records", category.label(), count);
    }
}

/// Assigns exactly one category. The checks run in a fixed priority order that
/// doubles as the tie-break: Apple beats any keyword, and a model matching
/// both gaming and ultrabook keywords lands in Gaming because that check runs
/// first.
pub fn categorize(record: &LaptopRecord) -> Category {
    if record.brand == "Apple" {
        return Category::Apple;
    }
    let model = record.model.to_lowercase();
    if GAMING_KEYWORDS.iter().any(|kw| model.contains(kw)) {
        return Category::Gaming;
    }
    if ULTRABOOK_KEYWORDS.iter().any(|kw| model.contains(kw)) {
        return Category::Ultrabook;
    }
    Category::General
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(brand: &str, model: &str) -> LaptopRecord {
        LaptopRecord {
            brand: brand.into(),
            model: model.into(),
            ram_gb: Some(8),
            storage_gb: Some(512),
            price: 50000,
            rating: None,
            category: Category::General,
        }
    }

    #[test]
    fn gaming_keyword_matches_case_insensitively() {
        assert_eq!(categorize(&record("HP", "Pavilion GAMING 15")), Category::Gaming);
        assert_eq!(categorize(&record("Acer", "Nitro 5")), Category::Gaming);
    }

    #[test]
    fn ultrabook_keywords_match() {
        assert_eq!(categorize(&record("Asus", "ZenBook Slim 14")), Category::Ultrabook);
        assert_eq!(categorize(&record("LG", "Gram Thin")), Category::Ultrabook);
    }

    #[test]
    fn apple_beats_gaming_keyword() {
        assert_eq!(categorize(&record("Apple", "MacBook Gaming Edition")), Category::Apple);
    }

    #[test]
    fn apple_without_keywords_is_still_apple() {
        assert_eq!(categorize(&record("Apple", "MacBook Pro 14")), Category::Apple);
    }

    #[test]
    fn gaming_beats_ultrabook_on_double_match() {
        assert_eq!(categorize(&record("MSI", "Gaming Slim 16")), Category::Gaming);
    }

    #[test]
    fn no_match_falls_back_to_general() {
        assert_eq!(categorize(&record("Dell", "Inspiron 3520")), Category::General);
    }

    #[test]
    fn assignment_is_deterministic() {
        let r = record("HP", "Pavilion Gaming 15");
        assert_eq!(categorize(&r), categorize(&r));
    }

    #[test]
    fn categorize_all_overwrites_in_place() {
        let mut records = vec![record("Apple", "MacBook Air"), record("Dell", "Inspiron")];
        categorize_all(&mut records);
        assert_eq!(records[0].category, Category::Apple);
        assert_eq!(records[1].category, Category::General);
    }
}
