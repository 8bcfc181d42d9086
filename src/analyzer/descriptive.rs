// Descriptive statistics: price summary, brand counts, per-category aggregates
use crate::model::{CategorySummary, Category, LaptopRecord, PriceSummary};
use std::collections::HashMap;

/// Calculates basic statistical metrics over a price sample: mean, standard
/// deviation, and linearly interpolated quartiles. Returns `None` for an
/// empty sample.
pub fn price_summary(prices: &[u32]) -> Option<PriceSummary> {
    if prices.is_empty() {
        return None;
    }

    let mut sorted: Vec<f64> = prices.iter().map(|&p| p as f64).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let count = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / count;
    let std_dev = (sorted.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / count).sqrt();

    Some(PriceSummary {
        count: prices.len(),
        mean,
        std_dev,
        min: *prices.iter().min().unwrap(),
        q1: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.5),
        q3: percentile(&sorted, 0.75),
        max: *prices.iter().max().unwrap(),
    })
}

/// Linear interpolation between the two nearest order statistics.
/// `sorted` must be ascending and non-empty.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = pos - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Records per canonical brand, most frequent first. Ties break
/// alphabetically so the ordering is reproducible across runs.
pub fn brand_counts(records: &[LaptopRecord]) -> Vec<(String, usize)> {
    let mut map: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *map.entry(record.brand.as_str()).or_default() += 1;
    }
    let mut counts: Vec<(String, usize)> = map
        .into_iter()
        .map(|(brand, count)| (brand.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Count and price statistics per category, in the fixed category order.
/// Categories with no records still appear, with a zero count.
pub fn category_summaries(records: &[LaptopRecord]) -> Vec<CategorySummary> {
    Category::ALL
        .iter()
        .map(|&category| {
            let prices: Vec<u32> = records
                .iter()
                .filter(|r| r.category == category)
                .map(|r| r.price)
                .collect();
            CategorySummary {
                category,
                count: prices.len(),
                price: price_summary(&prices),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn record(brand: &str, price: u32, category: Category) -> LaptopRecord {
        LaptopRecord {
            brand: brand.into(),
            model: String::new(),
            ram_gb: None,
            storage_gb: None,
            price,
            rating: None,
            category,
        }
    }

    #[test]
    fn summary_of_known_sample() {
        let s = price_summary(&[10, 20, 30, 40, 50]).unwrap();
        assert_eq!(s.count, 5);
        assert_eq!(s.mean, 30.0);
        assert_eq!(s.min, 10);
        assert_eq!(s.max, 50);
        assert_eq!(s.q1, 20.0);
        assert_eq!(s.median, 30.0);
        assert_eq!(s.q3, 40.0);
    }

    #[test]
    fn quartiles_interpolate_between_order_statistics() {
        let s = price_summary(&[10, 20, 30, 40]).unwrap();
        assert_eq!(s.q1, 17.5);
        assert_eq!(s.median, 25.0);
        assert_eq!(s.q3, 32.5);
    }

    #[test]
    fn empty_sample_has_no_summary() {
        assert!(price_summary(&[]).is_none());
    }

    #[test]
    fn brand_counts_sorted_descending() {
        let records = vec![
            record("Lenovo", 1, Category::General),
            record("Lenovo", 2, Category::General),
            record("HP", 3, Category::General),
        ];
        let counts = brand_counts(&records);
        assert_eq!(counts[0], ("Lenovo".to_string(), 2));
        assert_eq!(counts[1], ("HP".to_string(), 1));
    }

    #[test]
    fn category_summaries_cover_all_four() {
        let records = vec![
            record("Apple", 100000, Category::Apple),
            record("HP", 50000, Category::Gaming),
        ];
        let summaries = category_summaries(&records);
        assert_eq!(summaries.len(), 4);
        let general = &summaries[0];
        assert_eq!(general.category, Category::General);
        assert_eq!(general.count, 0);
        assert!(general.price.is_none());
        let apple = summaries.iter().find(|s| s.category == Category::Apple).unwrap();
        assert_eq!(apple.count, 1);
        assert_eq!(apple.price.as_ref().unwrap().min, 100000);
    }
}
