use serde::Serialize;

use crate::models::property::Property;

use super::filters::PriceRange;

const MAX_SUGGESTIONS: usize = 8;
const MIN_QUERY_CHARS: usize = 2;

// Bounds assumed when the catalog is empty or unpriced
const DEFAULT_MIN_PRICE: f64 = 0.0;
const DEFAULT_MAX_PRICE: f64 = 5000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRangeOption {
    pub label: &'static str,
    pub value: PriceRange,
}

const PRICE_BUCKETS: [(&str, f64, Option<f64>); 6] = [
    ("Any price", 0.0, None),
    ("Under 500 MAD", 0.0, Some(500.0)),
    ("500 - 1000 MAD", 500.0, Some(1000.0)),
    ("1000 - 2000 MAD", 1000.0, Some(2000.0)),
    ("2000 - 3000 MAD", 2000.0, Some(3000.0)),
    ("3000+ MAD", 3000.0, None),
];

/// The fixed MAD buckets that overlap the catalog's price span.
pub fn generate_price_ranges(properties: &[Property]) -> Vec<PriceRangeOption> {
    let prices = properties.iter().map(|property| property.price.amount);
    let min = prices.clone().reduce(f64::min).unwrap_or(DEFAULT_MIN_PRICE);
    // an all-zero catalog has no meaningful ceiling either
    let max = prices
        .reduce(f64::max)
        .filter(|max| *max > 0.0)
        .unwrap_or(DEFAULT_MAX_PRICE);

    PRICE_BUCKETS
        .iter()
        .filter(|(_, lower, upper)| *lower <= max && upper.map_or(true, |upper| upper >= min))
        .map(|(label, lower, upper)| PriceRangeOption {
            label: *label,
            value: PriceRange {
                min: *lower,
                max: *upper,
            },
        })
        .collect()
}

/// Distinct city, region and neighborhood names containing `query`, in
/// catalog order.
pub fn generate_search_suggestions(query: &str, properties: &[Property]) -> Vec<String> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let query = query.to_lowercase();
    let mut suggestions: Vec<String> = Vec::new();

    for property in properties {
        let location = &property.location;
        for candidate in [&location.city, &location.region, &location.neighborhood] {
            if !candidate.is_empty()
                && candidate.to_lowercase().contains(&query)
                && !suggestions.contains(candidate)
            {
                suggestions.push(candidate.clone());
            }
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
