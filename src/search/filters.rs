use serde::{Deserialize, Serialize};

use crate::models::property::{Property, PropertyCategory};

/// Inclusive price bounds. `max = None` means no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && self.max.map_or(true, |max| amount <= max)
    }
}

/// Visitor search criteria. Every field is optional; unset (or zero /
/// empty) fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub location: Option<String>,
    pub guests: Option<u32>,
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub property_types: Vec<PropertyCategory>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub min_rating: Option<f64>,
}

fn matches_location(property: &Property, query: &str) -> bool {
    let query = query.to_lowercase();
    let location = &property.location;

    location.city.to_lowercase().contains(&query)
        || location.region.to_lowercase().contains(&query)
        || location.neighborhood.to_lowercase().contains(&query)
}

fn matches(property: &Property, filters: &SearchFilters) -> bool {
    if let Some(query) = filters.location.as_deref().filter(|l| !l.trim().is_empty()) {
        if !matches_location(property, query) {
            return false;
        }
    }

    if let Some(guests) = filters.guests {
        if property.specifications.guests < guests {
            return false;
        }
    }

    if let Some(range) = &filters.price_range {
        if !range.contains(property.price.amount) {
            return false;
        }
    }

    if !filters.property_types.is_empty() && !filters.property_types.contains(&property.category) {
        return false;
    }

    if let Some(bedrooms) = filters.bedrooms {
        if property.specifications.bedrooms < bedrooms {
            return false;
        }
    }

    if let Some(bathrooms) = filters.bathrooms {
        if property.specifications.bathrooms < bathrooms {
            return false;
        }
    }

    // zero means "any rating", unrated listings included
    if let Some(min_rating) = filters.min_rating.filter(|r| *r > 0.0) {
        match property.rating {
            Some(rating) if rating.average >= min_rating => {}
            _ => return false,
        }
    }

    filters
        .amenities
        .iter()
        .all(|amenity_id| property.has_amenity(amenity_id))
}

pub fn filter_properties(properties: &[Property], filters: &SearchFilters) -> Vec<Property> {
    properties
        .iter()
        .filter(|property| matches(property, filters))
        .cloned()
        .collect()
}
