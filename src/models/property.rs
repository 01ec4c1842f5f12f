use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{amenity::Amenity, location::Location};

/// Listing type. Categories the site has no dedicated handling for keep
/// their CMS value so that `types=camp` and `types=castle` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyCategory {
    Riad,
    Villa,
    Apartment,
    House,
    Resort,
    Hotel,
    Other(String),
}

impl Default for PropertyCategory {
    fn default() -> Self {
        PropertyCategory::Other(String::new())
    }
}

impl PropertyCategory {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyCategory::Riad => "riad",
            PropertyCategory::Villa => "villa",
            PropertyCategory::Apartment => "apartment",
            PropertyCategory::House => "house",
            PropertyCategory::Resort => "resort",
            PropertyCategory::Hotel => "hotel",
            PropertyCategory::Other(value) => value,
        }
    }

    /// Case-insensitive; unknown values are kept as `Other`.
    pub fn parse(value: &str) -> PropertyCategory {
        let value = value.trim().to_lowercase();
        match value.as_str() {
            "riad" => PropertyCategory::Riad,
            "villa" => PropertyCategory::Villa,
            "apartment" => PropertyCategory::Apartment,
            "house" => PropertyCategory::House,
            "resort" => PropertyCategory::Resort,
            "hotel" => PropertyCategory::Hotel,
            _ => PropertyCategory::Other(value),
        }
    }
}

impl From<String> for PropertyCategory {
    fn from(value: String) -> Self {
        PropertyCategory::parse(&value)
    }
}

impl From<PropertyCategory> for String {
    fn from(category: PropertyCategory) -> Self {
        category.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePeriod {
    Week,
    Month,
    #[default]
    #[serde(other)]
    Night,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
    pub period: PricePeriod,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specifications {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingPlatform {
    Airbnb,
    Booking,
    Vrbo,
    Direct,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingLink {
    pub platform: BookingPlatform,
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyImage {
    pub id: String,
    pub url: String,
    pub alt: String,
    pub caption: String,
    /// 1-based position in the gallery.
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_available: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub average: f64,
    pub count: u32,
}

/// A rentable listing as served to the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub images: Vec<PropertyImage>,
    pub location: Location,
    pub price: Price,
    pub specifications: Specifications,
    pub amenities: Vec<Amenity>,
    pub booking_links: Vec<BookingLink>,
    pub featured: bool,
    pub category: PropertyCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn has_amenity(&self, amenity_id: &str) -> bool {
        self.amenities.iter().any(|amenity| amenity.id == amenity_id)
    }

    pub fn rating_average(&self) -> f64 {
        self.rating.map(|rating| rating.average).unwrap_or(0.0)
    }

    pub fn cover_image(&self) -> Option<&PropertyImage> {
        self.images.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_keeps_its_value() {
        let category: PropertyCategory = serde_json::from_str("\"Castle\"").unwrap();
        assert_eq!(category, PropertyCategory::Other("castle".to_string()));
        assert_ne!(category, PropertyCategory::parse("camp"));
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"castle\"");

        let category: PropertyCategory = serde_json::from_str("\"riad\"").unwrap();
        assert_eq!(category, PropertyCategory::Riad);
    }

    #[test]
    fn parse_category_is_case_insensitive() {
        assert_eq!(PropertyCategory::parse(" Villa "), PropertyCategory::Villa);
        assert_eq!(PropertyCategory::parse("camp").as_str(), "camp");
    }

    #[test]
    fn unknown_price_period_falls_back_to_night() {
        let period: PricePeriod = serde_json::from_str("\"fortnight\"").unwrap();
        assert_eq!(period, PricePeriod::Night);
    }
}
