use serde::{Deserialize, Serialize};

use super::location::Coordinates;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transportation {
    pub airport: Option<String>,
    pub train_station: Option<String>,
    pub car_rental: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub best_time_to_visit: Option<String>,
    pub average_temp: Option<String>,
    pub rainy_months: Vec<String>,
}

/// City-level marketing aggregate. `property_count` and the price bounds
/// are computed by the CMS query, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub region: String,
    pub coordinates: Coordinates,
    pub featured: bool,
    pub highlights: Vec<String>,
    pub attractions: Vec<Attraction>,
    pub activities: Vec<String>,
    pub transportation: Transportation,
    pub weather: Weather,
    pub property_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}
