use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub coordinates: Coordinates,
    /// Empty when the CMS record has none.
    pub neighborhood: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
