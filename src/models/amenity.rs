use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmenityCategory {
    Features,
    Location,
    Safety,
    Entertainment,
    #[default]
    #[serde(other)]
    Basics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub category: AmenityCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_amenity_category_is_basics() {
        let category: AmenityCategory = serde_json::from_str("\"wellness\"").unwrap();
        assert_eq!(category, AmenityCategory::Basics);
    }
}
