use lazy_static::lazy_static;
use serde_json::json;

use super::{helpers::empty_as_none, source::QueryParams};

const PROPERTY_PROJECTION: &str = r#"{
    _id,
    title,
    slug,
    description,
    shortDescription,
    images[] {
      _key,
      alt,
      caption,
      "url": asset.asset->url
    },
    location-> {
      _id,
      city,
      region,
      country,
      coordinates,
      neighborhood,
      description
    },
    price {
      amount,
      currency,
      period
    },
    specifications {
      bedrooms,
      bathrooms,
      guests,
      area
    },
    amenities[]-> {
      _id,
      name,
      icon,
      category
    },
    bookingLinks[] {
      platform,
      url,
      label
    },
    featured,
    category,
    availability {
      available,
      nextAvailable
    },
    rating {
      average,
      count
    },
    _createdAt,
    _updatedAt
  }"#;

const DESTINATION_PROJECTION: &str = r#"{
    _id,
    name,
    slug,
    description,
    shortDescription,
    "image": image.asset->url,
    videoUrl,
    region,
    coordinates,
    featured,
    highlights[],
    attractions[] {
      name,
      type,
      description
    },
    activities[],
    transportation {
      airport,
      trainStation,
      carRental
    },
    weather {
      bestTimeToVisit,
      averageTemp,
      rainyMonths[]
    },
    "propertyCount": count(*[_type == "property" && location->city == ^.name]),
    "minPrice": math::min(*[_type == "property" && location->city == ^.name].price.amount),
    "maxPrice": math::max(*[_type == "property" && location->city == ^.name].price.amount)
  }"#;

lazy_static! {
    pub static ref ALL_PROPERTIES: String = format!(
        r#"*[_type == "property"] | order(_createdAt desc) {}"#,
        PROPERTY_PROJECTION
    );
    pub static ref PROPERTIES_BY_CITY: String = format!(
        r#"*[_type == "property" && location->city == $city] | order(_createdAt desc) {}"#,
        PROPERTY_PROJECTION
    );
    pub static ref FEATURED_PROPERTIES: String = format!(
        r#"*[_type == "property" && featured == true] | order(_createdAt desc) {}"#,
        PROPERTY_PROJECTION
    );
    pub static ref PROPERTY_BY_SLUG: String = format!(
        r#"*[_type == "property" && slug.current == $slug][0] {}"#,
        PROPERTY_PROJECTION
    );
    pub static ref ALL_DESTINATIONS: String = format!(
        r#"*[_type == "destination"] | order(name asc) {}"#,
        DESTINATION_PROJECTION
    );
    pub static ref FEATURED_DESTINATIONS: String = format!(
        r#"*[_type == "destination" && featured == true] | order(name asc) {}"#,
        DESTINATION_PROJECTION
    );
    pub static ref DESTINATION_BY_SLUG: String = format!(
        r#"*[_type == "destination" && slug.current == $slug][0] {}"#,
        DESTINATION_PROJECTION
    );
}

pub const ALL_AMENITIES: &str = r#"*[_type == "amenity"] | order(category asc, name asc) {
    _id,
    name,
    icon,
    category
  }"#;

pub const ALL_LOCATIONS: &str = r#"*[_type == "location"] | order(city asc) {
    _id,
    city,
    region,
    country,
    coordinates,
    neighborhood,
    description
  }"#;

/// Server-side search parameters. Zero or blank values are ignored.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySearch {
    pub location: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub guests: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub bedrooms: Option<u32>,
}

pub fn search_properties_query(search: &PropertySearch) -> (String, QueryParams) {
    let mut query = String::from(r#"*[_type == "property""#);
    let mut params = QueryParams::new();

    if let Some(location) = search.location.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        query.push_str(" && location->city match $location");
        params.insert("location".to_string(), json!(format!("*{}*", location)));
    }
    if let Some(category) = search.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        query.push_str(" && category == $category");
        params.insert("category".to_string(), json!(category));
    }
    if let Some(min_price) = search.min_price.filter(|p| *p > 0.0) {
        query.push_str(" && price.amount >= $minPrice");
        params.insert("minPrice".to_string(), json!(min_price));
    }
    if let Some(max_price) = search.max_price.filter(|p| *p > 0.0) {
        query.push_str(" && price.amount <= $maxPrice");
        params.insert("maxPrice".to_string(), json!(max_price));
    }
    if let Some(guests) = search.guests.filter(|g| *g > 0) {
        query.push_str(" && specifications.guests >= $guests");
        params.insert("guests".to_string(), json!(guests));
    }
    if let Some(bedrooms) = search.bedrooms.filter(|b| *b > 0) {
        query.push_str(" && specifications.bedrooms >= $bedrooms");
        params.insert("bedrooms".to_string(), json!(bedrooms));
    }

    query.push_str("] | order(_createdAt desc) ");
    query.push_str(PROPERTY_PROJECTION);

    (query, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_matches_every_property() {
        let (query, params) = search_properties_query(&PropertySearch::default());
        assert!(query.starts_with(r#"*[_type == "property"] | order(_createdAt desc)"#));
        assert!(params.is_empty());
    }

    #[test]
    fn search_adds_clause_per_filter() {
        let search = PropertySearch {
            location: Some("Marra".to_string()),
            category: Some("riad".to_string()),
            min_price: Some(0.0),
            max_price: Some(1500.0),
            guests: Some(4),
            bedrooms: None,
        };
        let (query, params) = search_properties_query(&search);

        assert!(query.contains("location->city match $location"));
        assert!(query.contains("category == $category"));
        assert!(!query.contains("$minPrice"));
        assert!(query.contains("price.amount <= $maxPrice"));
        assert!(query.contains("specifications.guests >= $guests"));
        assert_eq!(params["location"], json!("*Marra*"));
        assert_eq!(params["guests"], json!(4));
        assert_eq!(params.len(), 4);
    }
}
