#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use khayma::{
    config::create_test_config,
    models::property::Property,
    sanity::{documents::SanityProperty, CmsError, ContentSource, QueryParams},
    web::{self, AppState},
};
use serde_json::{json, Value};

pub struct Listing<'a> {
    pub id: &'a str,
    pub city: &'a str,
    pub price: f64,
    pub guests: u32,
    pub bedrooms: u32,
    pub category: &'a str,
    pub amenities: &'a [&'a str],
    pub rating: Option<f64>,
    pub created_at: &'a str,
    pub featured: bool,
}

impl<'a> Default for Listing<'a> {
    fn default() -> Self {
        Listing {
            id: "prop",
            city: "Marrakech",
            price: 1000.0,
            guests: 2,
            bedrooms: 1,
            category: "riad",
            amenities: &[],
            rating: None,
            created_at: "2025-01-01T00:00:00Z",
            featured: false,
        }
    }
}

pub fn property_doc(listing: &Listing) -> Value {
    let amenities: Vec<Value> = listing
        .amenities
        .iter()
        .map(|id| json!({ "_id": id, "name": id, "icon": "", "category": "features" }))
        .collect();

    json!({
        "_id": listing.id,
        "title": format!("Listing {}", listing.id),
        "slug": { "current": listing.id },
        "description": "A place to stay",
        "images": [{ "_key": "cover", "url": format!("https://cdn.sanity.io/{}.jpg", listing.id), "alt": "" }],
        "location": {
            "_id": format!("loc-{}", listing.city.to_lowercase()),
            "city": listing.city,
            "region": "Morocco",
            "country": "Morocco",
            "coordinates": { "lat": 31.6, "lng": -8.0 },
            "neighborhood": "Medina"
        },
        "price": { "amount": listing.price, "currency": "MAD", "period": "night" },
        "specifications": { "bedrooms": listing.bedrooms, "bathrooms": 1, "guests": listing.guests },
        "amenities": amenities,
        "bookingLinks": [],
        "featured": listing.featured,
        "category": listing.category,
        "rating": listing.rating.map(|average| json!({ "average": average, "count": 10 })),
        "_createdAt": listing.created_at,
        "_updatedAt": listing.created_at
    })
}

pub fn property(listing: &Listing) -> Property {
    let raw: SanityProperty = serde_json::from_value(property_doc(listing)).unwrap();
    Property::from(raw)
}

/// In-memory stand-in for the CMS, answering the canned GROQ queries
/// from a fixed document list.
#[derive(Default)]
pub struct MemorySource {
    pub properties: Vec<Value>,
    pub destinations: Vec<Value>,
    pub unreachable: bool,
    /// Document types whose queries fail while the rest keep answering.
    pub failing_types: Vec<&'static str>,
    pub queries: Mutex<Vec<(String, QueryParams)>>,
    pub created: Mutex<Vec<Value>>,
}

pub fn destination_doc(slug: &str, featured: bool) -> Value {
    json!({
        "_id": format!("dest-{}", slug),
        "name": slug,
        "slug": { "current": slug },
        "description": "A destination",
        "image": null,
        "region": "Morocco",
        "featured": featured,
        "propertyCount": 2
    })
}

fn slug_of(doc: &Value) -> &str {
    doc["slug"]["current"].as_str().unwrap_or_default()
}

fn select(docs: &[Value], groq: &str, params: &QueryParams) -> Value {
    if let Some(slug) = params.get("slug").and_then(Value::as_str) {
        return docs
            .iter()
            .find(|doc| slug_of(doc) == slug)
            .cloned()
            .unwrap_or(Value::Null);
    }

    let selected: Vec<Value> = docs
        .iter()
        .filter(|doc| !groq.contains("featured == true") || doc["featured"] == json!(true))
        .filter(|doc| match params.get("city") {
            Some(city) => &doc["location"]["city"] == city,
            None => true,
        })
        .cloned()
        .collect();
    Value::Array(selected)
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn query(&self, groq: &str, params: &QueryParams) -> Result<Value, CmsError> {
        self.queries
            .lock()
            .unwrap()
            .push((groq.to_string(), params.clone()));

        let failing = self
            .failing_types
            .iter()
            .any(|kind| groq.starts_with(&format!(r#"*[_type == "{}""#, kind)));
        if self.unreachable || failing {
            return Err(CmsError::Status {
                status: 503,
                message: "unavailable".to_string(),
            });
        }

        if groq.starts_with(r#"*[_type == "property""#) {
            Ok(select(&self.properties, groq, params))
        } else if groq.starts_with(r#"*[_type == "destination""#) {
            Ok(select(&self.destinations, groq, params))
        } else {
            Ok(Value::Array(Vec::new()))
        }
    }

    async fn create(&self, document: Value) -> Result<String, CmsError> {
        if self.unreachable {
            return Err(CmsError::Status {
                status: 503,
                message: "unavailable".to_string(),
            });
        }

        let mut created = self.created.lock().unwrap();
        created.push(document);
        Ok(format!("contact-{}", created.len()))
    }
}

pub fn app(source: Arc<MemorySource>) -> axum::Router {
    web::router(AppState {
        config: Arc::new(create_test_config()),
        source,
    })
}
