use std::time::Duration;

use log::{info, warn};
use serde_json::json;

use crate::{
    models::property::Property,
    sanity::{
        documents::SanityProperty,
        fetch, fetch_list,
        queries::{self, PropertySearch},
        CmsError, ContentSource, QueryParams,
    },
};

/// The full catalog is also fetched while building the sitemap, where a
/// hanging CMS must not stall the response.
pub const ALL_PROPERTIES_TIMEOUT_SECONDS: u64 = 10;

fn into_properties(raw: Vec<SanityProperty>) -> Vec<Property> {
    raw.into_iter().map(Property::from).collect()
}

pub async fn get_all(source: &dyn ContentSource) -> Result<Vec<Property>, CmsError> {
    let params = QueryParams::new();
    let request = fetch_list::<SanityProperty>(source, &queries::ALL_PROPERTIES, &params);

    let raw = tokio::time::timeout(Duration::from_secs(ALL_PROPERTIES_TIMEOUT_SECONDS), request)
        .await
        .map_err(|_| CmsError::Timeout(ALL_PROPERTIES_TIMEOUT_SECONDS))??;

    info!("Fetched {} properties", raw.len());
    Ok(into_properties(raw))
}

pub async fn get_by_city(source: &dyn ContentSource, city: &str) -> Result<Vec<Property>, CmsError> {
    let mut params = QueryParams::new();
    params.insert("city".to_string(), json!(city));

    let raw: Vec<SanityProperty> = fetch_list(source, &queries::PROPERTIES_BY_CITY, &params).await?;
    Ok(into_properties(raw))
}

pub async fn get_featured(source: &dyn ContentSource) -> Result<Vec<Property>, CmsError> {
    let raw: Vec<SanityProperty> =
        fetch_list(source, &queries::FEATURED_PROPERTIES, &QueryParams::new()).await?;
    Ok(into_properties(raw))
}

pub async fn get_by_slug(
    source: &dyn ContentSource,
    slug: &str,
) -> Result<Option<Property>, CmsError> {
    let mut params = QueryParams::new();
    params.insert("slug".to_string(), json!(slug));

    let raw: Option<SanityProperty> = fetch(source, &queries::PROPERTY_BY_SLUG, &params).await?;
    if raw.is_none() {
        warn!("No property with slug {}", slug);
    }
    Ok(raw.map(Property::from))
}

pub async fn search(
    source: &dyn ContentSource,
    search: &PropertySearch,
) -> Result<Vec<Property>, CmsError> {
    let (query, params) = queries::search_properties_query(search);
    let raw: Vec<SanityProperty> = fetch_list(source, &query, &params).await?;
    Ok(into_properties(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    struct CannedSource {
        result: Value,
        seen: Mutex<Vec<(String, QueryParams)>>,
    }

    impl CannedSource {
        fn new(result: Value) -> Self {
            CannedSource {
                result,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ContentSource for CannedSource {
        async fn query(&self, groq: &str, params: &QueryParams) -> Result<Value, CmsError> {
            self.seen
                .lock()
                .unwrap()
                .push((groq.to_string(), params.clone()));
            Ok(self.result.clone())
        }

        async fn create(&self, _document: Value) -> Result<String, CmsError> {
            unreachable!()
        }
    }

    struct StalledSource;

    #[async_trait]
    impl ContentSource for StalledSource {
        async fn query(&self, _groq: &str, _params: &QueryParams) -> Result<Value, CmsError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Value::Array(Vec::new()))
        }

        async fn create(&self, _document: Value) -> Result<String, CmsError> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn missing_slug_is_none_not_error() {
        let source = CannedSource::new(Value::Null);
        let property = get_by_slug(&source, "nope").await.unwrap();
        assert!(property.is_none());

        let seen = source.seen.lock().unwrap();
        assert_eq!(seen[0].1["slug"], json!("nope"));
    }

    #[tokio::test]
    async fn city_is_passed_as_parameter() {
        let source = CannedSource::new(json!([]));
        let properties = get_by_city(&source, "Fez").await.unwrap();
        assert!(properties.is_empty());

        let seen = source.seen.lock().unwrap();
        assert!(seen[0].0.contains("location->city == $city"));
        assert_eq!(seen[0].1["city"], json!("Fez"));
    }

    #[tokio::test]
    async fn malformed_result_is_decode_error() {
        let source = CannedSource::new(json!({ "unexpected": true }));
        let err = get_featured(&source).await.unwrap_err();
        assert!(matches!(err, CmsError::Decode(_)));
        assert!(!err.is_unreachable());
    }

    #[tokio::test]
    async fn one_broken_document_does_not_empty_the_catalog() {
        let source = CannedSource::new(json!([
            { "_id": "good", "title": "Riad Nour", "slug": { "current": "riad-nour" } },
            { "_id": "broken", "_createdAt": "last tuesday" }
        ]));

        let properties = get_all(&source).await.unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].id, "good");
    }

    #[tokio::test(start_paused = true)]
    async fn all_properties_times_out() {
        let err = get_all(&StalledSource).await.unwrap_err();
        assert!(matches!(err, CmsError::Timeout(ALL_PROPERTIES_TIMEOUT_SECONDS)));
        assert!(err.is_unreachable());
    }
}
