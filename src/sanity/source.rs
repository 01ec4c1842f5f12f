use std::collections::BTreeMap;

use async_trait::async_trait;
use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::CmsError;

pub type QueryParams = BTreeMap<String, Value>;

/// Where content documents come from and where new ones are written.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Runs a GROQ query and returns its `result` payload.
    async fn query(&self, groq: &str, params: &QueryParams) -> Result<Value, CmsError>;

    /// Creates a document and returns its generated id.
    async fn create(&self, document: Value) -> Result<String, CmsError>;
}

pub async fn fetch<T: DeserializeOwned>(
    source: &dyn ContentSource,
    groq: &str,
    params: &QueryParams,
) -> Result<T, CmsError> {
    let result = source.query(groq, params).await?;
    Ok(serde_json::from_value(result)?)
}

/// Like [`fetch`] for list queries, but a document that does not decode is
/// logged and skipped instead of failing the whole list.
pub async fn fetch_list<T: DeserializeOwned>(
    source: &dyn ContentSource,
    groq: &str,
    params: &QueryParams,
) -> Result<Vec<T>, CmsError> {
    let documents: Vec<Value> = fetch(source, groq, params).await?;

    Ok(documents
        .into_iter()
        .filter_map(|document| {
            let id = document["_id"].as_str().unwrap_or("?").to_string();
            serde_json::from_value(document)
                .map_err(|err| warn!("Skipping document {}: {}", id, err))
                .ok()
        })
        .collect())
}
