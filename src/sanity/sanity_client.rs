use std::{sync::Arc, time::Duration};

use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use reqwest::{header::AUTHORIZATION, Client, Response};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;

use super::{
    error::CmsError,
    helpers::{mutate_url, query_pairs, query_url},
    source::{ContentSource, QueryParams},
};

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
    ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct MutationResult {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MutationResponse {
    transaction_id: String,
    results: Vec<MutationResult>,
}

/// HTTP client for a Sanity project's query and mutation endpoints.
#[derive(Debug, Clone)]
pub struct SanityClient {
    client: Client,
    config: Arc<Config>,
}

impl SanityClient {
    pub fn new(config: Arc<Config>) -> anyhow::Result<SanityClient> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(SanityClient { client, config })
    }

    async fn check_status(response: Response) -> Result<Response, CmsError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Err(CmsError::Status { status, message })
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn query(&self, groq: &str, params: &QueryParams) -> Result<Value, CmsError> {
        debug!("GROQ query with {} param(s)", params.len());

        let mut request = self
            .client
            .get(query_url(&self.config))
            .query(&query_pairs(groq, params));
        if let Some(token) = &self.config.sanity_api_token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = Self::check_status(request.send().await?).await?;
        let body: QueryResponse = serde_json::from_slice(&response.bytes().await?)?;

        if let Some(ms) = body.ms {
            debug!("GROQ query answered in {}ms", ms);
        }
        Ok(body.result)
    }

    async fn create(&self, document: Value) -> Result<String, CmsError> {
        let token = self
            .config
            .sanity_api_token
            .as_ref()
            .ok_or(CmsError::MissingToken)?;

        let response = self
            .client
            .post(mutate_url(&self.config))
            .query(&[("returnIds", "true")])
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .json(&json!({ "mutations": [{ "create": document }] }))
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: MutationResponse = serde_json::from_slice(&response.bytes().await?)?;
        debug!("Mutation committed in transaction {}", body.transaction_id);

        body.results
            .into_iter()
            .next()
            .map(|result| result.id)
            .ok_or_else(|| CmsError::Status {
                status: 200,
                message: "mutation returned no document id".to_string(),
            })
    }
}
