use crate::api::traits::InvestmentApi;
use crate::models::{EvaluationResponse, RentOnlyResponse, SearchLog, SearchParams};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

/// HTTP/JSON client for the evaluation backend
///
/// Every operation is a single round trip: no retries, no caching, no
/// cancellation. No timeout is set either; a hung request stays pending
/// until the transport gives up, and the caller's busy state with it.
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        label: &str,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("{label} request to {url} failed"))?;

        decode_response(label, response).await
    }
}

/// Decode a 2xx body as JSON, or surface the status code and error body
/// as a single message string (the status's standard reason phrase when
/// the body is empty).
async fn decode_response<T: serde::de::DeserializeOwned>(
    label: &str,
    response: Response,
) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("unknown error").to_string()
        } else {
            body
        };
        warn!("{} endpoint returned {}", label, status);
        anyhow::bail!("{label} API error ({}): {detail}", status.as_u16());
    }

    response
        .json::<T>()
        .await
        .with_context(|| format!("Failed to decode {label} response body"))
}

#[async_trait]
impl InvestmentApi for HttpApiClient {
    async fn estimate_rent(&self, params: &SearchParams) -> Result<RentOnlyResponse> {
        self.post_json("Rent", "/api/estimate-rent", params).await
    }

    async fn evaluate(&self, params: &SearchParams) -> Result<EvaluationResponse> {
        self.post_json("Evaluate", "/api/evaluate", params).await
    }

    async fn evaluate_with_rent(
        &self,
        params: &SearchParams,
        average_rent: f64,
    ) -> Result<EvaluationResponse> {
        let body = json!({ "params": params, "averageRent": average_rent });
        self.post_json("Evaluate-with-rent", "/api/evaluate-with-rent", &body)
            .await
    }

    async fn history(&self, limit: usize) -> Result<Vec<SearchLog>> {
        let url = self.url("/api/history");
        debug!("GET {}?limit={}", url, limit);

        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await
            .with_context(|| format!("History request to {url} failed"))?;

        decode_response("History", response).await
    }
}
