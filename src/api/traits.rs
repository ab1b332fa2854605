use crate::models::{EvaluationResponse, RentOnlyResponse, SearchLog, SearchParams};
use anyhow::Result;
use async_trait::async_trait;

/// The backend's evaluation surface, one method per endpoint.
/// The form controller and history panel depend on this rather than on
/// the HTTP client, so they can be driven against a stand-in backend.
#[async_trait]
pub trait InvestmentApi: Send + Sync {
    /// First pipeline step: average rent for the given criteria
    async fn estimate_rent(&self, params: &SearchParams) -> Result<RentOnlyResponse>;

    /// Single-call evaluation (rent is recomputed server-side)
    async fn evaluate(&self, params: &SearchParams) -> Result<EvaluationResponse>;

    /// Second pipeline step: per-property evaluation reusing the rent
    /// figure from `estimate_rent`
    async fn evaluate_with_rent(
        &self,
        params: &SearchParams,
        average_rent: f64,
    ) -> Result<EvaluationResponse>;

    /// Most recent searches, newest first, at most `limit` entries
    async fn history(&self, limit: usize) -> Result<Vec<SearchLog>>;
}
