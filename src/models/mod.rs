use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Search criteria for a rent estimate
///
/// Serialized camelCase because that is what the backend speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Minimum purchase price (USD)
    pub min_price: f64,
    /// Maximum purchase price (USD)
    pub max_price: f64,
    /// City, neighborhood, or ZIP to search in
    pub area: String,
    /// Number of bedrooms
    pub bedrooms: u32,
    /// Minimum size in square feet
    pub min_sqft: f64,
    /// Maximum size in square feet
    pub max_sqft: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            min_price: 200_000.0,
            max_price: 500_000.0,
            area: String::new(),
            bedrooms: 2,
            min_sqft: 600.0,
            max_sqft: 1_500.0,
        }
    }
}

/// First-step response: the average rent alone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentOnlyResponse {
    pub average_rent: f64,
    pub currency: String,
}

/// A single evaluated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResult {
    pub id: String,
    pub address: String,
    pub price: f64,
    pub bedrooms: u32,
    pub sqft: f64,
    pub estimated_rent: f64,
    /// Annualized rent over price, as a ratio (not pre-multiplied by 100)
    pub gross_yield: f64,
    #[serde(default)]
    pub url: Option<String>,
}

/// Second-step response: average rent plus the evaluated listings,
/// in server order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    pub average_rent: f64,
    pub currency: String,
    pub properties: Vec<PropertyResult>,
}

/// A prior search recorded server-side as a side effect of an earlier
/// estimate/evaluate call. Read-only here; the embedded params are
/// trusted as-is when reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchLog {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub params: SearchParams,
    pub average_rent: f64,
    pub properties_count: u32,
    #[serde(default)]
    pub best_yield: Option<f64>,
}

/// Result of the first pipeline step, handed by value to the second so
/// the evaluation call can reuse the rent figure instead of recomputing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsHandoff {
    pub search_params: SearchParams,
    pub initial_average_rent: f64,
}
