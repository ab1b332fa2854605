use crate::api::InvestmentApi;
use crate::models::{ResultsHandoff, SearchLog, SearchParams};
use tracing::{debug, info};

/// Owns the search criteria between edits and submission.
///
/// `error` and `busy` belong to this form alone; a history-panel failure
/// never shows up here and vice versa.
#[derive(Debug, Default)]
pub struct SearchForm {
    pub params: SearchParams,
    pub error: Option<String>,
    pub busy: bool,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the current criteria and return the first failing rule's
    /// message. Area is checked before any numeric range; the order is
    /// fixed because only one message ever surfaces at a time.
    pub fn validate(&self) -> Option<String> {
        let p = &self.params;
        if p.area.trim().is_empty() {
            return Some("Area is required.".to_string());
        }
        if p.min_price <= 0.0 || p.max_price <= 0.0 {
            return Some("Price must be positive.".to_string());
        }
        if p.min_price > p.max_price {
            return Some("Min price cannot be greater than max price.".to_string());
        }
        if p.min_sqft <= 0.0 || p.max_sqft <= 0.0 {
            return Some("Sqft must be positive.".to_string());
        }
        if p.min_sqft > p.max_sqft {
            return Some("Min sqft cannot be greater than max sqft.".to_string());
        }
        if p.bedrooms < 1 {
            return Some("Bedrooms must be at least 1.".to_string());
        }
        None
    }

    /// Validate and run the first pipeline step.
    ///
    /// On success the submitted criteria and the returned average rent
    /// come back as a [`ResultsHandoff`] for the evaluation step. On any
    /// failure the message lands in `error` and `None` is returned; the
    /// busy flag is cleared on every exit path. Re-entry while a
    /// submission is in flight is refused.
    pub async fn submit(&mut self, api: &dyn InvestmentApi) -> Option<ResultsHandoff> {
        if self.busy {
            debug!("Submission already in flight, ignoring");
            return None;
        }

        self.error = None;

        if let Some(message) = self.validate() {
            self.error = Some(message);
            return None;
        }

        self.busy = true;
        info!("Estimating average rent for {}", self.params.area);
        let outcome = api.estimate_rent(&self.params).await;
        self.busy = false;

        match outcome {
            Ok(rent) => Some(ResultsHandoff {
                search_params: self.params.clone(),
                initial_average_rent: rent.average_rent,
            }),
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Replace the whole criteria set with a prior search's stored
    /// params. No merging; the entry wins on every field.
    pub fn apply_history(&mut self, entry: &SearchLog) {
        debug!("Reusing criteria from search {}", entry.id);
        self.params = entry.params.clone();
    }
}
