//! Yield Scout - terminal client for a rent-estimation backend
//!
//! The backend does the heavy lifting (rent estimation, per-property
//! evaluation, yield computation); this crate owns everything in front of
//! it:
//!
//! - Search criteria state and validation (`form`)
//! - A two-step estimate -> evaluate pipeline over HTTP/JSON (`api`)
//! - A short, read-only history of prior searches (`history`)
//!
//! The flow is deliberately two requests: the rent estimate is fetched
//! first and handed to the evaluation call, so the expensive per-property
//! pass reuses the already-computed average rent instead of recomputing it.

pub mod api;
pub mod config;
pub mod form;
pub mod history;
pub mod models;

// Re-export commonly used types
pub use api::{HttpApiClient, InvestmentApi};
pub use config::Config;
pub use form::SearchForm;
pub use history::{HistoryPanel, HistoryState};
pub use models::{ResultsHandoff, SearchParams};
