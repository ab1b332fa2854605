use crate::api::InvestmentApi;
use crate::models::SearchLog;
use chrono::Local;
use tracing::{debug, warn};

/// Mutually exclusive display states for the recent-searches panel.
/// An empty loaded list is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryState {
    Loading,
    Failed(String),
    Loaded(Vec<SearchLog>),
}

/// Fetches recent searches once and holds them for display.
pub struct HistoryPanel {
    state: HistoryState,
    fetched: bool,
}

impl HistoryPanel {
    pub fn new() -> Self {
        Self {
            state: HistoryState::Loading,
            fetched: false,
        }
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// Fetch up to `limit` most-recent entries. Runs only on the first
    /// call; later calls keep whatever state the first one produced.
    pub async fn load(&mut self, api: &dyn InvestmentApi, limit: usize) {
        if self.fetched {
            debug!("History already fetched, skipping");
            return;
        }
        self.fetched = true;

        match api.history(limit).await {
            Ok(entries) => {
                debug!("Loaded {} history entries", entries.len());
                self.state = HistoryState::Loaded(entries);
            }
            Err(err) => {
                warn!("Failed to load history: {err}");
                self.state = HistoryState::Failed(err.to_string());
            }
        }
    }
}

impl Default for HistoryPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Display lines for one history entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryLines {
    /// "Södermalm · 2br · 200,000–500,000 USD"
    pub criteria: String,
    /// "Avg rent: $1,850 · Properties: 12 · Best yield: 5.23%"
    pub results: String,
    /// Local-time timestamp, "2025-11-02 11:30"
    pub when: String,
}

pub fn entry_lines(entry: &SearchLog) -> EntryLines {
    let criteria = format!(
        "{} · {}br · {}–{} USD",
        entry.params.area,
        entry.params.bedrooms,
        group_digits(entry.params.min_price),
        group_digits(entry.params.max_price),
    );

    let mut results = format!(
        "Avg rent: ${} · Properties: {}",
        group_digits(entry.average_rent),
        entry.properties_count,
    );
    // Absent best yield is left out entirely, never shown as 0%.
    if let Some(best_yield) = entry.best_yield {
        results.push_str(&format!(" · Best yield: {}", format_yield(best_yield)));
    }

    let when = entry
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string();

    EntryLines { criteria, results, when }
}

/// Gross yield ratio as a percentage with two decimals, "0.0523" -> "5.23%"
pub fn format_yield(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Round to a whole figure and group digits, 1234567.4 -> "1,234,567"
pub fn group_digits(value: f64) -> String {
    let whole = value.round().abs() as i64;
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();
    if value.round() < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
