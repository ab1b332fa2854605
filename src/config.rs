/// Runtime configuration, resolved once at startup.
///
/// Everything has a workable default so the tool runs against a local
/// backend with no environment set up.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the evaluation backend, without a trailing slash.
    pub api_base_url: String,
    /// How many recent searches the first screen asks for.
    pub history_limit: usize,
}

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_HISTORY_LIMIT: usize = 5;

impl Config {
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("API_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
