#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::services::query::default_query;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com";
pub const DEFAULT_MAX_RESULTS: usize = 200;
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "data";
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(15 * 60);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CHART_WIDTH: usize = 80;
pub const DEFAULT_TOP_HASHTAGS: usize = 10;
pub const DEFAULT_MAX_WORDS: usize = 100;
pub const CREDENTIAL_ENV_VAR: &str = "TWITTER_BEARER_TOKEN";

/// How the fetch loop reacts to a rate-limit response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub cooldown: Duration,
    /// Consecutive retries of one request before giving up. `None` retries forever.
    pub max_retries: Option<u32>,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
            max_retries: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSettings {
    pub enabled: bool,
    pub width: usize,
    pub top_hashtags: usize,
    pub max_words: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            width: DEFAULT_CHART_WIDTH,
            top_hashtags: DEFAULT_TOP_HASHTAGS,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

/// Resolved settings for one trend run.
#[derive(Clone, PartialEq, Eq)]
pub struct TrendConfig {
    pub credential: Option<String>,
    pub query: String,
    pub max_results: usize,
    pub output_directory: String,
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub rate_limit: RateLimitPolicy,
    pub dedupe: bool,
    pub charts: ChartSettings,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            credential: None,
            query: default_query(),
            max_results: DEFAULT_MAX_RESULTS,
            output_directory: DEFAULT_OUTPUT_DIRECTORY.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            rate_limit: RateLimitPolicy::default(),
            dedupe: true,
            charts: ChartSettings::default(),
        }
    }
}

impl std::fmt::Debug for TrendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrendConfig")
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("query", &self.query)
            .field("max_results", &self.max_results)
            .field("output_directory", &self.output_directory)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .field("rate_limit", &self.rate_limit)
            .field("dedupe", &self.dedupe)
            .field("charts", &self.charts)
            .finish()
    }
}

impl TrendConfig {
    pub fn credential(&self) -> Result<&str> {
        let token = validation::validate_required_field("credential", &self.credential)?;
        validation::validate_non_empty_string("credential", token)?;
        Ok(token)
    }

    /// Settings needed only to render an existing report.
    pub fn validate_output(&self) -> Result<()> {
        validation::validate_path("output_directory", &self.output_directory)?;
        validation::validate_positive_number("charts.width", self.charts.width, 20)?;
        validation::validate_positive_number("charts.top_hashtags", self.charts.top_hashtags, 1)?;
        Ok(())
    }
}

impl Validate for TrendConfig {
    fn validate(&self) -> Result<()> {
        self.credential()?;
        validation::validate_non_empty_string("query", &self.query)?;
        validation::validate_positive_number("max_results", self.max_results, 1)?;
        validation::validate_url("api_base_url", &self.api_base_url)?;
        self.validate_output()
    }
}
