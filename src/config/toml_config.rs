use crate::config::TrendConfig;
use crate::utils::error::{Result, TrendError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

/// File-based configuration. Every field is optional; anything left out
/// keeps the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub rate_limit: Option<RateLimitConfig>,
    pub output: Option<OutputConfig>,
    pub charts: Option<ChartsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub api_base_url: Option<String>,
    pub bearer_token: Option<String>,
    pub query: Option<String>,
    pub max_results: Option<usize>,
    pub timeout_seconds: Option<u64>,
    pub dedupe: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateLimitConfig {
    pub cooldown_seconds: Option<u64>,
    pub max_retries: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartsConfig {
    pub enabled: Option<bool>,
    pub width: Option<usize>,
    pub top_hashtags: Option<usize>,
    pub max_words: Option<usize>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrendError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TrendError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Layers the file values over `base`.
    pub fn apply_to(&self, mut base: TrendConfig) -> TrendConfig {
        if let Some(source) = &self.source {
            if let Some(url) = &source.api_base_url {
                base.api_base_url = url.clone();
            }
            if let Some(token) = &source.bearer_token {
                // An unresolved placeholder means the variable was not set.
                if !ENV_VAR_RE.is_match(token) {
                    base.credential = Some(token.clone());
                }
            }
            if let Some(query) = &source.query {
                base.query = query.clone();
            }
            if let Some(max_results) = source.max_results {
                base.max_results = max_results;
            }
            if let Some(timeout) = source.timeout_seconds {
                base.request_timeout = Duration::from_secs(timeout);
            }
            if let Some(dedupe) = source.dedupe {
                base.dedupe = dedupe;
            }
        }

        if let Some(rate_limit) = &self.rate_limit {
            if let Some(cooldown) = rate_limit.cooldown_seconds {
                base.rate_limit.cooldown = Duration::from_secs(cooldown);
            }
            if rate_limit.max_retries.is_some() {
                base.rate_limit.max_retries = rate_limit.max_retries;
            }
        }

        if let Some(directory) = self.output.as_ref().and_then(|o| o.directory.as_ref()) {
            base.output_directory = directory.clone();
        }

        if let Some(charts) = &self.charts {
            if let Some(enabled) = charts.enabled {
                base.charts.enabled = enabled;
            }
            if let Some(width) = charts.width {
                base.charts.width = width;
            }
            if let Some(top) = charts.top_hashtags {
                base.charts.top_hashtags = top;
            }
            if let Some(max_words) = charts.max_words {
                base.charts.max_words = max_words;
            }
        }

        base
    }
}
