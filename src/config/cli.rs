use crate::config::toml_config::TomlConfig;
use crate::config::TrendConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "sentiment-trend")]
#[command(about = "Fetch recent posts for a topic, score their sentiment and chart the trends")]
pub struct CliConfig {
    /// TOML configuration file; CLI flags take precedence over its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Search query, in the upstream inline filter syntax
    #[arg(short, long)]
    pub query: Option<String>,

    /// Maximum number of posts to fetch
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Directory for the CSV report
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Bearer token for the search API
    #[arg(long, env = "TWITTER_BEARER_TOKEN", hide_env_values = true)]
    pub bearer_token: Option<String>,

    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Seconds to wait after a rate-limit response
    #[arg(long)]
    pub cooldown_secs: Option<u64>,

    /// Give up after this many consecutive rate-limit responses
    #[arg(long)]
    pub max_rate_limit_retries: Option<u32>,

    /// Keep posts whose id was already seen in this run
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,

    /// Render charts from an existing report instead of fetching
    #[arg(long, conflicts_with = "no_charts")]
    pub from_report: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then CLI flags.
    pub fn resolve(&self) -> Result<TrendConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.apply_to(TrendConfig::default())
            }
            None => TrendConfig::default(),
        };

        if let Some(query) = &self.query {
            config.query = query.clone();
        }
        if let Some(max_results) = self.max_results {
            config.max_results = max_results;
        }
        if let Some(dir) = &self.output_dir {
            config.output_directory = dir.clone();
        }
        if let Some(token) = &self.bearer_token {
            config.credential = Some(token.clone());
        }
        if let Some(url) = &self.api_base_url {
            config.api_base_url = url.clone();
        }
        if let Some(secs) = self.cooldown_secs {
            config.rate_limit.cooldown = Duration::from_secs(secs);
        }
        if self.max_rate_limit_retries.is_some() {
            config.rate_limit.max_retries = self.max_rate_limit_retries;
        }
        if self.keep_duplicates {
            config.dedupe = false;
        }
        if self.no_charts {
            config.charts.enabled = false;
        }

        Ok(config)
    }
}
