use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Rate limit exceeded (window resets at {})", describe_reset(.reset_at))]
    RateLimited { reset_at: Option<i64> },

    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

fn describe_reset(reset_at: &Option<i64>) -> String {
    reset_at
        .map(|t| t.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    RateLimit,
    Storage,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrendError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrendError::ApiError(_) | TrendError::UpstreamStatus { .. } => ErrorCategory::Network,
            TrendError::RateLimited { .. } => ErrorCategory::RateLimit,
            TrendError::CsvError(_) | TrendError::IoError(_) => ErrorCategory::Storage,
            TrendError::ConfigValidationError { .. }
            | TrendError::InvalidConfigValueError { .. }
            | TrendError::MissingConfigError { .. } => ErrorCategory::Configuration,
            TrendError::SerializationError(_) | TrendError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::RateLimit => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, TrendError::RateLimited { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TrendError::ApiError(_) => "Check network connectivity and the API base URL",
            TrendError::RateLimited { .. } => "Wait for the rate-limit window to reset and retry",
            TrendError::UpstreamStatus { status: 401, .. }
            | TrendError::UpstreamStatus { status: 403, .. } => {
                "Verify the bearer token (TWITTER_BEARER_TOKEN) and its access level"
            }
            TrendError::UpstreamStatus { .. } => "Inspect the query syntax and upstream status",
            TrendError::CsvError(_) | TrendError::IoError(_) => {
                "Check that the output directory exists or can be created and is writable"
            }
            TrendError::MissingConfigError { .. } => {
                "Provide the missing value via CLI flag, environment variable or config file"
            }
            TrendError::ConfigValidationError { .. } | TrendError::InvalidConfigValueError { .. } => {
                "Fix the configuration and run again"
            }
            TrendError::SerializationError(_) | TrendError::ProcessingError { .. } => {
                "Re-run with --verbose and inspect the offending record"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the search API: {}", self),
            ErrorCategory::RateLimit => "The search API rate limit was exceeded".to_string(),
            ErrorCategory::Storage => format!("Could not write the report: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Data => format!("Could not process posts: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrendError>;
