use crate::domain::model::{Post, ResultSet, SearchPage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// A single page request against the recent-search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: usize,
    pub next_token: Option<String>,
}

#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Fetches one page. Quota exhaustion must surface as
    /// `TrendError::RateLimited` so the caller can wait and retry.
    async fn search_recent(&self, request: &SearchRequest) -> Result<SearchPage>;
}

pub trait PolarityScorer: Send + Sync {
    /// Polarity in [-1, 1].
    fn polarity(&self, text: &str) -> f64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Post>>;
    async fn transform(&self, posts: Vec<Post>) -> Result<ResultSet>;
    async fn load(&self, results: &ResultSet) -> Result<String>;
    async fn render(&self, results: &ResultSet) -> Result<()>;
}
