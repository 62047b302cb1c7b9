use crate::domain::model::{Post, SearchPage};
use crate::domain::ports::{SearchApi, SearchRequest};
use crate::utils::error::{Result, TrendError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

const RECENT_SEARCH_PATH: &str = "/2/tweets/search/recent";
const TWEET_FIELDS: &str = "created_at,text";
const RATE_LIMIT_RESET_HEADER: &str = "x-rate-limit-reset";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Option<Vec<TweetDto>>,
    meta: Option<SearchMeta>,
}

#[derive(Debug, Deserialize)]
struct TweetDto {
    id: String,
    text: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct SearchMeta {
    #[serde(default)]
    result_count: usize,
    next_token: Option<String>,
}

/// Recent-search client for the Twitter API v2, authenticated with an
/// app-only bearer token.
pub struct TwitterClient {
    client: Client,
    base_url: String,
    bearer_token: String,
}

impl TwitterClient {
    pub fn new(base_url: &str, bearer_token: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sentiment-trend/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: bearer_token.to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, RECENT_SEARCH_PATH)
    }
}

#[async_trait]
impl SearchApi for TwitterClient {
    async fn search_recent(&self, request: &SearchRequest) -> Result<SearchPage> {
        let mut params = vec![
            ("query", request.query.clone()),
            ("max_results", request.max_results.to_string()),
            ("tweet.fields", TWEET_FIELDS.to_string()),
        ];
        if let Some(token) = &request.next_token {
            params.push(("next_token", token.clone()));
        }

        tracing::debug!(
            "Requesting {} (max_results={}, paginated={})",
            self.endpoint(),
            request.max_results,
            request.next_token.is_some()
        );

        let response = self
            .client
            .get(self.endpoint())
            .bearer_auth(&self.bearer_token)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Search API response status: {}", status);

        if status == StatusCode::TOO_MANY_REQUESTS {
            let reset_at = response
                .headers()
                .get(RATE_LIMIT_RESET_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<i64>().ok());
            return Err(TrendError::RateLimited { reset_at });
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(TrendError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        let meta = parsed.meta;
        let posts: Vec<Post> = parsed
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|tweet| Post {
                id: Some(tweet.id),
                text: tweet.text,
                created_at: tweet.created_at,
            })
            .collect();

        if let Some(meta) = &meta {
            if meta.result_count != posts.len() {
                tracing::debug!(
                    "result_count {} differs from {} returned posts",
                    meta.result_count,
                    posts.len()
                );
            }
        }

        Ok(SearchPage {
            posts,
            next_token: meta.and_then(|m| m.next_token),
        })
    }
}
