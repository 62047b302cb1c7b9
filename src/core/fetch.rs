use crate::config::RateLimitPolicy;
use crate::domain::model::{FetchReport, Post, SearchPage, StopReason};
use crate::domain::ports::{SearchApi, SearchRequest};
use crate::utils::error::Result;
use std::collections::HashSet;

/// Largest page the recent-search endpoint serves.
pub const MAX_PAGE_SIZE: usize = 100;
/// Smallest page size the endpoint accepts.
pub const MIN_PAGE_SIZE: usize = 10;

pub fn page_size(remaining: usize) -> usize {
    remaining.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

/// Paginated fetch over a [`SearchApi`], waiting out rate limits.
pub struct PostFetcher<'a, A: SearchApi + ?Sized> {
    api: &'a A,
    policy: RateLimitPolicy,
    dedupe: bool,
}

impl<'a, A: SearchApi + ?Sized> PostFetcher<'a, A> {
    pub fn new(api: &'a A, policy: RateLimitPolicy) -> Self {
        Self {
            api,
            policy,
            dedupe: true,
        }
    }

    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Fetches up to `max_results` posts. Never fails: an upstream error
    /// other than a rate limit ends the fetch and keeps what was collected.
    pub async fn fetch(&self, query: &str, max_results: usize) -> FetchReport {
        let mut posts: Vec<Post> = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut next_token: Option<String> = None;
        let mut pages_requested = 0usize;
        let mut rate_limit_waits = 0u32;
        let mut duplicates_skipped = 0usize;

        tracing::info!("🔎 Starting fetch of up to {} posts...", max_results);

        let stop_reason = loop {
            if posts.len() >= max_results {
                break StopReason::ReachedLimit;
            }

            let request = SearchRequest {
                query: query.to_string(),
                max_results: page_size(max_results - posts.len()),
                next_token: next_token.take(),
            };

            pages_requested += 1;
            let page = match self.request_page(&request, &mut rate_limit_waits).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("⚠️ Error occurred, keeping {} posts: {}", posts.len(), e);
                    break StopReason::Aborted(e.to_string());
                }
            };

            if page.posts.is_empty() {
                tracing::debug!("Empty page, no more data");
                break StopReason::NoData;
            }

            for post in page.posts {
                if posts.len() >= max_results {
                    break;
                }
                if self.dedupe {
                    if let Some(id) = &post.id {
                        if !seen_ids.insert(id.clone()) {
                            duplicates_skipped += 1;
                            continue;
                        }
                    }
                }
                posts.push(post);
            }

            tracing::info!("📥 Fetched {} posts so far...", posts.len());

            match page.next_token {
                Some(token) => next_token = Some(token),
                None if posts.len() >= max_results => break StopReason::ReachedLimit,
                None => break StopReason::NoNextPage,
            }
        };

        tracing::info!(
            "✅ Finished fetching {} posts ({} pages, {} rate-limit waits, {} duplicates skipped, stop: {:?})",
            posts.len(),
            pages_requested,
            rate_limit_waits,
            duplicates_skipped,
            stop_reason
        );

        FetchReport {
            posts,
            pages_requested,
            rate_limit_waits,
            duplicates_skipped,
            stop_reason,
        }
    }

    async fn request_page(&self, request: &SearchRequest, waits: &mut u32) -> Result<SearchPage> {
        let mut retries = 0u32;
        loop {
            match self.api.search_recent(request).await {
                Err(e) if e.is_rate_limited() => {
                    if let Some(max) = self.policy.max_retries {
                        if retries >= max {
                            return Err(e);
                        }
                    }
                    retries += 1;
                    *waits += 1;
                    tracing::warn!(
                        "⏳ {}. Sleeping for {:?} before retry {}...",
                        e,
                        self.policy.cooldown,
                        retries
                    );
                    tokio::time::sleep(self.policy.cooldown).await;
                }
                other => return other,
            }
        }
    }
}
