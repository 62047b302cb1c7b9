use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single fetched post, as returned by the search API.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Option<String>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    pub const ALL: [SentimentCategory; 3] = [
        SentimentCategory::Positive,
        SentimentCategory::Negative,
        SentimentCategory::Neutral,
    ];

    /// Buckets a polarity by its sign. Zero, and NaN, are neutral.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentCategory::Positive
        } else if score < 0.0 {
            SentimentCategory::Negative
        } else {
            SentimentCategory::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "Positive",
            SentimentCategory::Negative => "Negative",
            SentimentCategory::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A post with its cleaned text and sentiment attached.
///
/// Field order is the report column order; the serde names are the
/// report headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPost {
    #[serde(skip)]
    pub id: Option<String>,
    #[serde(rename = "tweet")]
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "cleaned_tweet")]
    pub cleaned_text: String,
    pub sentiment_score: f64,
    pub sentiment_category: SentimentCategory,
}

/// Enriched posts in fetch arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    posts: Vec<EnrichedPost>,
}

impl ResultSet {
    pub fn new(posts: Vec<EnrichedPost>) -> Self {
        Self { posts }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnrichedPost> {
        self.posts.iter()
    }

    pub fn posts(&self) -> &[EnrichedPost] {
        &self.posts
    }

    pub fn count_category(&self, category: SentimentCategory) -> usize {
        self.posts
            .iter()
            .filter(|p| p.sentiment_category == category)
            .count()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a EnrichedPost;
    type IntoIter = std::slice::Iter<'a, EnrichedPost>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

impl FromIterator<EnrichedPost> for ResultSet {
    fn from_iter<I: IntoIterator<Item = EnrichedPost>>(iter: I) -> Self {
        Self {
            posts: iter.into_iter().collect(),
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub posts: Vec<Post>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    ReachedLimit,
    NoData,
    NoNextPage,
    Aborted(String),
}

/// Outcome of a paginated fetch. Partial results are kept on abort.
#[derive(Debug, Clone)]
pub struct FetchReport {
    pub posts: Vec<Post>,
    pub pages_requested: usize,
    pub rate_limit_waits: u32,
    pub duplicates_skipped: usize,
    pub stop_reason: StopReason,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_category_partitions_on_sign() {
        assert_eq!(SentimentCategory::from_score(0.0001), SentimentCategory::Positive);
        assert_eq!(SentimentCategory::from_score(1.0), SentimentCategory::Positive);
        assert_eq!(SentimentCategory::from_score(-0.0001), SentimentCategory::Negative);
        assert_eq!(SentimentCategory::from_score(-1.0), SentimentCategory::Negative);
        assert_eq!(SentimentCategory::from_score(0.0), SentimentCategory::Neutral);
        assert_eq!(SentimentCategory::from_score(-0.0), SentimentCategory::Neutral);
        assert_eq!(SentimentCategory::from_score(f64::NAN), SentimentCategory::Neutral);
        assert_eq!(
            SentimentCategory::from_score(f64::MIN_POSITIVE),
            SentimentCategory::Positive
        );
    }

    #[test]
    fn test_result_set_counts() {
        let make = |score: f64| EnrichedPost {
            id: None,
            text: "t".to_string(),
            created_at: Utc::now(),
            cleaned_text: "t".to_string(),
            sentiment_score: score,
            sentiment_category: SentimentCategory::from_score(score),
        };
        let set: ResultSet = vec![make(0.5), make(0.2), make(-0.1), make(0.0)]
            .into_iter()
            .collect();

        assert_eq!(set.len(), 4);
        assert_eq!(set.count_category(SentimentCategory::Positive), 2);
        assert_eq!(set.count_category(SentimentCategory::Negative), 1);
        assert_eq!(set.count_category(SentimentCategory::Neutral), 1);
    }

    proptest! {
        #[test]
        fn prop_category_partitions_every_float(score in proptest::num::f64::ANY) {
            match SentimentCategory::from_score(score) {
                SentimentCategory::Positive => prop_assert!(score > 0.0),
                SentimentCategory::Negative => prop_assert!(score < 0.0),
                SentimentCategory::Neutral => prop_assert!(score == 0.0 || score.is_nan()),
            }
        }

        #[test]
        fn prop_category_flips_with_sign(score in proptest::num::f64::NORMAL) {
            let (pos, neg) = (
                SentimentCategory::from_score(score),
                SentimentCategory::from_score(-score),
            );
            prop_assert_ne!(pos, neg);
            prop_assert_ne!(pos, SentimentCategory::Neutral);
            prop_assert_ne!(neg, SentimentCategory::Neutral);
        }
    }
}
