pub mod hashtags;
pub mod lexicon;
pub mod normalizer;
pub mod query;

use crate::domain::model::{EnrichedPost, Post, SentimentCategory};
use crate::domain::ports::PolarityScorer;

pub fn categorize(score: f64) -> SentimentCategory {
    SentimentCategory::from_score(score)
}

/// Cleans a post and scores the cleaned text.
pub fn enrich<P: PolarityScorer + ?Sized>(post: Post, scorer: &P) -> EnrichedPost {
    let cleaned_text = normalizer::clean(&post.text);
    let sentiment_score = scorer.polarity(&cleaned_text).clamp(-1.0, 1.0);
    EnrichedPost {
        id: post.id,
        text: post.text,
        created_at: post.created_at,
        cleaned_text,
        sentiment_score,
        sentiment_category: categorize(sentiment_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    fn post(text: &str) -> Post {
        Post {
            id: Some("1".to_string()),
            text: text.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_enrich_uses_injected_scorer() {
        let enriched = enrich(post("Great #Storm coming! http://x.co @user"), &FixedScorer(-0.25));
        assert_eq!(enriched.cleaned_text, "Great Storm coming");
        assert_eq!(enriched.sentiment_score, -0.25);
        assert_eq!(enriched.sentiment_category, SentimentCategory::Negative);
        assert_eq!(enriched.text, "Great #Storm coming! http://x.co @user");
    }

    #[test]
    fn test_enrich_clamps_out_of_range_scores() {
        let enriched = enrich(post("anything"), &FixedScorer(4.0));
        assert_eq!(enriched.sentiment_score, 1.0);
        assert_eq!(enriched.sentiment_category, SentimentCategory::Positive);
    }

    #[test]
    fn test_enrich_zero_is_neutral() {
        let enriched = enrich(post("rainfall tomorrow"), &FixedScorer(0.0));
        assert_eq!(enriched.sentiment_category, SentimentCategory::Neutral);
    }
}
