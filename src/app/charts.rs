//! Chart data shaping. Everything here is pure; rendering lives in
//! [`crate::app::visualizer`].

use crate::domain::model::{ResultSet, SentimentCategory};
use crate::domain::services::hashtags::extract_hashtags;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "amp", "an",
        "and", "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
        "during", "each", "else", "ever", "few", "for", "from", "further", "get", "had", "has",
        "have", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how",
        "however", "i", "if", "im", "in", "into", "is", "it", "its", "itself", "just", "let",
        "like", "me", "more", "most", "my", "myself", "nor", "of", "off", "on", "once", "only",
        "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own",
        "rt", "same", "shall", "she", "should", "since", "so", "some", "such", "than", "that",
        "thats", "the", "their", "theirs", "them", "themselves", "then", "there", "theres",
        "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
        "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
        "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// One slice of the sentiment pie.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: SentimentCategory,
    pub count: usize,
    pub percent: f64,
}

/// Category counts and percentages, largest first. Empty categories are omitted.
pub fn sentiment_distribution(results: &ResultSet) -> Vec<CategoryShare> {
    let total = results.len();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<CategoryShare> = SentimentCategory::ALL
        .into_iter()
        .map(|category| {
            let count = results.count_category(category);
            CategoryShare {
                category,
                count,
                percent: count as f64 * 100.0 / total as f64,
            }
        })
        .filter(|share| share.count > 0)
        .collect();

    // Stable sort keeps Positive, Negative, Neutral order on ties.
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

/// Counts items and orders them by count descending, then alphabetically.
fn rank<I: IntoIterator<Item = String>>(items: I) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Lowercased cleaned-text tokens minus stopwords and single characters.
pub fn word_frequencies(results: &ResultSet, max_words: usize) -> Vec<(String, usize)> {
    let tokens = results.iter().flat_map(|post| {
        post.cleaned_text
            .split_whitespace()
            .map(str::to_lowercase)
            .filter(|word| word.chars().count() > 1 && !is_stopword(word))
            .collect::<Vec<_>>()
    });

    let mut ranked = rank(tokens);
    ranked.truncate(max_words);
    ranked
}

/// The `n` most frequent hashtags in the raw post text, case-sensitive.
pub fn top_hashtags(results: &ResultSet, n: usize) -> Vec<(String, usize)> {
    let tags = results.iter().flat_map(|post| extract_hashtags(&post.text));
    let mut ranked = rank(tags);
    ranked.truncate(n);
    ranked
}

/// Display size class of a word cloud entry, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WordTier {
    Huge,
    Large,
    Medium,
    Small,
}

impl WordTier {
    fn from_weight(weight: f64) -> Self {
        if weight >= 0.75 {
            WordTier::Huge
        } else if weight >= 0.5 {
            WordTier::Large
        } else if weight >= 0.25 {
            WordTier::Medium
        } else {
            WordTier::Small
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedWord {
    pub word: String,
    pub count: usize,
    /// Count relative to the most frequent word, in (0, 1].
    pub weight: f64,
    pub tier: WordTier,
}

pub fn word_cloud(results: &ResultSet, max_words: usize) -> Vec<WeightedWord> {
    let frequencies = word_frequencies(results, max_words);
    let Some(max_count) = frequencies.first().map(|(_, count)| *count) else {
        return Vec::new();
    };

    frequencies
        .into_iter()
        .map(|(word, count)| {
            let weight = count as f64 / max_count as f64;
            WeightedWord {
                word,
                count,
                weight,
                tier: WordTier::from_weight(weight),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::EnrichedPost;
    use chrono::Utc;

    fn post(text: &str, cleaned: &str, score: f64) -> EnrichedPost {
        EnrichedPost {
            id: None,
            text: text.to_string(),
            created_at: Utc::now(),
            cleaned_text: cleaned.to_string(),
            sentiment_score: score,
            sentiment_category: SentimentCategory::from_score(score),
        }
    }

    fn sample() -> ResultSet {
        ResultSet::new(vec![
            post("#Storm is here #flood", "Storm is here flood", -0.2),
            post("Big #Storm tonight", "Big Storm tonight", 0.0),
            post("Lovely day, no #rain", "Lovely day no rain", 0.5),
            post("The storm passed #Storm", "The storm passed Storm", 0.3),
            post("a b c", "a b c", 0.1),
        ])
    }

    #[test]
    fn test_sentiment_distribution() {
        let shares = sentiment_distribution(&sample());

        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].category, SentimentCategory::Positive);
        assert_eq!(shares[0].count, 3);
        assert!((shares[0].percent - 60.0).abs() < 1e-9);
        assert_eq!(shares[1].category, SentimentCategory::Negative);
        assert_eq!(shares[2].category, SentimentCategory::Neutral);
        let total: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_sentiment_distribution_omits_empty_categories() {
        let set = ResultSet::new(vec![post("x", "x", 0.4)]);
        let shares = sentiment_distribution(&set);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].percent, 100.0);
        assert!(sentiment_distribution(&ResultSet::default()).is_empty());
    }

    #[test]
    fn test_word_frequencies_drop_stopwords_and_short_tokens() {
        let freqs = word_frequencies(&sample(), 100);

        assert_eq!(freqs[0], ("storm".to_string(), 4));
        let words: Vec<&str> = freqs.iter().map(|(w, _)| w.as_str()).collect();
        assert!(!words.contains(&"is"));
        assert!(!words.contains(&"the"));
        assert!(!words.contains(&"a"));
        assert!(words.contains(&"flood"));
    }

    #[test]
    fn test_word_frequencies_truncate() {
        assert_eq!(word_frequencies(&sample(), 2).len(), 2);
    }

    #[test]
    fn test_top_hashtags_counts_raw_text() {
        let tags = top_hashtags(&sample(), 10);

        assert_eq!(
            tags,
            vec![
                ("Storm".to_string(), 3),
                ("flood".to_string(), 1),
                ("rain".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_ties_rank_alphabetically() {
        let set = ResultSet::new(vec![post("#zeta #alpha", "zeta alpha", 0.0)]);
        assert_eq!(
            top_hashtags(&set, 10),
            vec![("alpha".to_string(), 1), ("zeta".to_string(), 1)]
        );
        let words: Vec<String> = word_frequencies(&set, 10).into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_top_hashtags_limit_and_empty() {
        assert_eq!(top_hashtags(&sample(), 1).len(), 1);
        let set = ResultSet::new(vec![post("no tags", "no tags", 0.0)]);
        assert!(top_hashtags(&set, 10).is_empty());
    }

    #[test]
    fn test_word_cloud_weights() {
        let cloud = word_cloud(&sample(), 100);

        assert_eq!(cloud[0].word, "storm");
        assert_eq!(cloud[0].weight, 1.0);
        assert_eq!(cloud[0].tier, WordTier::Huge);
        assert!(cloud.iter().skip(1).all(|w| w.tier == WordTier::Medium));
        assert!(word_cloud(&ResultSet::default(), 100).is_empty());
    }
}
