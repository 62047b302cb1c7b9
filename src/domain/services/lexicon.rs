//! # Polarity Lexicon
//!
//! General-English word polarities for rule-based scoring of short posts.

use crate::domain::ports::PolarityScorer;
use std::collections::HashMap;

/// Multiplier applied to a negated word, on top of the sign flip.
const NEGATION_DAMPING: f64 = 0.5;

/// Lexicon-based polarity estimator.
///
/// Scoring walks the whitespace tokens of a text:
/// 1. Negations mark the next scored word to be flipped and damped
/// 2. Intensifiers scale the next scored word
/// 3. The polarity is the mean of the scored words, clamped to [-1, 1]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    negations: Vec<String>,
    intensifiers: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        let mut words = HashMap::new();

        let positive_words = [
            ("good", 0.7),
            ("great", 0.8),
            ("excellent", 1.0),
            ("amazing", 0.6),
            ("awesome", 1.0),
            ("wonderful", 1.0),
            ("beautiful", 0.85),
            ("lovely", 0.5),
            ("nice", 0.6),
            ("best", 1.0),
            ("better", 0.5),
            ("happy", 0.8),
            ("glad", 0.5),
            ("love", 0.5),
            ("enjoy", 0.4),
            ("fun", 0.3),
            ("perfect", 1.0),
            ("fantastic", 0.4),
            ("pleasant", 0.73),
            ("sunny", 0.3),
            ("clear", 0.1),
            ("calm", 0.3),
            ("fresh", 0.3),
            ("cool", 0.35),
            ("warm", 0.6),
            ("hot", 0.25),
            ("safe", 0.5),
            ("hope", 0.3),
            ("hopeful", 0.5),
            ("relief", 0.4),
            ("thanks", 0.2),
            ("thank", 0.2),
            ("grateful", 0.6),
            ("helpful", 0.4),
            ("positive", 0.23),
            ("success", 0.3),
            ("win", 0.8),
            ("strong", 0.43),
            ("true", 0.35),
            ("interesting", 0.5),
            ("important", 0.4),
            ("free", 0.4),
            ("first", 0.25),
            ("new", 0.14),
            ("right", 0.29),
            ("easy", 0.43),
            ("clean", 0.37),
            ("recovery", 0.3),
            ("rebuild", 0.2),
            ("protect", 0.3),
        ];

        let negative_words = [
            ("bad", -0.7),
            ("worse", -0.4),
            ("worst", -1.0),
            ("terrible", -1.0),
            ("horrible", -1.0),
            ("awful", -1.0),
            ("sad", -0.5),
            ("angry", -0.5),
            ("scary", -0.5),
            ("afraid", -0.6),
            ("fear", -0.5),
            ("hate", -0.8),
            ("dangerous", -0.6),
            ("deadly", -0.2),
            ("dead", -0.2),
            ("severe", -0.4),
            ("extreme", -0.13),
            ("heavy", -0.2),
            ("dark", -0.15),
            ("cold", -0.6),
            ("wet", -0.1),
            ("poor", -0.4),
            ("wrong", -0.5),
            ("broken", -0.4),
            ("damage", -0.4),
            ("damaged", -0.4),
            ("destroyed", -0.6),
            ("disaster", -0.7),
            ("catastrophic", -0.8),
            ("crisis", -0.5),
            ("emergency", -0.3),
            ("warning", -0.2),
            ("threat", -0.4),
            ("risk", -0.2),
            ("loss", -0.4),
            ("lost", -0.3),
            ("fail", -0.5),
            ("failure", -0.3),
            ("problem", -0.3),
            ("crazy", -0.6),
            ("stupid", -0.8),
            ("ugly", -0.7),
            ("annoying", -0.8),
            ("miserable", -1.0),
            ("sick", -0.71),
            ("hard", -0.29),
            ("negative", -0.3),
            ("unsafe", -0.5),
        ];

        for (word, score) in positive_words.into_iter().chain(negative_words) {
            words.insert(word.to_string(), score);
        }

        let negations = [
            "not", "no", "never", "neither", "nobody", "nothing", "none", "cannot", "cant",
            "dont", "doesnt", "didnt", "wont", "wouldnt", "shouldnt", "couldnt", "isnt", "arent",
            "wasnt", "werent", "hardly", "barely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let mut intensifiers = HashMap::new();
        intensifiers.insert("very".to_string(), 1.3);
        intensifiers.insert("really".to_string(), 1.2);
        intensifiers.insert("so".to_string(), 1.2);
        intensifiers.insert("extremely".to_string(), 1.5);
        intensifiers.insert("incredibly".to_string(), 1.5);
        intensifiers.insert("super".to_string(), 1.4);
        intensifiers.insert("too".to_string(), 1.2);
        intensifiers.insert("most".to_string(), 1.3);
        intensifiers.insert("slightly".to_string(), 0.5);
        intensifiers.insert("somewhat".to_string(), 0.7);
        intensifiers.insert("bit".to_string(), 0.6);

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Polarity of a single word, case-insensitive.
    pub fn get_score(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    pub fn get_intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(&word.to_lowercase()).copied()
    }

    /// Adds or overrides a word polarity, clamped to [-1, 1].
    #[cfg(test)]
    fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.words
            .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
        self
    }

    pub fn score(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut matched = 0usize;
        let mut negate_next = false;
        let mut intensifier = 1.0;

        for word in text.split_whitespace() {
            let word = word.to_lowercase();

            if self.is_negation(&word) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.get_intensifier(&word) {
                intensifier = mult;
                continue;
            }

            if let Some(mut score) = self.get_score(&word) {
                if negate_next {
                    score = -score * NEGATION_DAMPING;
                    negate_next = false;
                }
                score *= intensifier;
                intensifier = 1.0;

                total += score;
                matched += 1;
            }
        }

        if matched == 0 {
            return 0.0;
        }

        (total / matched as f64).clamp(-1.0, 1.0)
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        self.score(text)
    }
}
