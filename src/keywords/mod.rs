//! Keyword extraction
//!
//! Keywords are ranked independently of the sentence pipeline; only the
//! tokenizer is shared. Chinese text is ranked with TextRank over a term
//! co-occurrence graph, English text by term frequency.

pub mod cooccurrence;
pub mod frequency;

use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::standard::StandardPageRank;
use crate::types::{KeywordStrategy, Language, SummarizerConfig};
use serde::Serialize;

/// A ranked keyword
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyword {
    /// The normalized term
    pub text: String,
    /// PageRank score or occurrence count, depending on the strategy
    pub score: f64,
}

impl Keyword {
    /// Create a new keyword
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Extracts the most important terms of a document
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    tokenizer: Tokenizer,
    /// Co-occurrence span for the TextRank strategy
    window: usize,
    ranker: StandardPageRank,
}

impl KeywordExtractor {
    /// Create an extractor with default settings and built-in stopwords
    pub fn new(language: Language) -> Self {
        Self::from_config(&SummarizerConfig::default(), Tokenizer::new(language))
    }

    /// Create an extractor from a configuration, sharing `tokenizer`
    pub fn from_config(config: &SummarizerConfig, tokenizer: Tokenizer) -> Self {
        let ranker = StandardPageRank::new()
            .with_damping(config.damping)
            .with_max_iterations(config.max_iterations)
            .with_threshold(config.convergence_threshold);
        Self {
            tokenizer,
            window: config.keyword_window,
            ranker,
        }
    }

    /// Set the co-occurrence window (minimum 2)
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(2);
        self
    }

    /// The strategy used for this extractor's language
    pub fn strategy(&self) -> KeywordStrategy {
        self.tokenizer.language().keyword_strategy()
    }

    /// Up to `top_k` keywords, most important first
    pub fn extract(&self, text: &str, top_k: usize) -> Vec<String> {
        self.extract_scored(text, top_k)
            .into_iter()
            .map(|k| k.text)
            .collect()
    }

    /// Up to `top_k` keywords with their scores, most important first
    pub fn extract_scored(&self, text: &str, top_k: usize) -> Vec<Keyword> {
        if top_k == 0 {
            return Vec::new();
        }

        let terms = self.tokenizer.terms(text);
        let mut keywords = match self.strategy() {
            KeywordStrategy::CooccurrenceRank => {
                cooccurrence::rank_terms(&terms, self.window, &self.ranker)
            }
            KeywordStrategy::Frequency => frequency::rank_terms(&terms),
        };
        keywords.truncate(top_k);
        keywords
    }
}
