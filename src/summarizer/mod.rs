//! Extractive summarization
//!
//! [`TextSummarizer`] runs the sentence pipeline:
//! 1. Segment the document into sentences
//! 2. Count each sentence's content words into a [`TermBag`]
//! 3. Build the cosine similarity matrix and row-normalize it
//! 4. Rank sentences with PageRank
//! 5. Keep the top sentences and join them in document order
//!
//! Documents with `min_sentences` sentences or fewer are returned unchanged.

pub mod selector;
pub mod term_bag;

use crate::errors::Result;
use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SimilarityMatrix;
use crate::keywords::{Keyword, KeywordExtractor};
use crate::nlp::segmenter::SentenceSplitter;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::types::{Language, RankedSentence, Sentence, SummarizerConfig, SummaryLength};
use rayon::prelude::*;
use selector::SentenceSelector;
use serde::Serialize;
use std::sync::Arc;
use term_bag::TermBag;

/// Enter a tracing span for a summarizer stage (when the `tracing` feature
/// is enabled). When disabled, this expands to nothing.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_SIMILARITY: &str = "similarity";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_KEYWORDS: &str = "keywords";

/// Outcome of a summarization call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    /// The summary text
    pub text: String,
    /// Kept sentences in document order. When `bypassed`, every sentence is
    /// kept and scores are 0 (no ranking ran).
    pub sentences: Vec<RankedSentence>,
    /// Number of sentences in the input
    pub total_sentences: usize,
    /// Whether the document was short enough to be returned unchanged
    pub bypassed: bool,
    /// PageRank iterations performed
    pub iterations: usize,
    /// Whether PageRank converged within the iteration cap
    pub converged: bool,
}

impl SummaryResult {
    fn empty() -> Self {
        Self {
            text: String::new(),
            sentences: Vec::new(),
            total_sentences: 0,
            bypassed: false,
            iterations: 0,
            converged: true,
        }
    }
}

/// TextRank summarizer and keyword extractor for one language
#[derive(Debug, Clone)]
pub struct TextSummarizer {
    config: SummarizerConfig,
    splitter: SentenceSplitter,
    tokenizer: Tokenizer,
    selector: SentenceSelector,
    ranker: StandardPageRank,
    keywords: KeywordExtractor,
}

impl TextSummarizer {
    /// Create a summarizer with default settings
    pub fn new(language: Language) -> Self {
        let config = SummarizerConfig::default().with_language(language);
        Self::build(config)
    }

    /// Create a summarizer from a language tag such as `"english"` or `"zh"`
    pub fn from_language_tag(tag: &str) -> Result<Self> {
        Ok(Self::new(tag.parse()?))
    }

    /// Create a summarizer from a validated configuration
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SummarizerConfig) -> Self {
        let language = config.language;

        let mut stopwords = if config.extended_stopwords {
            StopwordFilter::extended(language)
        } else {
            StopwordFilter::new(language)
        };
        stopwords.add_stopwords(&config.stopwords);

        let tokenizer = Tokenizer::with_stopwords(language, Arc::new(stopwords));
        let ranker = StandardPageRank::new()
            .with_damping(config.damping)
            .with_max_iterations(config.max_iterations)
            .with_threshold(config.convergence_threshold);
        let selector = SentenceSelector::new(language).with_min_sentences(config.min_sentences);
        let keywords = KeywordExtractor::from_config(&config, tokenizer.clone());

        Self {
            splitter: SentenceSplitter::new(language),
            tokenizer,
            selector,
            ranker,
            keywords,
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// The summarizer's language
    pub fn language(&self) -> Language {
        self.config.language
    }

    /// The tokenizer shared by summarization and keyword extraction
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Segment a document into sentences
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        self.splitter.sentences(text)
    }

    /// Cosine similarity of two sentences' content words
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let bag_a = TermBag::from_tokens(self.tokenizer.tokenize(a));
        let bag_b = TermBag::from_tokens(self.tokenizer.tokenize(b));
        bag_a.cosine_similarity(&bag_b)
    }

    /// Row-normalized similarity matrix over `sentences`
    pub fn similarity_matrix(&self, sentences: &[Sentence]) -> SimilarityMatrix {
        let tokenize = |s: &Sentence| TermBag::from_tokens(self.tokenizer.tokenize(&s.text));

        let bags: Vec<TermBag> = if sentences.len() >= self.config.parallel_threshold {
            sentences.par_iter().map(tokenize).collect()
        } else {
            sentences.iter().map(tokenize).collect()
        };

        SimilarityMatrix::build(&bags, self.config.parallel_threshold).into_normalized()
    }

    /// PageRank scores for `sentences`, one per sentence index
    pub fn rank_sentences(&self, sentences: &[Sentence]) -> PageRankResult {
        let matrix = {
            trace_stage!(STAGE_SIMILARITY);
            self.similarity_matrix(sentences)
        };

        trace_stage!(STAGE_RANK);
        let labels = sentences.iter().map(|s| s.text.clone()).collect();
        let graph = CsrGraph::from_matrix(&matrix, labels);
        let result = self.ranker.run(&graph);

        #[cfg(feature = "tracing")]
        {
            if !result.converged {
                tracing::debug!(
                    sentences = sentences.len(),
                    iterations = result.iterations,
                    delta = result.delta,
                    "sentence ranking stopped at the iteration cap"
                );
            }
        }

        result
    }

    /// Summarize using the configured ratio or sentence count
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_with(text, self.config.summary_length())
    }

    /// Summarize to an explicit length
    pub fn summarize_with(&self, text: &str, length: SummaryLength) -> String {
        self.summarize_detailed(text, length).text
    }

    /// Summarize and report the selected sentences and ranking statistics
    pub fn summarize_detailed(&self, text: &str, length: SummaryLength) -> SummaryResult {
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            self.splitter.sentences(text)
        };

        if sentences.is_empty() {
            return SummaryResult::empty();
        }

        let total_sentences = sentences.len();
        if total_sentences <= self.config.min_sentences {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                sentences = total_sentences,
                "document below ranking threshold, returning it unchanged"
            );

            return SummaryResult {
                text: text.to_string(),
                sentences: sentences
                    .into_iter()
                    .map(|s| RankedSentence::new(s.index, 0.0, s.text))
                    .collect(),
                total_sentences,
                bypassed: true,
                iterations: 0,
                converged: true,
            };
        }

        let pagerank = self.rank_sentences(&sentences);

        trace_stage!(STAGE_SELECT);
        let ranked = SentenceSelector::rank(&sentences, &pagerank.scores);
        let selected = self.selector.select(ranked, length);
        let summary = self.selector.assemble(&selected);

        SummaryResult {
            text: summary,
            sentences: selected,
            total_sentences,
            bypassed: false,
            iterations: pagerank.iterations,
            converged: pagerank.converged,
        }
    }

    /// Extract up to `keyword_top_k` keywords, most important first
    pub fn keywords(&self, text: &str) -> Vec<String> {
        self.keywords_with(text, self.config.keyword_top_k)
    }

    /// Extract up to `top_k` keywords, most important first
    pub fn keywords_with(&self, text: &str, top_k: usize) -> Vec<String> {
        trace_stage!(STAGE_KEYWORDS);
        self.keywords.extract(text, top_k)
    }

    /// Extract up to `top_k` keywords with their scores
    pub fn keywords_scored(&self, text: &str, top_k: usize) -> Vec<Keyword> {
        trace_stage!(STAGE_KEYWORDS);
        self.keywords.extract_scored(text, top_k)
    }
}
