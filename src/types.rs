//! Core types for rapid_summarizer
//!
//! This module defines the language variants, the per-document data that flows
//! between pipeline stages, and the summarizer configuration.

use crate::errors::{Result, SummarizerError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Language
// ============================================================================

/// The closed set of supported document languages.
///
/// Each variant carries its own segmentation rules, join punctuation and
/// keyword-ranking strategy; callers dispatch through the methods below rather
/// than branching on string constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Language {
    /// Word-segmented text (dictionary-based segmentation, `。！？` terminators)
    Chinese,
    /// Whitespace-segmented text (`.!?` terminators)
    #[default]
    English,
}

/// How keywords are ranked for a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordStrategy {
    /// TextRank over a term co-occurrence graph
    CooccurrenceRank,
    /// Raw term frequency, first-seen order on ties
    Frequency,
}

impl Language {
    /// Sentence-terminal punctuation, treated as delimiters by the splitter
    pub fn terminators(&self) -> &'static [char] {
        match self {
            Language::Chinese => &['。', '！', '？'],
            Language::English => &['.', '!', '?'],
        }
    }

    /// Check if a character ends a sentence in this language
    pub fn is_terminator(&self, c: char) -> bool {
        self.terminators().contains(&c)
    }

    /// Separator placed between joined summary sentences
    pub fn separator(&self) -> &'static str {
        match self {
            Language::Chinese => "。",
            Language::English => ". ",
        }
    }

    /// Mark placed after the last joined summary sentence
    pub fn terminal(&self) -> &'static str {
        match self {
            Language::Chinese => "。",
            Language::English => ".",
        }
    }

    /// Join sentences with this language's terminal punctuation.
    ///
    /// Every sentence, including the last, is followed by one mark. An empty
    /// input joins to an empty string.
    pub fn join<'a>(&self, sentences: impl IntoIterator<Item = &'a str>) -> String {
        let parts: Vec<&str> = sentences.into_iter().collect();
        if parts.is_empty() {
            return String::new();
        }
        let mut joined = parts.join(self.separator());
        joined.push_str(self.terminal());
        joined
    }

    /// Whether tokenization needs a dictionary word segmenter
    pub fn segments_words(&self) -> bool {
        matches!(self, Language::Chinese)
    }

    /// Keyword ranking strategy for this language
    pub fn keyword_strategy(&self) -> KeywordStrategy {
        match self {
            Language::Chinese => KeywordStrategy::CooccurrenceRank,
            Language::English => KeywordStrategy::Frequency,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Chinese => "chinese",
            Language::English => "english",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = SummarizerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "chinese" | "zh" | "zh-cn" | "zh_cn" | "cn" => Ok(Language::Chinese),
            "english" | "en" => Ok(Language::English),
            other => Err(SummarizerError::invalid_config(format!(
                "unsupported language tag '{other}' (expected 'chinese' or 'english')"
            ))),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = SummarizerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Sentence & Term
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Position within the document's sentence sequence (0-based)
    pub index: usize,
    /// The trimmed sentence text, without its terminator
    pub text: String,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// A word from the keyword term stream
///
/// Non-candidate words are kept so that co-occurrence windows are measured
/// over the raw word sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Normalized word
    pub text: String,
    /// Position in the raw word stream
    pub position: usize,
    /// Whether the word may become a keyword graph node
    pub is_candidate: bool,
}

impl Term {
    /// Create a new term
    pub fn new(text: impl Into<String>, position: usize, is_candidate: bool) -> Self {
        Self {
            text: text.into(),
            position,
            is_candidate,
        }
    }
}

/// A sentence paired with its importance score, used for selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSentence {
    /// Original sentence index
    pub index: usize,
    /// PageRank score
    pub score: f64,
    /// Sentence text
    pub text: String,
}

impl RankedSentence {
    /// Create a new ranked sentence
    pub fn new(index: usize, score: f64, text: impl Into<String>) -> Self {
        Self {
            index,
            score,
            text: text.into(),
        }
    }

    /// Selection order: higher score first, larger original index on ties
    pub fn selection_cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.index.cmp(&self.index))
    }
}

// ============================================================================
// Summary length
// ============================================================================

/// How many sentences a summary should keep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLength {
    /// A fraction of the document's sentence count, floored at the minimum
    Ratio(f64),
    /// An explicit sentence count
    TopN(usize),
}

impl SummaryLength {
    /// Resolve to a sentence count for a document of `total` sentences.
    ///
    /// The result never exceeds `total`. The ratio path is floored at
    /// `min_sentences`; an explicit count is taken as given.
    pub fn sentence_count(&self, total: usize, min_sentences: usize) -> usize {
        match *self {
            SummaryLength::TopN(n) => n.min(total),
            SummaryLength::Ratio(ratio) => {
                let scaled = (total as f64 * ratio).floor();
                let scaled = if scaled.is_finite() && scaled > 0.0 {
                    scaled as usize
                } else {
                    0
                };
                scaled.max(min_sentences).min(total)
            }
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for summarization and keyword extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Document language
    pub language: Language,
    /// Fraction of sentences to keep when no explicit count is given
    pub ratio: f64,
    /// Explicit number of sentences to keep (overrides `ratio`)
    pub top_n: Option<usize>,
    /// Documents with at most this many sentences are returned unchanged;
    /// also the floor for ratio-derived counts
    pub min_sentences: usize,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Convergence threshold (stop when L1 delta < threshold)
    pub convergence_threshold: f64,
    /// Default number of keywords to return
    pub keyword_top_k: usize,
    /// Co-occurrence span for keyword TextRank
    pub keyword_window: usize,
    /// Extend the built-in stopword list with the full `stop-words` list
    pub extended_stopwords: bool,
    /// Additional stopwords
    pub stopwords: Vec<String>,
    /// Sentence count at which similarity rows are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            ratio: 0.3,
            top_n: None,
            min_sentences: 3,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            keyword_top_k: 10,
            keyword_window: 5,
            extended_stopwords: false,
            stopwords: Vec::new(),
            parallel_threshold: 256,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// An unrecognized `language` tag is an `InvalidConfig` error, like any
    /// other bad setting; only malformed JSON yields `Json`.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut document: serde_json::Value = serde_json::from_str(json)?;

        if let Some(slot) = document.get_mut("language") {
            let tag = slot
                .as_str()
                .ok_or_else(|| SummarizerError::invalid_config("language must be a string"))?;
            let language: Language = tag.parse()?;
            *slot = serde_json::Value::from(language.as_str());
        }

        let config: SummarizerConfig = serde_json::from_value(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizerError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizerError::invalid_config("max_iterations must be > 0"));
        }

        if self.convergence_threshold <= 0.0 || self.convergence_threshold.is_nan() {
            return Err(SummarizerError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if !self.ratio.is_finite() || self.ratio < 0.0 {
            return Err(SummarizerError::invalid_config(format!(
                "ratio must be a non-negative number, got {}",
                self.ratio
            )));
        }

        if self.min_sentences == 0 {
            return Err(SummarizerError::invalid_config("min_sentences must be > 0"));
        }

        if self.top_n == Some(0) {
            return Err(SummarizerError::invalid_config("top_n must be > 0"));
        }

        if self.keyword_window < 2 {
            return Err(SummarizerError::invalid_config(
                "keyword_window must be >= 2",
            ));
        }

        Ok(())
    }

    /// The selection target implied by `top_n` and `ratio`
    pub fn summary_length(&self) -> SummaryLength {
        match self.top_n {
            Some(n) => SummaryLength::TopN(n),
            None => SummaryLength::Ratio(self.ratio),
        }
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Builder method: set ratio
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Builder method: set explicit sentence count
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// Builder method: set the bypass threshold and ratio floor
    pub fn with_min_sentences(mut self, min_sentences: usize) -> Self {
        self.min_sentences = min_sentences;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set default keyword count
    pub fn with_keyword_top_k(mut self, top_k: usize) -> Self {
        self.keyword_top_k = top_k;
        self
    }

    /// Builder method: set keyword co-occurrence window
    pub fn with_keyword_window(mut self, window: usize) -> Self {
        self.keyword_window = window;
        self
    }

    /// Builder method: use the extended stopword list
    pub fn with_extended_stopwords(mut self, extended: bool) -> Self {
        self.extended_stopwords = extended;
        self
    }

    /// Builder method: add stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set the parallel similarity threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!("chinese".parse::<Language>().unwrap(), Language::Chinese);
        assert_eq!("ZH".parse::<Language>().unwrap(), Language::Chinese);
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn test_unknown_language_rejected() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(err.is_invalid_config());
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_language_join() {
        assert_eq!(Language::English.join(["A", "B"]), "A. B.");
        assert_eq!(Language::Chinese.join(["甲", "乙"]), "甲。乙。");
        assert_eq!(Language::English.join(["only"]), "only.");
        assert_eq!(Language::English.join(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_language_capabilities() {
        assert!(Language::Chinese.segments_words());
        assert!(!Language::English.segments_words());
        assert!(Language::English.is_terminator('?'));
        assert!(!Language::English.is_terminator('。'));
        assert_eq!(
            Language::Chinese.keyword_strategy(),
            KeywordStrategy::CooccurrenceRank
        );
        assert_eq!(Language::English.keyword_strategy(), KeywordStrategy::Frequency);
    }

    #[test]
    fn test_sentence_count_top_n_clamped() {
        assert_eq!(SummaryLength::TopN(2).sentence_count(10, 3), 2);
        assert_eq!(SummaryLength::TopN(20).sentence_count(10, 3), 10);
    }

    #[test]
    fn test_sentence_count_ratio_floor() {
        // 10 * 0.3 = 3
        assert_eq!(SummaryLength::Ratio(0.3).sentence_count(10, 3), 3);
        // 5 * 0.3 = 1.5 -> floored up to 3
        assert_eq!(SummaryLength::Ratio(0.3).sentence_count(5, 3), 3);
        // 20 * 0.5 = 10
        assert_eq!(SummaryLength::Ratio(0.5).sentence_count(20, 3), 10);
        // never more than the document has
        assert_eq!(SummaryLength::Ratio(2.0).sentence_count(6, 3), 6);
    }

    #[test]
    fn test_selection_cmp_prefers_score_then_larger_index() {
        let a = RankedSentence::new(0, 0.5, "a");
        let b = RankedSentence::new(1, 0.2, "b");
        let c = RankedSentence::new(2, 0.5, "c");

        let mut ranked = vec![a, b, c];
        ranked.sort_by(RankedSentence::selection_cmp);

        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn test_config_defaults_valid() {
        let config = SummarizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.summary_length(), SummaryLength::Ratio(0.3));
    }

    #[test]
    fn test_config_validation() {
        assert!(SummarizerConfig::new().with_damping(1.5).validate().is_err());
        assert!(SummarizerConfig::new().with_max_iterations(0).validate().is_err());
        assert!(SummarizerConfig::new()
            .with_convergence_threshold(0.0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::new().with_ratio(-0.1).validate().is_err());
        assert!(SummarizerConfig::new().with_top_n(0).validate().is_err());
        assert!(SummarizerConfig::new().with_keyword_window(1).validate().is_err());
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{ "language": "chinese", "top_n": 3, "stopwords": ["例如"] }"#;
        let config = SummarizerConfig::from_json(json).unwrap();
        assert_eq!(config.language, Language::Chinese);
        assert_eq!(config.summary_length(), SummaryLength::TopN(3));
        assert_eq!(config.stopwords, vec!["例如".to_string()]);
        // untouched fields keep defaults
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_config_from_json_rejects_bad_language() {
        let err = SummarizerConfig::from_json(r#"{ "language": "french" }"#).unwrap_err();
        assert!(err.is_invalid_config());
        assert!(err.to_string().contains("french"));

        let err = SummarizerConfig::from_json(r#"{ "language": 7 }"#).unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_config_from_json_accepts_language_aliases() {
        let config = SummarizerConfig::from_json(r#"{ "language": "zh" }"#).unwrap();
        assert_eq!(config.language, Language::Chinese);

        let language: Language = serde_json::from_str(r#""EN""#).unwrap();
        assert_eq!(language, Language::English);
        assert_eq!(serde_json::to_string(&Language::Chinese).unwrap(), r#""chinese""#);
    }

    #[test]
    fn test_config_from_json_malformed_is_json_error() {
        let err = SummarizerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SummarizerError::Json(_)));
    }

    #[test]
    fn test_min_sentences_must_be_positive() {
        let err = SummarizerConfig::new()
            .with_min_sentences(0)
            .validate()
            .unwrap_err();
        assert!(err.is_invalid_config());
        assert!(SummarizerConfig::new().with_min_sentences(1).validate().is_ok());
    }

    #[test]
    fn test_config_from_json_runs_validation() {
        let err = SummarizerConfig::from_json(r#"{ "damping": 2.0 }"#).unwrap_err();
        assert!(err.is_invalid_config());
    }
}
