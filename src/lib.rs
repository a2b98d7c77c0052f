//! Extractive TextRank summarization and keyword extraction
//!
//! Sentences are scored by PageRank over a cosine-similarity graph of their
//! content words, and the best ones are kept in document order. Keywords are
//! ranked over a word co-occurrence graph (Chinese) or by frequency (English).
//!
//! ```no_run
//! use rapid_summarizer::{Language, SummaryLength, TextSummarizer};
//!
//! let summarizer = TextSummarizer::new(Language::English);
//! let text = "Rust is fast. Rust is safe. Rust has great tooling. \
//!             Cargo builds Rust code. Many teams use Rust.";
//! let summary = summarizer.summarize_with(text, SummaryLength::TopN(2));
//! let keywords = summarizer.keywords_with(text, 3);
//! ```
//!
//! Enable the default `tracing` feature to get `summarizer_stage` spans.

pub mod errors;
pub mod graph;
pub mod keywords;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;

pub use errors::{Result, SummarizerError};
pub use keywords::{Keyword, KeywordExtractor};
pub use summarizer::{SummaryResult, TextSummarizer};
pub use types::{
    KeywordStrategy, Language, RankedSentence, Sentence, SummarizerConfig, SummaryLength,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
