//! Sentence segmentation
//!
//! Splits raw text on the language's terminal punctuation. Terminators are
//! treated as delimiters and dropped; fragments are trimmed and empty ones
//! discarded. Trailing text without a terminator still forms a sentence.

use crate::types::{Language, Sentence};

/// Splits text into sentences for one language
#[derive(Debug, Clone, Copy)]
pub struct SentenceSplitter {
    language: Language,
}

impl SentenceSplitter {
    /// Create a splitter for the given language
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// The language this splitter segments
    pub fn language(&self) -> Language {
        self.language
    }

    /// Lazily iterate over the trimmed, non-empty sentence fragments.
    ///
    /// The iterator is `Clone`, so a sequence can be restarted from any point
    /// without re-scanning what came before.
    pub fn split<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + Clone + 'a {
        text.split(self.language.terminators())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Segment text into indexed sentences
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        self.split(text)
            .enumerate()
            .map(|(index, fragment)| Sentence::new(index, fragment))
            .collect()
    }
}
