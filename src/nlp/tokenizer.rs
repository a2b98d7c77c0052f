//! Tokenization
//!
//! Chinese text is segmented with jieba's dictionary segmenter; English text is
//! split on whitespace and lowercased. Both drop stopwords and tokens that
//! carry no alphanumeric character (bare punctuation, whitespace runs).

use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Language, Term};
use jieba_rs::Jieba;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Process-wide segmenter; the dictionary is loaded on first use.
static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

/// jieba POS tags eligible as keyword graph nodes (place names, nouns,
/// verbal nouns, verbs)
const KEYWORD_POS: &[&str] = &["ns", "n", "vn", "v"];

/// Minimum character length of a Chinese keyword candidate
const MIN_KEYWORD_CHARS: usize = 2;

/// Language-aware tokenizer producing normalized content words
#[derive(Debug, Clone)]
pub struct Tokenizer {
    language: Language,
    stopwords: Arc<StopwordFilter>,
}

impl Tokenizer {
    /// Create a tokenizer using the built-in stopwords for `language`
    pub fn new(language: Language) -> Self {
        Self::with_stopwords(language, Arc::new(StopwordFilter::new(language)))
    }

    /// Create a tokenizer sharing an existing stopword table
    pub fn with_stopwords(language: Language, stopwords: Arc<StopwordFilter>) -> Self {
        Self {
            language,
            stopwords,
        }
    }

    /// The tokenizer's language
    pub fn language(&self) -> Language {
        self.language
    }

    /// The shared stopword table
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Tokenize a sentence into content words, in order of appearance
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        match self.language {
            Language::Chinese => JIEBA
                .cut(sentence, true)
                .into_iter()
                .map(str::trim)
                .filter(|word| is_content_word(word) && !self.stopwords.is_stopword(word))
                .map(str::to_string)
                .collect(),
            Language::English => sentence
                .split_whitespace()
                .map(str::to_lowercase)
                .filter(|word| is_content_word(word) && !self.stopwords.is_stopword(word))
                .collect(),
        }
    }

    /// Produce the raw word stream used for keyword graphs.
    ///
    /// Every word keeps its position; only candidates become graph nodes.
    pub fn terms(&self, text: &str) -> Vec<Term> {
        match self.language {
            Language::Chinese => JIEBA
                .tag(text, true)
                .into_iter()
                .enumerate()
                .map(|(position, tagged)| {
                    let word = tagged.word.trim();
                    let is_candidate = KEYWORD_POS.contains(&tagged.tag)
                        && word.chars().count() >= MIN_KEYWORD_CHARS
                        && is_content_word(word)
                        && !self.stopwords.is_stopword(word);
                    Term::new(word, position, is_candidate)
                })
                .collect(),
            Language::English => text
                .split_whitespace()
                .enumerate()
                .map(|(position, word)| {
                    let word = word.to_lowercase();
                    let is_candidate =
                        is_content_word(&word) && !self.stopwords.is_stopword(&word);
                    Term::new(word, position, is_candidate)
                })
                .collect(),
        }
    }
}

/// A word is content-bearing if it has at least one letter or digit
fn is_content_word(word: &str) -> bool {
    word.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lowercases_and_filters() {
        let tokenizer = Tokenizer::new(Language::English);
        let tokens = tokenizer.tokenize("The Cat sat on THE mat");

        assert_eq!(tokens, vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn test_english_keeps_attached_punctuation() {
        let tokenizer = Tokenizer::new(Language::English);
        let tokens = tokenizer.tokenize("cats, dogs - birds");

        assert_eq!(tokens, vec!["cats,", "dogs", "birds"]);
    }

    #[test]
    fn test_english_keeps_repeats() {
        let tokenizer = Tokenizer::new(Language::English);
        let tokens = tokenizer.tokenize("rust rust Rust");

        assert_eq!(tokens, vec!["rust", "rust", "rust"]);
    }

    #[test]
    fn test_chinese_removes_stopwords_and_punctuation() {
        let tokenizer = Tokenizer::new(Language::Chinese);
        let tokens = tokenizer.tokenize("自然语言处理是人工智能的一个重要分支，非常有趣");

        assert!(!tokens.is_empty());
        assert!(!tokens.iter().any(|t| t == "的" || t == "是"));
        assert!(!tokens.iter().any(|t| t == "，"));
        assert!(tokens.iter().all(|t| !t.trim().is_empty()));
    }

    #[test]
    fn test_custom_stopword_table() {
        let stopwords = Arc::new(StopwordFilter::from_list(&["sat"]));
        let tokenizer = Tokenizer::with_stopwords(Language::English, stopwords);
        let tokens = tokenizer.tokenize("the cat sat");

        // Only the custom table applies
        assert_eq!(tokens, vec!["the", "cat"]);
    }

    #[test]
    fn test_empty_sentence() {
        assert!(Tokenizer::new(Language::English).tokenize("").is_empty());
        assert!(Tokenizer::new(Language::Chinese).tokenize("").is_empty());
    }

    #[test]
    fn test_english_terms_keep_positions() {
        let tokenizer = Tokenizer::new(Language::English);
        let terms = tokenizer.terms("The quick fox and the dog");

        assert_eq!(terms.len(), 6);
        assert_eq!(terms[1], Term::new("quick", 1, true));
        assert!(!terms[0].is_candidate);
        assert!(!terms[3].is_candidate);
        assert_eq!(terms[5].position, 5);
    }

    #[test]
    fn test_chinese_terms_candidates() {
        let tokenizer = Tokenizer::new(Language::Chinese);
        let terms = tokenizer.terms("自然语言处理是人工智能的一个重要分支。");

        assert!(!terms.is_empty());
        for (i, term) in terms.iter().enumerate() {
            assert_eq!(term.position, i);
            if term.is_candidate {
                assert!(term.text.chars().count() >= MIN_KEYWORD_CHARS);
                assert!(!tokenizer.stopwords().is_stopword(&term.text));
            }
        }
        assert!(!terms.iter().any(|t| t.is_candidate && t.text == "。"));
    }
}
