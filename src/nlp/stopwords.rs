//! Stopword filtering
//!
//! Each language has a small built-in list of function words. The filter can
//! optionally be widened with the full `stop-words` list (English) or a larger
//! hand-maintained list (Chinese), and extended with caller-supplied words.
//! Once built, a filter is shared read-only behind an `Arc`.

use crate::types::Language;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Function words removed from Chinese text.
///
/// Chinese articles routinely embed English fragments, so the common English
/// function words are filtered as well.
const CHINESE_BUILTIN: &[&str] = &[
    "的", "了", "和", "是", "就", "都", "而", "及", "与", "着", "the", "a", "an", "and", "or",
    "but", "in", "on", "at", "to",
];

const ENGLISH_BUILTIN: &[&str] = &["the", "a", "an", "and", "or", "but", "in", "on", "at", "to"];

/// A filter for removing stopwords from token streams
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
    /// Whether the filter is case-sensitive
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl StopwordFilter {
    /// Create the built-in stopword filter for the given language
    pub fn new(language: Language) -> Self {
        let words = match language {
            Language::Chinese => CHINESE_BUILTIN,
            Language::English => ENGLISH_BUILTIN,
        };
        Self::from_list(words)
    }

    /// Create a filter with the built-in list plus the extended list
    pub fn extended(language: Language) -> Self {
        let mut filter = Self::new(language);
        filter.stopwords.extend(Self::load_extended(language));
        filter
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let stopwords: FxHashSet<String> =
            words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self {
            stopwords,
            case_sensitive: false,
        }
    }

    /// Set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        !self.case_sensitive && self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_extended(language: Language) -> FxHashSet<String> {
        match language {
            Language::English => get(LANGUAGE::English)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            // The stop-words crate has no usable Chinese list
            Language::Chinese => Self::chinese_extended(),
        }
    }

    fn chinese_extended() -> FxHashSet<String> {
        [
            "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及",
            "这", "那", "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对",
            "将", "于", "能", "会", "可", "要", "很", "还", "更", "最", "只", "已", "又", "再",
            "着", "我们", "他们", "它们", "一个", "这个", "那个", "这些", "那些", "因为", "所以",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_builtin() {
        let filter = StopwordFilter::new(Language::English);

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("machine"));
        // "is" is only in the extended list
        assert!(!filter.is_stopword("is"));
        assert_eq!(filter.len(), ENGLISH_BUILTIN.len());
    }

    #[test]
    fn test_chinese_builtin_includes_english_function_words() {
        let filter = StopwordFilter::new(Language::Chinese);

        assert!(filter.is_stopword("的"));
        assert!(filter.is_stopword("着"));
        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("机器"));
    }

    #[test]
    fn test_english_extended() {
        let filter = StopwordFilter::extended(Language::English);

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("is"));
        assert!(filter.is_stopword("which"));
        assert!(!filter.is_stopword("learning"));
        assert!(filter.len() > ENGLISH_BUILTIN.len());
    }

    #[test]
    fn test_chinese_extended() {
        let filter = StopwordFilter::extended(Language::Chinese);

        assert!(filter.is_stopword("我们"));
        assert!(filter.is_stopword("的"));
        assert!(!filter.is_stopword("语言"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_case_sensitivity() {
        let filter = StopwordFilter::new(Language::English).with_case_sensitive(true);

        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("The"));
    }
}
