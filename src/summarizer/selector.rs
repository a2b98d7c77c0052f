//! Top-score sentence selection for summarization
//!
//! Sentences are ordered by PageRank score (larger original index first on
//! ties), the requested number is kept, and the survivors are put back in
//! document order before being joined.

use crate::types::{Language, RankedSentence, Sentence, SummaryLength};

/// Selects and reassembles the highest-scoring sentences
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    language: Language,
    /// Floor for ratio-derived counts
    min_sentences: usize,
}

impl SentenceSelector {
    /// Create a selector with the default floor of 3 sentences
    pub fn new(language: Language) -> Self {
        Self {
            language,
            min_sentences: 3,
        }
    }

    /// Set the floor applied to ratio-derived counts
    pub fn with_min_sentences(mut self, min_sentences: usize) -> Self {
        self.min_sentences = min_sentences;
        self
    }

    /// Pair each sentence with its score.
    ///
    /// `scores` must have one entry per sentence, indexed by sentence index.
    pub fn rank(sentences: &[Sentence], scores: &[f64]) -> Vec<RankedSentence> {
        debug_assert_eq!(sentences.len(), scores.len());
        sentences
            .iter()
            .zip(scores)
            .map(|(sentence, &score)| RankedSentence::new(sentence.index, score, &sentence.text))
            .collect()
    }

    /// Keep the top sentences for `length`, returned in document order
    pub fn select(
        &self,
        mut ranked: Vec<RankedSentence>,
        length: SummaryLength,
    ) -> Vec<RankedSentence> {
        let count = length.sentence_count(ranked.len(), self.min_sentences);

        ranked.sort_by(RankedSentence::selection_cmp);
        ranked.truncate(count);
        ranked.sort_by_key(|r| r.index);
        ranked
    }

    /// Join selected sentences with the language's terminal punctuation
    pub fn assemble(&self, selected: &[RankedSentence]) -> String {
        self.language.join(selected.iter().map(|r| r.text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ranked(scores: &[f64]) -> Vec<RankedSentence> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| RankedSentence::new(i, s, format!("S{i}")))
            .collect()
    }

    #[test]
    fn test_rank_pairs_scores() {
        let sentences = vec![Sentence::new(0, "first"), Sentence::new(1, "second")];
        let ranked = SentenceSelector::rank(&sentences, &[0.3, 0.7]);

        assert_eq!(ranked[1], RankedSentence::new(1, 0.7, "second"));
    }

    #[test]
    fn test_select_top_n_in_document_order() {
        let selector = SentenceSelector::new(Language::English);
        let ranked = make_ranked(&[0.1, 0.4, 0.05, 0.3, 0.15]);

        let selected = selector.select(ranked, SummaryLength::TopN(2));

        let indices: Vec<_> = selected.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_select_ratio_floor() {
        let selector = SentenceSelector::new(Language::English);
        let ranked = make_ranked(&[0.1, 0.4, 0.05, 0.3, 0.15]);

        // 5 * 0.3 = 1 -> floored up to 3
        let selected = selector.select(ranked, SummaryLength::Ratio(0.3));

        let indices: Vec<_> = selected.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 3, 4]);
    }

    #[test]
    fn test_select_clamped_to_total() {
        let selector = SentenceSelector::new(Language::English);
        let selected = selector.select(make_ranked(&[0.5, 0.5]), SummaryLength::TopN(10));

        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_ties_prefer_larger_index() {
        let selector = SentenceSelector::new(Language::English);
        let selected = selector.select(make_ranked(&[0.25, 0.25, 0.25, 0.25]), SummaryLength::TopN(2));

        let indices: Vec<_> = selected.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![2, 3]);
    }

    #[test]
    fn test_assemble_english() {
        let selector = SentenceSelector::new(Language::English);
        let selected = vec![
            RankedSentence::new(1, 0.4, "B"),
            RankedSentence::new(3, 0.3, "D"),
        ];

        assert_eq!(selector.assemble(&selected), "B. D.");
    }

    #[test]
    fn test_assemble_chinese() {
        let selector = SentenceSelector::new(Language::Chinese);
        let selected = vec![
            RankedSentence::new(0, 0.4, "第一句"),
            RankedSentence::new(2, 0.3, "第三句"),
        ];

        assert_eq!(selector.assemble(&selected), "第一句。第三句。");
    }

    #[test]
    fn test_assemble_empty() {
        let selector = SentenceSelector::new(Language::English);
        assert_eq!(selector.assemble(&[]), "");
    }
}
