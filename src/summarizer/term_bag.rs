//! Term-frequency vectors for sentences
//!
//! A [`TermBag`] counts each content word of a sentence. Similarity between two
//! sentences is the cosine of their raw frequency vectors.

use rustc_hash::FxHashMap;

/// A sparse term-frequency vector
#[derive(Debug, Clone, Default)]
pub struct TermBag {
    /// Term -> occurrence count
    pub counts: FxHashMap<String, usize>,
    /// L2 norm of the count vector
    pub norm: f64,
}

impl TermBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the given tokens
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
        }
        let norm = Self::compute_norm(&counts);
        Self { counts, norm }
    }

    fn compute_norm(counts: &FxHashMap<String, usize>) -> f64 {
        counts
            .values()
            .map(|&c| (c * c) as f64)
            .sum::<f64>()
            .sqrt()
    }

    /// Sum over shared terms of the product of their counts
    pub fn weighted_overlap(&self, other: &TermBag) -> f64 {
        // Iterate the smaller bag
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .counts
            .iter()
            .filter_map(|(term, &count)| large.counts.get(term).map(|&c| (count * c) as f64))
            .sum()
    }

    /// Cosine similarity of the two frequency vectors.
    ///
    /// Exactly 0 when there is no overlap or either bag is empty.
    pub fn cosine_similarity(&self, other: &TermBag) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }

        let overlap = self.weighted_overlap(other);
        if overlap == 0.0 {
            return 0.0;
        }

        overlap / (self.norm * other.norm)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the bag is empty
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Occurrence count of a term
    pub fn count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_norm() {
        let bag = TermBag::from_tokens(["a", "b", "a"]);

        assert_eq!(bag.count("a"), 2);
        assert_eq!(bag.count("b"), 1);
        assert_eq!(bag.count("z"), 0);
        assert!((bag.norm - 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_similarity_identical() {
        let a = TermBag::from_tokens(["x", "y", "y"]);
        let b = TermBag::from_tokens(["y", "x", "y"]);

        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_similarity_weighted() {
        // a = {x:2, y:1}, b = {x:1, z:1}
        let a = TermBag::from_tokens(["x", "x", "y"]);
        let b = TermBag::from_tokens(["x", "z"]);

        let expected = 2.0 / (5f64.sqrt() * 2f64.sqrt());
        assert!((a.cosine_similarity(&b) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_similarity_symmetric() {
        let a = TermBag::from_tokens(["rust", "graph", "rank", "rank"]);
        let b = TermBag::from_tokens(["rank", "graph", "matrix"]);

        assert_eq!(a.cosine_similarity(&b), b.cosine_similarity(&a));
    }

    #[test]
    fn test_cosine_similarity_disjoint() {
        let a = TermBag::from_tokens(["a"]);
        let b = TermBag::from_tokens(["b"]);

        assert_eq!(a.cosine_similarity(&b), 0.0);
    }

    #[test]
    fn test_empty_bag() {
        let empty = TermBag::new();
        let other = TermBag::from_tokens(["a"]);

        assert!(empty.is_empty());
        assert_eq!(empty.norm, 0.0);
        assert_eq!(empty.cosine_similarity(&other), 0.0);
        assert_eq!(other.cosine_similarity(&empty), 0.0);
    }
}
