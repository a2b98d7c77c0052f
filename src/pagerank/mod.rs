//! PageRank algorithms
//!
//! This module provides the standard power-iteration PageRank used to rank
//! both sentences and keyword terms.

pub mod standard;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get top N nodes by score; ties keep the lower node ID first
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_orders_by_score() {
        let result = PageRankResult::new(vec![0.1, 0.5, 0.2, 0.2], 3, 0.0, true);

        assert_eq!(result.top_n(3), vec![(1, 0.5), (2, 0.2), (3, 0.2)]);
        assert_eq!(result.top_n(10).len(), 4);
    }

    #[test]
    fn test_score_lookup() {
        let result = PageRankResult::new(vec![0.25, 0.75], 1, 0.0, true);

        assert_eq!(result.score(1), 0.75);
        assert_eq!(result.score(9), 0.0);
        assert!((result.total() - 1.0).abs() < 1e-12);
    }
}
