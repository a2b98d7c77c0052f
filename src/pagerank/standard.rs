//! Standard PageRank algorithm
//!
//! Implements the classic PageRank with power iteration and proper
//! handling of dangling nodes.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a graph
    ///
    /// Each node passes `damping` of its score along its outgoing edges in
    /// proportion to edge weight; the rest is spread uniformly. Dangling nodes
    /// (no outgoing weight) spread their damped mass uniformly too, so scores
    /// keep summing to 1 and a graph with no edges ranks uniformly.
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(Vec::new(), 0, 0.0, true);
        }

        let dangling = graph.dangling_nodes();
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations && delta > self.threshold {
            self.step(graph, &dangling, &scores, &mut next);
            delta = l1_distance(&scores, &next);
            std::mem::swap(&mut scores, &mut next);
            iterations += 1;
        }

        let total: f64 = scores.iter().sum();
        if total > 0.0 {
            scores.iter_mut().for_each(|s| *s /= total);
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }

    /// One power-iteration step from `scores` into `next`
    fn step(&self, graph: &CsrGraph, dangling: &[u32], scores: &[f64], next: &mut [f64]) {
        let n = scores.len() as f64;
        let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();
        next.fill((1.0 - self.damping + self.damping * dangling_mass) / n);

        for (node, &score) in scores.iter().enumerate() {
            let node = node as u32;
            let out_weight = graph.node_total_weight(node);
            if out_weight <= 0.0 {
                continue;
            }
            let share = self.damping * score / out_weight;
            for (neighbor, weight) in graph.neighbors(node) {
                next[neighbor as usize] += share * weight;
            }
        }
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
