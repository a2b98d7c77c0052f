//! Dense sentence similarity graph
//!
//! The sentence graph is complete: every ordered pair `(i, j)` with `i != j`
//! has an entry, and the diagonal is always zero. Rows are normalized in place
//! to form the transition matrix consumed by PageRank.

use crate::summarizer::term_bag::TermBag;
use rayon::prelude::*;

/// An N×N matrix of non-negative sentence affinities, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    weights: Vec<f64>,
    normalized: bool,
}

impl SimilarityMatrix {
    /// Build the raw (symmetric) similarity matrix from per-sentence term bags.
    ///
    /// Rows are computed with rayon once `bags.len()` reaches
    /// `parallel_threshold`; the result is identical either way.
    pub fn build(bags: &[TermBag], parallel_threshold: usize) -> Self {
        let size = bags.len();

        // Upper triangle only; each row i holds similarities to j > i
        let upper_row = |i: usize| -> Vec<f64> {
            ((i + 1)..size)
                .map(|j| bags[i].cosine_similarity(&bags[j]))
                .collect()
        };

        let upper: Vec<Vec<f64>> = if size >= parallel_threshold {
            (0..size).into_par_iter().map(upper_row).collect()
        } else {
            (0..size).map(upper_row).collect()
        };

        let mut weights = vec![0.0; size * size];
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, sim) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                weights[i * size + j] = sim;
                weights[j * size + i] = sim;
            }
        }

        Self {
            size,
            weights,
            normalized: false,
        }
    }

    /// Build a matrix from explicit rows (mainly for tests).
    ///
    /// The diagonal is forced to zero. Returns `None` if the rows are not
    /// square or contain negative or non-finite weights.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let size = rows.len();
        let mut weights = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return None;
            }
            for (j, &w) in row.iter().enumerate() {
                if !w.is_finite() || w < 0.0 {
                    return None;
                }
                weights.push(if i == j { 0.0 } else { w });
            }
        }
        Some(Self {
            size,
            weights,
            normalized: false,
        })
    }

    /// Row-normalize into a transition matrix.
    ///
    /// Rows with a nonzero sum are divided by it; all-zero rows stay zero.
    pub fn normalize_rows(&mut self) {
        if self.size == 0 {
            self.normalized = true;
            return;
        }
        for row in self.weights.chunks_mut(self.size) {
            let sum: f64 = row.iter().sum();
            if sum != 0.0 {
                for w in row.iter_mut() {
                    *w /= sum;
                }
            }
        }
        self.normalized = true;
    }

    /// Consume and return the row-normalized matrix
    pub fn into_normalized(mut self) -> Self {
        self.normalize_rows();
        self
    }

    /// Number of sentences (rows)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `normalize_rows` has been applied
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Weight of the edge from `i` to `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.size + j]
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.size..(i + 1) * self.size]
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows
        self.weights.chunks(self.size.max(1))
    }

    /// Sum of row `i`
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Check if every weight is zero
    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }

    /// Check symmetry within `tolerance`
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tolerance)
        })
    }
}
