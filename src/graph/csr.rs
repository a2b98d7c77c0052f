//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! PageRank needs during power iteration. Both the term co-occurrence graph
//! and the sentence transition matrix are converted to this form before
//! ranking.

use super::builder::GraphBuilder;
use super::similarity::SimilarityMatrix;

/// A graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Out-degree for each node
    pub out_degree: Vec<u32>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
    /// Labels for each node
    pub labels: Vec<String>,
}

impl CsrGraph {
    /// Convert a GraphBuilder into CSR format
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut graph = Self::with_capacity(num_nodes);

        for (_, node) in builder.nodes() {
            // Collect and sort edges for deterministic iteration
            let mut edges: Vec<_> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_by_key(|(k, _)| *k);

            graph.push_row(node.label.clone(), edges);
        }

        graph
    }

    /// Convert a (normalized) similarity matrix into CSR format.
    ///
    /// Zero entries are skipped, so an all-zero row becomes a dangling node.
    /// `labels` must have one entry per matrix row.
    pub fn from_matrix(matrix: &SimilarityMatrix, labels: Vec<String>) -> Self {
        debug_assert_eq!(labels.len(), matrix.size());
        let mut graph = Self::with_capacity(matrix.size());

        for (row, label) in matrix.rows().zip(labels) {
            let edges: Vec<(u32, f64)> = row
                .iter()
                .enumerate()
                .filter(|(_, w)| **w > 0.0)
                .map(|(j, &w)| (j as u32, w))
                .collect();
            graph.push_row(label, edges);
        }

        graph
    }

    fn with_capacity(num_nodes: usize) -> Self {
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        row_ptr.push(0);
        Self {
            num_nodes,
            row_ptr,
            col_idx: Vec::new(),
            weights: Vec::new(),
            out_degree: Vec::with_capacity(num_nodes),
            total_weight: Vec::with_capacity(num_nodes),
            labels: Vec::with_capacity(num_nodes),
        }
    }

    fn push_row(&mut self, label: String, edges: Vec<(u32, f64)>) {
        self.labels.push(label);
        self.out_degree.push(edges.len() as u32);
        self.total_weight.push(edges.iter().map(|(_, w)| w).sum());

        for (target, weight) in edges {
            self.col_idx.push(target);
            self.weights.push(weight);
        }

        self.row_ptr.push(self.col_idx.len());
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the out-degree of a node
    pub fn degree(&self, node: u32) -> u32 {
        self.out_degree[node as usize]
    }

    /// Get the total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Get the label for a node
    pub fn label(&self, node: u32) -> &str {
        &self.labels[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of stored edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find dangling nodes (nodes with no outgoing edges)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.out_degree[n as usize] == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
