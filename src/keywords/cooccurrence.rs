//! TextRank keyword ranking
//!
//! Candidate terms that co-occur within the window become nodes of an
//! undirected graph weighted by how often they do; PageRank over that graph
//! orders them. Terms with no partner are never ranked.

use super::Keyword;
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::pagerank::standard::StandardPageRank;
use crate::types::Term;

/// Rank every candidate term, highest score first.
///
/// Ties keep first-seen order.
pub fn rank_terms(terms: &[Term], window: usize, ranker: &StandardPageRank) -> Vec<Keyword> {
    let builder = GraphBuilder::from_terms(terms, window);
    if builder.is_empty() {
        return Vec::new();
    }

    let graph = CsrGraph::from_builder(&builder);
    let result = ranker.run(&graph);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        nodes = graph.num_nodes,
        edges = graph.num_edges() / 2,
        iterations = result.iterations,
        converged = result.converged,
        "ranked keyword graph"
    );

    result
        .top_n(graph.num_nodes)
        .into_iter()
        .map(|(node, score)| Keyword::new(graph.label(node), score))
        .collect()
}
