//! Graph construction and representation
//!
//! This module builds the dense sentence similarity graph, the sparse term
//! co-occurrence graph, and the CSR form both are ranked in.

pub mod builder;
pub mod csr;
pub mod similarity;
