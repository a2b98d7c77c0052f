//! Frequency keyword ranking

use super::Keyword;
use crate::types::Term;
use rustc_hash::FxHashMap;

/// Rank candidate terms by occurrence count, highest first.
///
/// Ties keep first-seen order.
pub fn rank_terms(terms: &[Term]) -> Vec<Keyword> {
    let mut slots: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for term in terms.iter().filter(|t| t.is_candidate) {
        let text = term.text.as_str();
        if let Some(&slot) = slots.get(text) {
            counts[slot].1 += 1;
            continue;
        }
        slots.insert(text, counts.len());
        counts.push((text, 1));
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(text, count)| Keyword::new(text, count as f64))
        .collect()
}
