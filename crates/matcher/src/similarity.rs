//! Cosine similarity over title term vectors and the all-pairs grouping pass.
//!
//! [`find_global_similar_groups`] compares every anchor against the entire
//! corpus, so a run costs O(n² · v) where `n` is the corpus size and `v` the
//! average number of distinct tokens per title. Callers bound `n` through
//! `MatchConfig::corpus_limit`; each title is vectorized exactly once per run.

use canonical::{vectorize_with, TermVector};
use rayon::prelude::*;

use crate::types::{CandidateItem, MatchConfig, SimilarNeighbor, SimilarityGroup};

/// Cosine similarity of two term vectors, in `[0, 1]`.
///
/// Returns exactly `0.0` when either vector is empty. Tokens present in only
/// one vector contribute nothing to the dot product, so the product is taken
/// over the smaller vector's entries. Both magnitudes are exact integer sums
/// of squared counts, and the denominator is `sqrt(|a|² · |b|²)`, which keeps
/// the result symmetric and makes `cosine_similarity(v, v)` exactly `1.0`.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let mag_a = a.magnitude_squared();
    let mag_b = b.magnitude_squared();
    if mag_a == 0 || mag_b == 0 {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: u64 = small
        .iter()
        .map(|(token, count)| u64::from(count) * u64::from(large.count(token)))
        .sum();

    if dot == 0 {
        return 0.0;
    }

    let denominator = (mag_a as f64 * mag_b as f64).sqrt();
    (dot as f64 / denominator).min(1.0)
}

/// Groups every corpus item with the items whose titles are similar to it.
///
/// Anchors are visited in input order. For each anchor the whole corpus is
/// scanned from the start, skipping only the anchor's own `(id, category)`
/// identity. A candidate scoring at least `similarity_threshold` is appended
/// as a neighbor, and the scan stops once `max_neighbors_per_item` neighbors
/// are collected. Neighbors are therefore the *first* qualifying items in
/// corpus order, not the highest scoring ones. Anchors without neighbors are
/// left out of the result.
///
/// With `use_parallel` set, anchors are scanned on the rayon pool; the
/// result is identical and still in input order.
pub fn find_global_similar_groups(
    items: &[CandidateItem],
    cfg: &MatchConfig,
) -> Vec<SimilarityGroup> {
    if items.is_empty() {
        return Vec::new();
    }

    let vectors: Vec<TermVector> = if cfg.use_parallel {
        items
            .par_iter()
            .map(|item| vectorize_with(&item.title, &cfg.tokenizer))
            .collect()
    } else {
        items
            .iter()
            .map(|item| vectorize_with(&item.title, &cfg.tokenizer))
            .collect()
    };

    if cfg.use_parallel {
        (0..items.len())
            .into_par_iter()
            .filter_map(|anchor| group_for_anchor(anchor, items, &vectors, cfg))
            .collect()
    } else {
        (0..items.len())
            .filter_map(|anchor| group_for_anchor(anchor, items, &vectors, cfg))
            .collect()
    }
}

/// Collects the neighbors of `items[anchor]` using precomputed vectors.
fn group_for_anchor(
    anchor: usize,
    items: &[CandidateItem],
    vectors: &[TermVector],
    cfg: &MatchConfig,
) -> Option<SimilarityGroup> {
    let anchor_item = &items[anchor];
    let anchor_vector = &vectors[anchor];
    let mut neighbors: Vec<SimilarNeighbor> = Vec::new();

    for (candidate, candidate_vector) in items.iter().zip(vectors) {
        if candidate.same_identity(anchor_item) {
            continue;
        }

        let similarity = cosine_similarity(anchor_vector, candidate_vector);
        if similarity >= cfg.similarity_threshold {
            neighbors.push(SimilarNeighbor {
                item: candidate.clone(),
                similarity,
            });
            if neighbors.len() >= cfg.max_neighbors_per_item {
                break;
            }
        }
    }

    if neighbors.is_empty() {
        None
    } else {
        Some(SimilarityGroup {
            anchor: anchor_item.clone(),
            neighbors,
        })
    }
}
