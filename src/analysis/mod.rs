//! Ablation helpers: subgraphs, threshold pruning and shuffled baselines.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::info;

use crate::{
    error::PipelineError,
    graph::{Column, EdgeRow},
};

/// Relation families the reweighting never touches, so pruning skips them.
const UNWEIGHTED_RELATIONS: &[&str] = &["/r/dbpedia", "/r/Entails"];

/// Rows whose source mentions `source_name` (e.g. `/d/wordnet/`).
pub fn subgraph(rows: &[EdgeRow], source_name: &str) -> Vec<EdgeRow> {
    let selected: Vec<EdgeRow> = rows
        .iter()
        .filter(|row| row.source().contains(source_name))
        .cloned()
        .collect();
    info!(source = source_name, rows = selected.len(), "extracted subgraph");
    selected
}

/// Short name for a dataset path: `/d/wiktionary/` becomes `wiktionary`.
pub fn subgraph_name(source_name: &str) -> &str {
    source_name.split('/').nth(2).unwrap_or(source_name)
}

fn prunable(row: &EdgeRow, threshold: f64) -> bool {
    let low = row.score().is_some_and(|score| score <= threshold);
    low && row.is_english()
        && !UNWEIGHTED_RELATIONS
            .iter()
            .any(|rel| row.relation().contains(rel))
}

/// Zero the score of reweighted English edges scoring at or below `threshold`.
pub fn prune(rows: &mut [EdgeRow], threshold: f64) -> usize {
    let mut pruned = 0;
    for row in rows.iter_mut() {
        if prunable(row, threshold) {
            row.set(Column::Score, "0".to_string());
            pruned += 1;
        }
    }
    info!(threshold, pruned, "pruned graph");
    pruned
}

/// Zero the edges of `original` that would be pruned in `weighted`.
///
/// Both graphs must hold the same rows in the same order.
pub fn prune_original(
    original: &mut [EdgeRow],
    weighted: &[EdgeRow],
    threshold: f64,
) -> Result<usize, PipelineError> {
    if original.len() != weighted.len() {
        return Err(PipelineError::LengthMismatch {
            left: original.len(),
            right: weighted.len(),
        });
    }
    let mut pruned = 0;
    for (row, reference) in original.iter_mut().zip(weighted) {
        if prunable(reference, threshold) {
            row.set(Column::Score, "0".to_string());
            pruned += 1;
        }
    }
    info!(threshold, pruned, "pruned original graph");
    Ok(pruned)
}

fn permutation(len: usize, seed: u64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(&mut StdRng::seed_from_u64(seed));
    order
}

/// Randomly permute `columns` across all rows, keeping them together.
pub fn shuffle_columns(rows: &mut [EdgeRow], columns: &[Column], seed: u64) {
    let order = permutation(rows.len(), seed);
    for &column in columns {
        let values: Vec<String> = order
            .iter()
            .map(|&idx| rows[idx].get(column).to_string())
            .collect();
        for (row, value) in rows.iter_mut().zip(values) {
            row.set(column, value);
        }
    }
    info!(rows = rows.len(), ?columns, seed, "shuffled graph columns");
}

/// Randomly permute one column among the English edges only.
pub fn shuffle_english_column(rows: &mut [EdgeRow], column: Column, seed: u64) {
    let english: Vec<usize> = crate::graph::english_indices(rows);
    let order = permutation(english.len(), seed);
    let values: Vec<String> = order
        .iter()
        .map(|&pos| rows[english[pos]].get(column).to_string())
        .collect();
    for (&idx, value) in english.iter().zip(values) {
        rows[idx].set(column, value);
    }
    info!(rows = english.len(), ?column, seed, "shuffled english column");
}
