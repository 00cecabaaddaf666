//! WebChild subgraphs normalised into the common edge layout.

use std::{collections::HashSet, path::Path};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use tracing::info;

use crate::{
    error::PipelineError,
    graph::{word_to_concept, word_to_rel, Edge, EdgeRow},
    sentences::Provenance,
};

pub const ACTIVITY_SOURCE: &str = "http://people.mpi-inf.mpg.de/~ntandon/resources/readme-activity.html";
pub const SPATIAL_SOURCE: &str = "spatial";

/// Provenance subsets reduced to one edge per word pair, in processing order.
const REDUCED_SUBSETS: &[Provenance] = &[
    Provenance::Comparative,
    Provenance::Spatial,
    Provenance::Property,
];

/// Drop the WordNet sense suffix: `car#n#1` becomes `car`.
pub fn strip_sense(word: &str) -> &str {
    match word.find('#') {
        Some(idx) => &word[..idx],
        None => word,
    }
}

/// Headed part-whole style files (`#x`, `y`, `r`, `score`, `sources`).
#[derive(Debug, Deserialize)]
struct PartWholeRow {
    #[serde(rename = "#x")]
    x: String,
    y: String,
    r: String,
    score: f64,
    sources: String,
}

pub fn convert_part_whole(path: &Path) -> Result<Vec<Edge>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut edges = Vec::new();
    for (line, result) in reader.deserialize().enumerate() {
        let row: PartWholeRow = result.map_err(|err| malformed(line + 1, err))?;
        edges.push(Edge {
            word1: word_to_concept(strip_sense(&row.x)),
            word2: word_to_concept(strip_sense(&row.y)),
            score: row.score,
            source: row.sources,
            relation: word_to_rel(strip_sense(&row.r)),
        });
    }
    info!(path = %path.display(), edges = edges.len(), "converted webchild part-whole");
    Ok(edges)
}

/// Headerless property files:
/// `x_disambi, attr, y_disambi, x, y, freq, numsources, numpatterns, source, score, higher_attr`.
pub fn convert_property(path: &Path) -> Result<Vec<Edge>> {
    let records = read_headerless(path, 10)?;
    let mut edges = Vec::with_capacity(records.len());
    for (line, record) in records.iter().enumerate() {
        edges.push(Edge {
            word1: word_to_concept(strip_sense(&record[3])),
            word2: word_to_concept(strip_sense(&record[4])),
            score: parse_score(&record[9], line)?,
            source: record[8].to_string(),
            relation: word_to_rel(strip_sense(&record[1])),
        });
    }
    info!(path = %path.display(), edges = edges.len(), "converted webchild property");
    Ok(edges)
}

/// Join `;`- and space-separated tokens, each stripped of its sense suffix.
pub fn activity_phrase(raw: &str) -> String {
    raw.split(';')
        .flat_map(|part| part.split(' '))
        .map(strip_sense)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Headerless activity files: `action, attribut, attribut_value, score`.
pub fn convert_activity(path: &Path) -> Result<Vec<Edge>> {
    let records = read_headerless(path, 4)?;
    let mut edges = Vec::with_capacity(records.len());
    for (line, record) in records.iter().enumerate() {
        edges.push(Edge {
            word1: word_to_concept(&activity_phrase(&record[0])),
            word2: word_to_concept(&activity_phrase(&record[2])),
            score: parse_score(&record[3], line)?,
            source: ACTIVITY_SOURCE.to_string(),
            relation: word_to_rel(&record[1]),
        });
    }
    info!(path = %path.display(), edges = edges.len(), "converted webchild activity");
    Ok(edges)
}

/// Article with the highest count in `"in :3.0,on :7.0"`; later entries win ties.
pub fn dominant_article(articles: &str) -> Result<String, String> {
    let mut best: Option<(f64, &str)> = None;
    for entry in articles.split(',') {
        let (article, count) = entry
            .split_once(" :")
            .ok_or_else(|| format!("article entry `{entry}` lacks a ` :` count"))?;
        let count: f64 = count
            .trim()
            .parse()
            .map_err(|_| format!("article count `{count}` is not a number"))?;
        if best.map_or(true, |(top, _)| count >= top) {
            best = Some((count, article));
        }
    }
    best.map(|(_, article)| article.to_string())
        .ok_or_else(|| "no article counts".to_string())
}

/// Headerless spatial files: `word1, locationword, artikels_with_counts, score`.
pub fn convert_spatial(path: &Path) -> Result<Vec<Edge>> {
    let records = read_headerless(path, 4)?;
    let mut edges = Vec::with_capacity(records.len());
    for (line, record) in records.iter().enumerate() {
        let article = dominant_article(&record[2]).map_err(|reason| PipelineError::MalformedRow {
            line: line + 1,
            reason,
        })?;
        edges.push(Edge {
            word1: word_to_concept(strip_sense(&record[0])),
            word2: word_to_concept(strip_sense(&record[1])),
            score: parse_score(&record[3], line)?,
            source: SPATIAL_SOURCE.to_string(),
            relation: word_to_rel(&format!("is located {article}")),
        });
    }
    info!(path = %path.display(), edges = edges.len(), "converted webchild spatial");
    Ok(edges)
}

/// Keep only the top-scoring edge per (word1, word2) within the free-relation
/// subsets of a merged WebChild graph.
///
/// Other rows keep their relative order; each reduced subset is appended in
/// descending score order.
pub fn reduce_webchild(rows: Vec<EdgeRow>) -> Vec<EdgeRow> {
    let before = rows.len();
    let mut graph = rows;
    for &subset in REDUCED_SUBSETS {
        let (mut reduce, keep): (Vec<EdgeRow>, Vec<EdgeRow>) = graph
            .into_iter()
            .partition(|row| Provenance::of(row.file()) == subset);
        reduce.sort_by(|a, b| {
            let a = a.score().unwrap_or(f64::NEG_INFINITY);
            let b = b.score().unwrap_or(f64::NEG_INFINITY);
            b.total_cmp(&a)
        });
        let mut seen = HashSet::new();
        reduce.retain(|row| seen.insert((row.word1().to_string(), row.word2().to_string())));
        graph = keep;
        graph.extend(reduce);
        info!(subset = ?subset, rows = graph.len(), "reduced webchild subset");
    }
    info!(before, after = graph.len(), "webchild reduction done");
    graph
}

fn read_headerless(path: &Path, min_fields: usize) -> Result<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut records = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|err| malformed(line + 1, err))?;
        if record.len() < min_fields {
            return Err(PipelineError::MalformedRow {
                line: line + 1,
                reason: format!("expected {min_fields} fields, found {}", record.len()),
            }
            .into());
        }
        records.push(record);
    }
    Ok(records)
}

fn parse_score(raw: &str, line: usize) -> Result<f64, PipelineError> {
    raw.trim().parse().map_err(|_| PipelineError::MalformedRow {
        line: line + 1,
        reason: format!("score `{raw}` is not a number"),
    })
}

fn malformed(line: usize, err: csv::Error) -> PipelineError {
    PipelineError::MalformedRow {
        line,
        reason: err.to_string(),
    }
}
