//! Folding language-model perplexities back into graph edge scores.

pub mod perplexity;
pub mod report;
pub mod scoring;

use std::{fmt, path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::{info, instrument};

use crate::{
    error::PipelineError,
    graph::{read_rows, write_rows, EdgeRow},
    sentences::read_sentence_index,
};

/// How perplexities are turned into scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScoreType {
    /// Log-scaled, inverted, clipped into (0, 50].
    #[value(name = "reweight")]
    Reweight,
    /// `scale_factor / perplexity`.
    #[value(name = "reweight_light")]
    ReweightLight,
}

impl FromStr for ScoreType {
    type Err = PipelineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "reweight" => Ok(Self::Reweight),
            "reweight_light" => Ok(Self::ReweightLight),
            other => Err(PipelineError::UnknownScoreType(other.to_string())),
        }
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reweight => f.write_str("reweight"),
            Self::ReweightLight => f.write_str("reweight_light"),
        }
    }
}

impl ScoreType {
    pub fn apply(self, perplexities: &[f64], scale_factor: f64) -> Result<Vec<f64>, PipelineError> {
        match self {
            Self::Reweight => scoring::reweight(perplexities),
            Self::ReweightLight => scoring::reweight_light(perplexities, scale_factor),
        }
    }
}

/// Inputs of one reweighting run.
#[derive(Debug, Clone)]
pub struct ReweightJob {
    /// Sentence index file written alongside the scorer input.
    pub sentence_csv: PathBuf,
    /// Graph the sentences were generated from.
    pub graph: PathBuf,
    /// A scorer result file or a folder of result shards.
    pub perplexities: PathBuf,
    /// File name inside each shard folder.
    pub perplexity_file_name: String,
    pub out_file: PathBuf,
    pub score_type: ScoreType,
    pub scale_factor: f64,
    /// Where to write perplexity and score histograms, if anywhere.
    pub report_dir: Option<PathBuf>,
    pub histogram_bins: usize,
}

/// Outcome of a reweighting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionSummary {
    pub rows: usize,
    pub injected: usize,
}

/// Overwrite the score of `rows[indices[i]]` with `scores[i]`.
///
/// Rows not referenced keep their score. Counts must agree and every index
/// must address an existing row; nothing is written otherwise.
pub fn inject_scores(
    rows: &mut [EdgeRow],
    indices: &[usize],
    scores: &[f64],
) -> Result<usize, PipelineError> {
    if indices.len() != scores.len() {
        return Err(PipelineError::CountMismatch {
            sentences: indices.len(),
            perplexities: scores.len(),
        });
    }
    if let Some(&row) = indices.iter().find(|&&row| row >= rows.len()) {
        return Err(PipelineError::RowOutOfRange {
            row,
            rows: rows.len(),
        });
    }
    for (&row, &score) in indices.iter().zip(scores) {
        rows[row].set_score(score);
    }
    Ok(indices.len())
}

/// Read perplexities, convert them to scores and splice them into the graph.
#[instrument(skip(job), fields(score_type = %job.score_type))]
pub fn apply_reweight(job: &ReweightJob) -> Result<InjectionSummary> {
    let indices: Vec<usize> = read_sentence_index(&job.sentence_csv)?
        .into_iter()
        .map(|record| record.row)
        .collect();
    let perplexities =
        perplexity::load_perplexities(&job.perplexities, &job.perplexity_file_name)?;
    if indices.len() != perplexities.len() {
        return Err(PipelineError::CountMismatch {
            sentences: indices.len(),
            perplexities: perplexities.len(),
        }
        .into());
    }

    let mut rows = read_rows(&job.graph)?;
    let scores = job
        .score_type
        .apply(&perplexities, job.scale_factor)
        .context("converting perplexities to scores")?;

    if let Some(dir) = &job.report_dir {
        report::write_histogram(&perplexities, job.histogram_bins, &dir.join("perplexity_histogram.csv"))?;
        report::write_histogram(&scores, job.histogram_bins, &dir.join("score_histogram.csv"))?;
    }

    info!(sentences = indices.len(), rows = rows.len(), "starting injections");
    let injected = inject_scores(&mut rows, &indices, &scores)?;
    write_rows(&job.out_file, &rows)?;
    info!(
        injected,
        rows = rows.len(),
        path = %job.out_file.display(),
        "reweighted graph written"
    );
    Ok(InjectionSummary {
        rows: rows.len(),
        injected,
    })
}
