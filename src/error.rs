//! Typed failures raised by the graph pipelines.

use thiserror::Error;

/// Errors surfaced by the library layer; the CLI wraps them in `anyhow`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("score_type needs to be one of [reweight, reweight_light], but was: {0}")]
    UnknownScoreType(String),

    #[error("perplexity at position {index} must be positive, got {value}")]
    NonPositivePerplexity { index: usize, value: f64 },

    #[error("sentence index holds {sentences} entries but {perplexities} perplexities were loaded")]
    CountMismatch { sentences: usize, perplexities: usize },

    #[error("sentence index points at row {row}, but the graph only has {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("malformed row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("graphs differ in length: {left} rows vs {right} rows")]
    LengthMismatch { left: usize, right: usize },

    #[error("unknown column `{0}`, expected one of word1, word2, score, source, relation, file")]
    UnknownColumn(String),
}
