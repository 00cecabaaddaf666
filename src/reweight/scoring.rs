//! Perplexity to edge-score transforms.

use crate::error::PipelineError;

/// `log10` of the perplexity treated as the boundary between plausible and
/// implausible sentences (perplexity 100). A modelling choice, not derived
/// from data.
pub const PERPLEXITY_CUTOFF_LOG10: f64 = 2.0;

/// Upper bound of the rescaled score range.
pub const MAX_SCORE: f64 = 50.0;

/// Lowest score handed out, so the least plausible sentence keeps a weight.
pub const SCORE_FLOOR: f64 = 1e-6;

/// Smallest divisor used when rescaling log perplexities. Only reached when
/// no perplexity exceeds the cutoff; the best sentence still lands on
/// `MAX_SCORE` and the worst on `SCORE_FLOOR`.
pub const MIN_LOG_SPAN: f64 = 1e-9;

/// Map values above 1 affinely from `(1, max]` onto `(1, MAX_SCORE]`.
pub fn partial_scale(value: f64, max: f64) -> f64 {
    if value > 1.0 {
        (value - 1.0) / (max - 1.0) * (MAX_SCORE - 1.0) + 1.0
    } else {
        value
    }
}

/// Log-scaled, inverted and clipped scores.
///
/// Sentences at the cutoff perplexity land on 1, worse ones in `(0, 1)` and
/// better ones are spread over `(1, 50]`. A batch with nothing above the
/// cutoff is spread over `(0, 50]` by log distance from its worst sentence.
pub fn reweight(perplexities: &[f64]) -> Result<Vec<f64>, PipelineError> {
    ensure_positive(perplexities)?;
    if perplexities.is_empty() {
        return Ok(Vec::new());
    }

    let logs: Vec<f64> = perplexities.iter().map(|p| p.log10()).collect();
    let max_log = logs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = (max_log - PERPLEXITY_CUTOFF_LOG10).max(MIN_LOG_SPAN);

    let shifted: Vec<f64> = logs.iter().map(|l| (max_log - l) / span).collect();
    let scale_max = shifted.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok(shifted
        .into_iter()
        .map(|value| partial_scale(value, scale_max).max(SCORE_FLOOR))
        .collect())
}

/// Inverse-proportional scores, `scale_factor / perplexity`, unclipped.
pub fn reweight_light(perplexities: &[f64], scale_factor: f64) -> Result<Vec<f64>, PipelineError> {
    ensure_positive(perplexities)?;
    Ok(perplexities.iter().map(|p| scale_factor / p).collect())
}

fn ensure_positive(perplexities: &[f64]) -> Result<(), PipelineError> {
    match perplexities
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        Some((index, value)) => Err(PipelineError::NonPositivePerplexity {
            index,
            value: *value,
        }),
        None => Ok(()),
    }
}
