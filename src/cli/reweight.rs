//! CLI entry-point for perplexity reweighting.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    reweight::{apply_reweight, ReweightJob, ScoreType},
};

/// Args for the `reweight` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Sentence index written by the `sentences` command.
    #[arg(long)]
    pub sentences: PathBuf,
    /// Graph the sentences were generated from.
    #[arg(long)]
    pub graph: PathBuf,
    /// Scorer result file, or folder of result shards (default `<data>/lm_results`).
    #[arg(long)]
    pub perplexities: Option<PathBuf>,
    /// Destination for the reweighted graph.
    #[arg(long)]
    pub output: PathBuf,
    /// Score transform.
    #[arg(long, value_enum, default_value = "reweight")]
    pub score_type: ScoreType,
    /// Override the `reweight_light` numerator.
    #[arg(long)]
    pub scale_factor: Option<f64>,
    /// Write perplexity and score histograms to `<outputs>/reports`.
    #[arg(long)]
    pub report: bool,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let job = ReweightJob {
        sentence_csv: args.sentences,
        graph: args.graph,
        perplexities: args
            .perplexities
            .unwrap_or_else(|| settings.join_data("lm_results")),
        perplexity_file_name: settings.perplexity_file_name.clone(),
        out_file: args.output,
        score_type: args.score_type,
        scale_factor: args.scale_factor.unwrap_or(settings.reweight_scale_factor),
        report_dir: args.report.then(|| settings.join_output("reports")),
        histogram_bins: settings.histogram_bins,
    };
    let summary = apply_reweight(&job)?;
    info!(?summary, "reweighting finished");
    Ok(())
}
