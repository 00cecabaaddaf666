//! CLI entry-points for the ablation study graphs.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    analysis,
    config::Settings,
    graph::{read_rows, write_rows, Column},
};

/// Args for the `subgraph` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct SubgraphArgs {
    #[arg(long)]
    pub graph: PathBuf,
    /// Dataset marker to match in the source column, e.g. `/d/wordnet/`.
    #[arg(long)]
    pub source_name: String,
    /// Output file name template, filled with the dataset name and row count.
    #[arg(long, default_value = "cn_{}_{}.csv")]
    pub out_template: String,
}

#[instrument(skip(settings))]
pub fn subgraph(args: SubgraphArgs, settings: Settings) -> Result<()> {
    let rows = read_rows(&args.graph)?;
    let selected = analysis::subgraph(&rows, &args.source_name);
    let name = args
        .out_template
        .replacen("{}", analysis::subgraph_name(&args.source_name), 1)
        .replacen("{}", &selected.len().to_string(), 1);
    write_rows(&settings.join_output(name), &selected)
}

/// Args for the `prune` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct PruneArgs {
    /// Reweighted graph.
    #[arg(long)]
    pub graph: PathBuf,
    #[arg(long)]
    pub threshold: f64,
    #[arg(long)]
    pub output: PathBuf,
}

#[instrument(skip(_settings))]
pub fn prune(args: PruneArgs, _settings: Settings) -> Result<()> {
    let mut rows = read_rows(&args.graph)?;
    analysis::prune(&mut rows, args.threshold);
    write_rows(&args.output, &rows)
}

/// Args for the `prune-original` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct PruneOriginalArgs {
    /// Graph before reweighting.
    #[arg(long)]
    pub original: PathBuf,
    /// Reweighted graph, row-aligned with the original.
    #[arg(long)]
    pub weighted: PathBuf,
    #[arg(long)]
    pub threshold: f64,
    #[arg(long)]
    pub output: PathBuf,
}

#[instrument(skip(_settings))]
pub fn prune_original(args: PruneOriginalArgs, _settings: Settings) -> Result<()> {
    let mut original = read_rows(&args.original)?;
    let weighted = read_rows(&args.weighted)?;
    analysis::prune_original(&mut original, &weighted, args.threshold)?;
    write_rows(&args.output, &original)
}

/// Args for the `shuffle` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct ShuffleArgs {
    #[arg(long)]
    pub graph: PathBuf,
    /// Comma separated columns to permute together.
    #[arg(long, value_delimiter = ',', default_value = "word2")]
    pub columns: Vec<String>,
    /// Only permute among English edges (first column only).
    #[arg(long)]
    pub english_only: bool,
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    #[arg(long)]
    pub output: PathBuf,
}

#[instrument(skip(_settings))]
pub fn shuffle(args: ShuffleArgs, _settings: Settings) -> Result<()> {
    let columns = args
        .columns
        .iter()
        .map(|name| name.parse::<Column>())
        .collect::<Result<Vec<_>, _>>()?;
    let mut rows = read_rows(&args.graph)?;
    if args.english_only {
        if let Some(&column) = columns.first() {
            analysis::shuffle_english_column(&mut rows, column, args.seed);
        }
    } else {
        analysis::shuffle_columns(&mut rows, &columns, args.seed);
    }
    write_rows(&args.output, &rows)
}
