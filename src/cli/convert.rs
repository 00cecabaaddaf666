//! CLI entry-points for source conversion and merging.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    graph::{self, write_edges, write_rows},
    sources::{webchild, yago, WebChildLayout},
};

/// Args for the `convert-webchild` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct WebChildArgs {
    /// Layout of the input dump.
    #[arg(long, value_enum)]
    pub layout: WebChildLayout,
    /// Tab-separated WebChild dump.
    #[arg(long)]
    pub input: PathBuf,
    /// Destination graph file.
    #[arg(long)]
    pub output: PathBuf,
}

#[instrument(skip(_settings))]
pub fn convert_webchild(args: WebChildArgs, _settings: Settings) -> Result<()> {
    let edges = match args.layout {
        WebChildLayout::PartWhole => webchild::convert_part_whole(&args.input)?,
        WebChildLayout::Property => webchild::convert_property(&args.input)?,
        WebChildLayout::Activity => webchild::convert_activity(&args.input)?,
        WebChildLayout::Spatial => webchild::convert_spatial(&args.input)?,
    };
    write_edges(&args.output, &edges)
}

/// Args for the `convert-yago` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct YagoArgs {
    /// YAGO taxonomy TSV with a header line.
    #[arg(long)]
    pub input: PathBuf,
    /// Destination graph file.
    #[arg(long)]
    pub output: PathBuf,
}

#[instrument(skip(_settings))]
pub fn convert_yago(args: YagoArgs, _settings: Settings) -> Result<()> {
    let (edges, summary) = yago::convert_taxonomy(&args.input)?;
    write_edges(&args.output, &edges)?;
    info!(?summary, "yago conversion finished");
    Ok(())
}

/// Args for the `merge` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct MergeArgs {
    /// Comma separated graph files, merged in the given order.
    #[arg(long, value_delimiter = ',', required = true)]
    pub inputs: Vec<PathBuf>,
    /// Merged graph with an extra `file` column.
    #[arg(long)]
    pub output: PathBuf,
}

#[instrument(skip(_settings))]
pub fn merge(args: MergeArgs, _settings: Settings) -> Result<()> {
    graph::concatenate_files(&args.inputs, &args.output)?;
    Ok(())
}

/// Args for the `reduce-webchild` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct ReduceArgs {
    /// Merged WebChild graph carrying the `file` column.
    #[arg(long)]
    pub input: PathBuf,
    /// Destination graph file.
    #[arg(long)]
    pub output: PathBuf,
}

#[instrument(skip(_settings))]
pub fn reduce(args: ReduceArgs, _settings: Settings) -> Result<()> {
    let rows = graph::read_rows(&args.input)?;
    let reduced = webchild::reduce_webchild(rows);
    write_rows(&args.output, &reduced)
}
