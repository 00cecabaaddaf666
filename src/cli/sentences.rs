//! CLI entry-point for sentence generation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    cli::TemplateSet,
    config::Settings,
    graph::{english_indices, read_rows},
    sentences::{generate_sentences, write_sentences, MissedRelations},
};

/// Args for the `sentences` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Graph to build sentences for.
    #[arg(long)]
    pub graph: PathBuf,
    /// Template family matching the graph's relations.
    #[arg(long, value_enum, default_value = "conceptnet")]
    pub templates: TemplateSet,
    /// Only use edges whose two concepts are English.
    #[arg(long)]
    pub english_only: bool,
    /// Scorer input, one sentence per line.
    #[arg(long)]
    pub out_txt: PathBuf,
    /// Sentence index mapping sentences back to graph rows.
    #[arg(long)]
    pub out_csv: PathBuf,
    /// Do not append unknown relations to the missed-relation log.
    #[arg(long)]
    pub no_missed_log: bool,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let rows = read_rows(&args.graph)?;
    let indices: Vec<usize> = if args.english_only {
        english_indices(&rows)
    } else {
        (0..rows.len()).collect()
    };

    let builder = args.templates.builder();
    let mut missed = MissedRelations::new();
    let collector = (!args.no_missed_log).then_some(&mut missed);
    let records = generate_sentences(&rows, &indices, builder.as_ref(), collector)?;
    write_sentences(&records, &args.out_txt, &args.out_csv)?;
    missed.flush(&settings.missed_relations_path)
}
