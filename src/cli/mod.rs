//! Command-line interface wiring for kg-reweight.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    config::Settings,
    sentences::{ConceptNetTemplates, SentenceBuilder, WebChildTemplates},
};

pub mod ablate;
pub mod chunk;
pub mod convert;
pub mod reweight;
pub mod sentences;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Knowledge-graph sentence generation and reweighting", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::ConvertWebchild(args) => convert::convert_webchild(args, settings),
            Commands::ConvertYago(args) => convert::convert_yago(args, settings),
            Commands::Merge(args) => convert::merge(args, settings),
            Commands::ReduceWebchild(args) => convert::reduce(args, settings),
            Commands::Sentences(args) => sentences::run(args, settings),
            Commands::SplitChunks(args) => chunk::split_chunks(args, settings),
            Commands::SplitLongWords(args) => chunk::split_long_words(args, settings),
            Commands::Reweight(args) => reweight::run(args, settings),
            Commands::Subgraph(args) => ablate::subgraph(args, settings),
            Commands::Prune(args) => ablate::prune(args, settings),
            Commands::PruneOriginal(args) => ablate::prune_original(args, settings),
            Commands::Shuffle(args) => ablate::shuffle(args, settings),
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a WebChild subgraph dump into the common edge layout.
    ConvertWebchild(convert::WebChildArgs),
    /// Convert the YAGO taxonomy into the common edge layout.
    ConvertYago(convert::YagoArgs),
    /// Merge graph files, tagging each row with its file of origin.
    Merge(convert::MergeArgs),
    /// Keep only the top-scoring free-relation edge per word pair.
    ReduceWebchild(convert::ReduceArgs),
    /// Generate scorer sentences and the sentence index for a graph.
    Sentences(sentences::Args),
    /// Split a sentence file into fixed-size chunks for the scorer.
    SplitChunks(chunk::SplitChunksArgs),
    /// Break over-long words so the scorer accepts every sentence.
    SplitLongWords(chunk::SplitLongWordsArgs),
    /// Turn scorer perplexities into edge scores and inject them.
    Reweight(reweight::Args),
    /// Extract the edges of one source dataset.
    Subgraph(ablate::SubgraphArgs),
    /// Zero low-scoring reweighted edges.
    Prune(ablate::PruneArgs),
    /// Zero the original edges a reweighted graph would prune.
    PruneOriginal(ablate::PruneOriginalArgs),
    /// Shuffle columns to build a random baseline graph.
    Shuffle(ablate::ShuffleArgs),
}

/// Sentence template family.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TemplateSet {
    /// ConceptNet relations; also used for converted YAGO graphs.
    #[value(name = "conceptnet")]
    ConceptNet,
    /// WebChild relations, including free-relation subgraphs.
    #[value(name = "webchild")]
    WebChild,
}

impl TemplateSet {
    pub fn builder(self) -> Box<dyn SentenceBuilder> {
        match self {
            Self::ConceptNet => Box::new(ConceptNetTemplates),
            Self::WebChild => Box::new(WebChildTemplates),
        }
    }
}
