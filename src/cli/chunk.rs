//! CLI entry-points preparing sentence files for the scorer.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, sentences::chunking};

/// Args for the `split-chunks` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct SplitChunksArgs {
    /// Sentence file to split.
    #[arg(long)]
    pub input: PathBuf,
    /// Output path template; `{}` is replaced by the chunk number.
    #[arg(long)]
    pub out_template: String,
    /// Sentences per chunk.
    #[arg(long, default_value_t = 200_000)]
    pub chunk_size: usize,
}

#[instrument(skip(_settings))]
pub fn split_chunks(args: SplitChunksArgs, _settings: Settings) -> Result<()> {
    chunking::split_text_file(&args.input, &args.out_template, args.chunk_size)?;
    Ok(())
}

/// Args for the `split-long-words` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct SplitLongWordsArgs {
    /// Sentence file to rewrite.
    #[arg(long)]
    pub input: PathBuf,
    /// Destination sentence file.
    #[arg(long)]
    pub output: PathBuf,
    /// Longest word, in characters, the scorer accepts.
    #[arg(long, default_value_t = 43)]
    pub max_len: usize,
}

#[instrument(skip(_settings))]
pub fn split_long_words(args: SplitLongWordsArgs, _settings: Settings) -> Result<()> {
    chunking::split_long_words(&args.input, &args.output, args.max_len)?;
    Ok(())
}
