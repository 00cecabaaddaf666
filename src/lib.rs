//! Knowledge-graph corpus tooling: source conversion, sentence generation for
//! language-model scoring, and perplexity-based edge reweighting.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod reweight;
pub mod sentences;
pub mod sources;

pub use error::PipelineError;
