//! Runtime configuration utilities for kg-reweight.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Root folder for source graphs and scorer results.
    pub data_dir: PathBuf,
    /// Root folder for converted graphs, sentences and reports.
    pub outputs_dir: PathBuf,
    /// File name the language-model scorer writes inside each shard folder.
    pub perplexity_file_name: String,
    /// Numerator used by the `reweight_light` score type.
    pub reweight_scale_factor: f64,
    /// Number of bins used for histogram reports.
    pub histogram_bins: usize,
    /// Side file collecting relations no sentence template matched.
    pub missed_relations_path: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));
        let perplexity_file_name = env::var("PERPLEXITY_RESULTS_FILE")
            .unwrap_or_else(|_| "test_results.json".to_string());
        let reweight_scale_factor = env::var("REWEIGHT_SCALE_FACTOR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50.0);
        let histogram_bins = env::var("HISTOGRAM_BINS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(200);
        let missed_relations_path = env::var("MISSED_RELATIONS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| outputs_dir.join("sentences/missed_relation_types.txt"));

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;
        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            data_dir,
            outputs_dir,
            perplexity_file_name,
            reweight_scale_factor,
            histogram_bins,
            missed_relations_path,
        })
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}
