//! Reading perplexities produced by the external language-model scorer.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info};
use walkdir::WalkDir;

/// One scored sentence; other fields the scorer emits are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PerplexityRecord {
    pub ppl: f64,
}

/// Read a scorer result file: a JSON array of objects with a `ppl` field.
pub fn read_perplexity_file(path: &Path) -> Result<Vec<f64>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let records: Vec<PerplexityRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse perplexities in {}", path.display()))?;
    debug!(path = %path.display(), count = records.len(), "read perplexity file");
    Ok(records.into_iter().map(|r| r.ppl).collect())
}

/// Shard folders under `dir`, in case-insensitive natural order
/// (`chunk2` before `chunk10`).
pub fn shard_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut shards = Vec::new();
    let walker = WalkDir::new(dir).follow_links(true).min_depth(1).max_depth(1);
    for entry in walker {
        let entry = entry.with_context(|| format!("list {}", dir.display()))?;
        if entry.file_type().is_dir() {
            shards.push(entry.into_path());
        }
    }
    shards.sort_by_cached_key(|path| natural_key(path));
    Ok(shards)
}

static RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+|\D+").expect("valid regex"));

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Number(u64),
    Text(String),
}

fn natural_key(path: &Path) -> Vec<Segment> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    RUNS.find_iter(&name)
        .map(|run| {
            let run = run.as_str();
            match run.parse::<u64>() {
                Ok(number) => Segment::Number(number),
                Err(_) if run.bytes().all(|b| b.is_ascii_digit()) => Segment::Number(u64::MAX),
                Err(_) => Segment::Text(run.to_string()),
            }
        })
        .collect()
}

/// Concatenate the perplexities of every shard, each holding `file_name`.
pub fn read_perplexity_shards(dir: &Path, file_name: &str) -> Result<Vec<f64>> {
    let shards = shard_dirs(dir)?;
    if shards.is_empty() {
        bail!("no shard folders found under {}", dir.display());
    }
    let mut values = Vec::new();
    for shard in &shards {
        let chunk = read_perplexity_file(&shard.join(file_name))?;
        info!(shard = %shard.display(), count = chunk.len(), "loaded perplexity shard");
        values.extend(chunk);
    }
    info!(shards = shards.len(), count = values.len(), "loaded perplexities");
    Ok(values)
}

/// Load perplexities from a single result file or a folder of shards.
pub fn load_perplexities(path: &Path, file_name: &str) -> Result<Vec<f64>> {
    if path.is_dir() {
        read_perplexity_shards(path, file_name)
    } else {
        read_perplexity_file(path)
    }
}
