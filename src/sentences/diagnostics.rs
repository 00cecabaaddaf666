//! Collector for relations that no sentence template covers.

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::warn;

use crate::graph::edge::ensure_parent;

/// Relations missed during one batch, in first-seen order with hit counts.
#[derive(Debug, Default, Clone)]
pub struct MissedRelations {
    counts: IndexMap<String, usize>,
}

impl MissedRelations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, relation: &str) {
        *self.counts.entry(relation.to_string()).or_insert(0) += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct relations missed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, relation: &str) -> usize {
        self.counts.get(relation).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(rel, count)| (rel.as_str(), *count))
    }

    /// Append `relation<TAB>count` lines to `path` and clear the collector.
    pub fn flush(&mut self, path: &Path) -> Result<()> {
        if self.counts.is_empty() {
            return Ok(());
        }
        ensure_parent(path)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        for (relation, count) in &self.counts {
            writeln!(writer, "{relation}\t{count}")?;
        }
        writer.flush()?;
        warn!(
            path = %path.display(),
            relations = self.counts.len(),
            "relations without a sentence template"
        );
        self.counts.clear();
        Ok(())
    }
}
