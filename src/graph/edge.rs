//! Edge rows and the tab-separated graph format shared by every source.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::error::PipelineError;

/// Positional columns of the common graph layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Word1 = 0,
    Word2 = 1,
    Score = 2,
    Source = 3,
    Relation = 4,
    /// Added by [`concatenate_files`]: the file a row was merged from.
    File = 5,
}

impl Column {
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Column {
    type Err = PipelineError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "word1" => Ok(Self::Word1),
            "word2" => Ok(Self::Word2),
            "score" | "weight" => Ok(Self::Score),
            "source" | "sources" => Ok(Self::Source),
            "relation" => Ok(Self::Relation),
            "file" | "filename" => Ok(Self::File),
            other => Err(PipelineError::UnknownColumn(other.to_string())),
        }
    }
}

/// One graph row, kept verbatim so untouched rows re-serialise unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRow {
    fields: Vec<String>,
}

impl EdgeRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `column`, or `""` when the row is shorter.
    pub fn get(&self, column: Column) -> &str {
        self.fields
            .get(column.index())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn word1(&self) -> &str {
        self.get(Column::Word1)
    }

    pub fn word2(&self) -> &str {
        self.get(Column::Word2)
    }

    pub fn source(&self) -> &str {
        self.get(Column::Source)
    }

    pub fn relation(&self) -> &str {
        self.get(Column::Relation)
    }

    pub fn file(&self) -> &str {
        self.get(Column::File)
    }

    /// Numeric score; unparsable text reads as `None`.
    pub fn score(&self) -> Option<f64> {
        self.get(Column::Score).trim().parse().ok()
    }

    /// Overwrite a column, padding short rows with empty fields.
    pub fn set(&mut self, column: Column, value: String) {
        let idx = column.index();
        if self.fields.len() <= idx {
            self.fields.resize(idx + 1, String::new());
        }
        self.fields[idx] = value;
    }

    pub fn set_score(&mut self, score: f64) {
        self.set(Column::Score, format_score(score));
    }

    /// Both endpoints are English concepts.
    pub fn is_english(&self) -> bool {
        ENGLISH_CONCEPT.is_match(self.word1()) && ENGLISH_CONCEPT.is_match(self.word2())
    }
}

static ENGLISH_CONCEPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/c/en/").expect("valid regex"));

/// Typed edge emitted by the source converters.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub word1: String,
    pub word2: String,
    pub score: f64,
    pub source: String,
    pub relation: String,
}

impl Edge {
    pub fn to_row(&self) -> EdgeRow {
        EdgeRow::new(vec![
            self.word1.clone(),
            self.word2.clone(),
            format_score(self.score),
            self.source.clone(),
            self.relation.clone(),
        ])
    }
}

/// Render scores the way the graph files carry them: whole numbers keep a `.0`.
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}

/// Read a headerless tab-separated graph file.
///
/// Blank lines are not rows: they are skipped, so row indices count the
/// non-blank lines and a graph written back carries none.
pub fn read_rows(path: &Path) -> Result<Vec<EdgeRow>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)
        .with_context(|| format!("open graph {}", path.display()))?;
    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record: StringRecord = result.map_err(|err| PipelineError::MalformedRow {
            line: line + 1,
            reason: err.to_string(),
        })?;
        rows.push(EdgeRow::new(record.iter().map(str::to_string).collect()));
    }
    info!(path = %path.display(), rows = rows.len(), "loaded graph rows");
    Ok(rows)
}

/// Write rows without header or index, tab separated and unquoted.
pub fn write_rows(path: &Path, rows: &[EdgeRow]) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    for row in rows {
        writer.write_record(row.fields())?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = rows.len(), "wrote graph rows");
    Ok(())
}

/// Convenience wrapper for converter output.
pub fn write_edges(path: &Path, edges: &[Edge]) -> Result<()> {
    let rows: Vec<EdgeRow> = edges.iter().map(Edge::to_row).collect();
    write_rows(path, &rows)
}

/// Indices of rows whose two endpoints are English concepts.
pub fn english_indices(rows: &[EdgeRow]) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.is_english())
        .map(|(idx, _)| idx)
        .collect()
}

/// Merge graph files, tagging each trimmed line with the file it came from.
///
/// Bytes that are not valid UTF-8 are dropped.
pub fn concatenate_files(inputs: &[PathBuf], out: &Path) -> Result<usize> {
    ensure_parent(out)?;
    let file = File::create(out).with_context(|| format!("create {}", out.display()))?;
    let mut writer = BufWriter::new(file);
    let mut total = 0usize;
    for input in inputs {
        let bytes = fs::read(input).with_context(|| format!("read {}", input.display()))?;
        let text = strip_invalid_utf8(&bytes);
        let name = input.display().to_string();
        let mut count = 0usize;
        for line in text.lines() {
            writeln!(writer, "{}\t{}", line.trim(), name)?;
            count += 1;
        }
        info!(path = %input.display(), rows = count, "merged graph file");
        total += count;
    }
    writer.flush()?;
    info!(path = %out.display(), rows = total, "merge done");
    Ok(total)
}

/// Keep the valid UTF-8 runs of `bytes`, dropping the invalid sequences.
fn strip_invalid_utf8(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
