//! Turning graph edges into natural-language sentences for the scorer.

pub mod chunking;
pub mod conceptnet;
pub mod diagnostics;
pub mod webchild;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::info;

use crate::{
    error::PipelineError,
    graph::{edge::ensure_parent, EdgeRow},
};

pub use conceptnet::{rel_to_sentence, ConceptNetTemplates};
pub use diagnostics::MissedRelations;
pub use webchild::{webchild_rel_to_sentence, Provenance, WebChildTemplates};

/// Maps one graph row to a sentence, or `None` when no template applies.
pub trait SentenceBuilder {
    fn build(&self, row: &EdgeRow, missed: Option<&mut MissedRelations>) -> Option<String>;
}

/// A generated sentence and the graph row it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    pub row: usize,
    pub text: String,
}

/// Build sentences for the selected rows, in the order of `indices`.
///
/// Rows without a sentence are skipped; the record keeps the original row
/// index so scores can be injected back later.
pub fn generate_sentences(
    rows: &[EdgeRow],
    indices: &[usize],
    builder: &dyn SentenceBuilder,
    mut missed: Option<&mut MissedRelations>,
) -> Result<Vec<SentenceRecord>, PipelineError> {
    let mut records = Vec::with_capacity(indices.len());
    for &row in indices {
        let edge = rows.get(row).ok_or(PipelineError::RowOutOfRange {
            row,
            rows: rows.len(),
        })?;
        if let Some(text) = builder.build(edge, missed.as_deref_mut()) {
            records.push(SentenceRecord { row, text });
        }
    }
    info!(
        selected = indices.len(),
        sentences = records.len(),
        "generated sentences"
    );
    Ok(records)
}

/// Write the scorer input (`.txt`, one sentence per line) and the index file
/// (`.csv`, tab separated with header `\t0\t1`).
pub fn write_sentences(records: &[SentenceRecord], out_txt: &Path, out_csv: &Path) -> Result<()> {
    ensure_parent(out_txt)?;
    let mut text = BufWriter::new(
        File::create(out_txt).with_context(|| format!("create {}", out_txt.display()))?,
    );
    for record in records {
        writeln!(text, "{}", record.text)?;
    }
    text.flush()?;

    ensure_parent(out_csv)?;
    let mut index = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(out_csv)
        .with_context(|| format!("create {}", out_csv.display()))?;
    index.write_record(["", "0", "1"])?;
    for (position, record) in records.iter().enumerate() {
        index.write_record([
            position.to_string(),
            record.row.to_string(),
            record.text.clone(),
        ])?;
    }
    index.flush()?;
    info!(
        txt = %out_txt.display(),
        csv = %out_csv.display(),
        sentences = records.len(),
        "wrote sentence files"
    );
    Ok(())
}

/// Read a sentence index file back as records, in file order.
pub fn read_sentence_index(path: &Path) -> Result<Vec<SentenceRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("open sentence index {}", path.display()))?;
    let mut records = Vec::new();
    for (line, result) in reader.deserialize().enumerate() {
        let (_, row, text): (usize, usize, String) =
            result.map_err(|err| PipelineError::MalformedRow {
                line: line + 1,
                reason: err.to_string(),
            })?;
        records.push(SentenceRecord { row, text });
    }
    info!(path = %path.display(), sentences = records.len(), "loaded sentence index");
    Ok(records)
}
