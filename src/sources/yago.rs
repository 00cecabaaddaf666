//! YAGO taxonomy facts normalised into the common edge layout.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{
    error::PipelineError,
    graph::{word_to_concept, word_to_rel, Edge},
};

/// The only YAGO taxonomy predicate the graph keeps.
pub const SUBCLASS_OF: &str = "subClassOf";

/// Words of a YAGO entity such as `<wikicat_Dog_breeds>` or
/// `<wordnet_dog_102084071>`; other entity kinds yield `None`.
pub fn yago_word(entity: &str) -> Option<String> {
    let inner = entity.strip_prefix('<')?.strip_suffix('>')?;
    let parts: Vec<&str> = inner.split('_').collect();
    let words = match parts.first().copied() {
        Some("wikicat") => parts[1..].join(" "),
        Some("wordnet") if parts.len() >= 2 => parts[1..parts.len() - 1].join(" "),
        _ => return None,
    };
    (!words.is_empty()).then_some(words)
}

/// Namespace prefix of a YAGO entity (`wikicat`, `wordnet`, ...).
pub fn yago_source(entity: &str) -> String {
    let inner = entity.trim_start_matches('<').trim_end_matches('>');
    inner.split('_').next().unwrap_or_default().to_string()
}

/// Counters reported after a YAGO conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YagoSummary {
    pub facts: usize,
    pub converted: usize,
    pub errors: usize,
}

/// Convert a YAGO taxonomy TSV (`id, subject, predicate, object`) into edges.
///
/// The first line is a header. Facts with unusable entities or a predicate
/// other than `subClassOf` are counted as errors and skipped.
pub fn convert_taxonomy(path: &Path) -> Result<(Vec<Edge>, YagoSummary)> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut summary = YagoSummary::default();
    let mut edges = Vec::new();

    for (line_no, line) in BufReader::new(file).lines().enumerate().skip(1) {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);
        summary.facts += 1;
        if summary.facts % 10_000 == 0 {
            debug!(facts = summary.facts, "converting yago facts");
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 4 {
            return Err(PipelineError::MalformedRow {
                line: line_no + 1,
                reason: format!("expected 4 fields, found {}", fields.len()),
            }
            .into());
        }

        let (Some(word1), Some(word2)) = (yago_word(fields[1]), yago_word(fields[3].trim())) else {
            warn!(line = line_no + 1, %line, "wrong format of words");
            summary.errors += 1;
            continue;
        };
        let predicate = fields[2].split(':').nth(1).unwrap_or_default();
        if predicate != SUBCLASS_OF {
            warn!(line = line_no + 1, %line, "wrong relation format");
            summary.errors += 1;
            continue;
        }

        edges.push(Edge {
            word1: word_to_concept(&word1),
            word2: word_to_concept(&word2),
            score: 1.0,
            source: format!("{};{}", yago_source(fields[1]), yago_source(fields[3].trim())),
            relation: word_to_rel(predicate),
        });
        summary.converted += 1;
    }

    info!(
        facts = summary.facts,
        converted = summary.converted,
        errors = summary.errors,
        "converted yago taxonomy"
    );
    Ok((edges, summary))
}
