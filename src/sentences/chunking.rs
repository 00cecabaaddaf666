//! Preparing sentence files for the external language-model scorer.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::graph::edge::ensure_parent;

/// Path for chunk `index`: the first `{}` in `template` is replaced.
pub fn chunk_path(template: &str, index: usize) -> PathBuf {
    PathBuf::from(template.replacen("{}", &index.to_string(), 1))
}

/// Split a sentence file into chunks of `chunk_size` lines each.
///
/// Chunks are numbered from 0 in file order, so scorer results read back in
/// natural order line up with the sentence index.
pub fn split_text_file(input: &Path, out_template: &str, chunk_size: usize) -> Result<Vec<PathBuf>> {
    if chunk_size == 0 {
        bail!("chunk size must be at least 1");
    }
    if !out_template.contains("{}") {
        bail!("output template `{out_template}` needs a `{{}}` placeholder");
    }
    let reader = BufReader::new(File::open(input).with_context(|| format!("open {}", input.display()))?);

    let mut outputs = Vec::new();
    let mut writer: Option<BufWriter<File>> = None;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i % chunk_size == 0 {
            if let Some(mut done) = writer.take() {
                done.flush()?;
            }
            let path = chunk_path(out_template, outputs.len());
            ensure_parent(&path)?;
            let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
            debug!(path = %path.display(), "starting chunk");
            writer = Some(BufWriter::new(file));
            outputs.push(path);
        }
        if let Some(out) = writer.as_mut() {
            writeln!(out, "{line}")?;
        }
    }
    if let Some(mut done) = writer.take() {
        done.flush()?;
    }
    info!(chunks = outputs.len(), chunk_size, "split sentence file");
    Ok(outputs)
}

/// Break every word longer than `max_len` characters into `max_len` pieces.
pub fn split_long_word(word: &str, max_len: usize) -> String {
    if max_len == 0 || word.chars().count() <= max_len {
        return word.to_string();
    }
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(max_len)
        .map(|piece| piece.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrite a sentence file so no word exceeds `max_len` characters.
pub fn split_long_words(input: &Path, output: &Path, max_len: usize) -> Result<usize> {
    if max_len == 0 {
        bail!("maximum word length must be at least 1");
    }
    let reader = BufReader::new(File::open(input).with_context(|| format!("open {}", input.display()))?);
    ensure_parent(output)?;
    let mut writer = BufWriter::new(
        File::create(output).with_context(|| format!("create {}", output.display()))?,
    );
    let mut split_words = 0usize;
    for line in reader.lines() {
        let line = line?;
        let rewritten: Vec<String> = line
            .split(' ')
            .map(|word| {
                if word.chars().count() > max_len {
                    debug!(%word, "splitting long word");
                    split_words += 1;
                }
                split_long_word(word, max_len)
            })
            .collect();
        writeln!(writer, "{}", rewritten.join(" "))?;
    }
    writer.flush()?;
    info!(path = %output.display(), split_words, "split long words");
    Ok(split_words)
}
