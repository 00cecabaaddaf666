//! Histogram reports for perplexity and score distributions.

use std::{fs::File, path::Path};

use anyhow::{bail, Result};
use polars::prelude::{CsvWriter, DataFrame, NamedFrom, SerWriter, Series};
use tracing::info;

use crate::graph::edge::ensure_parent;

/// Equal-width histogram over the finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bin_start: Vec<f64>,
    pub bin_end: Vec<f64>,
    pub count: Vec<u64>,
}

impl Histogram {
    pub fn build(values: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            bail!("histogram needs at least one bin");
        }
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Ok(Self {
                bin_start: Vec::new(),
                bin_end: Vec::new(),
                count: Vec::new(),
            });
        }
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let width = if max > min { (max - min) / bins as f64 } else { 1.0 };

        let mut count = vec![0u64; bins];
        for value in &finite {
            let slot = (((value - min) / width) as usize).min(bins - 1);
            count[slot] += 1;
        }
        let bin_start = (0..bins).map(|i| min + i as f64 * width).collect();
        let bin_end = (0..bins).map(|i| min + (i + 1) as f64 * width).collect();
        Ok(Self {
            bin_start,
            bin_end,
            count,
        })
    }

    pub fn total(&self) -> u64 {
        self.count.iter().sum()
    }
}

/// Write a histogram of `values` as CSV (`bin_start,bin_end,count`).
pub fn write_histogram(values: &[f64], bins: usize, path: &Path) -> Result<Histogram> {
    let histogram = Histogram::build(values, bins)?;
    let mut df = DataFrame::new(vec![
        Series::new("bin_start".into(), histogram.bin_start.clone()),
        Series::new("bin_end".into(), histogram.bin_end.clone()),
        Series::new(
            "count".into(),
            histogram.count.iter().map(|c| *c as i64).collect::<Vec<_>>(),
        ),
    ])?;
    ensure_parent(path)?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    info!(
        path = %path.display(),
        bins = df.height(),
        values = histogram.total(),
        "wrote histogram"
    );
    Ok(histogram)
}
