//! Benchmark row loading: CSV or JSONL, single-file or paired layout.
//!
//! The single-file layout carries one document with a faithful and a
//! corrupted summary per row. The paired layout keeps faithful and corrupted
//! rows in two separate files whose i-th rows correspond; each file carries
//! its own document column.

use crate::eval::driver::EvalCase;
use crate::verdict::Verdict;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    #[default]
    Csv,
    Jsonl,
}

/// One row of the single-file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRow {
    #[serde(alias = "article")]
    pub document: String,
    #[serde(alias = "summary")]
    pub right_summary: String,
    pub hallucinated_summary: String,
}

/// One row of either file in the paired layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SummaryRecord {
    #[serde(alias = "article")]
    document: String,
    summary: String,
}

fn read_csv<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| anyhow::anyhow!("failed to open dataset {}: {}", path.display(), e))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

fn read_jsonl<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read dataset {}: {}", path.display(), e))?;
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(Into::into))
        .collect()
}

fn read_rows<T: serde::de::DeserializeOwned>(
    path: &Path,
    format: DatasetFormat,
) -> anyhow::Result<Vec<T>> {
    match format {
        DatasetFormat::Csv => read_csv(path),
        DatasetFormat::Jsonl => read_jsonl(path),
    }
}

/// Load single-file rows, drop `skip_rows` leading rows, and shuffle with a
/// seeded generator so every run over the same file sees the same order.
pub fn load_rows(
    path: &Path,
    format: DatasetFormat,
    skip_rows: usize,
    seed: u64,
) -> anyhow::Result<Vec<DatasetRow>> {
    let mut rows: Vec<DatasetRow> = read_rows(path, format)?;
    rows.drain(..skip_rows.min(rows.len()));
    shuffle(&mut rows, seed);
    Ok(rows)
}

/// Expand rows into evaluation cases: faithful summary first, corrupted
/// second, so truth labels alternate 0, 1, 0, 1 in case order.
pub fn cases_from_rows(rows: &[DatasetRow], limit: usize) -> Vec<EvalCase> {
    let mut cases = Vec::with_capacity(2 * limit.min(rows.len()));
    for row in rows.iter().take(limit) {
        cases.push(EvalCase {
            index: cases.len(),
            document: row.document.clone(),
            summary: row.right_summary.clone(),
            truth: Verdict::Supported,
        });
        cases.push(EvalCase {
            index: cases.len(),
            document: row.document.clone(),
            summary: row.hallucinated_summary.clone(),
            truth: Verdict::Hallucinated,
        });
    }
    cases
}

/// Load the paired layout directly into interleaved cases. Both files are
/// shuffled with the same seed so their i-th rows stay aligned, then each
/// pair yields a faithful case followed by a corrupted one. Documents may
/// differ between the two files; each case keeps the document of its own
/// row.
pub fn load_paired_cases(
    correct_path: &Path,
    hallucinated_path: &Path,
    format: DatasetFormat,
    skip_rows: usize,
    seed: u64,
    limit: usize,
) -> anyhow::Result<Vec<EvalCase>> {
    let mut correct: Vec<SummaryRecord> = read_rows(correct_path, format)?;
    let mut hallucinated: Vec<SummaryRecord> = read_rows(hallucinated_path, format)?;
    correct.drain(..skip_rows.min(correct.len()));
    hallucinated.drain(..skip_rows.min(hallucinated.len()));
    shuffle(&mut correct, seed);
    shuffle(&mut hallucinated, seed);

    let pairs = correct.len().min(hallucinated.len()).min(limit);
    let mut cases = Vec::with_capacity(2 * pairs);
    for (right, wrong) in correct.into_iter().zip(hallucinated).take(pairs) {
        cases.push(EvalCase {
            index: cases.len(),
            document: right.document,
            summary: right.summary,
            truth: Verdict::Supported,
        });
        cases.push(EvalCase {
            index: cases.len(),
            document: wrong.document,
            summary: wrong.summary,
            truth: Verdict::Hallucinated,
        });
    }
    Ok(cases)
}

fn shuffle<T>(items: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
}
