//! CSV persistence for per-case results and per-run summaries.
//!
//! Both files are append-only: the header is written once when the file is
//! created and successive runs keep adding rows, so several experiments can
//! share one results file.

use crate::eval::driver::RowOutcome;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Streams finished cases to disk, one CSV row per case.
///
/// Column layout: case index, truth label, document, summary, then one
/// prediction column and one transcript column per strategy, in the
/// configured strategy order.
pub struct ResultsWriter {
    path: PathBuf,
    strategies: Vec<String>,
}

impl ResultsWriter {
    pub fn new(path: impl Into<PathBuf>, strategies: Vec<String>) -> Self {
        Self {
            path: path.into(),
            strategies,
        }
    }

    pub fn append(&self, outcome: &RowOutcome) -> anyhow::Result<()> {
        let fresh = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if fresh {
            let mut header = vec![
                "case".to_string(),
                "truth".to_string(),
                "document".to_string(),
                "summary".to_string(),
            ];
            for name in &self.strategies {
                header.push(format!("{name} prediction"));
                header.push(format!("{name} transcript"));
            }
            writer.write_record(&header)?;
        }

        let mut record = vec![
            outcome.case.index.to_string(),
            outcome.case.truth.as_label().to_string(),
            outcome.case.document.clone(),
            outcome.case.summary.clone(),
        ];
        for name in &self.strategies {
            match outcome.prediction(name) {
                Some(p) => {
                    record.push(p.verdict.as_label().to_string());
                    record.push(p.transcript.clone().unwrap_or_default());
                }
                None => {
                    record.push(String::new());
                    record.push(String::new());
                }
            }
        }
        writer.write_record(&record)?;
        writer.flush()?;
        Ok(())
    }
}

/// Aggregate scores for one strategy over one run.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyScore {
    pub strategy: String,
    pub f1: f64,
    pub tpr: f64,
    pub tnr: f64,
}

/// One run's identity and aggregate scores.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: String,
    pub timestamp: String,
    pub cases: usize,
    pub scores: Vec<StrategyScore>,
}

impl RunSummary {
    pub fn new(cases: usize, scores: Vec<StrategyScore>) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            cases,
            scores,
        }
    }

    /// Append this run to the summary file, one row per strategy.
    pub fn append_to(&self, path: &Path) -> anyhow::Result<()> {
        let fresh = !path.exists();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if fresh {
            writer.write_record([
                "run_id", "timestamp", "cases", "strategy", "f1", "tpr", "tnr",
            ])?;
        }
        let cases = self.cases.to_string();
        for score in &self.scores {
            let f1 = format!("{:.4}", score.f1);
            let tpr = format!("{:.4}", score.tpr);
            let tnr = format!("{:.4}", score.tnr);
            writer.write_record([
                self.run_id.as_str(),
                self.timestamp.as_str(),
                cases.as_str(),
                score.strategy.as_str(),
                f1.as_str(),
                tpr.as_str(),
                tnr.as_str(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
