//! Sequential evaluation driver.
//!
//! Cases run one after another and strategies run one after another within a
//! case; nothing is pipelined, so a scripted backend sees a fully
//! deterministic call order. Each finished case is pushed to a sink before
//! the next one starts, which keeps partial results on disk when a long run
//! dies midway.

use crate::strategy::Strategy;
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// What to do when a strategy fails on a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the run, keeping everything already sunk.
    #[default]
    Stop,
    /// Drop the whole case and continue with the next one.
    Skip,
}

/// One (document, summary) pair with its ground-truth label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalCase {
    pub index: usize,
    pub document: String,
    pub summary: String,
    pub truth: Verdict,
}

/// One strategy's verdict on one case.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub strategy: String,
    pub verdict: Verdict,
    pub transcript: Option<String>,
}

/// A fully judged case: every configured strategy has predicted.
#[derive(Debug, Clone, Serialize)]
pub struct RowOutcome {
    pub case: EvalCase,
    pub predictions: Vec<Prediction>,
}

impl RowOutcome {
    pub fn prediction(&self, strategy: &str) -> Option<&Prediction> {
        self.predictions.iter().find(|p| p.strategy == strategy)
    }
}

/// Run every strategy over every case, in order, emitting each finished
/// outcome through `sink` before starting the next case.
pub async fn run_suite(
    strategies: &[Box<dyn Strategy>],
    cases: &[EvalCase],
    policy: FailurePolicy,
    mut sink: impl FnMut(&RowOutcome) -> anyhow::Result<()>,
) -> anyhow::Result<Vec<RowOutcome>> {
    let mut outcomes = Vec::with_capacity(cases.len());

    'cases: for case in cases {
        tracing::info!(
            case = case.index,
            total = cases.len(),
            truth = case.truth.as_label(),
            "judging case"
        );
        let mut predictions = Vec::with_capacity(strategies.len());
        for strategy in strategies {
            match strategy.run(&case.document, &case.summary).await {
                Ok(outcome) => predictions.push(Prediction {
                    strategy: strategy.name().to_string(),
                    verdict: outcome.verdict,
                    transcript: outcome.transcript,
                }),
                Err(e) => match policy {
                    FailurePolicy::Stop => {
                        return Err(e.context(format!(
                            "strategy '{}' failed on case {}",
                            strategy.name(),
                            case.index
                        )));
                    }
                    FailurePolicy::Skip => {
                        tracing::warn!(
                            case = case.index,
                            strategy = strategy.name(),
                            error = %e,
                            "skipping case after strategy failure"
                        );
                        continue 'cases;
                    }
                },
            }
        }
        let outcome = RowOutcome {
            case: case.clone(),
            predictions,
        };
        sink(&outcome)?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
