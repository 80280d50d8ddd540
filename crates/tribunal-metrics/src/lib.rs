//! Binary-classification metrics over evaluation outcomes.
//!
//! The positive class is `Hallucinated` (label 1). F1 follows the usual
//! convention of scoring 0 when the denominator is empty, so a run with no
//! positive predictions and no positive truths reports 0 rather than
//! erroring.

use serde::Serialize;
use tribunal_core::eval::driver::RowOutcome;
use tribunal_core::verdict::Verdict;

/// Confusion counts with `Hallucinated` as the positive class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Confusion {
    pub tp: u32,
    pub tn: u32,
    pub fp: u32,
    pub fn_: u32,
}

impl Confusion {
    pub fn observe(&mut self, truth: Verdict, predicted: Verdict) {
        match (truth.is_hallucinated(), predicted.is_hallucinated()) {
            (true, true) => self.tp += 1,
            (false, false) => self.tn += 1,
            (false, true) => self.fp += 1,
            (true, false) => self.fn_ += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.tp + self.tn + self.fp + self.fn_
    }

    pub fn f1(&self) -> f64 {
        let denominator = 2 * self.tp + self.fp + self.fn_;
        if denominator == 0 {
            return 0.0;
        }
        f64::from(2 * self.tp) / f64::from(denominator)
    }

    /// Sensitivity over the corrupted cases.
    pub fn tpr(&self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }

    /// Specificity over the faithful cases.
    pub fn tnr(&self) -> f64 {
        ratio(self.tn, self.tn + self.fp)
    }
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}

/// Scores for one strategy over one run.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyMetrics {
    pub strategy: String,
    pub confusion: Confusion,
}

impl StrategyMetrics {
    pub fn f1(&self) -> f64 {
        self.confusion.f1()
    }

    pub fn tpr(&self) -> f64 {
        self.confusion.tpr()
    }

    pub fn tnr(&self) -> f64 {
        self.confusion.tnr()
    }
}

/// Aggregate outcomes per strategy, in order of first appearance.
///
/// Skipped cases simply contribute nothing, so strategies can end up with
/// different totals when the run used the skip policy.
pub fn per_strategy(outcomes: &[RowOutcome]) -> Vec<StrategyMetrics> {
    let mut metrics: Vec<StrategyMetrics> = Vec::new();
    for outcome in outcomes {
        for prediction in &outcome.predictions {
            let entry = match metrics.iter_mut().find(|m| m.strategy == prediction.strategy) {
                Some(entry) => entry,
                None => {
                    metrics.push(StrategyMetrics {
                        strategy: prediction.strategy.clone(),
                        confusion: Confusion::default(),
                    });
                    metrics.last_mut().unwrap()
                }
            };
            entry
                .confusion
                .observe(outcome.case.truth, prediction.verdict);
        }
    }
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use tribunal_core::eval::driver::{EvalCase, Prediction};

    fn outcome(index: usize, truth: Verdict, predictions: &[(&str, Verdict)]) -> RowOutcome {
        RowOutcome {
            case: EvalCase {
                index,
                document: "d".into(),
                summary: "s".into(),
                truth,
            },
            predictions: predictions
                .iter()
                .map(|(name, verdict)| Prediction {
                    strategy: (*name).to_string(),
                    verdict: *verdict,
                    transcript: None,
                })
                .collect(),
        }
    }

    #[test]
    fn confusion_counts_all_four_quadrants() {
        let mut c = Confusion::default();
        c.observe(Verdict::Hallucinated, Verdict::Hallucinated);
        c.observe(Verdict::Supported, Verdict::Supported);
        c.observe(Verdict::Supported, Verdict::Hallucinated);
        c.observe(Verdict::Hallucinated, Verdict::Supported);
        assert_eq!((c.tp, c.tn, c.fp, c.fn_), (1, 1, 1, 1));
        assert_eq!(c.total(), 4);
    }

    #[test]
    fn f1_matches_a_hand_computed_value() {
        // tp=3, fp=1, fn=2: precision 3/4, recall 3/5, f1 = 2*3/(6+1+2).
        let c = Confusion {
            tp: 3,
            tn: 4,
            fp: 1,
            fn_: 2,
        };
        assert!((c.f1() - 6.0 / 9.0).abs() < 1e-12);
        assert!((c.tpr() - 0.6).abs() < 1e-12);
        assert!((c.tnr() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn empty_denominators_score_zero() {
        let c = Confusion::default();
        assert_eq!(c.f1(), 0.0);
        assert_eq!(c.tpr(), 0.0);
        assert_eq!(c.tnr(), 0.0);

        // All-negative truth and predictions: no positives anywhere.
        let all_negative = Confusion {
            tn: 10,
            ..Confusion::default()
        };
        assert_eq!(all_negative.f1(), 0.0);
        assert_eq!(all_negative.tnr(), 1.0);
    }

    #[test]
    fn per_strategy_keeps_first_appearance_order() {
        let outcomes = vec![
            outcome(
                0,
                Verdict::Supported,
                &[
                    ("baseline", Verdict::Supported),
                    ("chain-debates", Verdict::Hallucinated),
                ],
            ),
            outcome(
                1,
                Verdict::Hallucinated,
                &[
                    ("baseline", Verdict::Hallucinated),
                    ("chain-debates", Verdict::Hallucinated),
                ],
            ),
        ];
        let metrics = per_strategy(&outcomes);
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].strategy, "baseline");
        assert_eq!(metrics[1].strategy, "chain-debates");

        // baseline: perfect on both cases.
        assert_eq!(metrics[0].confusion.tp, 1);
        assert_eq!(metrics[0].confusion.tn, 1);
        assert!((metrics[0].f1() - 1.0).abs() < 1e-12);

        // chain-debates: one false positive.
        assert_eq!(metrics[1].confusion.fp, 1);
        assert!((metrics[1].tnr() - 0.0).abs() < 1e-12);
        assert!((metrics[1].tpr() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn strategies_missing_from_some_outcomes_keep_partial_totals() {
        let outcomes = vec![
            outcome(0, Verdict::Supported, &[("baseline", Verdict::Supported)]),
            outcome(
                1,
                Verdict::Hallucinated,
                &[
                    ("baseline", Verdict::Hallucinated),
                    ("late", Verdict::Hallucinated),
                ],
            ),
        ];
        let metrics = per_strategy(&outcomes);
        assert_eq!(metrics[0].confusion.total(), 2);
        assert_eq!(metrics[1].strategy, "late");
        assert_eq!(metrics[1].confusion.total(), 1);
    }
}
