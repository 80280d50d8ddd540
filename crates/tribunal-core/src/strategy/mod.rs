//! Orchestration strategies: policies for reducing a (document, summary)
//! pair to one binary verdict.
//!
//! All per-unit strategies share the early-exit OR reduction: the summary is
//! hallucinated as soon as any unit is, and supported only when every
//! examined unit is. Work inside a row is strictly sequential because later
//! prompts embed the literal text of earlier responses.

mod baseline;
mod chain_debates;
mod collaborative;
mod cot;
mod counterfactual;
mod sentence;
mod statement;
mod tailored;

pub use baseline::Baseline;
pub use chain_debates::ChainDebates;
pub use collaborative::CollaborativeDebate;
pub use cot::ChainOfThought;
pub use counterfactual::CounterfactualDebate;
pub use sentence::SentenceLevel;
pub use statement::StatementLevel;
pub use tailored::TailoredThoughts;

use crate::config::StrategyConfig;
use crate::providers::ModelRegistry;
use crate::verdict::Verdict;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Decomposition granularity for unit-based strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Sentence,
    Statement,
}

/// Result of one strategy over one (document, summary) pair.
#[derive(Debug, Clone)]
pub struct StrategyOutcome {
    pub verdict: Verdict,
    /// Intermediate text worth persisting: reasoning or debate records.
    pub transcript: Option<String>,
}

impl StrategyOutcome {
    pub fn bare(verdict: Verdict) -> Self {
        Self {
            verdict,
            transcript: None,
        }
    }

    pub fn with_transcript(verdict: Verdict, transcript: impl Into<String>) -> Self {
        Self {
            verdict,
            transcript: Some(transcript.into()),
        }
    }
}

/// A policy producing a document-level verdict for one evaluation case.
///
/// Any judge-client failure aborts the case; there is no fallback or
/// partial credit.
#[async_trait]
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self, document: &str, summary: &str) -> anyhow::Result<StrategyOutcome>;
}

/// Identifies a strategy variant in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Baseline,
    ChainOfThought,
    SentenceLevel,
    StatementLevel,
    TailoredThoughts,
    CounterfactualDebate,
    ChainDebates,
    CollaborativeDebate,
}

/// Instantiate the configured strategies against a model registry.
pub fn build_strategies(
    configs: &[StrategyConfig],
    registry: &ModelRegistry,
) -> anyhow::Result<Vec<Box<dyn Strategy>>> {
    let mut strategies: Vec<Box<dyn Strategy>> = Vec::with_capacity(configs.len());
    for cfg in configs {
        let judge = registry.get(cfg.judge)?;
        let strategy: Box<dyn Strategy> = match cfg.kind {
            StrategyKind::Baseline => Box::new(Baseline::new(judge)),
            StrategyKind::ChainOfThought => Box::new(ChainOfThought::new(judge)),
            StrategyKind::SentenceLevel => {
                Box::new(SentenceLevel::new(registry.get(cfg.extractor)?, judge))
            }
            StrategyKind::StatementLevel => {
                Box::new(StatementLevel::new(registry.get(cfg.extractor)?, judge))
            }
            StrategyKind::TailoredThoughts => Box::new(TailoredThoughts::new(
                registry.get(cfg.extractor)?,
                judge,
                cfg.granularity.unwrap_or(Granularity::Sentence),
            )),
            StrategyKind::CounterfactualDebate => Box::new(CounterfactualDebate::new(
                registry.get(cfg.debater)?,
                judge,
                cfg.extended,
            )),
            StrategyKind::ChainDebates => Box::new(ChainDebates::new(
                registry.get(cfg.extractor)?,
                registry.get(cfg.debater)?,
                judge,
            )),
            StrategyKind::CollaborativeDebate => {
                Box::new(CollaborativeDebate::new(registry.get(cfg.debater)?, judge))
            }
        };
        strategies.push(strategy);
    }
    Ok(strategies)
}
