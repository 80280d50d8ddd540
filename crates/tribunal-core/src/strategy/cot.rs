use super::{Strategy, StrategyOutcome};
use crate::prompt;
use crate::providers::JudgeClient;
use crate::verdict::extract_verdict;
use async_trait::async_trait;
use std::sync::Arc;

/// Whole-summary judge asked to reason step by step before the verdict.
/// The reasoning text is kept as the transcript.
pub struct ChainOfThought {
    judge: Arc<dyn JudgeClient>,
}

impl ChainOfThought {
    pub fn new(judge: Arc<dyn JudgeClient>) -> Self {
        Self { judge }
    }
}

#[async_trait]
impl Strategy for ChainOfThought {
    fn name(&self) -> &str {
        "chain-of-thought"
    }

    async fn run(&self, document: &str, summary: &str) -> anyhow::Result<StrategyOutcome> {
        let resp = self
            .judge
            .complete(&prompt::chain_of_thought_judge(document, summary))
            .await?;
        Ok(StrategyOutcome::with_transcript(
            extract_verdict(&resp.text),
            resp.text,
        ))
    }
}
