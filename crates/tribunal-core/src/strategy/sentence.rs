use super::{Strategy, StrategyOutcome};
use crate::decompose;
use crate::prompt;
use crate::providers::JudgeClient;
use crate::verdict::{extract_verdict, Verdict};
use async_trait::async_trait;
use std::sync::Arc;

/// One judge call per extracted sentence, stopping at the first positive.
pub struct SentenceLevel {
    extractor: Arc<dyn JudgeClient>,
    judge: Arc<dyn JudgeClient>,
}

impl SentenceLevel {
    pub fn new(extractor: Arc<dyn JudgeClient>, judge: Arc<dyn JudgeClient>) -> Self {
        Self { extractor, judge }
    }
}

#[async_trait]
impl Strategy for SentenceLevel {
    fn name(&self) -> &str {
        "sentence-level"
    }

    async fn run(&self, document: &str, summary: &str) -> anyhow::Result<StrategyOutcome> {
        let sentences = decompose::split_sentences(self.extractor.as_ref(), summary).await?;
        for (idx, sentence) in sentences.iter().enumerate() {
            let resp = self
                .judge
                .complete(&prompt::sentence_judge(document, summary, sentence))
                .await?;
            if extract_verdict(&resp.text).is_hallucinated() {
                tracing::debug!(sentence = idx, "early exit on hallucinated sentence");
                return Ok(StrategyOutcome::bare(Verdict::Hallucinated));
            }
        }
        Ok(StrategyOutcome::bare(Verdict::Supported))
    }
}
