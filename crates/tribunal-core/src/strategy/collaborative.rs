use super::{Strategy, StrategyOutcome};
use crate::prompt;
use crate::providers::JudgeClient;
use crate::verdict::extract_verdict;
use async_trait::async_trait;
use std::sync::Arc;

/// Collaborative variant: one analysis pass and one feedback pass over the
/// whole summary, then a single final judge over the concatenated
/// discussion.
pub struct CollaborativeDebate {
    analyst: Arc<dyn JudgeClient>,
    judge: Arc<dyn JudgeClient>,
}

impl CollaborativeDebate {
    pub fn new(analyst: Arc<dyn JudgeClient>, judge: Arc<dyn JudgeClient>) -> Self {
        Self { analyst, judge }
    }
}

#[async_trait]
impl Strategy for CollaborativeDebate {
    fn name(&self) -> &str {
        "collaborative-debate"
    }

    async fn run(&self, document: &str, summary: &str) -> anyhow::Result<StrategyOutcome> {
        let analysis = self
            .analyst
            .complete(&prompt::collaborative_analysis(document, summary))
            .await?
            .text;
        let feedback = self
            .analyst
            .complete(&prompt::collaborative_feedback(document, summary, &analysis))
            .await?
            .text;
        let discussion = format!("Analysis: {analysis}\nFeedback: {feedback}");

        let judgement = self
            .judge
            .complete(&prompt::collaborative_judge(document, summary, &discussion))
            .await?
            .text;
        Ok(StrategyOutcome::with_transcript(
            extract_verdict(&judgement),
            discussion,
        ))
    }
}
