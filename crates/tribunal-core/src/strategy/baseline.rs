use super::{Strategy, StrategyOutcome};
use crate::prompt;
use crate::providers::JudgeClient;
use crate::verdict::extract_verdict;
use async_trait::async_trait;
use std::sync::Arc;

/// Single zero-shot judge over the whole summary.
pub struct Baseline {
    judge: Arc<dyn JudgeClient>,
}

impl Baseline {
    pub fn new(judge: Arc<dyn JudgeClient>) -> Self {
        Self { judge }
    }
}

#[async_trait]
impl Strategy for Baseline {
    fn name(&self) -> &str {
        "baseline"
    }

    async fn run(&self, document: &str, summary: &str) -> anyhow::Result<StrategyOutcome> {
        let resp = self
            .judge
            .complete(&prompt::baseline_judge(document, summary))
            .await?;
        Ok(StrategyOutcome::bare(extract_verdict(&resp.text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fake::ScriptedClient;
    use crate::verdict::Verdict;

    #[tokio::test]
    async fn supported_summary_predicts_label_zero() {
        let judge = Arc::new(ScriptedClient::new(vec!["[SUPPORTED]"]));
        let strategy = Baseline::new(judge.clone());
        let outcome = strategy
            .run("The cat sat on the mat.", "The cat sat on the mat.")
            .await
            .unwrap();
        assert_eq!(outcome.verdict, Verdict::Supported);
        assert_eq!(outcome.verdict.as_label(), 0);
        assert_eq!(judge.calls(), 1);
        assert!(outcome.transcript.is_none());
    }

    #[tokio::test]
    async fn hallucinated_summary_predicts_label_one() {
        let judge = Arc::new(ScriptedClient::new(vec!["[HALLUCINATED]"]));
        let strategy = Baseline::new(judge.clone());
        let outcome = strategy
            .run("The cat sat on the mat.", "The dog sat on the mat.")
            .await
            .unwrap();
        assert_eq!(outcome.verdict, Verdict::Hallucinated);
        assert_eq!(outcome.verdict.as_label(), 1);
        assert_eq!(judge.calls(), 1);
    }

    #[tokio::test]
    async fn backend_failure_aborts_the_case() {
        let judge = Arc::new(ScriptedClient::new(vec![]));
        let strategy = Baseline::new(judge);
        assert!(strategy.run("d", "s").await.is_err());
    }
}
