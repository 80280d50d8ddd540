use super::{Strategy, StrategyOutcome};
use crate::decompose;
use crate::prompt;
use crate::providers::JudgeClient;
use crate::verdict::{extract_verdict, Verdict};
use async_trait::async_trait;
use std::sync::Arc;

/// Two-level decomposition: each sentence is split into atomic statements
/// and every statement is judged individually, stopping at the first
/// positive anywhere in the summary.
pub struct StatementLevel {
    extractor: Arc<dyn JudgeClient>,
    judge: Arc<dyn JudgeClient>,
}

impl StatementLevel {
    pub fn new(extractor: Arc<dyn JudgeClient>, judge: Arc<dyn JudgeClient>) -> Self {
        Self { extractor, judge }
    }
}

#[async_trait]
impl Strategy for StatementLevel {
    fn name(&self) -> &str {
        "statement-level"
    }

    async fn run(&self, document: &str, summary: &str) -> anyhow::Result<StrategyOutcome> {
        let sentences = decompose::split_sentences(self.extractor.as_ref(), summary).await?;
        for sentence in &sentences {
            let statements =
                decompose::split_statements(self.extractor.as_ref(), sentence).await?;
            for statement in &statements {
                let resp = self
                    .judge
                    .complete(&prompt::statement_judge(document, summary, sentence, statement))
                    .await?;
                if extract_verdict(&resp.text).is_hallucinated() {
                    return Ok(StrategyOutcome::bare(Verdict::Hallucinated));
                }
            }
        }
        Ok(StrategyOutcome::bare(Verdict::Supported))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fake::ScriptedClient;

    #[tokio::test]
    async fn judges_every_statement_when_all_supported() {
        // One sentence split, then one statement split per sentence.
        let extractor = Arc::new(ScriptedClient::new(vec![
            "sentence one.\nsentence two.",
            "fact 1a.\nfact 1b.",
            "fact 2a.",
        ]));
        let judge = Arc::new(ScriptedClient::repeating("[SUPPORTED]"));
        let strategy = StatementLevel::new(extractor.clone(), judge.clone());
        let outcome = strategy.run("doc", "sum").await.unwrap();
        assert_eq!(outcome.verdict, Verdict::Supported);
        assert_eq!(extractor.calls(), 3);
        assert_eq!(judge.calls(), 3);
    }

    #[tokio::test]
    async fn positive_statement_short_circuits_remaining_units() {
        let extractor = Arc::new(ScriptedClient::new(vec![
            "sentence one.\nsentence two.",
            "fact 1a.\nfact 1b.",
        ]));
        let judge = Arc::new(ScriptedClient::new(vec!["[SUPPORTED]", "[HALLUCINATED]"]));
        let strategy = StatementLevel::new(extractor.clone(), judge.clone());
        let outcome = strategy.run("doc", "sum").await.unwrap();
        assert_eq!(outcome.verdict, Verdict::Hallucinated);
        // sentence two was never split, statements after 1b never judged
        assert_eq!(extractor.calls(), 2);
        assert_eq!(judge.calls(), 2);
    }
}
