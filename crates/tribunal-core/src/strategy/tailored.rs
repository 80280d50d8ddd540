use super::{Granularity, Strategy, StrategyOutcome};
use crate::decompose;
use crate::prompt;
use crate::providers::JudgeClient;
use crate::verdict::{extract_verdict, Verdict};
use async_trait::async_trait;
use std::sync::Arc;

/// Per-unit judge with an explicit step-by-step instruction; the reasoning
/// of every judged unit is accumulated as the transcript.
pub struct TailoredThoughts {
    extractor: Arc<dyn JudgeClient>,
    judge: Arc<dyn JudgeClient>,
    granularity: Granularity,
}

impl TailoredThoughts {
    pub fn new(
        extractor: Arc<dyn JudgeClient>,
        judge: Arc<dyn JudgeClient>,
        granularity: Granularity,
    ) -> Self {
        Self {
            extractor,
            judge,
            granularity,
        }
    }

    async fn judge_unit(
        &self,
        document: &str,
        summary: &str,
        sentence: &str,
        statement: Option<&str>,
    ) -> anyhow::Result<(Verdict, String)> {
        let convo = match statement {
            Some(statement) => {
                prompt::tailored_statement_judge(document, summary, sentence, statement)
            }
            None => prompt::tailored_sentence_judge(document, summary, sentence),
        };
        let resp = self.judge.complete(&convo).await?;
        Ok((extract_verdict(&resp.text), resp.text))
    }
}

#[async_trait]
impl Strategy for TailoredThoughts {
    fn name(&self) -> &str {
        match self.granularity {
            Granularity::Sentence => "tailored-thoughts-sentence",
            Granularity::Statement => "tailored-thoughts-statement",
        }
    }

    async fn run(&self, document: &str, summary: &str) -> anyhow::Result<StrategyOutcome> {
        let sentences = decompose::split_sentences(self.extractor.as_ref(), summary).await?;
        let mut reasoning = String::new();

        for sentence in &sentences {
            match self.granularity {
                Granularity::Sentence => {
                    let (verdict, text) =
                        self.judge_unit(document, summary, sentence, None).await?;
                    reasoning.push_str(&text);
                    reasoning.push('\n');
                    if verdict.is_hallucinated() {
                        return Ok(StrategyOutcome::with_transcript(verdict, reasoning));
                    }
                }
                Granularity::Statement => {
                    let statements =
                        decompose::split_statements(self.extractor.as_ref(), sentence).await?;
                    for statement in &statements {
                        let (verdict, text) = self
                            .judge_unit(document, summary, sentence, Some(statement))
                            .await?;
                        reasoning.push_str(&text);
                        reasoning.push('\n');
                        if verdict.is_hallucinated() {
                            return Ok(StrategyOutcome::with_transcript(verdict, reasoning));
                        }
                    }
                }
            }
        }
        Ok(StrategyOutcome::with_transcript(Verdict::Supported, reasoning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fake::ScriptedClient;

    #[tokio::test]
    async fn sentence_granularity_accumulates_reasoning_until_exit() {
        let extractor = Arc::new(ScriptedClient::new(vec!["s1.\ns2.\ns3."]));
        let judge = Arc::new(ScriptedClient::new(vec![
            "1. entailed by paragraph 1\n[SUPPORTED]",
            "2. the percentage is absent\n[HALLUCINATED]",
        ]));
        let strategy =
            TailoredThoughts::new(extractor, judge.clone(), Granularity::Sentence);
        let outcome = strategy.run("doc", "s1. s2. s3.").await.unwrap();
        assert_eq!(outcome.verdict, Verdict::Hallucinated);
        assert_eq!(judge.calls(), 2);
        let transcript = outcome.transcript.unwrap();
        assert!(transcript.contains("entailed by paragraph 1"));
        assert!(transcript.contains("the percentage is absent"));
    }

    #[tokio::test]
    async fn statement_granularity_splits_before_judging() {
        let extractor = Arc::new(ScriptedClient::new(vec!["only sentence.", "f1.\nf2."]));
        let judge = Arc::new(ScriptedClient::repeating("reasoned. [SUPPORTED]"));
        let strategy =
            TailoredThoughts::new(extractor.clone(), judge.clone(), Granularity::Statement);
        let outcome = strategy.run("doc", "only sentence.").await.unwrap();
        assert_eq!(outcome.verdict, Verdict::Supported);
        assert_eq!(extractor.calls(), 2);
        assert_eq!(judge.calls(), 2);
    }

    #[test]
    fn name_reflects_granularity() {
        let mk = |g| {
            TailoredThoughts::new(
                Arc::new(ScriptedClient::repeating("x")),
                Arc::new(ScriptedClient::repeating("x")),
                g,
            )
        };
        assert_eq!(mk(Granularity::Sentence).name(), "tailored-thoughts-sentence");
        assert_eq!(mk(Granularity::Statement).name(), "tailored-thoughts-statement");
    }
}
