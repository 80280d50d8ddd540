use super::{Strategy, StrategyOutcome};
use crate::debate::{render_debates, DebateSide, DebateTranscript, TurnKind};
use crate::decompose;
use crate::prompt;
use crate::providers::JudgeClient;
use crate::verdict::{extract_verdict, Verdict};
use async_trait::async_trait;
use std::sync::Arc;

/// Per-sentence debate with one claim per side and no critique round; each
/// sentence is judged immediately and the first positive verdict halts the
/// chain. The accumulated per-sentence debate history is kept as the
/// transcript.
pub struct ChainDebates {
    extractor: Arc<dyn JudgeClient>,
    debater: Arc<dyn JudgeClient>,
    judge: Arc<dyn JudgeClient>,
}

impl ChainDebates {
    pub fn new(
        extractor: Arc<dyn JudgeClient>,
        debater: Arc<dyn JudgeClient>,
        judge: Arc<dyn JudgeClient>,
    ) -> Self {
        Self {
            extractor,
            debater,
            judge,
        }
    }
}

#[async_trait]
impl Strategy for ChainDebates {
    fn name(&self) -> &str {
        "chain-debates"
    }

    async fn run(&self, document: &str, summary: &str) -> anyhow::Result<StrategyOutcome> {
        let sentences = decompose::split_sentences(self.extractor.as_ref(), summary).await?;
        let mut history = String::new();

        for sentence in &sentences {
            let h_claim = self
                .debater
                .complete(&prompt::statement_hallucination_advocate(
                    document, summary, sentence,
                ))
                .await?
                .text;
            let mut hallucinated = DebateTranscript::new(DebateSide::Hallucinated);
            hallucinated.push(TurnKind::Claim, h_claim);

            let s_claim = self
                .debater
                .complete(&prompt::statement_support_advocate(document, summary, sentence))
                .await?
                .text;
            let mut supported = DebateTranscript::new(DebateSide::Supported);
            supported.push(TurnKind::Claim, s_claim);

            let debate = render_debates(&hallucinated, &supported);
            history.push_str(&format!("The debate about statement {sentence}\n{debate}\n"));

            let judgement = self
                .judge
                .complete(&prompt::chain_debate_judge(document, summary, &debate))
                .await?
                .text;
            if extract_verdict(&judgement).is_hallucinated() {
                return Ok(StrategyOutcome::with_transcript(
                    Verdict::Hallucinated,
                    history,
                ));
            }
        }
        Ok(StrategyOutcome::with_transcript(Verdict::Supported, history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fake::ScriptedClient;

    #[tokio::test]
    async fn first_positive_sentence_halts_the_chain() {
        let extractor = Arc::new(ScriptedClient::new(vec!["s1.\ns2.\ns3."]));
        // Exactly one sentence worth of claims: sentences 2 and 3 must never
        // be debated, or the scripted clients would exhaust and error.
        let debater = Arc::new(ScriptedClient::new(vec!["h-claim", "s-claim"]));
        let judge = Arc::new(ScriptedClient::new(vec!["[HALLUCINATED]"]));
        let strategy = ChainDebates::new(extractor, debater.clone(), judge.clone());
        let outcome = strategy.run("doc", "s1. s2. s3.").await.unwrap();
        assert_eq!(outcome.verdict, Verdict::Hallucinated);
        assert_eq!(debater.calls(), 2);
        assert_eq!(judge.calls(), 1);
    }

    #[tokio::test]
    async fn all_supported_debates_every_sentence() {
        let extractor = Arc::new(ScriptedClient::new(vec!["s1.\ns2."]));
        let debater = Arc::new(ScriptedClient::repeating("claim"));
        let judge = Arc::new(ScriptedClient::repeating("[SUPPORTED]"));
        let strategy = ChainDebates::new(extractor, debater.clone(), judge.clone());
        let outcome = strategy.run("doc", "s1. s2.").await.unwrap();
        assert_eq!(outcome.verdict, Verdict::Supported);
        assert_eq!(debater.calls(), 4);
        assert_eq!(judge.calls(), 2);
        let history = outcome.transcript.unwrap();
        assert!(history.contains("The debate about statement s1."));
        assert!(history.contains("The debate about statement s2."));
    }
}
