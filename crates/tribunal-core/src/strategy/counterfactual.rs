use super::{Strategy, StrategyOutcome};
use crate::debate::{render_debates, DebateSide, DebateTranscript, TurnKind};
use crate::prompt;
use crate::providers::JudgeClient;
use crate::verdict::extract_verdict;
use async_trait::async_trait;
use std::sync::Arc;

/// Two advocates argue opposite stances over the whole summary; each branch
/// runs claim, critique and defence independently, then a separate judge
/// reads the concatenated record. The extended variant also shows the judge
/// the source document.
pub struct CounterfactualDebate {
    debater: Arc<dyn JudgeClient>,
    judge: Arc<dyn JudgeClient>,
    extended: bool,
}

impl CounterfactualDebate {
    pub fn new(debater: Arc<dyn JudgeClient>, judge: Arc<dyn JudgeClient>, extended: bool) -> Self {
        Self {
            debater,
            judge,
            extended,
        }
    }

    /// One branch: advocate, then critic, then rebuttal. The two branches
    /// share no data; each transition feeds the accumulated branch text.
    async fn run_branch(
        &self,
        side: DebateSide,
        document: &str,
        summary: &str,
    ) -> anyhow::Result<DebateTranscript> {
        let mut transcript = DebateTranscript::new(side);

        let claim_convo = match side {
            DebateSide::Hallucinated => prompt::hallucination_advocate(document, summary),
            DebateSide::Supported => prompt::support_advocate(document, summary),
        };
        let claim = self.debater.complete(&claim_convo).await?.text;

        let critique_convo = match side {
            DebateSide::Hallucinated => prompt::hallucination_critic(document, summary, &claim),
            DebateSide::Supported => prompt::support_critic(document, summary, &claim),
        };
        let critique = self.debater.complete(&critique_convo).await?.text;

        let defence_convo = match side {
            DebateSide::Hallucinated => {
                prompt::hallucination_defence(document, summary, &claim, &critique)
            }
            DebateSide::Supported => {
                prompt::support_defence(document, summary, &claim, &critique)
            }
        };
        let defence = self.debater.complete(&defence_convo).await?.text;

        transcript.push(TurnKind::Claim, claim);
        transcript.push(TurnKind::Critique, critique);
        transcript.push(TurnKind::Defence, defence);
        Ok(transcript)
    }
}

#[async_trait]
impl Strategy for CounterfactualDebate {
    fn name(&self) -> &str {
        if self.extended {
            "counterfactual-debate-extended"
        } else {
            "counterfactual-debate"
        }
    }

    async fn run(&self, document: &str, summary: &str) -> anyhow::Result<StrategyOutcome> {
        let hallucinated = self
            .run_branch(DebateSide::Hallucinated, document, summary)
            .await?;
        let supported = self
            .run_branch(DebateSide::Supported, document, summary)
            .await?;
        let debates = render_debates(&hallucinated, &supported);

        let judge_convo = if self.extended {
            prompt::extended_debate_judge(document, summary, &debates)
        } else {
            prompt::debate_judge(summary, &debates)
        };
        let judgement = self.judge.complete(&judge_convo).await?.text;

        Ok(StrategyOutcome::with_transcript(
            extract_verdict(&judgement),
            debates,
        ))
    }
}
