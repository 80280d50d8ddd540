//! Prompt builders: pure functions from semantic inputs to conversations.
//!
//! Each builder embeds a fixed system instruction (hallucination taxonomy +
//! response format), optional few-shot exemplars for extraction tasks, and
//! the live request. Field content is not validated; empty inputs are
//! forwarded as-is.

use crate::model::Conversation;

/// Three-kind hallucination taxonomy shared by every judge-role prompt.
const TAXONOMY: &str = "There are three types of hallucinations;
    Factual hallucinations refer to content that might be verifiable by world knowledge but is not inferable from the source text.
    Non-factual hallucinations are entities that are neither inferable from the source text nor factual.
    Intrinsic hallucinations are statements that contradict the source text.
If the entity can be directly entailed using the information from the source text, then it is non-hallucinated.";

/// Marker-token response contract. Verdict extraction depends on these
/// literal tokens; preserve verbatim.
const MARKER_PROTOCOL: &str = "If it contains hallucinated contents, respond with [HALLUCINATED].
If it does not contain hallucinated contents, respond with [SUPPORTED].";

// --- Decomposition extractors (few-shot) ---

/// Sentence extraction from a summary, 3-shot.
pub fn sentence_extractor(summary: &str) -> Conversation {
    Conversation::new()
        .system("You are an expert at sentence extraction. It is your task to separate a summary into sentences. Make sure to place '\\n' between sentences.")
        .user(r#"Summary: Marseille prosecutor says "so far no videos were used in the crash investigation" despite media reports. Journalists at Bild and Paris Match are "very confident" the video clip is real, an editor says. Andreas Lubitz had informed his Lufthansa training school of an episode of severe depression, airline says."#)
        .assistant("Marseille prosecutor says \"so far no videos were used in the crash investigation\" despite media reports.\nJournalists at Bild and Paris Match are \"very confident\" the video clip is real, an editor says.\nAndreas Lubitz had informed his Lufthansa training school of an episode of severe depression, airline says.")
        .user("Summary: Membership gives the ICC jurisdiction over alleged crimes committed in Palestinian territories since last June. Israel and the United States opposed the move, which could open the door to war crimes investigations against Israelis.")
        .assistant("Membership gives the ICC jurisdiction over alleged crimes committed in Palestinian territories since last June.\nIsrael and the United States opposed the move, which could open the door to war crimes investigations against Israelis.")
        .user("Summary: Amnesty's annual death penalty report catalogs encouraging signs, but setbacks in numbers of those sentenced to death. Organization claims that governments around the world are using the threat of terrorism to advance executions. The number of executions worldwide has gone down by almost 22% compared with 2013, but death sentences up by 28%.")
        .assistant("Amnesty's annual death penalty report catalogs encouraging signs, but setbacks in numbers of those sentenced to death.\nOrganization claims that governments around the world are using the threat of terrorism to advance executions.\nThe number of executions worldwide has gone down by almost 22% compared with 2013, but death sentences up by 28%.")
        .user(format!("Summary: {summary}"))
}

/// Statement extraction from a sentence, one level finer, 3-shot.
pub fn statement_extractor(sentence: &str) -> Conversation {
    Conversation::new()
        .system("You are an expert at statement extraction. It is your task to separate a sentence into atomic statements. Each statement expresses exactly one fact from the sentence. Make sure to place '\\n' between statements.")
        .user("Sentence: Marseille prosecutor says \"so far no videos were used in the crash investigation\" despite media reports.")
        .assistant("Marseille prosecutor says no videos were used in the crash investigation so far.\nMedia reports claimed videos were used in the crash investigation.")
        .user("Sentence: Membership gives the ICC jurisdiction over alleged crimes committed in Palestinian territories since last June.")
        .assistant("Membership gives the ICC jurisdiction over alleged crimes.\nThe alleged crimes were committed in Palestinian territories.\nThe alleged crimes were committed since last June.")
        .user("Sentence: The number of executions worldwide has gone down by almost 22% compared with 2013, but death sentences up by 28%.")
        .assistant("The number of executions worldwide has gone down by almost 22% compared with 2013.\nDeath sentences are up by 28%.")
        .user(format!("Sentence: {sentence}"))
}

// --- Single-judge prompts ---

/// Zero-shot whole-summary judgment.
pub fn baseline_judge(document: &str, summary: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert in classifying summaries.

It is your task to judge whether a summary contains hallucinated content or not.
As soon as a statement in a summary is hallucinated, then the summary contains hallucinated content.

{TAXONOMY}

Given a source text and a summary, does the summary contain hallucinated content or not?
{MARKER_PROTOCOL}
Do not give an explanation."
        ))
        .user(format!(
            "Source text: {document}\n\nSummary: {summary}\n\nJudgement:"
        ))
}

/// Whole-summary judgment with explicit reasoning before the verdict.
pub fn chain_of_thought_judge(document: &str, summary: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert in classifying summaries.

It is your task to judge whether a summary contains hallucinated content or not.
As soon as a statement in a summary is hallucinated, then the summary contains hallucinated content.

{TAXONOMY}

Given a source text and a summary, reason step by step about each statement in the summary before judging.
After your reasoning, conclude on a new line.
{MARKER_PROTOCOL}"
        ))
        .user(format!(
            "Source text: {document}\n\nSummary: {summary}\n\nReasoning and judgement:"
        ))
}

/// Judgment of a single highlighted sentence within its summary.
pub fn sentence_judge(document: &str, summary: &str, sentence: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert in classifying statements.

You are given a summary and a highlighted statement.
It is your task to judge whether the statement contains hallucinated content or not based on the provided source text.

The statement is part of a summary.
However, only focus on the highlighted sentence.
Do not judge the entire summary.

{TAXONOMY}

Given this source text, does the sentence contain hallucinated content or not?
{MARKER_PROTOCOL}
Do not give an explanation."
        ))
        .user(format!(
            "Source text: {document}\n\nSummary: {summary}\n\nHighlighted sentence: [{sentence}]\n\nJudgement:"
        ))
}

/// Judgment of a single statement, one level finer than a sentence.
pub fn statement_judge(
    document: &str,
    summary: &str,
    sentence: &str,
    statement: &str,
) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert in classifying statements.

You are given a summary, a sentence from that summary and a highlighted statement from that sentence.
It is your task to judge whether the highlighted statement contains hallucinated content or not based on the provided source text.

Only focus on the highlighted statement.
Do not judge the entire sentence or summary.

{TAXONOMY}

Given this source text, does the statement contain hallucinated content or not?
{MARKER_PROTOCOL}
Do not give an explanation."
        ))
        .user(format!(
            "Source text: {document}\n\nSummary: {summary}\n\nSentence: {sentence}\n\nHighlighted statement: [{statement}]\n\nJudgement:"
        ))
}

/// Sentence judgment with an explicit step-by-step instruction and
/// reasoning before the verdict.
pub fn tailored_sentence_judge(document: &str, summary: &str, sentence: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert in classifying statements.

You are given a summary and a highlighted sentence.
It is your task to judge whether the highlighted sentence contains hallucinated content or not based on the provided source text.
Only focus on the highlighted sentence.

{TAXONOMY}

Work step by step:
1. Identify every entity and claim in the highlighted sentence.
2. For each, quote the source text passage that supports or contradicts it.
3. Classify any unsupported content by hallucination type.
After your reasoning, conclude on a new line.
{MARKER_PROTOCOL}"
        ))
        .user(format!(
            "Source text: {document}\n\nSummary: {summary}\n\nHighlighted sentence: [{sentence}]\n\nReasoning and judgement:"
        ))
}

/// Statement judgment with an explicit step-by-step instruction and
/// reasoning before the verdict.
pub fn tailored_statement_judge(
    document: &str,
    summary: &str,
    sentence: &str,
    statement: &str,
) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert in classifying statements.

You are given a summary, a sentence from that summary and a highlighted statement from that sentence.
It is your task to judge whether the highlighted statement contains hallucinated content or not based on the provided source text.
Only focus on the highlighted statement.

{TAXONOMY}

Work step by step:
1. Identify every entity and claim in the highlighted statement.
2. For each, quote the source text passage that supports or contradicts it.
3. Classify any unsupported content by hallucination type.
After your reasoning, conclude on a new line.
{MARKER_PROTOCOL}"
        ))
        .user(format!(
            "Source text: {document}\n\nSummary: {summary}\n\nSentence: {sentence}\n\nHighlighted statement: [{statement}]\n\nReasoning and judgement:"
        ))
}

// --- Debate roles ---

/// Advocate arguing the summary contains hallucinations.
pub fn hallucination_advocate(document: &str, summary: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert in detecting hallucinations.
It is your task to explain why a summary contains hallucinations.

{TAXONOMY}

Given a source text and a summary, it is your task to highlight the hallucinations.
Explain why the statement contains hallucinations based on the source text.
Refer to the source text sentences that support your claim.
Make sure your explanation is very short and to the point."
        ))
        .user(format!(
            "Source text: {document}\n\nSummary: {summary}\n\nReasoning:"
        ))
}

/// Advocate arguing the summary is supported by the source text.
pub fn support_advocate(document: &str, summary: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert in reasoning.
It is your task to explain why a summary is supported by a source text.
This is done by explaining why the summary does not contain hallucinations.

{TAXONOMY}

Given a source text and a summary, highlight the entailment of each statement.
Explain why the statement is supported by the source text.
Refer to the source text sentences that support your claim.
Make sure your explanation is very short and to the point."
        ))
        .user(format!(
            "Source text: {document}\n\nSummary: {summary}\n\nReasoning:"
        ))
}

/// Statement-scoped hallucination advocate, used by per-unit debates.
pub fn statement_hallucination_advocate(
    document: &str,
    summary: &str,
    statement: &str,
) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert in detecting hallucinations.
It is your task to explain why a statement in a summary contains hallucinations.

{TAXONOMY}

Given a source text, a summary and a statement, it is your task to highlight the hallucinations in the statement.

Explain why the statement contains hallucinations based on the source text.
Refer to the source text sentences that support your claim.
Make sure your explanation is very short and to the point."
        ))
        .user(format!(
            "Source text: {document}\n\nSummary: {summary}\n\nHighlighted statement: [{statement}]\n\nReasoning:"
        ))
}

/// Statement-scoped support advocate, used by per-unit debates.
pub fn statement_support_advocate(
    document: &str,
    summary: &str,
    statement: &str,
) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert in reasoning.

It is your task to explain why a statement in a summary is supported by a source text.
This is done by explaining why the highlighted statement does not contain hallucinations.

{TAXONOMY}

Given a source text, a summary and a statement, explain the entailment of the statement.
Explain why the statement is supported by the source text.
Refer to the source text sentences that support your claim.
Make sure your explanation is very short and to the point."
        ))
        .user(format!(
            "Source text: {document}\n\nSummary: {summary}\n\nHighlighted statement: [{statement}]\n\nReasoning:"
        ))
}

/// Critic challenging the hallucination advocate's claim.
pub fn hallucination_critic(document: &str, summary: &str, claim: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are given a document, a summary and a speaker's argumentation.

The speaker's argumentation might be wrong and contain mistakes.
It is your task to persuade the speaker that their argumentation regarding hallucinations is wrong based on the document.

{TAXONOMY}

The speaker claims the summary contains hallucinations.
Please persuade the speaker that their claim is wrong.
Make sure your persuasion is very short."
        ))
        .user(format!(
            "Document: {document}\n\nSummary: {summary}\n\nClaim: {claim}\n\nPersuasion:"
        ))
}

/// Critic challenging the support advocate's claim.
pub fn support_critic(document: &str, summary: &str, claim: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are given a document, a summary and a speaker's argumentation.

The speaker's argumentation might be wrong and contain mistakes.
It is your task to persuade the speaker that their argumentation is wrong based on the document.

{TAXONOMY}

The speaker claims that the summary is supported and does not contain hallucinations.
Please persuade the speaker that their claim is wrong.
Make sure your persuasion is very short."
        ))
        .user(format!(
            "Document: {document}\n\nSummary: {summary}\n\nClaim: {claim}\n\nPersuasion:"
        ))
}

/// Rebuttal reiterating the hallucination stance against a critique.
pub fn hallucination_defence(
    document: &str,
    summary: &str,
    claim: &str,
    critique: &str,
) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are given a document, a sentence, your past argumentation and someone else their critique on your argumentation.

You believe the summary contains hallucinations based on the document.
It is your task to point out the errors in the critique and reiterate your point regarding factual hallucinations.

{TAXONOMY}

Please explain the errors in the critique.
Make sure your response is short."
        ))
        .user(format!(
            "Document: {document}\n\nSummary: {summary}\n\nYour claim: {claim}\n\nSomeone's critique: {critique}\n\nYour defence:"
        ))
}

/// Rebuttal reiterating the support stance against a critique.
pub fn support_defence(
    document: &str,
    summary: &str,
    claim: &str,
    critique: &str,
) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are given a document, a sentence, your past argumentation and someone else their critique on your argumentation.

You believe the summary is supported by the document and does not contain hallucinations.
It is your task to point out the errors in the critique and reiterate your point regarding no hallucinations.

{TAXONOMY}

Please explain the errors in the critique.
Make sure your response is short."
        ))
        .user(format!(
            "Document: {document}\n\nSummary: {summary}\n\nYour claim: {claim}\n\nSomeone's critique: {critique}\n\nYour defence:"
        ))
}

// --- Judges over debate records ---

/// Judge over a full two-sided debate, summary only.
pub fn debate_judge(summary: &str, debates: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert judge.

It is your task to analyze a debate.
The debate is about whether or not a summary contains hallucinations.

Both sides, pro and contra, are challenged by a critic and are then allowed to generate a defence.

After hearing the arguments of both sides, do you think the summary contains hallucinations or not?

{TAXONOMY}

Given the debate, does the summary contain hallucinated content or not?
{MARKER_PROTOCOL}

Do not give an explanation."
        ))
        .user(format!(
            "Debates: {debates}\n\nSummary: {summary}\n\nJudgement:"
        ))
}

/// Judge over a full two-sided debate, additionally shown the document.
pub fn extended_debate_judge(document: &str, summary: &str, debates: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert judge.

It is your task to analyze a debate.
The debate is about whether or not a summary contains hallucinations.

Both sides, pro and contra, are challenged by a critic and are then allowed to generate a defence.

After hearing the arguments of both sides, do you think the summary contains hallucinations or not?

{TAXONOMY}

Based on the document and the debate, is the summary hallucinated or supported by the document?
If it is hallucinated, respond with [HALLUCINATED].
If it supported, respond with [SUPPORTED].

Do not give an explanation."
        ))
        .user(format!(
            "Document: {document}\n\nSummary: {summary}\n\nDebates: {debates}\n\nJudgement:"
        ))
}

/// Per-sentence judge over a single-claim-per-side debate.
pub fn chain_debate_judge(document: &str, summary: &str, debate: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert judge.

It is your task to analyze a source text, a summary, a highlighted statement and a debate about that highlighted statement.
The debate is about whether or not that statement is hallucinated or supported.
One side argues that there are hallucinations in the statement, while the other side argues that the statement is supported by the source text.
Base your judgement on the source text and the debate.

{TAXONOMY}

After hearing both sides of the debate, is the highlighted statement hallucinated or supported?
{MARKER_PROTOCOL}

Do not give an explanation."
        ))
        .user(format!(
            "Document: {document}\n\nSummary: {summary}\n\nDebate: {debate}\n\nJudgement:"
        ))
}

// --- Collaborative debate roles ---

/// First collaborative pass: analyze the summary against the source text.
pub fn collaborative_analysis(document: &str, summary: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert in analyzing summaries.

It is your task to compare a summary against its source text, statement by statement.
For each statement, state whether it is entailed by the source text and point at the supporting or contradicting passage.

{TAXONOMY}

Make sure your analysis is short and to the point. Do not give a final verdict."
        ))
        .user(format!(
            "Source text: {document}\n\nSummary: {summary}\n\nAnalysis:"
        ))
}

/// Second collaborative pass: critique the prior analysis.
pub fn collaborative_feedback(document: &str, summary: &str, analysis: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are given a document, a summary and a colleague's analysis of the summary.

The analysis might be incomplete or contain mistakes.
It is your task to give feedback: point out statements the analysis missed, misread or classified wrongly, based on the document.

{TAXONOMY}

Make sure your feedback is short and to the point. Do not give a final verdict."
        ))
        .user(format!(
            "Document: {document}\n\nSummary: {summary}\n\nAnalysis: {analysis}\n\nFeedback:"
        ))
}

/// Final collaborative judge over the concatenated analysis and feedback.
pub fn collaborative_judge(document: &str, summary: &str, transcript: &str) -> Conversation {
    Conversation::new()
        .system(format!(
            "You are an expert judge.

It is your task to analyze a document, a summary, and a discussion consisting of an analysis and feedback on that analysis.

{TAXONOMY}

Based on the document and the discussion, does the summary contain hallucinated content or not?
{MARKER_PROTOCOL}

Do not give an explanation."
        ))
        .user(format!(
            "Document: {document}\n\nSummary: {summary}\n\nDiscussion: {transcript}\n\nJudgement:"
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::{HALLUCINATED_MARKER, SUPPORTED_MARKER};

    fn system_of(convo: &Conversation) -> &str {
        &convo.messages()[0].content
    }

    #[test]
    fn all_builders_end_in_a_user_turn() {
        let convos = vec![
            sentence_extractor("s"),
            statement_extractor("s"),
            baseline_judge("d", "s"),
            chain_of_thought_judge("d", "s"),
            sentence_judge("d", "s", "u"),
            statement_judge("d", "s", "u", "t"),
            tailored_sentence_judge("d", "s", "u"),
            tailored_statement_judge("d", "s", "u", "t"),
            hallucination_advocate("d", "s"),
            support_advocate("d", "s"),
            statement_hallucination_advocate("d", "s", "u"),
            statement_support_advocate("d", "s", "u"),
            hallucination_critic("d", "s", "c"),
            support_critic("d", "s", "c"),
            hallucination_defence("d", "s", "c", "k"),
            support_defence("d", "s", "c", "k"),
            debate_judge("s", "x"),
            extended_debate_judge("d", "s", "x"),
            chain_debate_judge("d", "s", "x"),
            collaborative_analysis("d", "s"),
            collaborative_feedback("d", "s", "a"),
            collaborative_judge("d", "s", "t"),
        ];
        for convo in convos {
            assert!(!convo.is_empty());
            assert!(convo.ends_in_user_turn());
        }
    }

    #[test]
    fn judge_prompts_carry_both_marker_tokens() {
        for convo in [
            baseline_judge("d", "s"),
            chain_of_thought_judge("d", "s"),
            sentence_judge("d", "s", "u"),
            statement_judge("d", "s", "u", "t"),
            tailored_sentence_judge("d", "s", "u"),
            tailored_statement_judge("d", "s", "u", "t"),
            debate_judge("s", "x"),
            extended_debate_judge("d", "s", "x"),
            chain_debate_judge("d", "s", "x"),
            collaborative_judge("d", "s", "t"),
        ] {
            let system = system_of(&convo);
            assert!(system.contains(HALLUCINATED_MARKER), "missing marker: {system}");
            assert!(system.contains(SUPPORTED_MARKER), "missing marker: {system}");
        }
    }

    #[test]
    fn advocate_and_critic_prompts_have_no_marker_contract() {
        for convo in [
            hallucination_advocate("d", "s"),
            support_advocate("d", "s"),
            hallucination_critic("d", "s", "c"),
            support_defence("d", "s", "c", "k"),
            collaborative_analysis("d", "s"),
        ] {
            assert!(!system_of(&convo).contains("respond with [HALLUCINATED]"));
        }
    }

    #[test]
    fn extractors_carry_three_shot_exemplars() {
        // system + 3 (user, assistant) pairs + live request
        assert_eq!(sentence_extractor("s").len(), 8);
        assert_eq!(statement_extractor("s").len(), 8);
    }

    #[test]
    fn live_fields_are_substituted_verbatim() {
        let convo = sentence_judge("DOC", "SUM", "SENT");
        let user = &convo.messages().last().unwrap().content;
        assert!(user.contains("Source text: DOC"));
        assert!(user.contains("Summary: SUM"));
        assert!(user.contains("Highlighted sentence: [SENT]"));
    }

    #[test]
    fn empty_inputs_are_forwarded_as_is() {
        let convo = baseline_judge("", "");
        assert!(convo.ends_in_user_turn());
        let user = &convo.messages().last().unwrap().content;
        assert!(user.contains("Source text: \n"));
    }
}
