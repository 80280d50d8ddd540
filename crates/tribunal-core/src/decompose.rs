//! Summary decomposition through an extractor model.
//!
//! The model performs the split; this module only applies the newline
//! delimiter convention. Ordering and text fidelity of the returned units
//! are trusted as-is.

use crate::prompt;
use crate::providers::JudgeClient;

/// Split a summary into an ordered sequence of sentences.
///
/// An empty model response yields a single empty sentence; callers must
/// tolerate empty units reaching judgment calls.
pub async fn split_sentences(
    client: &dyn JudgeClient,
    summary: &str,
) -> anyhow::Result<Vec<String>> {
    let resp = client.complete(&prompt::sentence_extractor(summary)).await?;
    Ok(split_units(&resp.text))
}

/// Split one sentence into an ordered sequence of atomic statements.
pub async fn split_statements(
    client: &dyn JudgeClient,
    sentence: &str,
) -> anyhow::Result<Vec<String>> {
    let resp = client.complete(&prompt::statement_extractor(sentence)).await?;
    Ok(split_units(&resp.text))
}

fn split_units(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fake::ScriptedClient;

    #[tokio::test]
    async fn splits_on_newline_preserving_order() {
        let client = ScriptedClient::new(vec!["first.\nsecond.\nthird."]);
        let sentences = split_sentences(&client, "first. second. third.").await.unwrap();
        assert_eq!(sentences, vec!["first.", "second.", "third."]);
    }

    #[tokio::test]
    async fn best_effort_round_trip_with_echoing_split() {
        let summary = "The cat sat. The dog ran.";
        let client = ScriptedClient::new(vec!["The cat sat.\nThe dog ran."]);
        let sentences = split_sentences(&client, summary).await.unwrap();
        assert_eq!(sentences.join(" "), summary);
    }

    #[tokio::test]
    async fn single_line_response_yields_one_sentence() {
        let client = ScriptedClient::new(vec!["only one sentence."]);
        let sentences = split_sentences(&client, "only one sentence.").await.unwrap();
        assert_eq!(sentences.len(), 1);
    }

    #[tokio::test]
    async fn empty_response_yields_one_empty_unit() {
        let client = ScriptedClient::new(vec![""]);
        let sentences = split_sentences(&client, "whatever").await.unwrap();
        assert_eq!(sentences, vec![String::new()]);
    }

    #[tokio::test]
    async fn statements_come_from_the_statement_extractor() {
        let client = ScriptedClient::new(vec!["fact one.\nfact two."]);
        let statements = split_statements(&client, "fact one and fact two.")
            .await
            .unwrap();
        assert_eq!(statements, vec!["fact one.", "fact two."]);
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn extractor_failure_propagates() {
        let client = ScriptedClient::new(vec![]);
        assert!(split_sentences(&client, "s").await.is_err());
    }
}
