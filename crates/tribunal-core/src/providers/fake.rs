//! Scripted judge client for tests and dry runs.

use super::JudgeClient;
use crate::model::{Conversation, JudgeResponse};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Returns queued responses in order, then either fails or repeats a
/// fallback. Counts invocations so tests can assert early-exit behavior.
#[derive(Debug)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<String>>,
    fallback: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            fallback: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Always answers with the same text.
    pub fn repeating(text: &str) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JudgeClient for ScriptedClient {
    async fn complete(&self, conversation: &Conversation) -> anyhow::Result<JudgeResponse> {
        anyhow::ensure!(
            conversation.ends_in_user_turn(),
            "conversation must be non-empty and end in a user turn"
        );
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = {
            let mut queue = self.responses.lock().expect("scripted queue poisoned");
            queue.pop_front()
        };
        let text = match next.or_else(|| self.fallback.clone()) {
            Some(text) => text,
            None => anyhow::bail!("scripted client exhausted"),
        };
        Ok(JudgeResponse {
            text,
            provider: "fake".to_string(),
            model: "scripted".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_responses_drain_in_order_then_fail() {
        let client = ScriptedClient::new(vec!["one", "two"]);
        let convo = Conversation::new().user("q");
        assert_eq!(client.complete(&convo).await.unwrap().text, "one");
        assert_eq!(client.complete(&convo).await.unwrap().text, "two");
        assert!(client.complete(&convo).await.is_err());
        assert_eq!(client.calls(), 3);
    }

    #[tokio::test]
    async fn repeating_never_exhausts() {
        let client = ScriptedClient::repeating("[SUPPORTED]");
        let convo = Conversation::new().user("q");
        for _ in 0..5 {
            assert_eq!(client.complete(&convo).await.unwrap().text, "[SUPPORTED]");
        }
        assert_eq!(client.calls(), 5);
    }

    #[tokio::test]
    async fn rejects_structurally_invalid_conversations() {
        let client = ScriptedClient::repeating("x");
        let convo = Conversation::new().user("q").assistant("a");
        assert!(client.complete(&convo).await.is_err());
        assert_eq!(client.calls(), 0);
    }
}
