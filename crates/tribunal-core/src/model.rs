//! Conversation and response records exchanged with judge backends.

use serde::{Deserialize, Serialize};

/// Chat role tag, matching the wire names of OpenAI-style backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// An ordered exchange of role-tagged messages, built fresh per call.
///
/// Conversations are never mutated after being handed to a client; prior
/// model output is threaded into later calls only by re-embedding its text
/// into a new conversation's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message {
            role: Role::System,
            content: content.into(),
        });
        self
    }

    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message {
            role: Role::User,
            content: content.into(),
        });
        self
    }

    pub fn assistant(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message {
            role: Role::Assistant,
            content: content.into(),
        });
        self
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Structural validity for a judge call: non-empty and ending in a user turn.
    pub fn ends_in_user_turn(&self) -> bool {
        matches!(
            self.messages.last(),
            Some(Message {
                role: Role::User,
                ..
            })
        )
    }
}

/// A single text completion returned by a judge backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JudgeResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
}
