//! Structured debate transcripts.
//!
//! A transcript is an ordered list of role-tagged turns for one side of a
//! debate. It is serialized to the literal delimiter layout only at the
//! point of embedding into a later prompt, never parsed back.

use crate::verdict::{HALLUCINATED_MARKER, SUPPORTED_MARKER};

/// Which stance a debate branch argues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebateSide {
    Hallucinated,
    Supported,
}

impl DebateSide {
    pub fn marker(self) -> &'static str {
        match self {
            DebateSide::Hallucinated => HALLUCINATED_MARKER,
            DebateSide::Supported => SUPPORTED_MARKER,
        }
    }
}

/// Role of a single debate turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    Claim,
    Critique,
    Defence,
}

impl std::fmt::Display for TurnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnKind::Claim => f.write_str("Claim"),
            TurnKind::Critique => f.write_str("Critique"),
            TurnKind::Defence => f.write_str("Defence"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateTurn {
    pub kind: TurnKind,
    pub content: String,
}

/// One side's transcript: claim, optionally followed by critique and defence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateTranscript {
    pub side: DebateSide,
    turns: Vec<DebateTurn>,
}

impl DebateTranscript {
    pub fn new(side: DebateSide) -> Self {
        Self { side, turns: Vec::new() }
    }

    pub fn push(&mut self, kind: TurnKind, content: impl Into<String>) {
        self.turns.push(DebateTurn {
            kind,
            content: content.into(),
        });
    }

    pub fn turns(&self) -> &[DebateTurn] {
        &self.turns
    }

    /// Serialize to the literal layout the judge prompts expect.
    pub fn render(&self) -> String {
        let marker = self.side.marker();
        let mut out = format!("The debate claiming {marker} :");
        for turn in &self.turns {
            out.push('\n');
            out.push_str(&format!("{}: {}", turn.kind, turn.content));
        }
        out.push_str(&format!("\nEnd of the debate claiming {marker}."));
        out
    }
}

/// Concatenate both sides into the record fed to a debate judge.
pub fn render_debates(hallucinated: &DebateTranscript, supported: &DebateTranscript) -> String {
    format!("\n{}\n{}", hallucinated.render(), supported.render())
}
