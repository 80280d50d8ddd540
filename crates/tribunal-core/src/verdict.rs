//! Binary verdict extraction from free-text judge output.
//!
//! The marker tokens are the only machine-readable contract at the LLM
//! boundary; every judge prompt instructs the model to answer with exactly
//! one of them.

use serde::{Deserialize, Serialize};

pub const HALLUCINATED_MARKER: &str = "[HALLUCINATED]";
pub const SUPPORTED_MARKER: &str = "[SUPPORTED]";

/// Binary verdict over a summary or one of its units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Supported,
    Hallucinated,
}

impl Verdict {
    /// Numeric label used in datasets and reports (0 = supported, 1 = hallucinated).
    pub fn as_label(self) -> u8 {
        match self {
            Verdict::Supported => 0,
            Verdict::Hallucinated => 1,
        }
    }

    pub fn is_hallucinated(self) -> bool {
        matches!(self, Verdict::Hallucinated)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Supported => f.write_str("SUPPORTED"),
            Verdict::Hallucinated => f.write_str("HALLUCINATED"),
        }
    }
}

/// Map a judge's free-text response to a verdict.
///
/// Case-sensitive substring containment of `HALLUCINATED`; absence defaults
/// to `Supported`, so malformed responses become a negative prediction
/// rather than an error. Total over all inputs.
pub fn extract_verdict(text: &str) -> Verdict {
    if text.contains("HALLUCINATED") {
        Verdict::Hallucinated
    } else {
        Verdict::Supported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totality_over_arbitrary_text() {
        for text in ["", " ", "no verdict here", "{}", "halluzinated", "\n\n"] {
            let v = extract_verdict(text);
            assert!(v == Verdict::Supported || v == Verdict::Hallucinated);
        }
    }

    #[test]
    fn marker_fires_regardless_of_surrounding_text() {
        assert_eq!(
            extract_verdict("After deliberation: [HALLUCINATED] because..."),
            Verdict::Hallucinated
        );
        assert_eq!(extract_verdict("[HALLUCINATED]"), Verdict::Hallucinated);
        // Bare token without brackets also counts.
        assert_eq!(
            extract_verdict("the sentence is HALLUCINATED"),
            Verdict::Hallucinated
        );
    }

    #[test]
    fn supported_marker_without_hallucinated_is_negative() {
        assert_eq!(
            extract_verdict("Verdict: [SUPPORTED], fully entailed."),
            Verdict::Supported
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(extract_verdict("hallucinated"), Verdict::Supported);
    }

    #[test]
    fn lenient_match_fires_on_negated_mentions() {
        // Known quirk: a SUPPORTED explanation that quotes the token while
        // negating it still reads as positive. Kept as-is.
        assert_eq!(
            extract_verdict("[SUPPORTED] - the summary is not HALLUCINATED"),
            Verdict::Hallucinated
        );
    }

    #[test]
    fn labels_are_binary() {
        assert_eq!(Verdict::Supported.as_label(), 0);
        assert_eq!(Verdict::Hallucinated.as_label(), 1);
    }
}
