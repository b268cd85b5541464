//! Input and output types: the article under review and the verdict on it.

use serde::{Deserialize, Serialize};

/// Number of content characters forwarded to the model.
pub const CONTENT_CHAR_LIMIT: usize = 1500;

/// A news article as submitted for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
}

impl Article {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The leading [`CONTENT_CHAR_LIMIT`] characters of the content.
    ///
    /// Counts `char`s, not bytes, so multi-byte text is never split mid-codepoint.
    pub fn excerpt(&self) -> &str {
        match self.content.char_indices().nth(CONTENT_CHAR_LIMIT) {
            Some((byte_idx, _)) => &self.content[..byte_idx],
            None => &self.content,
        }
    }
}

/// Binary fake/real decision with a confidence in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_fake: bool,
    pub confidence: f32,
}

impl Verdict {
    /// Build a verdict, clamping `confidence` into `[0.0, 1.0]`. NaN becomes 0.
    pub fn new(is_fake: bool, confidence: f32) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            is_fake,
            confidence,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.is_fake {
            "FAKE"
        } else {
            "REAL"
        }
    }
}

/// Which path produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictSource {
    /// Parsed from the model's reply
    Model,
    /// Keyword heuristic; the model was unreachable or silent
    Fallback,
}

impl std::fmt::Display for VerdictSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerdictSource::Model => write!(f, "model"),
            VerdictSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// A verdict together with how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub verdict: Verdict,
    pub source: VerdictSource,
    /// Text of the model's `REASON:` line, when it gave one
    pub reason: Option<String>,
    /// Name of the rule that decided `is_fake`
    pub label_rule: &'static str,
    /// Name of the rule that decided `confidence`
    pub confidence_rule: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_content_untouched() {
        let article = Article::new("t", "short body");
        assert_eq!(article.excerpt(), "short body");
    }

    #[test]
    fn test_excerpt_truncates_to_char_limit() {
        let article = Article::new("t", "a".repeat(CONTENT_CHAR_LIMIT + 250));
        assert_eq!(article.excerpt().len(), CONTENT_CHAR_LIMIT);
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        let article = Article::new("t", "é".repeat(CONTENT_CHAR_LIMIT + 1));
        assert_eq!(article.excerpt().chars().count(), CONTENT_CHAR_LIMIT);
    }

    #[test]
    fn test_verdict_clamps_confidence() {
        assert_eq!(Verdict::new(true, 1.5).confidence, 1.0);
        assert_eq!(Verdict::new(false, -0.2).confidence, 0.0);
        assert_eq!(Verdict::new(false, f32::NAN).confidence, 0.0);
        assert_eq!(Verdict::new(true, 0.42).confidence, 0.42);
    }

    #[test]
    fn test_verdict_serializes_with_contract_fields() {
        let v = serde_json::to_value(Verdict::new(true, 0.5)).unwrap();
        assert_eq!(v["is_fake"], true);
        assert_eq!(v["confidence"], 0.5);
    }
}
