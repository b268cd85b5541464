//! Prompt construction for the fake news classifier.
//!
//! The reply shape requested here (VERDICT / CONFIDENCE / REASON lines) is what
//! [`crate::parser`] looks for first. Models do not always comply, so the parser
//! has weaker cues to fall back on.

use crate::article::Article;

const ROLE: &str = "You are a fake news detection expert. Analyze this news article and determine if it's FAKE or REAL.";

/// Signals the model is asked to weigh, in order.
pub const CRITERIA: [&str; 5] = [
    "Sensationalist language (shocking, unbelievable, miracle)",
    "Lack of credible sources",
    "Emotional manipulation",
    "Logical inconsistencies",
    "Implausible claims",
];

const REPLY_FORMAT: &str = "Respond with:
- VERDICT: FAKE or REAL
- CONFIDENCE: percentage (e.g., 85%)
- REASON: one sentence explanation

Keep your response brief and focused.";

/// Build the classification prompt for an article.
///
/// The title is embedded verbatim; the content is cut to [`Article::excerpt`].
pub fn build_prompt(article: &Article) -> String {
    let criteria = CRITERIA
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {}", i + 1, c))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{role}

TITLE: {title}

CONTENT: {content}

Analyze for:
{criteria}

{reply_format}",
        role = ROLE,
        title = article.title,
        content = article.excerpt(),
        criteria = criteria,
        reply_format = REPLY_FORMAT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::CONTENT_CHAR_LIMIT;

    #[test]
    fn test_prompt_embeds_title_verbatim() {
        let article = Article::new("Fed Holds Rates: \"No Surprise\"", "body");
        let prompt = build_prompt(&article);
        assert!(prompt.contains("TITLE: Fed Holds Rates: \"No Surprise\""));
        assert!(prompt.contains("CONTENT: body"));
    }

    #[test]
    fn test_prompt_lists_all_criteria_numbered() {
        let prompt = build_prompt(&Article::new("t", "c"));
        assert!(prompt.contains("1. Sensationalist language"));
        assert!(prompt.contains("2. Lack of credible sources"));
        assert!(prompt.contains("3. Emotional manipulation"));
        assert!(prompt.contains("4. Logical inconsistencies"));
        assert!(prompt.contains("5. Implausible claims"));
    }

    #[test]
    fn test_prompt_requests_three_line_reply() {
        let prompt = build_prompt(&Article::new("t", "c"));
        assert!(prompt.contains("VERDICT: FAKE or REAL"));
        assert!(prompt.contains("CONFIDENCE: percentage"));
        assert!(prompt.contains("REASON: one sentence"));
    }

    #[test]
    fn test_prompt_truncates_long_content() {
        let content = format!("{}{}", "x".repeat(CONTENT_CHAR_LIMIT), "TAIL_MARKER");
        let prompt = build_prompt(&Article::new("t", content));
        assert!(prompt.contains(&"x".repeat(CONTENT_CHAR_LIMIT)));
        assert!(!prompt.contains("TAIL_MARKER"));
    }
}
