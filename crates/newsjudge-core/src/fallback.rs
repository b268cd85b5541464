//! Network-free keyword classifier used when the model gives no answer.

use crate::article::{Article, Verdict};

/// Sensational vocabulary; each word scores at most once per article.
pub const SENSATIONAL_KEYWORDS: [&str; 5] =
    ["shocking", "unbelievable", "miracle", "secret", "conspiracy"];

/// Score at or above which an article is called fake.
pub const FAKE_THRESHOLD: usize = 2;

const BASE_CONFIDENCE: f32 = 0.5;
const CONFIDENCE_STEP: f32 = 0.1;
const MAX_CONFIDENCE: f32 = 0.9;

/// Number of distinct sensational keywords present in title or content.
pub fn sensational_score(article: &Article) -> usize {
    let text = format!("{} {}", article.title, article.content).to_lowercase();
    SENSATIONAL_KEYWORDS
        .iter()
        .filter(|k| text.contains(*k))
        .count()
}

/// Classify on keyword score alone.
pub fn classify(article: &Article) -> Verdict {
    let score = sensational_score(article);
    let confidence = (BASE_CONFIDENCE + CONFIDENCE_STEP * score as f32).min(MAX_CONFIDENCE);
    Verdict::new(score >= FAKE_THRESHOLD, confidence)
}
