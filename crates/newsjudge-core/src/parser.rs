//! Verdict extraction from free-text model replies.
//!
//! Two independent cascades run over the lower-cased reply: one decides
//! `is_fake`, the other decides `confidence`. Each cascade is an ordered slice
//! of [`Rule`]s; the first rule returning `Some` wins and later rules are never
//! consulted. The last rule of each cascade always fires, so parsing cannot fail.

use std::sync::OnceLock;

use regex::Regex;

use crate::article::Verdict;

/// A named step in a decision cascade.
#[derive(Clone, Copy)]
pub struct Rule<T> {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<T>,
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Cascade deciding `is_fake`.
pub const LABEL_RULES: &[Rule<bool>] = &[
    Rule {
        name: "explicit_marker",
        apply: explicit_marker,
    },
    Rule {
        name: "phrase_cue",
        apply: phrase_cue,
    },
    Rule {
        name: "keyword_majority",
        apply: keyword_majority,
    },
];

/// Cascade deciding `confidence`.
pub const CONFIDENCE_RULES: &[Rule<f32>] = &[
    Rule {
        name: "stated_percentage",
        apply: stated_percentage,
    },
    Rule {
        name: "strong_hedge",
        apply: |text| contains_any(text, &["highly likely", "very confident"]).then_some(0.9),
    },
    Rule {
        name: "likely_hedge",
        apply: |text| contains_any(text, &["likely", "probably"]).then_some(0.75),
    },
    Rule {
        name: "weak_hedge",
        apply: |text| contains_any(text, &["possibly", "might be"]).then_some(0.6),
    },
    Rule {
        name: "uncertain",
        apply: |text| text.contains("uncertain").then_some(0.5),
    },
    Rule {
        name: "default",
        apply: |_| Some(DEFAULT_CONFIDENCE),
    },
];

/// Confidence when the reply carries no usable cue.
pub const DEFAULT_CONFIDENCE: f32 = 0.75;

const FAKE_MARKERS: &[&str] = &["verdict: fake", "classification: fake"];
const REAL_MARKERS: &[&str] = &["verdict: real", "classification: real"];
const FAKE_PHRASES: &[&str] = &["this is fake", "appears to be fake"];
const REAL_PHRASES: &[&str] = &["this is real", "appears to be real", "legitimate"];
const FAKE_KEYWORDS: &[&str] = &["fake", "misinformation", "false"];
const REAL_KEYWORDS: &[&str] = &["real", "legitimate", "credible"];

/// Everything recovered from one model reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReply {
    pub verdict: Verdict,
    pub reason: Option<String>,
    pub label_rule: &'static str,
    pub confidence_rule: &'static str,
}

/// Parse a reply into a [`Verdict`].
pub fn parse_verdict(reply: &str) -> Verdict {
    parse_reply(reply).verdict
}

/// Parse a reply, keeping rule provenance and the `REASON:` line.
pub fn parse_reply(reply: &str) -> ParsedReply {
    let lowered = reply.to_lowercase();

    let (label_rule, is_fake) = evaluate(LABEL_RULES, &lowered).unwrap_or(("none", false));
    let (confidence_rule, confidence) =
        evaluate(CONFIDENCE_RULES, &lowered).unwrap_or(("none", DEFAULT_CONFIDENCE));

    ParsedReply {
        verdict: Verdict::new(is_fake, confidence),
        reason: extract_reason(reply),
        label_rule,
        confidence_rule,
    }
}

/// Run a cascade, returning the first rule that fires and its outcome.
pub fn evaluate<T>(rules: &[Rule<T>], text: &str) -> Option<(&'static str, T)> {
    rules
        .iter()
        .find_map(|rule| (rule.apply)(text).map(|outcome| (rule.name, outcome)))
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

fn count_all(text: &str, needles: &[&str]) -> usize {
    needles.iter().map(|n| text.matches(n).count()).sum()
}

fn explicit_marker(text: &str) -> Option<bool> {
    if contains_any(text, FAKE_MARKERS) {
        Some(true)
    } else if contains_any(text, REAL_MARKERS) {
        Some(false)
    } else {
        None
    }
}

fn phrase_cue(text: &str) -> Option<bool> {
    if contains_any(text, FAKE_PHRASES) {
        Some(true)
    } else if contains_any(text, REAL_PHRASES) {
        Some(false)
    } else {
        None
    }
}

// Ties go to REAL.
fn keyword_majority(text: &str) -> Option<bool> {
    Some(count_all(text, FAKE_KEYWORDS) > count_all(text, REAL_KEYWORDS))
}

// `\d` is Unicode-aware: fullwidth and Arabic-Indic digits count too.
fn stated_percentage_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(\d{1,3})%?\s*(confident|confidence|certain)").ok())
        .as_ref()
}

fn decimal_digit_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d$").ok()).as_ref()
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    decimal_digit_pattern().is_some_and(|re| re.is_match(c.encode_utf8(&mut buf)))
}

/// Numeric value of a Unicode decimal digit (general category Nd).
///
/// Nd digits are encoded in contiguous runs of ten, zero first, so the value
/// is the offset from the start of the run modulo 10.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start
        .checked_sub(1)
        .and_then(char::from_u32)
        .filter(|p| is_decimal_digit(*p))
    {
        start = prev as u32;
    }
    Some((c as u32 - start) % 10)
}

fn stated_percentage(text: &str) -> Option<f32> {
    let caps = stated_percentage_pattern()?.captures(text)?;
    let pct = caps
        .get(1)?
        .as_str()
        .chars()
        .try_fold(0u32, |acc, c| Some(acc * 10 + digit_value(c)?))?;
    Some((pct as f32 / 100.0).min(1.0))
}

fn reason_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)reason:([^\r\n]*)").ok())
        .as_ref()
}

/// Text after the first `REASON:` marker, up to end of line.
pub fn extract_reason(reply: &str) -> Option<String> {
    let caps = reason_pattern()?.captures(reply)?;
    let reason = caps
        .get(1)?
        .as_str()
        .trim_start_matches(|c: char| c == '*' || c.is_whitespace())
        .trim_end();
    (!reason.is_empty()).then(|| reason.to_string())
}
