//! Structured observability hooks for the analysis lifecycle.
//!
//! Events are emitted through `tracing`; filtering and output format are
//! configured once per process via [`crate::telemetry::init_tracing`].

use tracing::{info, warn};

use crate::article::{Assessment, Verdict};

/// Span wrapping one analysis; attach with `tracing::Instrument` so the
/// analysis future stays `Send`.
pub fn analysis_span(model: &str) -> tracing::Span {
    tracing::info_span!("newsjudge.analysis", model = %model)
}

/// Emit event: analysis started.
pub fn emit_analysis_started(title_chars: usize, content_chars: usize) {
    info!(
        event = "analysis.started",
        title_chars = title_chars,
        content_chars = content_chars,
    );
}

/// Emit event: completion service gave no usable text (warning level).
pub fn emit_completion_unavailable(reason: &dyn std::fmt::Display) {
    warn!(event = "completion.unavailable", reason = %reason);
}

/// Emit event: verdict produced.
pub fn emit_verdict(assessment: &Assessment) {
    let Verdict {
        is_fake,
        confidence,
    } = assessment.verdict;
    info!(
        event = "analysis.verdict",
        source = %assessment.source,
        is_fake = is_fake,
        confidence = confidence,
        label_rule = assessment.label_rule,
        confidence_rule = assessment.confidence_rule,
    );
}
