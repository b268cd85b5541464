//! Analysis orchestration: prompt, one completion attempt, then parse or fall back.
//!
//! Nothing here returns an error. A failed or empty completion routes the
//! article to [`crate::fallback::classify`]; any reply text goes to
//! [`crate::parser::parse_reply`].

use tracing::Instrument;

use crate::article::{Article, Assessment, Verdict, VerdictSource};
use crate::client::{CompletionClient, OllamaClient};
use crate::config::CompletionConfig;
use crate::error::CompletionResult;
use crate::{fallback, obs, parser, prompt};

/// Rule name recorded for verdicts from the keyword fallback.
pub const FALLBACK_RULE: &str = "sensational_keywords";

/// Classifies articles through a [`CompletionClient`].
pub struct Analyzer<C> {
    client: C,
    model: String,
}

impl<C: CompletionClient> Analyzer<C> {
    /// `model` is only used to label log spans.
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Classify an article. Never fails.
    pub async fn analyze(&self, title: &str, content: &str) -> Verdict {
        self.assess(&Article::new(title, content)).await.verdict
    }

    /// Classify an article and report how the verdict was reached.
    pub async fn assess(&self, article: &Article) -> Assessment {
        self.assess_inner(article)
            .instrument(obs::analysis_span(&self.model))
            .await
    }

    async fn assess_inner(&self, article: &Article) -> Assessment {
        obs::emit_analysis_started(
            article.title.chars().count(),
            article.content.chars().count(),
        );

        let prompt = prompt::build_prompt(article);
        let assessment = match self.client.complete(&prompt).await {
            Ok(reply) if !reply.is_empty() => {
                let parsed = parser::parse_reply(&reply);
                Assessment {
                    verdict: parsed.verdict,
                    source: VerdictSource::Model,
                    reason: parsed.reason,
                    label_rule: parsed.label_rule,
                    confidence_rule: parsed.confidence_rule,
                }
            }
            Ok(_) => {
                obs::emit_completion_unavailable(&"empty reply");
                fallback_assessment(article)
            }
            Err(err) => {
                obs::emit_completion_unavailable(&err);
                fallback_assessment(article)
            }
        };

        obs::emit_verdict(&assessment);
        assessment
    }
}

/// Analyzer talking to an Ollama-compatible HTTP service.
pub type OllamaAnalyzer = Analyzer<OllamaClient>;

impl OllamaAnalyzer {
    /// Analyzer backed by an Ollama service.
    pub fn ollama(config: CompletionConfig) -> CompletionResult<Self> {
        let model = config.model.clone();
        Ok(Self::new(OllamaClient::new(config)?, model))
    }
}

fn fallback_assessment(article: &Article) -> Assessment {
    Assessment {
        verdict: fallback::classify(article),
        source: VerdictSource::Fallback,
        reason: None,
        label_rule: FALLBACK_RULE,
        confidence_rule: FALLBACK_RULE,
    }
}

/// Classify an article against the service named by `OLLAMA_URL` / `OLLAMA_MODEL`.
///
/// If the HTTP client cannot even be built, the keyword fallback answers.
pub async fn analyze(title: &str, content: &str) -> Verdict {
    analyze_or_fallback(
        OllamaAnalyzer::ollama(CompletionConfig::from_env()),
        title,
        content,
    )
    .await
}

async fn analyze_or_fallback<C: CompletionClient>(
    analyzer: CompletionResult<Analyzer<C>>,
    title: &str,
    content: &str,
) -> Verdict {
    match analyzer {
        Ok(analyzer) => analyzer.analyze(title, content).await,
        Err(err) => {
            obs::emit_completion_unavailable(&err);
            fallback::classify(&Article::new(title, content))
        }
    }
}
