//! newsjudge core library
//!
//! Classifies a news article as fake or real by asking a locally hosted LLM
//! (Ollama `/api/generate`) and reading a verdict out of its free-text reply.
//! When the model is unreachable or returns nothing, a keyword heuristic
//! answers instead, so [`analyze`] always produces a [`Verdict`].
//!
//! ## Pipeline
//!
//! - [`prompt`]: builds the instruction text from title + content excerpt
//! - [`client`]: one HTTP request, bounded by a timeout, no retries
//! - [`parser`]: ordered rule cascades for `is_fake` and `confidence`
//! - [`fallback`]: sensational-keyword scoring
//! - [`analyzer`]: wires the above together

pub mod analyzer;
pub mod article;
pub mod client;
pub mod config;
pub mod error;
pub mod fakes;
pub mod fallback;
pub mod obs;
pub mod parser;
pub mod prompt;
pub mod telemetry;

pub use analyzer::{analyze, Analyzer, OllamaAnalyzer, FALLBACK_RULE};
pub use article::{Article, Assessment, Verdict, VerdictSource, CONTENT_CHAR_LIMIT};
pub use client::{CompletionClient, OllamaClient};
pub use config::CompletionConfig;
pub use error::{CompletionError, CompletionResult};
pub use parser::{parse_reply, parse_verdict, ParsedReply};
pub use prompt::build_prompt;
pub use telemetry::init_tracing;
