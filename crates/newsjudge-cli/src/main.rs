//! newsjudge - fake news classification from the command line
//!
//! ## Commands
//!
//! - `analyze`: classify one article and print the verdict as JSON
//! - `demo`: classify two built-in sample articles
//! - `health`: check whether the completion service is reachable

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, Level};

use newsjudge_core::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use newsjudge_core::{Article, CompletionConfig, OllamaAnalyzer, OllamaClient, Verdict};

#[derive(Parser, Debug)]
#[command(name = "newsjudge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Classify news articles as fake or real with a local LLM", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    service: ServiceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ServiceArgs {
    /// Completion service base URL
    #[arg(long, global = true, env = "OLLAMA_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Model identifier
    #[arg(long, global = true, env = "OLLAMA_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "25")]
    timeout_secs: u64,
}

impl ServiceArgs {
    fn config(&self) -> CompletionConfig {
        CompletionConfig::new(&self.base_url, &self.model)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a single article
    Analyze {
        /// Article headline
        #[arg(short, long)]
        title: String,

        /// Article body
        #[arg(short, long, conflicts_with = "content_file")]
        content: Option<String>,

        /// Read the article body from a file
        #[arg(long)]
        content_file: Option<PathBuf>,

        /// Print source, reason and deciding rules along with the verdict
        #[arg(long)]
        detailed: bool,
    },

    /// Run the built-in sample articles
    Demo,

    /// Check that the completion service answers
    Health,
}

struct Sample {
    label: &'static str,
    title: &'static str,
    content: &'static str,
}

const SAMPLES: [Sample; 2] = [
    Sample {
        label: "Obvious fake",
        title: "SHOCKING: Scientists Discover Miracle Cure They Don't Want You To Know!",
        content: "In an unbelievable revelation, a secret group of researchers has discovered a miracle \
cure for all diseases. The conspiracy to hide this from the public has been exposed. \
You won't believe what happens next! Share before it gets deleted!",
    },
    Sample {
        label: "Likely real",
        title: "Federal Reserve Announces Interest Rate Decision",
        content: "The Federal Reserve announced today that it will maintain current interest rates, \
citing stable inflation data. Fed Chair Jerome Powell stated that the committee \
will continue to monitor economic indicators. Markets responded with modest gains.",
    },
];

#[derive(Serialize)]
struct DemoRow<'a> {
    sample: &'a str,
    title: &'a str,
    prediction: &'a str,
    #[serde(flatten)]
    verdict: Verdict,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    newsjudge_core::init_tracing(cli.json, level);

    let config = cli.service.config();
    match cli.command {
        Commands::Analyze {
            title,
            content,
            content_file,
            detailed,
        } => {
            let content = load_content(content, content_file.as_deref())?;
            cmd_analyze(config, &title, &content, detailed).await
        }
        Commands::Demo => cmd_demo(config).await,
        Commands::Health => cmd_health(config).await,
    }
}

/// Resolve the article body from `--content`, `--content-file`, or nothing.
fn load_content(content: Option<String>, content_file: Option<&Path>) -> Result<String> {
    match (content, content_file) {
        (Some(content), _) => Ok(content),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read article content from {:?}", path)),
        (None, None) => Ok(String::new()),
    }
}

async fn cmd_analyze(
    config: CompletionConfig,
    title: &str,
    content: &str,
    detailed: bool,
) -> Result<()> {
    let analyzer = OllamaAnalyzer::ollama(config).context("Failed to create completion client")?;
    let assessment = analyzer.assess(&Article::new(title, content)).await;

    if detailed {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("{}", serde_json::to_string(&assessment.verdict)?);
    }
    Ok(())
}

async fn cmd_demo(config: CompletionConfig) -> Result<()> {
    info!(model = %config.model, base_url = %config.base_url, "running demo samples");
    let analyzer = OllamaAnalyzer::ollama(config).context("Failed to create completion client")?;

    for sample in &SAMPLES {
        let verdict = analyzer.analyze(sample.title, sample.content).await;
        let row = DemoRow {
            sample: sample.label,
            title: sample.title,
            prediction: verdict.label(),
            verdict,
        };
        println!("{}", serde_json::to_string(&row)?);
    }
    Ok(())
}

async fn cmd_health(config: CompletionConfig) -> Result<()> {
    let client = OllamaClient::new(config).context("Failed to create completion client")?;
    let config = client.config();

    if client.is_available().await {
        println!(
            "Completion service reachable at {} (model: {})",
            config.base_url, config.model
        );
        Ok(())
    } else {
        anyhow::bail!("Completion service not reachable at {}", config.base_url)
    }
}
