//! mahdar — bilingual meeting-transcript analysis from the command line.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use mahdar_analyze::{build_smart_summary, Glossary};
use mahdar_core::{EndpointConfig, Language};
use mahdar_summarize::{format_summary, HeuristicSummarizer, OllamaSummarizer, Summarizer};

#[derive(Parser)]
#[command(name = "mahdar", about = "Extract topics, decisions and tasks from meeting transcripts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local rule-based analyzer (no network).
    Analyze {
        /// Transcript file; `-` reads stdin.
        file: PathBuf,
        #[arg(long, default_value = "ar")]
        lang: String,
        /// Optional glossary JSON with cleanup rules.
        #[arg(long)]
        glossary: Option<PathBuf>,
    },
    /// Summarize via the inference endpoint, falling back to the local
    /// analyzer when the endpoint is unreachable.
    Summarize {
        /// Transcript file; `-` reads stdin.
        file: PathBuf,
        #[arg(long, default_value = "ar")]
        lang: String,
        #[arg(long, default_value = "Meeting")]
        title: String,
        #[arg(long, default_value = mahdar_core::config::DEFAULT_BASE_URL)]
        url: String,
        #[arg(long, default_value = mahdar_core::config::DEFAULT_MODEL)]
        model: String,
        #[arg(long, default_value_t = mahdar_core::config::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
        #[arg(long)]
        glossary: Option<PathBuf>,
    },
}

fn read_transcript(path: &PathBuf, glossary: Option<&PathBuf>) -> anyhow::Result<String> {
    let mut text = String::new();
    if path.as_os_str() == "-" {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        text = std::fs::read_to_string(path)?;
    }
    if let Some(path) = glossary {
        let glossary = Glossary::load(path)?;
        if !glossary.is_empty() {
            text = glossary.apply(&text);
        }
    }
    Ok(text)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze { file, lang, glossary } => {
            let text = read_transcript(&file, glossary.as_ref())?;
            let lang = Language::from_code(&lang);
            let smart = build_smart_summary(&text);

            let structured = HeuristicSummarizer.summarize(&text, "", lang).await?;
            println!("{}", format_summary(&structured, lang));

            if !smart.keywords.is_empty() {
                println!("\nKeywords: {}", smart.keywords.join(", "));
            }
            for (topic, sentences) in &smart.topics {
                println!("\n[{topic}]");
                for s in sentences {
                    println!("  - {s}");
                }
            }
        }
        Command::Summarize { file, lang, title, url, model, timeout, glossary } => {
            let text = read_transcript(&file, glossary.as_ref())?;
            let lang = Language::from_code(&lang);
            let config = EndpointConfig::new(url, model, timeout);

            let result = match OllamaSummarizer::new(&config) {
                Ok(summarizer) => summarizer.summarize(&text, &title, lang).await,
                Err(e) => Err(e),
            };

            let structured = match result {
                Ok(structured) => structured,
                Err(e) => {
                    warn!("endpoint unavailable ({e}), using local analyzer");
                    HeuristicSummarizer.summarize(&text, &title, lang).await?
                }
            };
            println!("{}", format_summary(&structured, lang));
        }
    }
    Ok(())
}
