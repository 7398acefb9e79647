mod display;

use std::io::Read;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use moodtag_ai::config::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use moodtag_ai::{KeywordClassifier, ModelClassifier, ModelConfig, TagDetector};

#[derive(Parser)]
#[command(name = "moodtag", version, about = "Tag short transcribed texts by topic and sentiment")]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect tags in TEXT, or in stdin when TEXT is omitted.
    Detect(DetectArgs),
    /// List the tag vocabulary and trigger words.
    Tags,
}

#[derive(Args)]
struct DetectArgs {
    text: Option<String>,

    /// Use the language model instead of keyword matching.
    #[arg(long)]
    llm: bool,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "MOODTAG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "MOODTAG_MODEL", default_value = DEFAULT_MODEL)]
    model_name: String,

    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,
}

impl DetectArgs {
    fn model_config(&self) -> ModelConfig {
        ModelConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model_name.clone(),
            max_tokens: self.max_tokens,
            ..ModelConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Detect(args) => run_detect(args).await,
        Command::Tags => {
            print!("{}", display::render_vocabulary());
            Ok(())
        }
    }
}

async fn run_detect(args: DetectArgs) -> anyhow::Result<()> {
    let text = match &args.text {
        Some(t) => t.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading text from stdin")?;
            buf
        }
    };

    let detector: Box<dyn TagDetector> = if args.llm {
        let config = args.model_config();
        tracing::debug!(?config, "using model-backed classifier");
        Box::new(ModelClassifier::from_config(config).context("building completion client")?)
    } else {
        Box::new(KeywordClassifier::new())
    };

    let result = detector.detect(&text).await;
    tracing::debug!(detector = detector.name(), tags = result.tags.len(), "detection complete");

    if args.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", display::render_result(&result));
    }
    Ok(())
}
