//! questline: terminal client for a fine-tuned adventure-tutor chatbot.
//!
//! Chats against a (typically fine-tuned) Mistral model, keeping the full
//! conversation transcript locally and resending it on every turn. Also
//! validates JSONL training datasets before they are uploaded to the
//! fine-tuning dashboard.

mod repl;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use questline_ai::dataset;
use questline_config::QuestlineConfig;

#[derive(Parser)]
#[command(name = "questline", about = "Terminal client for a fine-tuned choose-your-own-adventure tutor")]
struct Args {
    /// Path to a config file (defaults to the platform config directory).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured model ID for this run.
    #[arg(short, long)]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat session (the default).
    Chat,
    /// Validate a JSONL training dataset before uploading it.
    Validate {
        /// Path to the dataset file.
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "questline=info,questline_ai=info,questline_config=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let result = match args.command.unwrap_or(Command::Chat) {
        Command::Chat => repl::run(config, args.model).await,
        Command::Validate { file } => validate_dataset(&file, config.dataset.min_examples),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> questline_common::Result<QuestlineConfig> {
    let config = match path {
        Some(path) => questline_config::load_config_from(path)?,
        None => questline_config::load_config()?,
    };
    Ok(config)
}

fn validate_dataset(path: &Path, min_examples: usize) -> questline_common::Result<()> {
    let summary = dataset::validate_file(path, min_examples)?;
    println!(
        "{}: {} examples, {} turns, ready to upload",
        path.display(),
        summary.examples,
        summary.turns
    );
    Ok(())
}
