mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{API_KEY_URL, AppConfig, LOG_VAR};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::clipboard::SystemClipboard;
use crate::infra::git::GitCli;
use crate::infra::llm::GeminiClient;

#[derive(Parser)]
#[command(
    name = "genie-fun",
    author,
    version,
    about = "Generate a creative two-line commit message from pending git changes"
)]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();
    init_tracing();

    if let Err(error) = run().await {
        eprintln!("{}", diagnostic(&error));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

async fn run() -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    run_with(AppConfig::load(&cwd), build_context, &mut io::stdout()).await
}

/// The config must load before any adapter is built or any command runs.
async fn run_with(
    config: AppResult<AppConfig>,
    build: impl FnOnce(AppConfig) -> AppResult<AppContext>,
    out: &mut impl Write,
) -> AppResult<()> {
    let context = build(config?)?;
    cmd::commit::run(&context, out).await?;
    Ok(())
}

fn build_context(config: AppConfig) -> AppResult<AppContext> {
    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let language_model = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    )?);
    let clipboard = Arc::new(SystemClipboard::new());

    Ok(AppContext::new(config, git, language_model, clipboard))
}

fn diagnostic(error: &AppError) -> String {
    match error {
        AppError::NotARepository => format!("❌ {error}"),
        AppError::MissingApiKey { .. } => {
            format!("❌ {error}\n   Get your API key from: {API_KEY_URL}")
        }
        AppError::VersionControl(_) => format!("❌ Error getting git diff: {error}"),
        AppError::LanguageModel(_) | AppError::Api { .. } | AppError::EmptyResponse => {
            format!("❌ Error generating commit: {error}")
        }
        _ => format!("❌ Error: {error}"),
    }
}
