use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

mod cli;

use cli::Cli;
use toolroute::config::Config;
use toolroute::llm::{GeminiClient, LlmClient};
use toolroute::router::RoutingAgent;
use toolroute::session;
use toolroute::tools::ToolRegistry;

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolroute")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolroute.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    // Credentials may live in a local .env file
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded environment from {}", path.display());
    }

    let client = Arc::new(
        GeminiClient::from_env(&config.llm.api_key_env, config.llm.gemini_config())
            .context("Failed to create Gemini client")?,
    );

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
        println!("{} {}", "Model:".cyan(), client.model());
        println!("{} {}", "Tools:".cyan(), ToolRegistry::standard().names().join(", "));
    }

    let agent = RoutingAgent::with_settings(client.clone(), config.agent_settings());
    let mut stdout = io::stdout().lock();

    match cli.prompt() {
        Some(prompt) => session::run_once(&agent, prompt, &mut stdout).await?,
        None => session::run_interactive(&agent, io::stdin().lock(), &mut stdout).await?,
    }

    if cli.is_verbose() {
        let usage = client.total_usage();
        println!(
            "{} {} input + {} output = {} tokens",
            "Usage:".cyan(),
            usage.input_tokens,
            usage.output_tokens,
            usage.total()
        );
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }

    info!("Starting with config from: {:?}", cli.config);
    if cli.is_interactive() {
        info!("No prompt given, starting interactive session");
    }

    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
