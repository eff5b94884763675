//! Entry point: parse CLI, build clients and dispatch to command handlers.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use chat_nba::{
    cli::{ChatNba, Commands, GlobalOpts},
    commands::{
        chat::{handle_ask, handle_chat, ChatOptions},
        Dispatcher,
    },
    config::{resolve_api_key, Config},
    llm::OpenAiClient,
    nba::http::StatsClient,
    output::render_error,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "chat_nba=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_config(opts: &GlobalOpts) -> anyhow::Result<Config> {
    let api_key = resolve_api_key(opts.api_key.clone()).context("Cannot start without an API key")?;
    Ok(Config::new(api_key)
        .with_model(opts.model.clone())
        .with_llm_base_url(opts.llm_base_url.clone())
        .with_stats_base_url(opts.stats_base_url.clone())
        .with_timeout(Duration::from_secs(opts.timeout_secs))
        .with_max_retries(opts.max_retries))
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env");
    let app = ChatNba::parse();
    init_tracing(app.opts.verbose);

    let config = build_config(&app.opts)?;
    let stats = StatsClient::new(&config).context("Failed to build the stats client")?;
    let llm = OpenAiClient::new(&config).context("Failed to build the language model client")?;
    let dispatcher = Dispatcher::new(&stats, &llm, &config);
    let options = ChatOptions {
        as_json: app.opts.json,
        debug: app.opts.debug,
    };

    match app.command.unwrap_or(Commands::Chat) {
        Commands::Chat => handle_chat(&dispatcher, options).await?,
        command @ Commands::Ask { .. } => {
            let question = command.question().unwrap_or_default();
            match handle_ask(&dispatcher, &question, options).await {
                Ok(true) => {}
                Ok(false) => std::process::exit(1),
                Err(e) => {
                    println!("{}", render_error(&e));
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
