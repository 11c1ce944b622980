//! `vizagent` - chat with an analytics query service from the terminal
//!
//! Each line the user types is one turn through the agent; replies are
//! printed as text plus any chart or table payload.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use console::Style;
use futures::StreamExt;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::{Cli, Commands};
use vizagent_core::agent::{Agent, AgentBuilder, Turn};
use vizagent_core::config::Config;
use vizagent_core::output::OutputFormatter;
use vizagent_core::query::FixtureQueryService;

mod cli;

/// Main entry point for the CLI
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.version {
        let blue = Style::new().blue();
        println!(
            "{} v{} ({})",
            blue.apply_to("vizagent"),
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH")
        );
        return Ok(());
    }

    let config = load_config(&cli)?;
    let formatter = OutputFormatter::new();

    match &cli.command {
        Some(Commands::Query { query }) => {
            handle_one_shot(&cli, &config, query, &formatter).await?;
        }

        None if !cli.query.is_empty() => {
            let query = cli.query.join(" ");
            handle_one_shot(&cli, &config, &query, &formatter).await?;
        }

        Some(Commands::Chat) => {
            handle_chat(&cli, &config, &formatter).await?;
        }

        Some(Commands::Config) => {
            print!("{}", config.to_toml().context("Failed to render configuration")?);
        }

        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Resolve configuration: file, then environment, then command-line flags
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::load().context("Failed to load configuration")?,
    };
    config.apply_env_overrides();

    if let Some(url) = &cli.url {
        config.query_service.url = url.clone();
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn build_agent(cli: &Cli, config: &Config) -> Result<Box<dyn Agent>> {
    let mut builder = AgentBuilder::from_config(config);
    if let Some(path) = &cli.fixture {
        let fixture = FixtureQueryService::from_file(path)
            .with_context(|| format!("Failed to load fixture {}", path.display()))?;
        builder = builder.with_query_service(Arc::new(fixture));
    }
    Ok(builder.build())
}

async fn handle_one_shot(cli: &Cli, config: &Config, query: &str, formatter: &OutputFormatter) -> Result<()> {
    let mut agent = build_agent(cli, config)?;
    let reply = agent.process_turn(Turn::from_text(query)).await;
    if cli.json {
        formatter.print_json(&reply)?;
    } else {
        formatter.print_reply(&reply);
    }
    Ok(())
}

async fn handle_chat(cli: &Cli, config: &Config, formatter: &OutputFormatter) -> Result<()> {
    let mut agent = build_agent(cli, config)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut replies = agent.chat(Turn::from_text(line));
        while let Some(reply) = replies.next().await {
            if cli.json {
                formatter.print_json(&reply)?;
            } else {
                formatter.print_reply(&reply);
            }
        }
    }

    tracing::debug!(messages = agent.memory().len(), "chat session ended");
    Ok(())
}
