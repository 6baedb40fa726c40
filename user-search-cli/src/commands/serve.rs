use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use user_search::prelude::*;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Configuration file (skips the default search locations)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// XML dataset to serve
    #[arg(short, long, value_name = "FILE")]
    dataset: Option<PathBuf>,

    /// Require this bearer token on every request
    #[arg(long, value_name = "TOKEN")]
    access_token: Option<String>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = load_config(args)?;

    init_tracing(&config).context("Failed to initialize tracing")?;

    let state = AppState::load(config.clone()).with_context(|| {
        format!(
            "Failed to load dataset: {}",
            config.search.dataset_path.display()
        )
    })?;

    println!(
        "{} {} records on port {}",
        "Serving".green().bold(),
        state.store().records().map(<[User]>::len).unwrap_or_default(),
        config.service.port
    );
    if config.search.access_token.is_none() {
        println!(
            "{} no access token configured, every request is accepted",
            "Warning:".yellow().bold()
        );
    }

    Server::new(config)
        .serve(router(state))
        .await
        .context("Server terminated with an error")?;

    Ok(())
}

fn load_config(args: ServeArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    if let Some(port) = args.port {
        config.service.port = port;
    }
    if let Some(dataset) = args.dataset {
        config.search.dataset_path = dataset;
    }
    if args.access_token.is_some() {
        config.search.access_token = args.access_token;
    }

    Ok(config)
}
