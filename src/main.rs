mod api;
mod cli;
mod client;
mod config;
mod db;
mod error;
mod logic;
mod models;

use anyhow::Context;
use api::AppState;
use clap::Parser;
use cli::{Cli, Commands};
use client::AgriClient;
use config::Config;
use db::Database;
use logic::Advisor;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_filter = match cli.verbose {
        0 => "agriassist=info,tower_http=info,warn",
        1 => "agriassist=debug,tower_http=debug,info",
        _ => "agriassist=trace,tower_http=trace,debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    if let Commands::Init = command {
        Config::setup_interactive().context("Interactive setup failed")?;
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let data_dir = cli.data_dir.as_deref();

    if let Some((query_type, body)) = command.advisory_request(config.default_language) {
        let response = if cli.remote {
            AgriClient::new(&config.client)
                .post(client::route_for(query_type), &body)
                .await?
        } else {
            Advisor::new().answer(query_type, &body)?
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match command {
        Commands::Serve { host, port } => serve(config, data_dir, host, port).await,
        Commands::Check => check(&config, data_dir).await,
        Commands::History { limit } => history(&config, data_dir, limit, cli.remote).await,
        _ => Ok(()),
    }
}

async fn serve(
    config: Config,
    data_dir: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let mut server = config.server.clone();
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }

    let mut state = AppState::new(Advisor::new());
    if config.storage.enabled {
        let path = config.db_path(data_dir)?;
        let db = Database::open(&path)
            .with_context(|| format!("Failed to open query log at {}", path.display()))?;
        tracing::info!(path = %path.display(), "Query log enabled");
        state = state.with_query_log(db);
    }

    let app = api::create_router(state, &server);

    let addr = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn check(config: &Config, data_dir: Option<&Path>) -> anyhow::Result<()> {
    println!("Config: OK");
    println!("  Bind address: {}", config.server.bind_address());
    println!("  Default language: {}", config.default_language);

    let advisor = Advisor::new();
    let rules = advisor.soil_rules().list_rules();
    println!("Soil rules: {}", rules.len());
    for (id, name) in rules {
        println!("  {}: {}", id, name);
    }

    if config.storage.enabled {
        let path = config.db_path(data_dir)?;
        match Database::open(&path).and_then(|db| db.count_queries_by_type()) {
            Ok(counts) => {
                let total: i64 = counts.iter().map(|(_, n)| n).sum();
                println!("Query log: OK ({}, {} records)", path.display(), total);
                for (query_type, n) in counts {
                    println!("  {}: {}", query_type, n);
                }
            }
            Err(e) => println!("Query log: FAILED ({})", e),
        }
    } else {
        println!("Query log: disabled");
    }

    let client = AgriClient::new(&config.client);
    match client.test_connection().await {
        Ok(true) => println!("Backend: OK ({})", client.base_url()),
        Ok(false) => println!("Backend: UNHEALTHY ({})", client.base_url()),
        Err(e) => println!("Backend: OFFLINE ({})", e),
    }

    Ok(())
}

async fn history(
    config: &Config,
    data_dir: Option<&Path>,
    limit: usize,
    remote: bool,
) -> anyhow::Result<()> {
    let records = if remote {
        let body = AgriClient::new(&config.client)
            .get(&format!("/api/queries/recent?limit={}", limit))
            .await?;
        body["records"].clone()
    } else {
        let path = config.db_path(data_dir)?;
        if !path.exists() {
            println!("No query log at {}", path.display());
            return Ok(());
        }
        let db = Database::open(&path)
            .with_context(|| format!("Failed to open query log at {}", path.display()))?;
        serde_json::to_value(db.recent_query_records(limit)?)?
    };

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
