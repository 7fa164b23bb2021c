mod cli;

use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
    let cli = cli::Cli::parse();

    match cli.command {
        Some(cli::Command::Generate { config, out }) => generate(&config, &out).await,
        None => serve(cli.serve).await,
    }
}

async fn serve(args: cli::ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.docs_config();
    let addr = SocketAddr::new(args.host, args.port);
    tracing::info!("Manifest source: {}", config.manifest_path.display());
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let router = backend::init(Router::new(), &config);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn generate(config: &Path, out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let agent = backend::config_loader::load(config).await?;
    let manifest = backend::manifest::build(&agent)?;
    tokio::fs::write(out, manifest.to_json_pretty()?).await?;
    tracing::info!(
        "Wrote manifest for {} ({} tools) to {}",
        manifest.agent_name,
        manifest.tools.len(),
        out.display()
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
