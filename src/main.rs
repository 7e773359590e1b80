use clap::Parser;
use github_users_api::{
    api::{handlers::AppState, routes},
    cli::{Cli, Commands},
    config::Settings,
    Error, Result,
};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,github_users_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;

    // `serve` validates after applying its CLI overrides
    if !matches!(cli.command, Commands::Serve { .. }) {
        settings.validate()?;
    }

    let server_url = settings.server.public_base_url();

    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, port, host).await?;
        }
        Commands::Users { since } => {
            github_users_api::cli::commands::users(&server_url, since).await?;
        }
        Commands::Details { username } => {
            github_users_api::cli::commands::details(&server_url, &username).await?;
        }
        Commands::Repos { username } => {
            github_users_api::cli::commands::repos(&server_url, &username).await?;
        }
    }

    Ok(())
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }
    settings.validate()?;

    info!("Starting GitHub users API server");
    info!("Upstream: {}", settings.github.api_base_url());
    info!("Public base URL: {}", settings.server.public_base_url());
    if settings.github.token.is_none() {
        warn!("GITHUB_TOKEN not set, upstream requests are unauthenticated");
    }

    let state = AppState::from_settings(&settings)?;
    let app = routes::create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        error!("Failed to bind to {}: {}", addr, e);
        Error::Io(e)
    })?;

    info!("Server listening on {}", addr);
    info!("  GET  /api/users?since={{id}}");
    info!("  GET  /api/users/:username/details");
    info!("  GET  /api/users/:username/repos");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, initiating graceful shutdown");
}
