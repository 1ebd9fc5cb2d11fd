//! STMS Portal Kernel
//!
//! HTTP server for the portal shell, plus navigation tooling.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use stms_kernel::cli::{self, Cli, Command, NavCommand};
use stms_kernel::{AppState, Config, routes};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    let args = Cli::parse();

    // Nav tooling only needs the navigation file, not the server settings
    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = Config::from_env().context("failed to load configuration")?;
            serve(config).await
        }
        Command::Nav { action } => match action {
            NavCommand::Check { file } => {
                cli::cmd_nav_check(file.or_else(Config::nav_config_path_from_env).as_deref())
            }
            NavCommand::Show { role, file } => {
                cli::cmd_nav_show(role, file.or_else(Config::nav_config_path_from_env).as_deref())
            }
        },
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting STMS portal kernel");
    info!(
        port = config.port,
        default_role = %config.default_role,
        "Configuration loaded"
    );

    // Fails fast on an invalid navigation config
    let state = AppState::new(&config).context("failed to initialize application state")?;

    // Build CORS layer from config
    let cors = build_cors_layer(&config);

    let app = routes::app_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [Method::GET, Method::OPTIONS];

    if config.cors_allowed_origins.len() == 1 && config.cors_allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
