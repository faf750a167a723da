mod app;
mod handlers;
#[cfg(test)]
mod mock_api;
mod prerender;
mod state;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use listenfd::ListenFd;
use techbuket_client::ContentClient;
use techbuket_core::{config::DEFAULT_BASE_URL, SiteConfig};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, prerender::PathPolicy, state::AppState};

/// Techbuket - marketing site for Techbuket tech solutions
#[derive(Parser, Debug)]
#[command(name = "techbuket")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the content API host, also used for canonical links
    #[arg(
        long,
        env = "TECHBUKET_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the site over HTTP
    Serve {
        /// Host address to bind the server to
        #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
        host: String,

        /// Port to listen on
        #[arg(long, short, default_value = "3000", env = "PORT")]
        port: u16,
    },
    /// Pre-render content pages to static HTML
    Prerender {
        /// Output directory for rendered documents
        #[arg(long, short, default_value = "dist")]
        out: PathBuf,

        /// Where the set of slugs to render comes from
        #[arg(long, value_enum, default_value = "fixed")]
        paths: PathPolicy,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "techbuket=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The base URL is resolved exactly once here; everything downstream
    // receives it through SiteConfig.
    let config = SiteConfig::new(cli.base_url);

    match cli.command {
        Commands::Serve { host, port } => serve(config, &host, port).await,
        Commands::Prerender { out, paths } => {
            let client = ContentClient::new(config);
            prerender::run(&client, paths, &out).await?;
            Ok(())
        }
    }
}

/// Run the HTTP server until a shutdown signal arrives.
async fn serve(config: SiteConfig, host: &str, port: u16) -> Result<()> {
    let state = AppState::new(config);
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{host}:{port}");
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
