/// 2FLAC Server - mock FLAC conversion API and landing page
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twoflac_server::{api, config::ServerConfig, create_router, state::AppState};

#[derive(Parser)]
#[command(name = "twoflac-server")]
#[command(about = "2FLAC mock conversion server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "TWOFLAC_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the route table
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twoflac_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Routes => {
            print_routes();
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load_from(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting 2FLAC server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Latency: {:?}", config.latency());

    let app_state = AppState::mock(config.latency());
    let app = create_router(app_state, config.web.static_dir.clone());

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

fn print_routes() {
    println!("Routes:");
    for (path, methods, description) in api::ROUTES {
        println!("  {:<15} {:<10} {}", path, methods, description);
    }
}
