/// Roster Server - REST API for user records
use clap::{Parser, Subcommand};
use roster_core::storage::UserRepository;
use roster_server::{api, config::ServerConfig, state::AppState};
use roster_storage::UserStore;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user management API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List all users in the store
    ListUsers {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::ListUsers { config } => {
            list_users(config).await?;
        }
    }

    Ok(())
}

async fn serve(config_file: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_file.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = Arc::new(open_store(&config).await?);
    tracing::info!("Database connected");

    let app_state = AppState::new(Arc::clone(&store) as Arc<dyn UserRepository>);
    let app = api::router(app_state);

    let addr = config.listen_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    match Arc::try_unwrap(store) {
        Ok(store) => store.close().await,
        Err(_) => tracing::warn!("User store still in use, leaving it to be dropped"),
    }

    Ok(())
}

async fn list_users(config_file: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_file.as_deref())?;
    config.validate()?;

    let store = open_store(&config).await?;
    let users = store.get_all().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} <{}>", user.id, user.name, user.email);
    }

    store.close().await;
    Ok(())
}

/// Open the store, creating the database's parent directory if needed
async fn open_store(config: &ServerConfig) -> anyhow::Result<UserStore> {
    let url = &config.storage.database_url;
    if let Some(parent) = database_dir(url) {
        tokio::fs::create_dir_all(&parent).await?;
    }
    Ok(UserStore::open(url).await?)
}

fn database_dir(url: &str) -> Option<PathBuf> {
    if url.contains(":memory:") {
        return None;
    }
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or(path);
    PathBuf::from(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
