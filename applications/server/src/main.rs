/// Phono streaming server - standalone entry point
use clap::{Parser, Subcommand};
use phono_catalog::{MusicLibrary, PlayCountStore};
use phono_server::{config::ServerConfig, lifecycle, state::AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "phono-server")]
#[command(about = "Phono local music streaming server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// List the tracks the server would serve
    ListTracks,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phono_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve().await?,
        Commands::ListTracks => list_tracks()?,
    }

    Ok(())
}

fn build_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let counts = Arc::new(PlayCountStore::open(&config.storage.play_counts_path));
    let library = Arc::new(MusicLibrary::new(&config.storage.music_dir, counts));
    library.initialize()?;
    Ok(AppState::new(library))
}

async fn serve() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Phono server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Music dir: {}", config.storage.music_dir.display());

    let state = build_state(&config)?;
    let handle = lifecycle::start_server(&config, state).await?;
    tracing::info!("Serving at {}", handle.base_url());

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    handle.shutdown().await?;

    Ok(())
}

fn list_tracks() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let state = build_state(&config)?;

    let tracks = state.library.scan()?;
    println!("Tracks:");
    for track in tracks {
        println!(
            "  {} - {} ({} plays)",
            track.artist.as_deref().unwrap_or("Unknown Artist"),
            track.display_title(),
            track.play_count
        );
    }

    Ok(())
}
