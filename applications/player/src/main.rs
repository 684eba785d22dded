/// Phono player - headless entry point
use clap::{Parser, Subcommand};
use phono_playback::DetachedElement;
use phono_player::PlayerApp;
use phono_server::ServerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "phono")]
#[command(about = "Phono local music player", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the streaming server and keep it running
    Serve,
    /// List the current catalog
    ListTracks,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phono=info,phono_player=info,phono_server=info".into()),
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

async fn serve() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;

    let mut app = PlayerApp::new(config, Box::new(DetachedElement::new()))?;

    app.start_server().await?;
    let server = app.server();
    tracing::info!(
        "Streaming at {}",
        server.base_url.as_deref().unwrap_or("<unknown>")
    );
    tracing::info!("{} tracks in the catalog", app.tracks().len());

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    app.stop_server().await?;

    Ok(())
}

fn list_tracks() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let app = PlayerApp::new(config, Box::new(DetachedElement::new()))?;

    println!("Tracks:");
    for track in app.tracks() {
        println!(
            "  {} - {} ({} plays)",
            track.artist.as_deref().unwrap_or("Unknown Artist"),
            track.display_title(),
            track.play_count
        );
    }

    Ok(())
}
