use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spotify_playlist_export::config::expand_home;
use spotify_playlist_export::export::{
    ExportMode, ExportOptions, ExportSummary, ExportWriter, PlaylistCollector, PlaylistExporter,
};
use spotify_playlist_export::{Config, SpotifyClient};

#[derive(Parser)]
#[command(name = "spotify-playlist-export")]
#[command(about = "Export your Spotify playlists to JSON files")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export your playlists and their tracks to JSON
    Export {
        /// Write one JSON file per playlist instead of a single combined file
        #[arg(long)]
        split: bool,

        /// Output directory (overrides OUTPUT_DIR)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Only export playlists with this name (case and whitespace insensitive)
        #[arg(long, value_name = "NAME")]
        playlist: Option<String>,

        /// Delete existing .json files in the output directory before exporting
        #[arg(long)]
        clean: bool,
    },

    /// List all your Spotify playlists
    ListPlaylists,

    /// Show setup guide
    Setup,
}

fn setup_tracing(verbose: bool, config: &Config) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log directory {}", config.log_dir.display()))?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())
        .context("Failed to open log file")?;

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(log_file)))
        .with(filter)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Setup = cli.command {
        show_setup_guide();
        return Ok(());
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    setup_tracing(cli.verbose, &config)?;
    tracing::info!("Logging initialized. Log file: {}", config.log_file().display());

    match cli.command {
        Commands::Export {
            split,
            output_dir,
            playlist,
            clean,
        } => {
            export(&config, split, output_dir, playlist, clean).await?;
        }
        Commands::ListPlaylists => {
            list_playlists(&config).await?;
        }
        Commands::Setup => {}
    }

    Ok(())
}

async fn export(
    config: &Config,
    split: bool,
    output_dir: Option<PathBuf>,
    playlist: Option<String>,
    clean: bool,
) -> Result<()> {
    println!("{}", "Spotify Playlist Exporter".cyan().bold());
    println!("{}", "=".repeat(50));

    if let Some(name) = &playlist {
        println!("Target playlist: {}", name);
    }

    let output_dir = output_dir
        .map(|dir| expand_home(&dir.to_string_lossy()))
        .unwrap_or_else(|| config.output_dir.clone());

    let spotify_client = SpotifyClient::new(config)
        .await
        .context("Failed to connect to Spotify")?;
    println!("Logged in as {}", spotify_client.display_name().green());

    let writer = ExportWriter::new(
        output_dir,
        config.output_prefix_split.as_str(),
        config.output_prefix_single.as_str(),
    );
    let options = ExportOptions {
        mode: if split {
            ExportMode::Split
        } else {
            ExportMode::Combined
        },
        name_filter: playlist,
        clean,
        show_progress: true,
    };

    let summary = PlaylistExporter::new(&spotify_client, writer)
        .run(&options)
        .await
        .context("Export failed")?;

    print_summary(&summary);

    Ok(())
}

async fn list_playlists(config: &Config) -> Result<()> {
    println!("{}", "Your Spotify Playlists".cyan().bold());
    println!("{}", "=".repeat(50));

    let spotify_client = SpotifyClient::new(config)
        .await
        .context("Failed to connect to Spotify")?;
    println!("Logged in as {}\n", spotify_client.display_name().green());

    let playlists = PlaylistCollector::new(&spotify_client)
        .list_playlists()
        .await
        .context("Failed to fetch playlists")?;

    if playlists.is_empty() {
        println!("{}", "No playlists found".yellow());
        return Ok(());
    }

    for (i, playlist) in playlists.iter().enumerate() {
        println!(
            "{:2}. {} ({} tracks) by {}",
            i + 1,
            playlist.name.green(),
            playlist.track_total,
            playlist.owner_display_name
        );
        if !playlist.description.is_empty() {
            println!("     {}", playlist.description.cyan());
        }
    }

    println!("\n{}", format!("Total: {} playlists", playlists.len()).cyan());

    Ok(())
}

fn print_summary(summary: &ExportSummary) {
    println!();
    println!("{}", "=".repeat(60));
    println!("{}", "EXPORT SUMMARY".bold());
    println!("{}", "=".repeat(60));
    println!(
        "Playlists exported: {}",
        summary.playlists_exported.to_string().green()
    );
    println!(
        "Tracks exported: {}",
        summary.tracks_exported.to_string().green()
    );
    if let Some(clean) = &summary.clean {
        println!("Old exports removed: {}", clean.removed);
        if clean.failed > 0 {
            println!("Failed removals: {}", clean.failed.to_string().red());
        }
    }
    println!("Elapsed: {:.2}s", summary.elapsed.as_secs_f64());
    println!("{}", "=".repeat(60));

    if summary.files_written.is_empty() {
        println!("{}", "No files written".yellow());
    } else {
        println!("\nFiles written:");
        for path in &summary.files_written {
            println!("  {}", path.display());
        }
    }
}

fn show_setup_guide() {
    println!("{}", "Spotify Playlist Exporter Setup Guide".cyan().bold());
    println!("{}", "=".repeat(50));

    println!("\n{}", "1. Spotify API Setup".yellow());
    println!("   - Go to https://developer.spotify.com/dashboard/");
    println!("   - Create a new app");
    println!("   - Copy your Client ID and Client Secret");
    println!("   - Add 'http://127.0.0.1:8080/callback' as a redirect URI");

    println!("\n{}", "2. Configuration".yellow());
    println!("   - Create a .env file with:");
    println!("     SPOTIFY_CLIENT_ID=your_spotify_client_id");
    println!("     SPOTIFY_CLIENT_SECRET=your_spotify_client_secret");
    println!("     SPOTIFY_REDIRECT_URI=http://127.0.0.1:8080/callback");
    println!("   - Optional:");
    println!("     OUTPUT_DIR=~/spotify-exports");
    println!("     OUTPUT_PREFIX_SPLIT=playlist_");
    println!("     OUTPUT_PREFIX_SINGLE=backup_");
    println!("     LOG_DIR=~/spotify-exports/logs");
    println!("     LOG_LEVEL=info");
    println!("     SPOTIFY_TOKEN_CACHE=~/.cache/spotify-playlist-export/token.json");

    println!("\n{}", "3. Usage".yellow());
    println!("   - spotify-playlist-export list-playlists                (to see your playlists)");
    println!("   - spotify-playlist-export export                        (one combined file)");
    println!("   - spotify-playlist-export export --split --clean        (one file per playlist)");
    println!("   - spotify-playlist-export export --playlist \"Road Trip\" (a single playlist)");

    println!("\n{}", "Ready to export!".green());
}
