//! steamdata command-line entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use steamdata::blocking::Client;
use steamdata::{Config, DiskStore, rank_by_name};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "steamdata", version, about = "Query Steam metadata with a local cache")]
struct Cli {
    /// Path to a JSON config file.
    #[arg(long, global = true, default_value = "steamdata.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a vanity name to a Steam ID.
    Resolve {
        username: String,
        #[arg(long)]
        key: String,
    },
    /// Show store details for an app.
    Details { app_id: u32 },
    /// List a user's owned games.
    Owned {
        steam_id: String,
        #[arg(long)]
        key: String,
        /// `total_playtime` or `last_played`; anything else keeps upstream order.
        #[arg(long, default_value = "total_playtime")]
        sort: String,
        /// Keep only the first N games (0 keeps all).
        #[arg(long, default_value_t = 0)]
        top: usize,
    },
    /// Resolve a game name to its app ID, or an app ID to its name.
    Search { query: String },
    /// Delete every cached entry.
    CacheClear,
    /// Print the cache size in bytes.
    CacheSize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    tracing::debug!(cache_dir = %config.cache_dir.display(), "configuration loaded");

    match cli.command {
        Command::Resolve { username, key } => {
            let client = Client::new(&config)?;
            let (identity, status) = client.resolve_vanity_name(&key, &username)?;
            tracing::info!(username = %username, status, "resolved vanity name");
            print_json(&identity)?;
        }
        Command::Details { app_id } => {
            let client = Client::new(&config)?;
            print_json(&client.app_details(app_id)?)?;
        }
        Command::Owned {
            steam_id,
            key,
            sort,
            top,
        } => {
            let client = Client::new(&config)?;
            let games = client.owned_games(&key, &steam_id)?;
            print_json(&rank_by_name(games, &sort, top))?;
        }
        Command::Search { query } => {
            let client = Client::new(&config)?;
            println!("{}", client.resolve_game(&query)?);
        }
        Command::CacheClear => {
            let store = DiskStore::new(config.cache_dir.clone());
            store.clear()?;
            tracing::info!(root = %store.root().display(), "cache cleared");
        }
        Command::CacheSize => {
            println!("{}", DiskStore::new(config.cache_dir.clone()).size());
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
