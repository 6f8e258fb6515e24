//! WordClimb HTTP server.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordclimb::dictionary::{Dictionary, HttpWordLookup};
use wordclimb::game::{Game, DEFAULT_LEADERBOARD_SIZE};
use wordclimb::store::InMemoryStore;
use wordclimb::{handlers, microsvc};

const DEFAULT_LOOKUP_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Parser, Debug)]
#[command(author, version, about = "WordClimb daily word-ladder server")]
struct Args {
    /// Address to serve HTTP on
    #[arg(long, env = "WORDCLIMB_LISTEN", default_value = "0.0.0.0:3000")]
    listen: String,
    /// Word list file (whitespace separated, `#` comments). Defaults to the bundled list.
    #[arg(long, env = "WORDCLIMB_WORDS")]
    words: Option<PathBuf>,
    /// Base URL of the remote dictionary; words are looked up at `<url>/<word>`
    #[arg(long, env = "WORDCLIMB_LOOKUP_URL", default_value = DEFAULT_LOOKUP_URL)]
    lookup_url: String,
    /// Only accept words from the local list
    #[arg(long)]
    no_remote_lookup: bool,
    /// Remote lookup timeout in seconds
    #[arg(long, default_value_t = 5)]
    lookup_timeout_secs: u64,
    /// Number of players shown on the leaderboard
    #[arg(long, default_value_t = DEFAULT_LEADERBOARD_SIZE)]
    leaderboard_size: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let dictionary = match &args.words {
        Some(path) => Dictionary::load(path)
            .with_context(|| format!("load word list {}", path.display()))?,
        None => Dictionary::builtin(),
    };
    info!(words = dictionary.len(), "dictionary loaded");

    let lookup = if args.no_remote_lookup {
        info!("remote word lookup disabled");
        None
    } else {
        let timeout = Duration::from_secs(args.lookup_timeout_secs);
        let lookup = HttpWordLookup::with_timeout(args.lookup_url.as_str(), timeout)
            .context("build lookup client")?;
        info!(url = lookup.base_url(), "remote word lookup enabled");
        Some(lookup)
    };

    let game = Game::new(InMemoryStore::new(), dictionary, lookup)
        .with_leaderboard_size(args.leaderboard_size);
    let service = Arc::new(handlers::service(game));

    microsvc::serve(service, &args.listen)
        .await
        .with_context(|| format!("serve on {}", args.listen))
}
