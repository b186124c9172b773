//! TuneFinder - resolve a spoken music command against a music directory
//!
//! Development front end for the resolver: loads (or rescans) the catalog and
//! prints the decision for one utterance.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tunefinder::config::{config_path, AppConfig};
use tunefinder::{LocalLibrary, MatchDecision, Resolver};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Music directory, overriding the config
    #[arg(long)]
    music_dir: Option<PathBuf>,

    /// Ignore the cached index and walk the directory again
    #[arg(long)]
    rescan: bool,

    /// The command, e.g. "play moonlight sonata"
    #[arg(required = true, trailing_var_arg = true)]
    utterance: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load_from(&args.config.unwrap_or_else(config_path))?;

    let level = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🎵 TuneFinder v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut music = config.music();
    if let Some(dir) = args.music_dir {
        music.music_dir = dir;
    }

    let library = LocalLibrary::new(&music);
    let catalog = if args.rescan {
        library.rescan()
    } else {
        library.load()
    };
    let resolver = Resolver::new(music.music_commands.clone());

    let utterance = args.utterance.join(" ");
    match resolver.resolve(&utterance, &catalog) {
        MatchDecision::Specific { entry, score } => {
            println!("specific\t{}\t{}", score, catalog.resolve_path(&entry).display());
        }
        MatchDecision::Generic => println!("generic\t{} tracks", catalog.len()),
        MatchDecision::NoMatch => println!("none"),
    }

    Ok(())
}
