use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use napisy_lib::consts::DEFAULT_LANGUAGE;

mod cmd;

use cmd::{cmd_download, cmd_hash, cmd_search};

/// napisy - Subtitle downloader for Napiprojekt
#[derive(Parser)]
#[command(name = "napisy")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Download subtitles and save them next to each video
  Download {
    /// Language to download. If missing on the server, Polish is returned instead
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Total timeout per request (e.g. 30s, 2m)
    #[arg(long, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    /// Video files
    #[arg(required = true)]
    files: Vec<PathBuf>,
  },

  /// Check which languages have subtitles for each video
  Search {
    /// Languages to check (repeatable)
    #[arg(short, long = "language", default_value = DEFAULT_LANGUAGE)]
    languages: Vec<String>,

    /// Also download and save available subtitles
    #[arg(short, long)]
    download: bool,

    /// Total timeout per request (e.g. 30s, 2m)
    #[arg(long, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    /// Video files
    #[arg(required = true)]
    files: Vec<PathBuf>,
  },

  /// Print the lookup fingerprint and MD5 of each video without querying the service
  Hash {
    /// Video files
    #[arg(required = true)]
    files: Vec<PathBuf>,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Download {
      language,
      timeout,
      files,
    } => cmd_download(&files, &language, timeout),
    Commands::Search {
      languages,
      download,
      timeout,
      files,
    } => cmd_search(&files, &languages, download, timeout),
    Commands::Hash { files } => cmd_hash(&files),
  }
}
