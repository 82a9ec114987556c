mod download;
mod hash;
mod search;

pub use download::cmd_download;
pub use hash::cmd_hash;
pub use search::cmd_search;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use napisy_lib::api::{ClientConfig, NapiClient};
use owo_colors::{OwoColorize, Stream};

/// Build a client from the environment, with an optional timeout override.
fn client(timeout: Option<Duration>) -> Result<NapiClient> {
  let mut config = ClientConfig::from_env();
  if let Some(timeout) = timeout {
    config = config.with_timeout(timeout);
  }
  NapiClient::new(config).context("Failed to create HTTP client")
}

/// Run `f` for every file, reporting failures without stopping.
///
/// Returns an error if any file failed.
fn for_each_file(files: &[PathBuf], mut f: impl FnMut(&Path) -> Result<()>) -> Result<()> {
  let mut failed = 0usize;
  for file in files {
    if let Err(err) = f(file.as_path()) {
      failed += 1;
      eprintln!(
        "{} {:#}",
        "error:".if_supports_color(Stream::Stderr, |t| t.red()),
        err
      );
    }
  }

  if failed > 0 {
    bail!("{failed} of {} file(s) failed", files.len());
  }
  Ok(())
}
