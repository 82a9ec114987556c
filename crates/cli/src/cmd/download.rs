//! Implementation of the `napisy download` command.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use napisy_lib::subtitles;

use super::{client, for_each_file};

/// Execute the download command.
///
/// Downloads subtitles in `language` for each file and saves them next to the
/// video with a `.txt` extension. A failing file is reported and the remaining
/// files are still processed.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or any file failed.
pub fn cmd_download(files: &[PathBuf], language: &str, timeout: Option<Duration>) -> Result<()> {
  let client = client(timeout)?;

  for_each_file(files, |file: &Path| {
    println!("Downloading subtitles for \"{}\"...", file.display());

    let subs = client
      .download(file, language)
      .with_context(|| format!("failed to download subtitles for \"{}\"", file.display()))?;
    let saved = subtitles::save(file, &subs)
      .with_context(|| format!("failed to save subtitles for \"{}\"", file.display()))?;

    println!("Saving subtitles to: {}", saved.display());
    Ok(())
  })
}
