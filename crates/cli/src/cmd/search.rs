//! Implementation of the `napisy search` command.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use napisy_lib::subtitles;
use owo_colors::{OwoColorize, Stream};

use super::{client, for_each_file};

/// Execute the search command.
///
/// Prints one line per file and language. With `download`, subtitles in every
/// available language are saved next to the video; later languages overwrite
/// earlier ones because the file name does not include the language.
pub fn cmd_search(
  files: &[PathBuf],
  languages: &[String],
  download: bool,
  timeout: Option<Duration>,
) -> Result<()> {
  let client = client(timeout)?;

  for_each_file(files, |file: &Path| {
    let results = client
      .search(file, languages, download)
      .with_context(|| format!("failed to search subtitles for \"{}\"", file.display()))?;

    for result in results {
      let status = if result.available {
        "available".if_supports_color(Stream::Stdout, |t| t.green()).to_string()
      } else {
        "not found".if_supports_color(Stream::Stdout, |t| t.yellow()).to_string()
      };
      println!("{}  {}  {}", file.display(), result.lang, status);

      if let Some(subs) = result.subtitles {
        let saved = subtitles::save(file, &subs)
          .with_context(|| format!("failed to save subtitles for \"{}\"", file.display()))?;
        println!("Saving subtitles to: {}", saved.display());
      }
    }
    Ok(())
  })
}
