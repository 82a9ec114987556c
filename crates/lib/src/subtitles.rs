//! Subtitle file naming and writing.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

const SUBTITLE_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum SubtitlesError {
  /// The video path has no extension to replace.
  #[error("incorrect file name '{}', no extension", .0.display())]
  MissingExtension(PathBuf),

  #[error("failed to write subtitles to '{}': {source}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Name of the subtitle file for a video: the final extension replaced by `.txt`.
///
/// Only the last extension is replaced, so `show.s01e02.mkv` becomes
/// `show.s01e02.txt`.
///
/// # Errors
///
/// Returns [`SubtitlesError::MissingExtension`] if `video` has no extension.
pub fn sub_file_name(video: &Path) -> Result<PathBuf, SubtitlesError> {
  if video.extension().is_none() {
    return Err(SubtitlesError::MissingExtension(video.to_path_buf()));
  }
  Ok(video.with_extension(SUBTITLE_EXTENSION))
}

/// Write `subtitles` next to `video` and return the path written.
pub fn save(video: &Path, subtitles: &[u8]) -> Result<PathBuf, SubtitlesError> {
  let path = sub_file_name(video)?;
  info!(path = %path.display(), bytes = subtitles.len(), "writing subtitles");

  std::fs::write(&path, subtitles).map_err(|source| SubtitlesError::Write {
    path: path.clone(),
    source,
  })?;

  Ok(path)
}
