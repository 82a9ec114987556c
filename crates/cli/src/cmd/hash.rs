//! Implementation of the `napisy hash` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use napisy_lib::hash::extract_digest;

use super::for_each_file;

/// Execute the hash command.
///
/// Prints `<fingerprint>  <md5>  <file>` for each file. No request is made.
pub fn cmd_hash(files: &[PathBuf]) -> Result<()> {
  for_each_file(files, |file: &Path| {
    let digest = extract_digest(file)?;
    let fingerprint = digest
      .fingerprint()
      .with_context(|| format!("failed to fingerprint \"{}\"", file.display()))?;

    println!("{}  {}  {}", fingerprint, digest, file.display());
    Ok(())
  })
}
