//! Video identification for the lookup service.
//!
//! A video is identified by two values computed from its leading bytes:
//!
//! - [`Digest`]: the MD5 of at most [`HASH_READ_SIZE`] bytes from the start of the
//!   file, rendered as 32 lowercase hex characters.
//! - [`Fingerprint`]: a short key derived from the digest by
//!   [`encode_fingerprint`].
//!
//! Neither value is a security property. They only have to match what the
//! service computed for the same file.

mod fingerprint;

pub use fingerprint::*;

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use md5::{Digest as _, Md5};
use thiserror::Error;

use crate::consts::{DIGEST_LEN, HASH_READ_SIZE};

/// Errors that can occur while reading a video to compute its digest.
#[derive(Debug, Error)]
pub enum DigestError {
  /// The file could not be opened or read.
  #[error("failed to read '{}': {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// MD5 digest of a video's leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
  pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
    &self.0
  }

  /// Lowercase hex rendering with no separator, as sent in the `f` parameter.
  pub fn to_hex(&self) -> String {
    hex::encode(self.0)
  }

  /// Derive the lookup key for this digest.
  ///
  /// # Errors
  ///
  /// Returns [`FingerprintError::IndexOutOfRange`] for the digests whose nibble
  /// walk runs past the last byte.
  pub fn fingerprint(&self) -> Result<Fingerprint, FingerprintError> {
    encode_fingerprint(&self.0)
  }
}

impl fmt::Display for Digest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_hex())
  }
}

impl TryFrom<&[u8]> for Digest {
  type Error = FingerprintError;

  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    let bytes: [u8; DIGEST_LEN] = bytes
      .try_into()
      .map_err(|_| FingerprintError::InvalidDigestLength(bytes.len()))?;
    Ok(Digest(bytes))
  }
}

/// Compute the digest of the file at `path`.
///
/// At most [`HASH_READ_SIZE`] bytes are read from the start of the file. A shorter
/// file is hashed over exactly the bytes it contains, so an empty file yields the
/// MD5 of the empty input.
///
/// # Errors
///
/// Returns [`DigestError::Io`] if the file cannot be opened or a read fails.
pub fn extract_digest(path: &Path) -> Result<Digest, DigestError> {
  let io_err = |source| DigestError::Io {
    path: path.to_path_buf(),
    source,
  };

  let file = File::open(path).map_err(io_err)?;
  digest_reader(file).map_err(io_err)
}

/// Compute the digest of the first [`HASH_READ_SIZE`] bytes produced by `reader`.
pub fn digest_reader<R: Read>(reader: R) -> io::Result<Digest> {
  let mut hasher = Md5::new();
  io::copy(&mut reader.take(HASH_READ_SIZE), &mut hasher)?;
  Ok(Digest(hasher.finalize().into()))
}
