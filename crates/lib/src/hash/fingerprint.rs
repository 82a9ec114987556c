//! Fingerprint derivation.
//!
//! The fingerprint walks the digest as a flat sequence of 32 nibbles. For each
//! entry of the constant tables it reads one nibble, uses it (plus an addend) as
//! the position of an 8-bit window, multiplies that window, and keeps the low
//! nibble of the result. The five kept nibbles are then packed into bytes and
//! rendered as hex.
//!
//! The output has to match the service bit for bit. Known vectors are pinned in
//! the tests below; any change to them breaks every lookup.

use std::fmt;

use thiserror::Error;

use crate::consts::{DIGEST_LEN, NIBBLE_ADDEND, NIBBLE_INDEX, NIBBLE_MULTIPLIER};

const LOW_NIBBLE: u8 = 0x0f;
const HIGH_NIBBLE: u8 = 0xf0;

/// Errors that can occur while deriving a fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FingerprintError {
  /// The digest is not exactly 16 bytes long.
  #[error("digest must be 16 bytes, got {0}")]
  InvalidDigestLength(usize),

  /// A nibble or window read would fall past the end of the digest.
  #[error("byte index {index} out of range for {len}-byte digest")]
  IndexOutOfRange { index: usize, len: usize },
}

/// Lookup key derived from a [`Digest`](super::Digest), sent as the `t` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Fingerprint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Derive the fingerprint of a 16-byte digest.
///
/// # Errors
///
/// - [`FingerprintError::InvalidDigestLength`] if `digest` is not 16 bytes. No
///   nibble is read in that case.
/// - [`FingerprintError::IndexOutOfRange`] if the walk reaches past the last byte.
///   This happens when the high nibble of byte 3 is `0xf`: the window position is
///   then 31, which straddles byte 15 and a byte 16 that does not exist.
///
/// # Example
///
/// ```
/// use napisy_lib::hash::encode_fingerprint;
///
/// // MD5 of the empty input.
/// let digest = [
///   0xd4, 0x1d, 0x8c, 0xd9, 0x8f, 0x00, 0xb2, 0x04,
///   0xe9, 0x80, 0x09, 0x98, 0xec, 0xf8, 0x42, 0x7e,
/// ];
/// assert_eq!(encode_fingerprint(&digest).unwrap().as_str(), "0030b");
/// ```
pub fn encode_fingerprint(digest: &[u8]) -> Result<Fingerprint, FingerprintError> {
  if digest.len() != DIGEST_LEN {
    return Err(FingerprintError::InvalidDigestLength(digest.len()));
  }

  let mut nibbles = [0u8; NIBBLE_INDEX.len()];
  for (i, slot) in nibbles.iter_mut().enumerate() {
    let t = NIBBLE_ADDEND[i] + read_nibble(digest, NIBBLE_INDEX[i])?;
    let product = read_combined(digest, t)? * NIBBLE_MULTIPLIER[i];
    *slot = product.to_be_bytes()[1] & LOW_NIBBLE;
  }

  Ok(Fingerprint(pack(&nibbles)))
}

/// Read nibble `k` of `digest`: the high half of byte `k / 2` for even `k`, the low
/// half for odd `k`.
pub fn read_nibble(digest: &[u8], k: u16) -> Result<u16, FingerprintError> {
  let byte = byte_at(digest, usize::from(k / 2))?;
  let nibble = if k % 2 == 0 {
    (byte & HIGH_NIBBLE) >> 4
  } else {
    byte & LOW_NIBBLE
  };
  Ok(u16::from(nibble))
}

/// Read the 8 bits starting at nibble `t` of `digest`.
///
/// For even `t` this is byte `t / 2`. For odd `t` the window straddles two bytes:
/// the low nibble of byte `t / 2` becomes the high half and the high nibble of the
/// following byte becomes the low half.
pub fn read_combined(digest: &[u8], t: u16) -> Result<u16, FingerprintError> {
  let pos = usize::from(t / 2);
  let byte = byte_at(digest, pos)?;
  if t % 2 == 0 {
    return Ok(u16::from(byte));
  }

  let next = byte_at(digest, pos + 1)?;
  Ok(u16::from(((byte & LOW_NIBBLE) << 4) | ((next & HIGH_NIBBLE) >> 4)))
}

/// Pack nibble values into bytes and render them as hex.
///
/// Values are consumed from last to first, two per byte, filling a buffer of
/// `(len + 1) / 2` zeroed bytes from the end. With an odd count the first value
/// never gets a partner and is dropped. The first hex character of the buffer is
/// dropped as well, so five values render as five characters with a leading `0`.
pub fn pack(nibbles: &[u8]) -> String {
  let mut out = vec![0u8; nibbles.len().div_ceil(2)];
  let mut slot = out.len();
  let mut acc = 0u8;
  let mut pending = false;

  for &value in nibbles.iter().rev() {
    let v = value & LOW_NIBBLE;
    if !pending {
      acc = v;
      pending = true;
    } else {
      acc |= v << 4;
      slot -= 1;
      out[slot] = acc;
      pending = false;
    }
  }

  let encoded = hex::encode(out);
  encoded.get(1..).unwrap_or_default().to_string()
}

fn byte_at(digest: &[u8], index: usize) -> Result<u8, FingerprintError> {
  digest
    .get(index)
    .copied()
    .ok_or(FingerprintError::IndexOutOfRange {
      index,
      len: digest.len(),
    })
}
