//! Download response decoding.
//!
//! The download endpoint answers with XML of the form:
//!
//! ```text
//! <result>
//!   <status>success</status>
//!   <subtitles>
//!     <id>…</id>
//!     <content><![CDATA[base64 subtitle text]]></content>
//!   </subtitles>
//! </result>
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use super::ApiError;

const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Deserialize)]
struct DownloadResponse {
  status: String,
  #[serde(default)]
  subtitles: Option<SubtitlesEntry>,
}

#[derive(Debug, Deserialize)]
struct SubtitlesEntry {
  #[serde(default)]
  id: Option<String>,
  #[serde(default)]
  content: String,
}

/// Decode a download response body into raw subtitle bytes.
///
/// # Errors
///
/// - [`ApiError::Xml`] if the body is not a well-formed response.
/// - [`ApiError::SubtitlesNotFound`] if the status is not `success` or the
///   subtitles element is missing.
/// - [`ApiError::Base64`] if the content is not valid base64.
pub fn decode_download(body: &str) -> Result<Vec<u8>, ApiError> {
  let response: DownloadResponse = quick_xml::de::from_str(body)?;
  if response.status.trim() != STATUS_SUCCESS {
    return Err(ApiError::SubtitlesNotFound);
  }

  let entry = response.subtitles.ok_or(ApiError::SubtitlesNotFound)?;
  tracing::debug!(id = ?entry.id, "decoding subtitles");

  let content: String = entry.content.split_whitespace().collect();
  Ok(STANDARD.decode(content)?)
}
