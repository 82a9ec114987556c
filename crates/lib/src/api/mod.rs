//! Client for the Napiprojekt subtitle service.
//!
//! Two endpoints are used:
//!
//! - search (`GET`): answers `NPc0` when no subtitles exist for the video and
//!   language, anything else when they do.
//! - download (`POST` form): returns the subtitles as base64 inside an XML body.
//!
//! Requests are made one at a time on a blocking client. Nothing is retried or
//! cached here; callers decide what to do with a failure.

mod config;
mod response;

pub use config::ClientConfig;
pub use response::decode_download;

use std::path::Path;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::consts::{APP_NAME, CLIENT_NAME, CLIENT_VERSION, NOT_FOUND_MARKER};
use crate::hash::{DigestError, FingerprintError, extract_digest};

/// Errors that can occur while talking to the subtitle service.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Digest(#[from] DigestError),

  #[error("failed to compute fingerprint: {0}")]
  Fingerprint(#[from] FingerprintError),

  #[error("request failed: {0}")]
  Http(#[from] reqwest::Error),

  /// The service answered with a non-success HTTP status.
  #[error("unexpected HTTP status {0} from {1}")]
  Status(StatusCode, String),

  #[error("invalid response: {0}")]
  Xml(#[from] quick_xml::DeError),

  #[error("invalid subtitle encoding: {0}")]
  Base64(#[from] base64::DecodeError),

  /// The service has no subtitles for the requested video and language.
  #[error("subtitles not found")]
  SubtitlesNotFound,
}

/// Availability of subtitles in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
  /// Language code as it was requested.
  pub lang: String,
  /// Whether the service has subtitles in this language.
  pub available: bool,
  /// Raw subtitle bytes, present only when downloading was requested and the
  /// language is available.
  pub subtitles: Option<Vec<u8>>,
}

/// Blocking client for the subtitle service.
#[derive(Debug, Clone)]
pub struct NapiClient {
  http: Client,
  config: ClientConfig,
}

impl NapiClient {
  /// Build a client with the connection limits in `config`.
  pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
    let http = Client::builder()
      .user_agent(format!("{APP_NAME}/{}", env!("CARGO_PKG_VERSION")))
      .connect_timeout(config.connect_timeout)
      .timeout(config.timeout)
      .pool_idle_timeout(config.pool_idle_timeout)
      .pool_max_idle_per_host(config.pool_max_idle_per_host)
      .tcp_keepalive(config.tcp_keepalive)
      .build()?;
    Ok(Self { http, config })
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// Check which of `langs` have subtitles for the video at `path`.
  ///
  /// One [`SearchResult`] is returned per language, in the order given. When
  /// `download` is set, available subtitles are fetched as well.
  ///
  /// # Errors
  ///
  /// Fails on the first language whose request fails. Results for earlier
  /// languages are discarded.
  pub fn search(&self, path: &Path, langs: &[String], download: bool) -> Result<Vec<SearchResult>, ApiError> {
    let digest = extract_digest(path)?;
    let fingerprint = digest.fingerprint()?;
    let hash = digest.to_hex();

    let mut results = Vec::with_capacity(langs.len());
    for lang in langs {
      let query = [
        ("f", hash.as_str()),
        ("t", fingerprint.as_str()),
        ("v", "other"),
        ("kolejka", "false"),
        ("nick", ""),
        ("pass", ""),
        ("napios", std::env::consts::OS),
        ("l", lang.as_str()),
      ];
      debug!(url = %self.config.search_url, lang = %lang, hash = %hash, "searching subtitles");

      let response = self.http.get(&self.config.search_url).query(&query).send()?;
      let body = check_status(response, &self.config.search_url)?.text()?;
      let available = body.trim() != NOT_FOUND_MARKER;
      info!(path = %path.display(), lang = %lang, available, "search finished");

      let subtitles = if available && download {
        Some(self.download_by_hash(&hash, lang)?)
      } else {
        None
      };

      results.push(SearchResult {
        lang: lang.clone(),
        available,
        subtitles,
      });
    }

    Ok(results)
  }

  /// Download subtitles in `lang` for the video at `path`.
  ///
  /// When no subtitles exist in `lang` the service may answer with Polish ones
  /// instead.
  pub fn download(&self, path: &Path, lang: &str) -> Result<Vec<u8>, ApiError> {
    let digest = extract_digest(path)?;
    self.download_by_hash(&digest.to_hex(), lang)
  }

  /// Download subtitles in `lang` for the video whose digest renders as `hash`.
  pub fn download_by_hash(&self, hash: &str, lang: &str) -> Result<Vec<u8>, ApiError> {
    let form = [
      ("downloaded_subtitles_lang", lang),
      ("downloaded_subtitles_txt", "1"),
      ("client_ver", CLIENT_VERSION),
      ("downloaded_subtitles_id", hash),
      ("client", CLIENT_NAME),
      ("mode", "1"),
    ];
    debug!(url = %self.config.download_url, lang = %lang, hash = %hash, "downloading subtitles");

    let response = self.http.post(&self.config.download_url).form(&form).send()?;
    let body = check_status(response, &self.config.download_url)?.text()?;
    let subtitles = decode_download(&body)?;

    info!(lang = %lang, hash = %hash, bytes = subtitles.len(), "subtitles downloaded");
    Ok(subtitles)
  }
}

fn check_status(
  response: reqwest::blocking::Response,
  url: &str,
) -> Result<reqwest::blocking::Response, ApiError> {
  let status = response.status();
  if !status.is_success() {
    return Err(ApiError::Status(status, url.to_string()));
  }
  Ok(response)
}
