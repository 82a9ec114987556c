//! Client configuration.

use std::time::Duration;

use crate::consts::{DEFAULT_DOWNLOAD_URL, DEFAULT_SEARCH_URL, DOWNLOAD_URL_ENV, SEARCH_URL_ENV};

/// Endpoints and connection limits for [`NapiClient`](super::NapiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
  /// URL queried to check whether subtitles exist.
  pub search_url: String,
  /// URL the subtitle download form is posted to.
  pub download_url: String,
  /// Maximum time to establish a connection.
  pub connect_timeout: Duration,
  /// Maximum time for a whole request, including reading the body.
  pub timeout: Duration,
  /// How long an idle pooled connection is kept.
  pub pool_idle_timeout: Duration,
  /// TCP keepalive interval.
  pub tcp_keepalive: Duration,
  /// Maximum idle connections kept per host.
  pub pool_max_idle_per_host: usize,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      search_url: DEFAULT_SEARCH_URL.to_string(),
      download_url: DEFAULT_DOWNLOAD_URL.to_string(),
      connect_timeout: Duration::from_secs(30),
      timeout: Duration::from_secs(180),
      pool_idle_timeout: Duration::from_secs(90),
      tcp_keepalive: Duration::from_secs(30),
      pool_max_idle_per_host: 100,
    }
  }
}

impl ClientConfig {
  /// Defaults, with endpoints overridden by `NAPISY_SEARCH_URL` and
  /// `NAPISY_DOWNLOAD_URL` when set to a non-empty value.
  pub fn from_env() -> Self {
    let mut config = Self::default();
    if let Some(url) = env_url(SEARCH_URL_ENV) {
      config.search_url = url;
    }
    if let Some(url) = env_url(DOWNLOAD_URL_ENV) {
      config.download_url = url;
    }
    config
  }

  /// Point both endpoints at `base`, as `<base>/search` and `<base>/download`.
  pub fn with_base_url(mut self, base: &str) -> Self {
    let base = base.trim_end_matches('/');
    self.search_url = format!("{base}/search");
    self.download_url = format!("{base}/download");
    self
  }

  /// Set the total request timeout.
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }
}

fn env_url(var: &str) -> Option<String> {
  std::env::var(var).ok().filter(|v| !v.is_empty())
}
