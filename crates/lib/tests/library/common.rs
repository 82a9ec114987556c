//! Shared test helpers for library integration tests.

use std::path::PathBuf;

use mockito::{Matcher, Server};
use napisy_lib::api::{ClientConfig, NapiClient};
use tempfile::TempDir;

/// A scratch video on disk plus the directory holding it.
pub struct Video {
  pub dir: TempDir,
  pub path: PathBuf,
}

impl Video {
  /// Create `movie.avi` with the given content.
  pub fn with_content(content: &[u8]) -> Self {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("movie.avi");
    std::fs::write(&path, content).expect("failed to write video");
    Self { dir, path }
  }
}

/// Content of the default test video.
pub const VIDEO_CONTENT: &[u8] = b"hello world";
/// MD5 of [`VIDEO_CONTENT`].
pub const VIDEO_HASH: &str = "5eb63bbbe01eeed093cb22bb8f5acdc3";
/// Fingerprint of [`VIDEO_HASH`].
pub const VIDEO_FINGERPRINT: &str = "04c49";

/// A client pointed at the mock server.
pub fn client_for(server: &Server) -> NapiClient {
  let config = ClientConfig::default().with_base_url(&server.url());
  NapiClient::new(config).expect("failed to build client")
}

/// Query matcher for a search request for [`VIDEO_CONTENT`] in `lang`.
pub fn search_query(lang: &str) -> Matcher {
  Matcher::AllOf(vec![
    Matcher::UrlEncoded("f".into(), VIDEO_HASH.into()),
    Matcher::UrlEncoded("t".into(), VIDEO_FINGERPRINT.into()),
    Matcher::UrlEncoded("v".into(), "other".into()),
    Matcher::UrlEncoded("kolejka".into(), "false".into()),
    Matcher::UrlEncoded("l".into(), lang.into()),
  ])
}

/// Form body matcher for a download request for [`VIDEO_CONTENT`] in `lang`.
pub fn download_form(lang: &str) -> Matcher {
  Matcher::AllOf(vec![
    Matcher::UrlEncoded("downloaded_subtitles_id".into(), VIDEO_HASH.into()),
    Matcher::UrlEncoded("downloaded_subtitles_lang".into(), lang.into()),
    Matcher::UrlEncoded("downloaded_subtitles_txt".into(), "1".into()),
    Matcher::UrlEncoded("client".into(), "NapiProjektPython".into()),
    Matcher::UrlEncoded("client_ver".into(), "0.1".into()),
    Matcher::UrlEncoded("mode".into(), "1".into()),
  ])
}

/// XML body of a successful download carrying `base64_content`.
pub fn success_body(base64_content: &str) -> String {
  format!(
    r#"<?xml version="1.0" encoding="UTF-8"?>
<result>
  <status>success</status>
  <subtitles>
    <id>{VIDEO_HASH}</id>
    <content><![CDATA[{base64_content}]]></content>
  </subtitles>
</result>"#
  )
}
