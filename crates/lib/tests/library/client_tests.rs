//! Service client tests against a mock server.

use mockito::Server;
use napisy_lib::api::{ApiError, ClientConfig, NapiClient};
use napisy_lib::hash::DigestError;

use super::common::{VIDEO_CONTENT, VIDEO_HASH, Video, client_for, download_form, search_query, success_body};

mod download {
  use super::*;

  #[test]
  fn returns_decoded_subtitles() {
    let mut server = Server::new();
    let mock = server
      .mock("POST", "/download")
      .match_body(download_form("ENG"))
      .with_body(success_body("MDAwOjAxOjAwOkhlbGxv"))
      .create();

    let video = Video::with_content(VIDEO_CONTENT);
    let subtitles = client_for(&server).download(&video.path, "ENG").unwrap();

    assert_eq!(subtitles, b"000:01:00:Hello");
    mock.assert();
  }

  #[test]
  fn by_hash_skips_file() {
    let mut server = Server::new();
    let mock = server
      .mock("POST", "/download")
      .match_body(download_form("PL"))
      .with_body(success_body("SGVsbG8="))
      .create();

    let subtitles = client_for(&server).download_by_hash(VIDEO_HASH, "PL").unwrap();

    assert_eq!(subtitles, b"Hello");
    mock.assert();
  }

  #[test]
  fn failed_status_is_not_found() {
    let mut server = Server::new();
    server
      .mock("POST", "/download")
      .with_body("<result><status>fail</status></result>")
      .create();

    let video = Video::with_content(VIDEO_CONTENT);
    let result = client_for(&server).download(&video.path, "ENG");

    assert!(matches!(result, Err(ApiError::SubtitlesNotFound)));
  }

  #[test]
  fn http_error_status() {
    let mut server = Server::new();
    server.mock("POST", "/download").with_status(503).create();

    let video = Video::with_content(VIDEO_CONTENT);
    let result = client_for(&server).download(&video.path, "ENG");

    match result {
      Err(ApiError::Status(status, url)) => {
        assert_eq!(status.as_u16(), 503);
        assert!(url.ends_with("/download"), "unexpected url {url}");
      }
      other => panic!("expected status error, got {other:?}"),
    }
  }

  #[test]
  fn missing_video_fails_before_request() {
    let mut server = Server::new();
    let mock = server.mock("POST", "/download").expect(0).create();

    let video = Video::with_content(VIDEO_CONTENT);
    let missing = video.dir.path().join("missing.avi");
    let result = client_for(&server).download(&missing, "ENG");

    assert!(matches!(result, Err(ApiError::Digest(DigestError::Io { .. }))));
    mock.assert();
  }
}

mod search {
  use super::*;

  #[test]
  fn reports_availability_per_language() {
    let mut server = Server::new();
    let eng = server
      .mock("GET", "/search")
      .match_query(search_query("ENG"))
      .with_body("NPc0")
      .create();
    let pl = server
      .mock("GET", "/search")
      .match_query(search_query("PL"))
      .with_body("NPc3")
      .create();

    let video = Video::with_content(VIDEO_CONTENT);
    let langs = vec!["ENG".to_string(), "PL".to_string()];
    let results = client_for(&server).search(&video.path, &langs, false).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].lang, "ENG");
    assert!(!results[0].available);
    assert_eq!(results[1].lang, "PL");
    assert!(results[1].available);
    assert!(results.iter().all(|r| r.subtitles.is_none()));
    eng.assert();
    pl.assert();
  }

  #[test]
  fn downloads_only_available_languages() {
    let mut server = Server::new();
    server
      .mock("GET", "/search")
      .match_query(search_query("ENG"))
      .with_body("NPc0")
      .create();
    server
      .mock("GET", "/search")
      .match_query(search_query("PL"))
      .with_body("NPc3")
      .create();
    let download = server
      .mock("POST", "/download")
      .match_body(download_form("PL"))
      .with_body(success_body("SGVsbG8="))
      .expect(1)
      .create();

    let video = Video::with_content(VIDEO_CONTENT);
    let langs = vec!["ENG".to_string(), "PL".to_string()];
    let results = client_for(&server).search(&video.path, &langs, true).unwrap();

    assert_eq!(results[0].subtitles, None);
    assert_eq!(results[1].subtitles.as_deref(), Some(&b"Hello"[..]));
    download.assert();
  }

  #[test]
  fn no_languages_makes_no_requests() {
    let mut server = Server::new();
    let mock = server.mock("GET", "/search").expect(0).create();

    let video = Video::with_content(VIDEO_CONTENT);
    let results = client_for(&server).search(&video.path, &[], false).unwrap();

    assert!(results.is_empty());
    mock.assert();
  }

  #[test]
  fn unfingerprintable_video_fails_before_request() {
    // The digest of this content has 0xf as the high nibble of byte 3.
    let mut server = Server::new();
    let mock = server.mock("GET", "/search").expect(0).create();

    let content = find_out_of_range_content();
    let video = Video::with_content(&content);
    let result = client_for(&server).search(&video.path, &["ENG".to_string()], false);

    assert!(matches!(result, Err(ApiError::Fingerprint(_))));
    mock.assert();
  }

  fn find_out_of_range_content() -> Vec<u8> {
    use std::io::Cursor;

    (0u32..)
      .map(|i| i.to_le_bytes().to_vec())
      .find(|content| {
        let digest = napisy_lib::hash::digest_reader(Cursor::new(content.as_slice())).unwrap();
        digest.as_bytes()[3] >> 4 == 0xf
      })
      .unwrap()
  }
}

#[test]
fn client_keeps_config() {
  let config = ClientConfig::default().with_base_url("http://127.0.0.1:9");
  let client = NapiClient::new(config.clone()).unwrap();
  assert_eq!(client.config(), &config);
}
