pub const APP_NAME: &str = "napisy";

/// Number of bytes read from the start of a video to compute its digest.
pub const HASH_READ_SIZE: u64 = 10_485_760;

/// Length in bytes of an MD5 digest.
pub const DIGEST_LEN: usize = 16;

/// Nibble positions read from the digest, one per fingerprint character.
///
/// These three tables are co-indexed and fixed by the service protocol.
/// Changing any value changes every fingerprint.
pub const NIBBLE_INDEX: [u16; 5] = [0xe, 0x3, 0x6, 0x8, 0x2];
pub const NIBBLE_MULTIPLIER: [u16; 5] = [2, 2, 5, 4, 3];
pub const NIBBLE_ADDEND: [u16; 5] = [0, 0xd, 0x10, 0xb, 0x5];

pub const DEFAULT_SEARCH_URL: &str = "http://napiprojekt.pl/unit_napisy/dl.php";
pub const DEFAULT_DOWNLOAD_URL: &str = "http://napiprojekt.pl/api/api-napiprojekt3.php";

/// Environment variable overriding [`DEFAULT_SEARCH_URL`].
pub const SEARCH_URL_ENV: &str = "NAPISY_SEARCH_URL";
/// Environment variable overriding [`DEFAULT_DOWNLOAD_URL`].
pub const DOWNLOAD_URL_ENV: &str = "NAPISY_DOWNLOAD_URL";

/// Client name sent with downloads. The service rejects other values.
pub const CLIENT_NAME: &str = "NapiProjektPython";
pub const CLIENT_VERSION: &str = "0.1";

/// Search response body meaning no subtitles exist for the language.
pub const NOT_FOUND_MARKER: &str = "NPc0";

pub const DEFAULT_LANGUAGE: &str = "ENG";
