//! Configuration constants.
//!
//! Protocol literals and defaults shared by the URL resolver, the request
//! engine and the CLI.

/// Maximum number of redirects followed before giving up.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Separator between the scheme and the rest of a URL.
pub const SCHEME_SEPARATOR: &str = "://";

/// Default port for `http://` URLs.
pub const HTTP_DEFAULT_PORT: u16 = 80;
/// Default port for `https://` URLs.
pub const HTTPS_DEFAULT_PORT: u16 = 443;

/// Protocol version sent on the request line.
pub const HTTP_VERSION: &str = "HTTP/1.0";

/// Line terminator used on the wire, both for requests and responses.
pub const CRLF: &str = "\r\n";

// Status codes are compared as strings, exactly as they appear on the status line.
/// 200 OK
pub const HTTP_STATUS_OK: &str = "200";
/// 301 Moved Permanently
pub const HTTP_STATUS_MOVED_PERMANENTLY: &str = "301";
/// 302 Found
pub const HTTP_STATUS_FOUND: &str = "302";

/// Header carrying the redirect target (keys are stored lowercased).
pub const HEADER_LOCATION: &str = "location";

/// Initial capacity of the response accumulation buffer.
pub const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Default User-Agent string for requests.
///
/// Follows the `Mozilla/5.0 (<platform>)` shape, with the platform taken from
/// the OS the binary was compiled for (e.g. `Mozilla/5.0 (linux)`).
pub fn default_user_agent() -> String {
    format!("Mozilla/5.0 ({})", std::env::consts::OS)
}
