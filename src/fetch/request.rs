//! HTTP request building.
//!
//! Requests are always a bodiless `GET` with exactly three headers. The whole
//! request is rendered into one string and written in a single call.

use crate::config::{CRLF, HTTP_VERSION};

use super::url::ParsedUrl;

/// Headers sent with every request, in wire order.
///
/// `Connection: close` is what lets the response reader treat end-of-stream
/// as the end of the response.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Returns headers as (name, value) tuples for the given host.
    pub(crate) fn as_vec(host: &str, user_agent: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Host", host.to_string()),
            ("Connection", "close".to_string()),
            ("User-Agent", user_agent.to_string()),
        ]
    }
}

/// Renders the GET request for `url`.
///
/// # Examples
///
/// ```
/// use page_text::{build_request, ParsedUrl};
///
/// let url = ParsedUrl::parse("http://example.com/index.html").unwrap();
/// let request = build_request(&url, "Mozilla/5.0 (linux)");
/// assert!(request.starts_with("GET /index.html HTTP/1.0\r\n"));
/// assert!(request.ends_with("\r\n\r\n"));
/// ```
pub fn build_request(url: &ParsedUrl, user_agent: &str) -> String {
    let mut request = format!("GET {} {HTTP_VERSION}{CRLF}", url.path);
    for (name, value) in RequestHeaders::as_vec(&url.host, user_agent) {
        request.push_str(name);
        request.push_str(": ");
        request.push_str(&value);
        request.push_str(CRLF);
    }
    request.push_str(CRLF);
    request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_exact_bytes() {
        let url = ParsedUrl::parse("http://example.com/index.html").unwrap();
        let request = build_request(&url, "Mozilla/5.0 (linux)");
        assert_eq!(
            request,
            "GET /index.html HTTP/1.0\r\n\
             Host: example.com\r\n\
             Connection: close\r\n\
             User-Agent: Mozilla/5.0 (linux)\r\n\
             \r\n"
        );
    }

    #[test]
    fn test_build_request_host_excludes_port() {
        let url = ParsedUrl::parse("http://localhost:8080").unwrap();
        let request = build_request(&url, "ua");
        assert!(request.starts_with("GET / HTTP/1.0\r\n"));
        assert!(request.contains("\r\nHost: localhost\r\n"));
    }

    #[test]
    fn test_request_headers_order() {
        let names: Vec<_> = RequestHeaders::as_vec("h", "ua")
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["Host", "Connection", "User-Agent"]);
    }
}
