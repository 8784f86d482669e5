//! HTTP response parsing.

use std::collections::HashMap;

use crate::config::{
    CRLF, HEADER_LOCATION, HTTP_STATUS_FOUND, HTTP_STATUS_MOVED_PERMANENTLY, HTTP_STATUS_OK,
};
use crate::error_handling::FetchError;

/// A parsed HTTP/1.0 response.
///
/// Only 200, 301 and 302 responses can be constructed; anything else is
/// rejected by [`HttpResponse::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// 200, 301 or 302
    pub status_code: u16,
    /// Reason phrase from the status line (may be empty)
    pub status_text: String,
    /// Header map keyed by lowercase name; the last duplicate wins
    pub headers: HashMap<String, String>,
    /// Everything after the first blank line
    pub body: String,
}

impl HttpResponse {
    /// Parses the complete response text read from the transport.
    ///
    /// The status line is split on single spaces: the second field is the
    /// status code and the remaining fields, rejoined with spaces, are the
    /// reason phrase. Header lines are split on the first `:`; a line with no
    /// colon becomes a header with an empty value.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::UnsupportedStatus` unless the status code is
    /// exactly `200`, `301` or `302`.
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let mut lines = raw.split(CRLF);

        let status_line = lines.next().unwrap_or_default();
        let mut fields = status_line.split(' ');
        let _version = fields.next();
        let status = fields.next().unwrap_or_default();
        let status_text = fields.collect::<Vec<_>>().join(" ");

        let status_code = match status {
            HTTP_STATUS_OK => 200,
            HTTP_STATUS_MOVED_PERMANENTLY => 301,
            HTTP_STATUS_FOUND => 302,
            _ => {
                return Err(FetchError::UnsupportedStatus {
                    status: status.to_string(),
                    explanation: status_text,
                })
            }
        };

        let mut headers = HashMap::new();
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }
            let (name, value) = line.split_once(':').unwrap_or((line, ""));
            headers.insert(name.trim().to_lowercase(), value.trim().to_string());
        }

        let body = lines.collect::<Vec<_>>().join(CRLF);

        Ok(Self {
            status_code,
            status_text,
            headers,
            body,
        })
    }

    /// Whether this is a 301 or 302 response.
    pub fn is_redirect(&self) -> bool {
        matches!(self.status_code, 301 | 302)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// The redirect target, if the peer sent a non-empty one.
    pub fn location(&self) -> Option<&str> {
        self.header(HEADER_LOCATION).filter(|l| !l.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok_response() {
        let raw = "HTTP/1.0 200 OK\r\nContent-Type: text/html\r\nServer: test\r\n\r\n<body>hi</body>";
        let response = HttpResponse::parse(raw).unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.status_text, "OK");
        assert_eq!(response.header("content-type"), Some("text/html"));
        assert_eq!(response.header("Server"), Some("test"));
        assert_eq!(response.body, "<body>hi</body>");
        assert!(!response.is_redirect());
    }

    #[test]
    fn test_parse_multiword_explanation() {
        let raw = "HTTP/1.0 301 Moved Permanently\r\nLocation: http://example.org/\r\n\r\n";
        let response = HttpResponse::parse(raw).unwrap();
        assert_eq!(response.status_code, 301);
        assert_eq!(response.status_text, "Moved Permanently");
        assert!(response.is_redirect());
        assert_eq!(response.location(), Some("http://example.org/"));
    }

    #[test]
    fn test_parse_duplicate_headers_last_wins_case_insensitively() {
        let raw = "HTTP/1.0 200 OK\r\nX-Thing: first\r\nx-thing: second\r\nX-THING:  third  \r\n\r\n";
        let response = HttpResponse::parse(raw).unwrap();
        assert_eq!(response.headers.len(), 1);
        assert_eq!(response.headers.get("x-thing").map(String::as_str), Some("third"));
    }

    #[test]
    fn test_parse_header_value_keeps_later_colons() {
        let raw = "HTTP/1.0 302 Found\r\nLocation: https://example.com:8443/next\r\n\r\n";
        let response = HttpResponse::parse(raw).unwrap();
        assert_eq!(response.location(), Some("https://example.com:8443/next"));
    }

    #[test]
    fn test_parse_header_without_colon_has_empty_value() {
        let raw = "HTTP/1.0 200 OK\r\nWeird-Line\r\n\r\nbody";
        let response = HttpResponse::parse(raw).unwrap();
        assert_eq!(response.header("weird-line"), Some(""));
    }

    #[test]
    fn test_parse_body_keeps_crlf_lines() {
        let raw = "HTTP/1.0 200 OK\r\n\r\nline one\r\n\r\nline three";
        let response = HttpResponse::parse(raw).unwrap();
        assert!(response.headers.is_empty());
        assert_eq!(response.body, "line one\r\n\r\nline three");
    }

    #[test]
    fn test_parse_without_blank_line_has_empty_body() {
        let response = HttpResponse::parse("HTTP/1.0 200 OK\r\nA: b").unwrap();
        assert_eq!(response.header("a"), Some("b"));
        assert_eq!(response.body, "");
    }

    #[test]
    fn test_blank_location_is_no_location() {
        let response = HttpResponse::parse("HTTP/1.0 302 Found\r\nLocation:   \r\n\r\n").unwrap();
        assert_eq!(response.header("location"), Some(""));
        assert_eq!(response.location(), None);
    }

    #[test]
    fn test_parse_404_is_unsupported() {
        let raw = "HTTP/1.0 404 Not Found\r\nContent-Type: text/html\r\n\r\n<body>missing</body>";
        match HttpResponse::parse(raw) {
            Err(FetchError::UnsupportedStatus {
                status,
                explanation,
            }) => {
                assert_eq!(status, "404");
                assert_eq!(explanation, "Not Found");
            }
            other => panic!("expected UnsupportedStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_status_is_string_compared() {
        // Numerically equal, textually different
        for raw in ["HTTP/1.0 0200 OK\r\n\r\n", "HTTP/1.0 200.0 OK\r\n\r\n", "HTTP/1.0 303 See Other\r\n\r\n"] {
            assert!(matches!(
                HttpResponse::parse(raw),
                Err(FetchError::UnsupportedStatus { .. })
            ));
        }
    }

    #[test]
    fn test_parse_empty_response_is_unsupported() {
        match HttpResponse::parse("") {
            Err(FetchError::UnsupportedStatus { status, .. }) => assert_eq!(status, ""),
            other => panic!("expected UnsupportedStatus, got {other:?}"),
        }
    }
}
