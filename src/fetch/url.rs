//! URL resolution.
//!
//! Only the four pieces needed to open a connection and build a request line
//! are extracted: scheme, host, port and path. Query strings and fragments stay
//! part of the path, untouched.

use std::fmt;
use std::str::FromStr;

use strum_macros::{Display, EnumString};

use crate::config::{HTTPS_DEFAULT_PORT, HTTP_DEFAULT_PORT, SCHEME_SEPARATOR};
use crate::error_handling::FetchError;

/// Supported URL schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Scheme {
    /// Plain TCP
    Http,
    /// TLS over TCP
    Https,
}

impl Scheme {
    /// Port used when the URL does not name one.
    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => HTTP_DEFAULT_PORT,
            Scheme::Https => HTTPS_DEFAULT_PORT,
        }
    }
}

/// A URL split into the parts needed for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// `http` or `https`
    pub scheme: Scheme,
    /// Host name or address, also used as the TLS server name
    pub host: String,
    /// Explicit port, or the scheme default
    pub port: u16,
    /// Request path, always starting with `/`
    pub path: String,
}

impl ParsedUrl {
    /// Parses a URL string.
    ///
    /// # Errors
    ///
    /// - `FetchError::MalformedUrl` if there is no `scheme://` prefix or the
    ///   scheme is neither `http` nor `https`
    /// - `FetchError::InvalidPort` if the `host:port` suffix is not a valid port
    pub fn parse(url: &str) -> Result<Self, FetchError> {
        let (scheme, rest) = url
            .split_once(SCHEME_SEPARATOR)
            .ok_or_else(|| FetchError::MalformedUrl(url.to_string()))?;
        let scheme =
            Scheme::from_str(scheme).map_err(|_| FetchError::MalformedUrl(url.to_string()))?;

        let (authority, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, "/"),
        };

        let (host, port) = match authority.split_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|_| FetchError::InvalidPort {
                    url: url.to_string(),
                    port: port.to_string(),
                })?;
                (host, port)
            }
            None => (authority, scheme.default_port()),
        };

        Ok(Self {
            scheme,
            host: host.to_string(),
            port,
            path: path.to_string(),
        })
    }

    /// `host:port`, as used in connection log lines.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.port == self.scheme.default_port() {
            write!(f, "{}://{}{}", self.scheme, self.host, self.path)
        } else {
            write!(f, "{}://{}:{}{}", self.scheme, self.host, self.port, self.path)
        }
    }
}
