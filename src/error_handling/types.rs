//! Error type definitions.
//!
//! This module defines the errors raised while resolving URLs, talking to the
//! peer and interpreting its response, plus initialization failures.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors that abort a page load.
///
/// Every variant is terminal: nothing is retried and no partial output is
/// produced.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL has no `scheme://` prefix, or the scheme is not http/https.
    #[error("Malformed URL (expected http:// or https://): {0}")]
    MalformedUrl(String),

    /// The `host:port` suffix is not a valid port number.
    #[error("Invalid port '{port}' in URL {url}")]
    InvalidPort {
        /// URL being resolved
        url: String,
        /// Text found after the colon
        port: String,
    },

    /// Status code other than 200, 301 or 302.
    #[error("{status}: {explanation}")]
    UnsupportedStatus {
        /// Status code as sent by the peer
        status: String,
        /// Reason phrase from the status line
        explanation: String,
    },

    /// A 301/302 response without a `location` header.
    #[error("{status} redirect from {url} has no location header")]
    MissingRedirectTarget {
        /// URL that answered with the redirect
        url: String,
        /// Redirect status code
        status: u16,
    },

    /// The redirect chain is longer than the configured bound.
    #[error("Too many redirects (more than {limit}) while loading {url}")]
    TooManyRedirects {
        /// URL the chain started from
        url: String,
        /// Configured redirect bound
        limit: usize,
    },

    /// The host cannot be used as a TLS server name.
    #[error("Invalid TLS server name '{0}'")]
    InvalidServerName(String),

    /// A relative redirect target could not be joined onto the current URL.
    #[error("Cannot resolve redirect target '{location}' against {base}")]
    RelativeRedirect {
        /// URL that answered with the redirect
        base: String,
        /// Raw `location` header value
        location: String,
    },

    /// Socket or TLS failure (connect, handshake, read or write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Short, stable label for the error category, used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchError::MalformedUrl(_) => "malformed URL",
            FetchError::InvalidPort { .. } => "invalid port",
            FetchError::UnsupportedStatus { .. } => "unsupported status",
            FetchError::MissingRedirectTarget { .. } => "missing redirect target",
            FetchError::TooManyRedirects { .. } => "too many redirects",
            FetchError::InvalidServerName(_) => "invalid server name",
            FetchError::RelativeRedirect { .. } => "relative redirect",
            FetchError::Io(_) => "transport error",
        }
    }
}
