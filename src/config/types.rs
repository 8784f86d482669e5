//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{default_user_agent, MAX_REDIRECT_HOPS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which tag names open the body region during text extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum BodyMatch {
    /// Only a bare `<body>` tag opens the body
    #[default]
    Exact,
    /// `<body>` with attributes (`<body class="x">`) also opens the body
    AllowAttributes,
}

/// Client configuration.
///
/// Parsed from the command line by the binary, or built programmatically
/// through `Default` by library callers.
///
/// # Examples
///
/// ```no_run
/// use page_text::Config;
///
/// let config = Config {
///     url: "http://example.com/index.html".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "page_text",
    about = "Fetches a page over raw HTTP/1.0 and prints the text inside its <body>",
    long_about = None
)]
pub struct Config {
    /// URL to load (http:// or https://)
    pub url: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// HTTP User-Agent header value
    #[arg(long, default_value_t = default_user_agent())]
    pub user_agent: String,

    /// Maximum number of redirects to follow
    #[arg(long, default_value_t = MAX_REDIRECT_HOPS)]
    pub max_redirects: usize,

    /// How the opening body tag is recognized
    #[arg(long, value_enum, default_value_t = BodyMatch::Exact)]
    pub body_match: BodyMatch,

    /// Resolve relative `Location` headers against the current URL
    #[arg(long)]
    pub resolve_relative_redirects: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            user_agent: default_user_agent(),
            max_redirects: MAX_REDIRECT_HOPS,
            body_match: BodyMatch::Exact,
            resolve_relative_redirects: false,
        }
    }
}
