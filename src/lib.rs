//! page_text library: load a page over raw HTTP/1.0 and extract its text
//!
//! This library speaks HTTP/1.0 directly over a TCP or TLS socket, follows
//! 301/302 redirects with a bounded hop count, and strips markup from the final
//! body, keeping only the text between `<body>` and `</body>`.
//!
//! # Example
//!
//! ```no_run
//! use page_text::{load, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "http://example.com/".to_string(),
//!     ..Default::default()
//! };
//!
//! let text = load(&config).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod parse;

// Re-export public API
pub use config::{BodyMatch, Config, LogFormat, LogLevel};
pub use error_handling::{FetchError, InitializationError};
pub use fetch::{
    build_request, exchange, fetch, BoxedTransport, Connect, FetchOptions, FetchOutcome,
    HttpResponse, ParsedUrl, Scheme, SocketConnector, Transport,
};
pub use parse::{extract_body_text, tokenize, visible_text, Token};
pub use run::{load, load_with};

// Internal run module (ties the engine to the extractor)
mod run {
    use log::debug;

    use crate::config::Config;
    use crate::error_handling::FetchError;
    use crate::fetch::{fetch, Connect, FetchOptions, SocketConnector};
    use crate::parse::visible_text;

    /// Loads `config.url` over real sockets and returns its visible body text.
    ///
    /// # Errors
    ///
    /// Any `FetchError` from URL resolution, the transport or the redirect
    /// chain. Nothing is returned on failure; there is no partial output.
    pub async fn load(config: &Config) -> Result<String, FetchError> {
        load_with(&SocketConnector::new(), config).await
    }

    /// Same as [`load`], but opens transports through `connector`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use page_text::{load_with, Config, SocketConnector};
    ///
    /// # async fn example() -> Result<(), page_text::FetchError> {
    /// let config = Config {
    ///     url: "https://example.com/".to_string(),
    ///     ..Default::default()
    /// };
    /// let text = load_with(&SocketConnector::new(), &config).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load_with<C: Connect>(connector: &C, config: &Config) -> Result<String, FetchError> {
        let options = FetchOptions::from(config);
        let outcome = fetch(connector, &config.url, &options).await?;
        debug!(
            "Extracting text from {} ({} bytes)",
            outcome.final_url(),
            outcome.response.body.len()
        );
        Ok(visible_text(&outcome.response.body, config.body_match))
    }
}
