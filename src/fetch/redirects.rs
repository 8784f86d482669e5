//! Request/response engine with redirect following.
//!
//! Each hop parses its URL, opens a fresh transport, sends the request and
//! parses the reply. The hop count lives on the stack of a single `fetch`
//! call, so concurrent loads never share redirect state.

use log::{debug, info};

use crate::config::{Config, SCHEME_SEPARATOR};
use crate::error_handling::FetchError;

use super::request::build_request;
use super::response::HttpResponse;
use super::transport::{exchange, Connect};
use super::url::ParsedUrl;

/// Per-load request settings.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// User-Agent header value
    pub user_agent: String,
    /// Number of redirects followed before failing with `TooManyRedirects`
    pub max_redirects: usize,
    /// Join scheme-less `location` values onto the current URL
    pub resolve_relative_redirects: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for FetchOptions {
    fn from(config: &Config) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            max_redirects: config.max_redirects,
            resolve_relative_redirects: config.resolve_relative_redirects,
        }
    }
}

/// Result of following a URL to its final, non-redirect response.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// The terminal 200 response
    pub response: HttpResponse,
    /// Every URL requested, starting with the original one
    pub redirect_chain: Vec<String>,
}

impl FetchOutcome {
    /// URL that produced the final response.
    pub fn final_url(&self) -> &str {
        self.redirect_chain
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Requests `url` and follows 301/302 redirects up to `options.max_redirects`.
///
/// # Errors
///
/// - URL errors from [`ParsedUrl::parse`], for the start URL or any redirect target
/// - `FetchError::UnsupportedStatus` for any status other than 200/301/302
/// - `FetchError::MissingRedirectTarget` for a redirect without `location`
/// - `FetchError::TooManyRedirects` when the chain is longer than the bound
/// - `FetchError::Io` for connect, TLS or socket failures
pub async fn fetch<C: Connect>(
    connector: &C,
    url: &str,
    options: &FetchOptions,
) -> Result<FetchOutcome, FetchError> {
    let mut redirect_chain: Vec<String> = Vec::new();
    let mut current = url.to_string();

    for hop in 0..=options.max_redirects {
        redirect_chain.push(current.clone());
        let response = fetch_once(connector, &current, &options.user_agent).await?;

        if !response.is_redirect() {
            debug!(
                "Loaded {} after {hop} redirect(s): {:?}",
                current, redirect_chain
            );
            return Ok(FetchOutcome {
                response,
                redirect_chain,
            });
        }

        // A redirect without a target fails even on the last allowed hop
        let location = response
            .location()
            .ok_or_else(|| FetchError::MissingRedirectTarget {
                url: current.clone(),
                status: response.status_code,
            })?;
        let next = if options.resolve_relative_redirects {
            resolve_location(&current, location)?
        } else {
            location.to_string()
        };

        info!(
            "{} redirect {} -> {} (hop {})",
            response.status_code,
            current,
            next,
            hop + 1
        );
        current = next;
    }

    Err(FetchError::TooManyRedirects {
        url: url.to_string(),
        limit: options.max_redirects,
    })
}

/// One hop: connect, send, read until close, parse.
async fn fetch_once<C: Connect>(
    connector: &C,
    url: &str,
    user_agent: &str,
) -> Result<HttpResponse, FetchError> {
    let parsed = ParsedUrl::parse(url)?;
    let mut transport = connector.connect(&parsed).await?;

    let request = build_request(&parsed, user_agent);
    debug!("GET {} from {}", parsed.path, parsed.authority());
    let raw = exchange(&mut transport, &request).await?;
    drop(transport);
    debug!(
        "Connection to {} closed after {} bytes",
        parsed.authority(),
        raw.len()
    );

    HttpResponse::parse(&raw)
}

/// Resolves a `location` value that may be relative to the URL it came from.
///
/// Absolute targets are returned unchanged.
fn resolve_location(current: &str, location: &str) -> Result<String, FetchError> {
    if location.contains(SCHEME_SEPARATOR) {
        return Ok(location.to_string());
    }
    let relative_error = || FetchError::RelativeRedirect {
        base: current.to_string(),
        location: location.to_string(),
    };
    let base = ::url::Url::parse(current).map_err(|_| relative_error())?;
    let joined = base.join(location).map_err(|_| relative_error())?;
    Ok(joined.to_string())
}
