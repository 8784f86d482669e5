//! Error handling.
//!
//! Every failure a page load can hit is a `FetchError` variant:
//! - **URL errors**: malformed scheme, invalid port
//! - **Protocol errors**: unsupported status, redirect without target, redirect loop
//! - **Transport errors**: connect, TLS handshake, read/write failures

mod types;

// Re-export public API
pub use types::{FetchError, InitializationError};
