//! URL resolution and the HTTP/1.0 request/response engine.
//!
//! This module handles:
//! - Splitting URLs into scheme, host, port and path
//! - Opening plain TCP or TLS transports
//! - Writing the GET request and reading the response until the peer closes
//! - Parsing the status line, headers and body
//! - Following 301/302 redirects with a bounded hop count

mod redirects;
mod request;
mod response;
mod transport;
mod url;

pub use redirects::{fetch, FetchOptions, FetchOutcome};
pub use request::build_request;
pub use response::HttpResponse;
pub use transport::{exchange, BoxedTransport, Connect, SocketConnector, Transport};
pub use self::url::{ParsedUrl, Scheme};
