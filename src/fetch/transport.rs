//! Transports: opening a byte stream for one hop and running the exchange.
//!
//! A transport is owned by exactly one hop. It is opened, written once, read
//! until the peer closes it, and dropped; redirects always open a new one.

use std::future::Future;
use std::io;

use log::{debug, info, warn};
use rustls::pki_types::ServerName;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

use crate::config::READ_BUFFER_SIZE;
use crate::error_handling::FetchError;
use crate::initialization::init_tls_connector;

use super::url::{ParsedUrl, Scheme};

/// A bidirectional byte stream a request can be sent over.
pub trait Transport: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send> Transport for T {}

/// Owned, type-erased transport for one hop.
pub type BoxedTransport = Box<dyn Transport>;

/// Opens transports for parsed URLs.
pub trait Connect {
    /// Opens a fresh transport to `url`'s host and port, ready for writing.
    fn connect(
        &self,
        url: &ParsedUrl,
    ) -> impl Future<Output = Result<BoxedTransport, FetchError>> + Send;
}

/// Opens real sockets: plain TCP for `http`, TLS over TCP for `https`.
#[derive(Clone)]
pub struct SocketConnector {
    tls: TlsConnector,
}

impl SocketConnector {
    /// Creates a connector using the webpki root store.
    pub fn new() -> Self {
        Self {
            tls: init_tls_connector(),
        }
    }
}

impl Default for SocketConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl Connect for SocketConnector {
    async fn connect(&self, url: &ParsedUrl) -> Result<BoxedTransport, FetchError> {
        debug!("Connecting to {}", url.authority());
        let sock = TcpStream::connect((url.host.as_str(), url.port))
            .await
            .map_err(|e| {
                warn!("Failed to connect to {}: {e}", url.authority());
                e
            })?;
        info!("Connected to {}", url.authority());

        match url.scheme {
            Scheme::Http => Ok(Box::new(sock)),
            Scheme::Https => {
                let server_name = ServerName::try_from(url.host.clone())
                    .map_err(|_| FetchError::InvalidServerName(url.host.clone()))?;
                let stream = self.tls.connect(server_name, sock).await.map_err(|e| {
                    warn!("TLS handshake with {} failed: {e}", url.host);
                    e
                })?;
                debug!("TLS session established with {}", url.host);
                Ok(Box::new(stream))
            }
        }
    }
}

/// Writes `request` and returns everything the peer sends until it closes
/// the connection, decoded as UTF-8 (invalid sequences are replaced).
pub async fn exchange<S>(stream: &mut S, request: &str) -> Result<String, FetchError>
where
    S: AsyncRead + AsyncWrite + Unpin + ?Sized,
{
    stream.write_all(request.as_bytes()).await?;
    stream.flush().await?;

    let raw = read_to_close(stream).await?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Accumulates bytes until end-of-stream.
async fn read_to_close<S>(stream: &mut S) -> Result<Vec<u8>, FetchError>
where
    S: AsyncRead + Unpin + ?Sized,
{
    let mut buf = Vec::with_capacity(READ_BUFFER_SIZE);
    loop {
        match stream.read_buf(&mut buf).await {
            Ok(0) => break,
            Ok(_) => continue,
            // Servers often drop TLS connections without close_notify
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof && !buf.is_empty() => {
                debug!(
                    "Peer closed without close_notify after {} bytes",
                    buf.len()
                );
                break;
            }
            Err(e) => {
                warn!("Read failed after {} bytes: {e}", buf.len());
                return Err(e.into());
            }
        }
    }
    Ok(buf)
}
