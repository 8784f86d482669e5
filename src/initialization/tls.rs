//! TLS connector initialization.

use std::sync::Arc;

use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use super::init_crypto_provider;

/// Builds the TLS connector used for `https://` hops.
///
/// Trust anchors come from `webpki-roots`; no client certificate is offered.
/// The same connector is shared by every hop of a load, but each hop still
/// performs its own handshake on a fresh TCP stream.
pub fn init_tls_connector() -> TlsConnector {
    init_crypto_provider();

    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    TlsConnector::from(Arc::new(config))
}
