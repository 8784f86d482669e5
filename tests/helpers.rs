// Shared test helpers: a raw-socket mock HTTP server.
//
// The server accepts any number of connections, reads one request per
// connection (up to the blank line), answers with whatever the responder
// returns, and closes the socket, which is how HTTP/1.0 marks the end of the
// response.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Handle to a running mock server.
#[allow(dead_code)] // Not every test file uses every field
pub struct MockServer {
    pub addr: SocketAddr,
    pub connections: Arc<AtomicUsize>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockServer {
    /// `http://127.0.0.1:<port><path>`
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn connection_count(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a mock server on an ephemeral port.
///
/// `respond` receives the raw request text and the server's own address (for
/// building absolute `Location` headers) and returns the raw response.
pub async fn start_mock_server<F>(respond: F) -> MockServer
where
    F: Fn(&str, SocketAddr) -> String + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    let connections = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));

    let respond = Arc::new(respond);
    let connections_clone = Arc::clone(&connections);
    let requests_clone = Arc::clone(&requests);
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            connections_clone.fetch_add(1, Ordering::SeqCst);
            let respond = Arc::clone(&respond);
            let requests = Arc::clone(&requests_clone);
            tokio::spawn(async move {
                let request = read_request(&mut socket).await;
                requests.lock().unwrap().push(request.clone());
                let response = (*respond)(&request, addr);
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    MockServer {
        addr,
        connections,
        requests,
    }
}

/// Path from the request line of a raw request.
#[allow(dead_code)]
pub fn request_path(request: &str) -> &str {
    request.split(' ').nth(1).unwrap_or("/")
}

/// A 200 response with the given HTML body.
#[allow(dead_code)]
pub fn ok_response(body: &str) -> String {
    format!("HTTP/1.0 200 OK\r\nContent-Type: text/html\r\nServer: mock\r\n\r\n{body}")
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut request = Vec::new();
    let mut chunk = [0u8; 512];
    while !request.ends_with(b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&request).into_owned()
}
