//! Test helpers: an in-process mock HTTP server and client constructors.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use steamdata_blob_cache::{BlobStore, CacheError, MemoryStore};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::client::Client;
use crate::config::Config;

/// Mock HTTP server answering every request with the same status and body.
pub(crate) struct MockServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<String>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl MockServer {
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}");
        let body = body.to_string();
        let hits = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let hits = hits.clone();
            let requests = requests.clone();
            tokio::spawn(async move {
                while let Ok((mut stream, _)) = listener.accept().await {
                    let mut buf = vec![0u8; 8192];
                    let n = stream.read(&mut buf).await.unwrap_or(0);
                    let head = String::from_utf8_lossy(&buf[..n]);
                    let line = head.lines().next().unwrap_or_default().to_string();
                    requests.lock().unwrap().push(line);
                    hits.fetch_add(1, Ordering::SeqCst);

                    let resp = format!(
                        "HTTP/1.1 {status} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(resp.as_bytes()).await;
                    let _ = stream.shutdown().await;
                }
            })
        };

        Self {
            url,
            hits,
            requests,
            handle,
        }
    }

    /// Returns a URL nothing is listening on.
    pub async fn closed_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}")
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Request line (`GET /path?query HTTP/1.1`) of the latest request.
    pub fn last_request(&self) -> Option<String> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Config pointing both base URLs at `url`.
pub(crate) fn test_config(url: &str) -> Config {
    Config {
        api_base_url: url.to_string(),
        store_base_url: url.to_string(),
        ..Default::default()
    }
}

/// Client backed by a fresh in-memory store.
pub(crate) fn test_client(url: &str) -> (Client, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let client = Client::with_store(&test_config(url), store.clone()).unwrap();
    (client, store)
}

/// Store whose writes always fail.
pub(crate) struct ReadOnlyStore;

impl BlobStore for ReadOnlyStore {
    fn exists(&self, _key: &str) -> bool {
        false
    }

    fn read(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        Err(CacheError::NotFound(key.to_string()))
    }

    fn write(&self, _key: &str, _data: &[u8]) -> Result<(), CacheError> {
        Err(CacheError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only store",
        )))
    }
}
