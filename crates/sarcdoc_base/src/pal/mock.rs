use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

use crate::{SarcdocError, SarcdocResult, error::ErrorKind};

use super::FilePath;
use super::http::{HttpRequest, HttpResponse, HttpServerConfig, HttpServerHandle, HttpService};
use super::traits::Pal;

/// In-memory PAL implementation for testing.
///
/// Stores file contents in a HashMap and registers HTTP services without
/// opening sockets, so tests run deterministically and without side effects.
///
/// # Examples
///
/// ```
/// use sarcdoc_base::{FilePath, MockPal, Pal};
///
/// let mock = MockPal::new();
/// mock.add_file(FilePath::from("test.toml"), b"title = \"Docs\"".to_vec());
/// let content = mock.read_file_to_string(&FilePath::from("test.toml")).unwrap();
/// assert_eq!(content, "title = \"Docs\"");
/// ```
#[derive(Debug, Clone)]
pub struct MockPal {
    files: Arc<Mutex<HashMap<FilePath, Vec<u8>>>>,
    http_servers: Arc<Mutex<HashMap<u16, Box<dyn HttpService>>>>,
    next_port: Arc<AtomicU16>,
}

impl MockPal {
    /// Create a new empty MockPal.
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            http_servers: Arc::new(Mutex::new(HashMap::new())),
            next_port: Arc::new(AtomicU16::new(10000)),
        }
    }

    /// Add a file to the mock storage.
    pub fn add_file(&self, path: FilePath, content: Vec<u8>) {
        self.files.lock().unwrap().insert(path, content);
    }

    /// Simulate an HTTP request to a registered server.
    ///
    /// Looks up the service registered for the given port and invokes it
    /// directly, without any network traffic.
    pub fn simulate_request(
        &self,
        port: u16,
        request: HttpRequest,
    ) -> SarcdocResult<HttpResponse> {
        let servers = self.http_servers.lock().unwrap();
        let service = servers
            .get(&port)
            .ok_or_else(|| crate::err!("No HTTP server registered on port {}", port))?;

        service.handle_request(request)
    }

    /// Get the number of registered HTTP servers.
    pub fn http_server_count(&self) -> usize {
        self.http_servers.lock().unwrap().len()
    }
}

impl Default for MockPal {
    fn default() -> Self {
        Self::new()
    }
}

impl Pal for MockPal {
    fn file_exists(&self, path: &FilePath) -> SarcdocResult<bool> {
        Ok(self.files.lock().unwrap().contains_key(path))
    }

    fn read_file(&self, path: &FilePath) -> SarcdocResult<Box<dyn Read + 'static>> {
        let files = self.files.lock().unwrap();
        let content = files.get(path).ok_or_else(|| {
            Box::new(SarcdocError::new(ErrorKind::FileError {
                path: path.as_path().to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            }))
        })?;
        Ok(Box::new(Cursor::new(content.clone())))
    }

    fn start_http_server(
        &self,
        service: Box<dyn HttpService>,
        config: HttpServerConfig,
    ) -> SarcdocResult<HttpServerHandle> {
        let port = config
            .port
            .unwrap_or_else(|| self.next_port.fetch_add(1, Ordering::SeqCst));
        self.http_servers.lock().unwrap().insert(port, service);
        Ok(HttpServerHandle::new(port))
    }
}
