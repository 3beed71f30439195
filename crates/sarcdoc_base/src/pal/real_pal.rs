use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::{SarcdocError, SarcdocResult, error::ErrorKind};

use super::FilePath;
use super::http::{
    HttpMethod, HttpRequest, HttpResponse, HttpServerConfig, HttpServerHandle, HttpService,
    HttpStatusCode,
};
use super::traits::Pal;

/// Concrete PAL implementation using the real filesystem and a tiny_http server.
///
/// All file paths are resolved relative to a configured base directory.
#[derive(Debug)]
pub struct RealPal {
    base_dir: PathBuf,
}

impl RealPal {
    /// Create a new RealPal with the given base directory.
    ///
    /// # Arguments
    /// * `base_dir` - All paths will be resolved relative to this directory
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolve a FilePath to an absolute filesystem path.
    fn resolve_path(&self, path: &FilePath) -> PathBuf {
        self.base_dir.join(path.as_path())
    }
}

impl Pal for RealPal {
    #[instrument(skip(self), fields(path = %path))]
    fn file_exists(&self, path: &FilePath) -> SarcdocResult<bool> {
        let resolved = self.resolve_path(path);
        let exists = resolved.exists();
        debug!(exists, resolved = %resolved.display(), "checked file existence");
        Ok(exists)
    }

    #[instrument(skip(self), fields(path = %path))]
    fn read_file(&self, path: &FilePath) -> SarcdocResult<Box<dyn Read + 'static>> {
        let resolved = self.resolve_path(path);
        debug!(resolved = %resolved.display(), "opening file for reading");
        let file = fs::File::open(&resolved).map_err(|e| {
            debug!(error = %e, "failed to open file");
            Box::new(SarcdocError::new(ErrorKind::FileError {
                path: resolved,
                source: e,
            }))
        })?;
        Ok(Box::new(file))
    }

    #[instrument(skip(self, service))]
    fn start_http_server(
        &self,
        service: Box<dyn HttpService>,
        config: HttpServerConfig,
    ) -> SarcdocResult<HttpServerHandle> {
        let address = config.address();
        let server = tiny_http::Server::http(&address)
            .map_err(|e| crate::err!("Failed to bind HTTP server to {}: {}", address, e))?;

        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .ok_or_else(|| crate::err!("HTTP server has no IP listen address"))?;

        let handle = HttpServerHandle::new(port);
        let shutdown = handle.shutdown_flag().clone();

        debug!(port, "HTTP server listening");
        std::thread::spawn(move || {
            loop {
                if shutdown.load(Ordering::SeqCst) {
                    debug!("HTTP server shutting down");
                    break;
                }
                // Short timeout so the shutdown flag is rechecked regularly.
                match server.recv_timeout(Duration::from_millis(100)) {
                    Ok(Some(request)) => respond(service.as_ref(), request),
                    Ok(None) => {}
                    Err(e) => {
                        warn!(error = %e, "error receiving HTTP request");
                        break;
                    }
                }
            }
        });

        Ok(handle)
    }
}

/// Dispatch a single tiny_http request to the service and send the response.
///
/// Service errors become HTTP 500 responses with the error message as a plain
/// text body; they never tear down the server loop.
fn respond(service: &dyn HttpService, request: tiny_http::Request) {
    let response = match HttpMethod::parse(&request.method().to_string()) {
        Some(method) => {
            let http_request = HttpRequest::new(method, request.url());
            match service.handle_request(http_request) {
                Ok(response) => response,
                Err(e) => {
                    warn!(url = request.url(), error = %e, "service returned an error");
                    HttpResponse::new(HttpStatusCode::InternalServerError)
                        .with_content_type("text/plain")
                        .with_body(e.to_string())
                }
            }
        }
        None => HttpResponse::new(HttpStatusCode::MethodNotAllowed)
            .with_content_type("text/plain")
            .with_body("Unsupported HTTP method"),
    };

    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.into_body().into_bytes();

    let mut out = tiny_http::Response::from_data(body).with_status_code(status);
    for (key, value) in headers.all() {
        if let Ok(header) = tiny_http::Header::from_bytes(key.as_bytes(), value.as_bytes()) {
            out = out.with_header(header);
        }
    }

    if let Err(e) = request.respond(out) {
        warn!(error = %e, "failed to send HTTP response");
    }
}
