use serde::Serialize;
use tracing::debug;

use sarcdoc_base::SarcdocResult;
use sarcdoc_base::err;
use sarcdoc_base::pal::http::{HttpMethod, HttpRequest, HttpResponse, HttpService};

use crate::catalog::{EndpointDescriptor, Method, ResourceSection, sections};
use crate::config::{FooterGroup, NavbarItem, SiteConfig};
use crate::navigation::{SidebarItem, api_reference_sidebar, docs_sidebar};
use crate::playground::Playground;

/// HTTP service for the documentation site.
///
/// Routes handled:
/// - `GET /` - redirects to the configured landing page
/// - `GET /api/site` - site metadata as JSON
/// - `GET /api/navigation` - the docs and API reference sidebars
/// - `GET /api/endpoints[?method=GET]` - the endpoint catalog sections,
///   optionally narrowed to one HTTP method
/// - `GET /api/playground?path={path}&method={method}` - the mock playground
///   reply for an endpoint
///
/// The service owns only immutable data; the endpoint method filter arrives
/// per request in the query string. Errors are returned to the PAL, which
/// converts them to HTTP error responses.
#[derive(Clone)]
pub struct ApiService {
    config: SiteConfig,
    endpoints: Vec<EndpointDescriptor>,
    playground: Playground,
}

/// API response structure for site information.
#[derive(Serialize)]
struct SiteResponse<'a> {
    title: &'a str,
    tagline: &'a str,
    url: &'a str,
    base_url: &'a str,
    navbar: &'a [NavbarItem],
    footer: &'a [FooterGroup],
}

/// API response structure for the navigation endpoint.
#[derive(Serialize)]
struct NavigationResponse {
    docs: Vec<SidebarItem>,
    api_reference: Vec<SidebarItem>,
}

/// API response structure for the endpoints endpoint.
#[derive(Serialize)]
struct EndpointsResponse {
    active_method: Option<Method>,
    sections: Vec<ResourceSection>,
}

impl ApiService {
    /// Create a new ApiService.
    ///
    /// # Arguments
    /// * `config` - Site configuration (metadata, navbar, footer, redirect)
    /// * `endpoints` - The endpoint catalog backing `/api/endpoints` and the
    ///   API reference sidebar
    /// * `playground` - The mock playground data
    pub fn new(
        config: SiteConfig,
        endpoints: Vec<EndpointDescriptor>,
        playground: Playground,
    ) -> Self {
        Self {
            config,
            endpoints,
            playground,
        }
    }

    /// Serialize data to JSON and wrap in an HTTP 200 response.
    fn serialize_json_response<T: Serialize>(data: &T) -> SarcdocResult<HttpResponse> {
        serde_json::to_string(data)
            .map(HttpResponse::json)
            .map_err(|e| err!("JSON serialization error: {}", e))
    }

    /// Extract a query parameter value from a request path.
    fn query_param<'a>(path: &'a str, name: &str) -> Option<&'a str> {
        let params = path.split('?').nth(1)?;
        params.split('&').find_map(|param| {
            let (key, value) = param.split_once('=')?;
            if key == name { Some(value) } else { None }
        })
    }

    /// Handle the /api/site endpoint.
    fn handle_site_request(&self) -> SarcdocResult<HttpResponse> {
        let response = SiteResponse {
            title: &self.config.title,
            tagline: &self.config.tagline,
            url: &self.config.url,
            base_url: &self.config.base_url,
            navbar: &self.config.navbar,
            footer: &self.config.footer,
        };

        Self::serialize_json_response(&response)
    }

    /// Handle the /api/navigation endpoint.
    fn handle_navigation_request(&self) -> SarcdocResult<HttpResponse> {
        let response = NavigationResponse {
            docs: docs_sidebar(),
            api_reference: api_reference_sidebar(&self.endpoints),
        };

        Self::serialize_json_response(&response)
    }

    /// Handle the /api/endpoints endpoint.
    ///
    /// The optional `method` query parameter narrows the entries within each
    /// section; the sections themselves always cover every resource.
    fn handle_endpoints_request(&self, request: &HttpRequest) -> SarcdocResult<HttpResponse> {
        let active_method = match Self::query_param(request.path(), "method") {
            None => None,
            Some(value) => Some(
                Method::parse(value)
                    .ok_or_else(|| err!("Unknown method filter '{}'", value))?,
            ),
        };

        let response = EndpointsResponse {
            active_method,
            sections: sections(&self.endpoints, active_method),
        };

        Self::serialize_json_response(&response)
    }

    /// Handle the /api/playground endpoint.
    ///
    /// Requires `path` and `method` query parameters. A lookup miss is not an
    /// error: the mock 404 reply is returned as a successful JSON response,
    /// the same way the playground widget displays it.
    fn handle_playground_request(&self, request: &HttpRequest) -> SarcdocResult<HttpResponse> {
        let path = Self::query_param(request.path(), "path")
            .ok_or_else(|| err!("Missing required query parameter 'path'"))?;
        let method_value = Self::query_param(request.path(), "method")
            .ok_or_else(|| err!("Missing required query parameter 'method'"))?;
        let method = Method::parse(method_value)
            .ok_or_else(|| err!("Unknown method '{}'", method_value))?;

        let reply = self.playground.send(path, method);
        debug!(path, %method, status = reply.status, "playground lookup");

        Self::serialize_json_response(&reply)
    }
}

impl std::fmt::Debug for ApiService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiService")
            .field("title", &self.config.title)
            .field("endpoint_count", &self.endpoints.len())
            .finish()
    }
}

impl HttpService for ApiService {
    fn handle_request(&self, request: HttpRequest) -> SarcdocResult<HttpResponse> {
        if request.method() != &HttpMethod::Get {
            return Err(err!("Only GET requests are supported"));
        }

        // Remove query parameters from path for routing
        let path = request.path().split('?').next().unwrap_or(request.path());
        debug!(path, "handling request");

        if path == "/" {
            // The landing page immediately redirects into the docs.
            Ok(HttpResponse::redirect(&self.config.redirect))
        } else if path == "/api/site" {
            self.handle_site_request()
        } else if path == "/api/navigation" {
            self.handle_navigation_request()
        } else if path == "/api/endpoints" {
            self.handle_endpoints_request(&request)
        } else if path == "/api/playground" {
            self.handle_playground_request(&request)
        } else {
            Err(err!("Invalid API endpoint: {}", path))
        }
    }
}
