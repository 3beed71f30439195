//! The mock API playground.
//!
//! A lookup table of canned replies keyed by request path and method. There
//! is no network and no real API behind it; "sending" a request is a table
//! lookup, and a miss produces the demo's 404 reply.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};

use crate::catalog::Method;

/// A canned playground reply: the mock status code and JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaygroundReply {
    pub status: u16,
    pub body: Value,
}

impl PlaygroundReply {
    /// Create a reply.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// The body pretty-printed for display.
    pub fn body_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
    }
}

/// The mock playground: per-path, per-method canned replies.
///
/// Paths keep insertion order so the playground's path selector lists them
/// the way they were registered.
#[derive(Debug, Clone, Default)]
pub struct Playground {
    replies: IndexMap<String, IndexMap<Method, PlaygroundReply>>,
}

impl Playground {
    /// Create an empty playground.
    pub fn new() -> Self {
        Self {
            replies: IndexMap::new(),
        }
    }

    /// Register a canned reply for a path and method.
    pub fn insert(&mut self, path: impl Into<String>, method: Method, status: u16, body: Value) {
        self.replies
            .entry(path.into())
            .or_default()
            .insert(method, PlaygroundReply::new(status, body));
    }

    /// "Send" a request: look up the canned reply for the path and method.
    ///
    /// A miss yields the demo's 404 reply rather than an error.
    pub fn send(&self, path: &str, method: Method) -> PlaygroundReply {
        self.replies
            .get(path)
            .and_then(|methods| methods.get(&method))
            .cloned()
            .unwrap_or_else(|| {
                PlaygroundReply::new(404, json!({ "error": "Endpoint not found in demo" }))
            })
    }

    /// The selectable paths, in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.replies.keys().map(String::as_str)
    }

    /// The methods registered for a path, in registration order.
    pub fn methods_for(&self, path: &str) -> Vec<Method> {
        self.replies
            .get(path)
            .map(|methods| methods.keys().copied().collect())
            .unwrap_or_default()
    }

    /// The reference playground data: canned replies for the buildings and
    /// resources endpoints.
    pub fn sample() -> Self {
        let mut playground = Self::new();
        playground.insert(
            "/api/v1/buildings",
            Method::Get,
            200,
            json!([
                {
                    "id": 1,
                    "name": "Main Campus Building",
                    "code": "MCB-A",
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-01T00:00:00Z"
                },
                {
                    "id": 2,
                    "name": "Science Building",
                    "code": "SCI-B",
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-01T00:00:00Z"
                }
            ]),
        );
        playground.insert(
            "/api/v1/buildings",
            Method::Post,
            201,
            json!({
                "id": 3,
                "name": "New Building",
                "code": "NEW-C",
                "createdAt": "2024-06-01T00:00:00Z",
                "updatedAt": "2024-06-01T00:00:00Z"
            }),
        );
        playground.insert(
            "/api/v1/resources",
            Method::Get,
            200,
            json!([
                {
                    "id": 1,
                    "name": "Projector Room A",
                    "type": "equipment",
                    "isAvailable": true,
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-01T00:00:00Z"
                }
            ]),
        );
        playground
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_hit() {
        let playground = Playground::sample();
        let reply = playground.send("/api/v1/buildings", Method::Get);

        assert_eq!(reply.status, 200);
        assert!(reply.body.is_array());
        assert_eq!(reply.body[0]["name"], "Main Campus Building");
    }

    #[test]
    fn test_send_post_hit() {
        let playground = Playground::sample();
        let reply = playground.send("/api/v1/buildings", Method::Post);

        assert_eq!(reply.status, 201);
        assert_eq!(reply.body["code"], "NEW-C");
    }

    #[test]
    fn test_send_miss_yields_demo_404() {
        let playground = Playground::sample();

        // Unknown path
        let reply = playground.send("/api/v1/lessons", Method::Get);
        assert_eq!(reply.status, 404);
        assert_eq!(reply.body["error"], "Endpoint not found in demo");

        // Known path, unregistered method
        let reply = playground.send("/api/v1/resources", Method::Delete);
        assert_eq!(reply.status, 404);
    }

    #[test]
    fn test_paths_keep_registration_order() {
        let playground = Playground::sample();
        let paths: Vec<_> = playground.paths().collect();
        assert_eq!(paths, ["/api/v1/buildings", "/api/v1/resources"]);
    }

    #[test]
    fn test_methods_for_path() {
        let playground = Playground::sample();
        assert_eq!(
            playground.methods_for("/api/v1/buildings"),
            vec![Method::Get, Method::Post]
        );
        assert!(playground.methods_for("/api/v1/unknown").is_empty());
    }

    #[test]
    fn test_body_pretty_is_indented() {
        let reply = PlaygroundReply::new(200, serde_json::json!({ "id": 1 }));
        let pretty = reply.body_pretty();
        assert!(pretty.contains("\n"));
        assert!(pretty.contains("\"id\": 1"));
    }

    #[test]
    fn test_empty_playground_always_misses() {
        let playground = Playground::new();
        let reply = playground.send("/anything", Method::Get);
        assert_eq!(reply.status, 404);
        assert!(playground.paths().next().is_none());
    }
}
