//! The endpoint catalog: a fixed list of API endpoint descriptors with two
//! derived views, a grouping by owning resource and a single-method filter.
//!
//! Grouping and filtering are pure functions recomputed from their inputs on
//! every call; the only mutable state is the active method filter owned by an
//! `EndpointCatalog` instance. Group iteration order is first-seen order and
//! is user-observable (it controls section display order), which is why the
//! grouping uses an insertion-order-preserving `IndexMap`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// HTTP methods covered by the reservation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Parse a method from its wire form (case-insensitive).
    pub fn parse(method: &str) -> Option<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    /// The uppercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One API operation: a (method, path, description) triple.
///
/// By convention the second "/"-delimited segment of `path` names the owning
/// resource ("buildings", "resources", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub method: Method,
    pub path: String,
    pub description: String,
}

impl EndpointDescriptor {
    /// Create a new endpoint descriptor.
    pub fn new(method: Method, path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            description: description.into(),
        }
    }

    /// The resource name this endpoint groups under: the second
    /// "/"-delimited segment of the path, or the empty string when absent.
    pub fn resource(&self) -> &str {
        self.path.split('/').nth(1).unwrap_or("")
    }
}

/// Group endpoints by their owning resource.
///
/// Iterates the input once, in order. Keys appear in first-seen order and
/// entries within a key keep their relative order, so the concatenation of
/// all groups is a permutation of the input containing each item exactly
/// once. Malformed paths (no "/", or the empty string) group under the empty
/// string key rather than failing.
///
/// # Examples
/// ```
/// use sarcdoc_engine::catalog::{EndpointDescriptor, Method, group_by_resource};
///
/// let endpoints = vec![
///     EndpointDescriptor::new(Method::Get, "/buildings", "Get all buildings"),
///     EndpointDescriptor::new(Method::Get, "/resources", "Get all resources"),
/// ];
/// let groups = group_by_resource(&endpoints);
/// let keys: Vec<_> = groups.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["buildings", "resources"]);
/// ```
pub fn group_by_resource(
    endpoints: &[EndpointDescriptor],
) -> IndexMap<String, Vec<EndpointDescriptor>> {
    let mut groups: IndexMap<String, Vec<EndpointDescriptor>> = IndexMap::new();
    for endpoint in endpoints {
        groups
            .entry(endpoint.resource().to_string())
            .or_default()
            .push(endpoint.clone());
    }
    groups
}

/// Toggle the single-select method filter.
///
/// Selecting the already-active method clears the filter; anything else
/// becomes the new filter. At most one method is ever active.
pub fn toggle_method(current: Option<Method>, requested: Method) -> Option<Method> {
    if current == Some(requested) {
        None
    } else {
        Some(requested)
    }
}

/// Restrict endpoints to the active method.
///
/// With no active method the input is returned unchanged (same elements,
/// same order); otherwise only entries whose method matches are kept, with
/// relative order preserved.
pub fn filter_by_method(
    endpoints: &[EndpointDescriptor],
    active: Option<Method>,
) -> Vec<EndpointDescriptor> {
    match active {
        None => endpoints.to_vec(),
        Some(method) => endpoints
            .iter()
            .filter(|endpoint| endpoint.method == method)
            .cloned()
            .collect(),
    }
}

/// One rendered group: the resource heading plus its (filtered) endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSection {
    pub resource: String,
    pub heading: String,
    pub endpoints: Vec<EndpointDescriptor>,
}

/// Derive the displayable sections: for each group key in grouping order, a
/// heading of `"/" + key` followed by the group's entries after method
/// filtering.
///
/// A group whose filtered entry set is empty is still emitted with just its
/// heading. The filter narrows entries within groups, never group membership.
pub fn sections(
    endpoints: &[EndpointDescriptor],
    active: Option<Method>,
) -> Vec<ResourceSection> {
    group_by_resource(endpoints)
        .into_iter()
        .map(|(resource, entries)| {
            let heading = format!("/{}", resource);
            ResourceSection {
                resource,
                heading,
                endpoints: filter_by_method(&entries, active),
            }
        })
        .collect()
}

/// A fixed endpoint list with the single piece of view state, the active
/// method filter.
///
/// The descriptor list is supplied once at construction and never changes;
/// the filter starts empty and is flipped by [`EndpointCatalog::toggle`].
#[derive(Debug, Clone)]
pub struct EndpointCatalog {
    endpoints: Vec<EndpointDescriptor>,
    active_method: Option<Method>,
}

impl EndpointCatalog {
    /// Create a catalog over the given endpoints with no active filter.
    pub fn new(endpoints: Vec<EndpointDescriptor>) -> Self {
        Self {
            endpoints,
            active_method: None,
        }
    }

    /// The full endpoint list, in construction order.
    pub fn endpoints(&self) -> &[EndpointDescriptor] {
        &self.endpoints
    }

    /// The currently active method filter, if any.
    pub fn active_method(&self) -> Option<Method> {
        self.active_method
    }

    /// Toggle the method filter: selecting the active method again clears it.
    pub fn toggle(&mut self, method: Method) {
        self.active_method = toggle_method(self.active_method, method);
    }

    /// The grouping by resource, independent of the active filter.
    pub fn groups(&self) -> IndexMap<String, Vec<EndpointDescriptor>> {
        group_by_resource(&self.endpoints)
    }

    /// The endpoints visible under the active filter.
    pub fn visible(&self) -> Vec<EndpointDescriptor> {
        filter_by_method(&self.endpoints, self.active_method)
    }

    /// The displayable sections under the active filter.
    pub fn sections(&self) -> Vec<ResourceSection> {
        sections(&self.endpoints, self.active_method)
    }
}

/// The reference endpoint list: CRUD operations for the five reservation
/// system resources plus the authentication endpoint.
pub fn sample_endpoints() -> Vec<EndpointDescriptor> {
    use Method::{Delete, Get, Post, Put};

    let mut endpoints = Vec::new();
    let resources = [
        ("buildings", "building"),
        ("classes", "class"),
        ("lessons", "lesson"),
        ("reservations", "reservation"),
        ("resources", "resource"),
    ];
    for (plural, singular) in resources {
        let collection = format!("/{}", plural);
        let item = format!("/{}/{{id}}", plural);
        endpoints.push(EndpointDescriptor::new(
            Get,
            collection.clone(),
            format!("Get all {}", plural),
        ));
        endpoints.push(EndpointDescriptor::new(
            Post,
            collection,
            format!("Create a new {}", singular),
        ));
        endpoints.push(EndpointDescriptor::new(
            Get,
            item.clone(),
            format!("Get {} by ID", singular),
        ));
        endpoints.push(EndpointDescriptor::new(
            Put,
            item.clone(),
            format!("Update {}", singular),
        ));
        endpoints.push(EndpointDescriptor::new(
            Delete,
            item,
            format!("Delete {}", singular),
        ));
    }
    endpoints.push(EndpointDescriptor::new(
        Post,
        "/auth/login",
        "Authenticate a user",
    ));
    endpoints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_endpoints() -> Vec<EndpointDescriptor> {
        vec![
            EndpointDescriptor::new(Method::Get, "/buildings", "Get all buildings"),
            EndpointDescriptor::new(Method::Post, "/buildings", "Create a new building"),
            EndpointDescriptor::new(Method::Get, "/resources", "Get all resources"),
        ]
    }

    #[test]
    fn test_grouping_partitions_the_input() {
        let endpoints = sample_endpoints();
        let groups = group_by_resource(&endpoints);

        let flattened: Vec<EndpointDescriptor> =
            groups.values().flat_map(|entries| entries.clone()).collect();
        assert_eq!(flattened.len(), endpoints.len());
        for endpoint in &endpoints {
            assert_eq!(
                flattened.iter().filter(|e| *e == endpoint).count(),
                endpoints.iter().filter(|e| *e == endpoint).count(),
            );
        }
    }

    #[test]
    fn test_grouping_key_derivation() {
        let endpoints = vec![
            EndpointDescriptor::new(Method::Get, "/buildings/123", "Get building by ID"),
            EndpointDescriptor::new(Method::Get, "/resources", "Get all resources"),
            EndpointDescriptor::new(Method::Get, "x", "Malformed path"),
            EndpointDescriptor::new(Method::Get, "", "Empty path"),
        ];
        let groups = group_by_resource(&endpoints);

        assert!(groups.contains_key("buildings"));
        assert!(groups.contains_key("resources"));
        assert_eq!(groups[""].len(), 2);
    }

    #[test]
    fn test_grouping_preserves_first_seen_key_order() {
        let endpoints = vec![
            EndpointDescriptor::new(Method::Get, "/zebras", "z"),
            EndpointDescriptor::new(Method::Get, "/apples", "a"),
            EndpointDescriptor::new(Method::Post, "/zebras", "z2"),
        ];
        let groups = group_by_resource(&endpoints);
        let keys: Vec<_> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zebras", "apples"]);
        assert_eq!(groups["zebras"].len(), 2);
    }

    #[test]
    fn test_toggle_double_application_clears() {
        assert_eq!(toggle_method(toggle_method(None, Method::Get), Method::Get), None);
        assert_eq!(toggle_method(Some(Method::Get), Method::Post), Some(Method::Post));
    }

    #[test]
    fn test_filter_is_a_subset() {
        let endpoints = sample_endpoints();
        for method in [Method::Get, Method::Post, Method::Put, Method::Delete] {
            let filtered = filter_by_method(&endpoints, Some(method));
            for endpoint in &filtered {
                assert!(endpoints.contains(endpoint));
                assert_eq!(endpoint.method, method);
            }
        }
    }

    #[test]
    fn test_filter_none_is_identity() {
        let endpoints = demo_endpoints();
        assert_eq!(filter_by_method(&endpoints, None), endpoints);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let endpoints = demo_endpoints();

        let groups = group_by_resource(&endpoints);
        let keys: Vec<_> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, ["buildings", "resources"]);
        assert_eq!(groups["buildings"].len(), 2);
        assert_eq!(groups["resources"].len(), 1);

        let mut catalog = EndpointCatalog::new(endpoints);
        catalog.toggle(Method::Get);
        let sections = catalog.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "/buildings");
        assert_eq!(sections[0].endpoints.len(), 1);
        assert_eq!(sections[0].endpoints[0].description, "Get all buildings");
        assert_eq!(sections[1].heading, "/resources");
        assert_eq!(sections[1].endpoints.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_resource(&[]).is_empty());
        assert!(filter_by_method(&[], Some(Method::Get)).is_empty());
        assert!(filter_by_method(&[], None).is_empty());
        assert!(sections(&[], None).is_empty());
    }

    #[test]
    fn test_sections_keep_empty_groups_visible() {
        // Filtering narrows entries within a group, but the group heading is
        // still rendered.
        let endpoints = demo_endpoints();
        let sections = sections(&endpoints, Some(Method::Post));

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "/buildings");
        assert_eq!(sections[0].endpoints.len(), 1);
        assert_eq!(sections[1].heading, "/resources");
        assert!(sections[1].endpoints.is_empty());
    }

    #[test]
    fn test_catalog_toggle_round_trip() {
        let mut catalog = EndpointCatalog::new(demo_endpoints());
        assert_eq!(catalog.active_method(), None);
        assert_eq!(catalog.visible().len(), 3);

        catalog.toggle(Method::Get);
        assert_eq!(catalog.active_method(), Some(Method::Get));
        assert_eq!(catalog.visible().len(), 2);

        catalog.toggle(Method::Get);
        assert_eq!(catalog.active_method(), None);
        assert_eq!(catalog.visible().len(), 3);
    }

    #[test]
    fn test_method_parse_and_display() {
        assert_eq!(Method::parse("GET"), Some(Method::Get));
        assert_eq!(Method::parse("delete"), Some(Method::Delete));
        assert_eq!(Method::parse("PATCH"), None);
        assert_eq!(Method::Get.to_string(), "GET");
    }

    #[test]
    fn test_method_serializes_as_wire_form() {
        assert_eq!(serde_json::to_string(&Method::Get).unwrap(), "\"GET\"");
        let parsed: Method = serde_json::from_str("\"DELETE\"").unwrap();
        assert_eq!(parsed, Method::Delete);
    }

    #[test]
    fn test_sample_endpoints_shape() {
        let endpoints = sample_endpoints();
        // Five resources with full CRUD plus the auth endpoint.
        assert_eq!(endpoints.len(), 26);

        let groups = group_by_resource(&endpoints);
        let keys: Vec<_> = groups.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["buildings", "classes", "lessons", "reservations", "resources", "auth"]
        );
        for resource in ["buildings", "classes", "lessons", "reservations", "resources"] {
            assert_eq!(groups[resource].len(), 5);
        }
        assert_eq!(groups["auth"].len(), 1);
    }
}
