//! Sidebar navigation trees.
//!
//! Two sidebars are exposed: the static narrative docs tree, and the API
//! reference tree derived from the endpoint catalog. Items serialize in the
//! sidebar JSON shape the site front end consumes (`type`-tagged doc and
//! category nodes).

use serde::{Deserialize, Serialize};

use crate::catalog::{EndpointDescriptor, group_by_resource};

/// A node in a sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarItem {
    /// A link to a single documentation page.
    Doc {
        id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(rename = "className", skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
    },
    /// A collapsible group of items.
    Category {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        link: Option<CategoryLink>,
        items: Vec<SidebarItem>,
    },
}

impl SidebarItem {
    /// A plain doc link.
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Doc {
            id: id.into(),
            label: None,
            class_name: None,
        }
    }
}

/// Where a category heading itself links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CategoryLink {
    /// The category links to a specific doc page.
    Doc { id: String },
    /// The category links to an index page generated from its items.
    GeneratedIndex {
        title: String,
        description: String,
        slug: String,
    },
}

/// The narrative documentation sidebar.
pub fn docs_sidebar() -> Vec<SidebarItem> {
    vec![
        SidebarItem::doc("introduction"),
        SidebarItem::doc("getting-started"),
        SidebarItem::doc("architecture"),
        SidebarItem::doc("development"),
        SidebarItem::doc("deployment"),
    ]
}

/// Build the API reference sidebar from the endpoint catalog.
///
/// The tree opens with the API overview page, followed by one category per
/// resource in grouping order. Each category links to the resource's page and
/// lists its endpoints as doc items labeled by the endpoint description, with
/// a `api-method {method}` class name driving the method badge styling.
pub fn api_reference_sidebar(endpoints: &[EndpointDescriptor]) -> Vec<SidebarItem> {
    let mut items = vec![SidebarItem::doc("api-reference/overview")];

    for (resource, entries) in group_by_resource(endpoints) {
        let children = entries
            .iter()
            .map(|endpoint| SidebarItem::Doc {
                id: format!("api-reference/{}", slugify(&endpoint.description)),
                label: Some(endpoint.description.clone()),
                class_name: Some(format!(
                    "api-method {}",
                    endpoint.method.as_str().to_lowercase()
                )),
            })
            .collect();

        items.push(SidebarItem::Category {
            label: resource.clone(),
            link: Some(CategoryLink::Doc {
                id: format!("api-reference/{}", resource),
            }),
            items: children,
        });
    }

    items
}

/// Convert a string to a URL-friendly slug.
///
/// Converts to lowercase, keeps alphanumerics, collapses whitespace and
/// separator runs into single hyphens, and drops everything else.
fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
