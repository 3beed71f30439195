pub mod api;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod playground;

pub use api::ApiService;
pub use catalog::{
    EndpointCatalog, EndpointDescriptor, Method, ResourceSection, filter_by_method,
    group_by_resource, sample_endpoints, sections, toggle_method,
};
pub use config::{FooterGroup, FooterLink, NavbarItem, SiteConfig, load_config};
pub use navigation::{CategoryLink, SidebarItem, api_reference_sidebar, docs_sidebar};
pub use playground::{Playground, PlaygroundReply};
