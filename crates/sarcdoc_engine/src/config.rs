//! Site configuration, loaded from `sarcdoc.toml`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use sarcdoc_base::error::ErrorKind;
use sarcdoc_base::{FilePath, PalHandle, SarcdocError, SarcdocResult};

/// Configuration for the documentation site.
///
/// Only `title` is required; everything else has a sensible default so a
/// minimal configuration file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Title of the documentation site.
    pub title: String,
    /// Short tagline shown alongside the title.
    #[serde(default)]
    pub tagline: String,
    /// Production URL of the site.
    #[serde(default)]
    pub url: String,
    /// Pathname under which the site is served.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Owning organization (for repository links).
    #[serde(default)]
    pub organization: String,
    /// Repository name.
    #[serde(default)]
    pub project: String,
    /// Where the landing page redirects to.
    #[serde(default = "default_redirect")]
    pub redirect: String,
    /// Navbar items, in display order.
    #[serde(default)]
    pub navbar: Vec<NavbarItem>,
    /// Footer link groups, in display order.
    #[serde(default)]
    pub footer: Vec<FooterGroup>,
}

/// A single navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarItem {
    pub label: String,
    pub link: String,
}

/// A titled group of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterGroup {
    pub title: String,
    pub items: Vec<FooterLink>,
}

/// A single footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_redirect() -> String {
    "/content/introduction".to_string()
}

impl SiteConfig {
    /// Create a configuration with just a title and all defaults.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tagline: String::new(),
            url: String::new(),
            base_url: default_base_url(),
            organization: String::new(),
            project: String::new(),
            redirect: default_redirect(),
            navbar: Vec::new(),
            footer: Vec::new(),
        }
    }
}

/// Load the site configuration from a TOML file through the PAL.
///
/// A missing file surfaces as a file error; malformed TOML surfaces as a
/// configuration error naming the file.
pub fn load_config(pal: &PalHandle, path: &FilePath) -> SarcdocResult<SiteConfig> {
    let content = pal.read_file_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content).map_err(|e| {
        Box::new(SarcdocError::new(ErrorKind::ConfigError {
            path: path.to_string(),
            message: e.to_string(),
        }))
    })?;
    debug!(title = %config.title, "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarcdoc_base::MockPal;

    fn load_from_str(content: &str) -> SarcdocResult<SiteConfig> {
        let mock = MockPal::new();
        mock.add_file(FilePath::from("sarcdoc.toml"), content.as_bytes().to_vec());
        let pal = PalHandle::new(mock);
        load_config(&pal, &FilePath::from("sarcdoc.toml"))
    }

    #[test]
    fn test_load_minimal_config() {
        let config = load_from_str("title = \"SARC-NG Documentation\"").unwrap();

        assert_eq!(config.title, "SARC-NG Documentation");
        assert_eq!(config.base_url, "/");
        assert_eq!(config.redirect, "/content/introduction");
        assert!(config.navbar.is_empty());
        assert!(config.footer.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
title = "SARC-NG Documentation"
tagline = "Resource Management and Scheduling System"
url = "https://sarc-ng.example.com"
base_url = "/"
organization = "sarc-ng"
project = "sarc-ng"
redirect = "/content/introduction"

[[navbar]]
label = "Documentation"
link = "/content/introduction"

[[navbar]]
label = "API Reference"
link = "/content/category/api-reference"

[[footer]]
title = "Docs"

[[footer.items]]
label = "Documentation"
href = "/content/introduction"

[[footer.items]]
label = "API Reference"
href = "/content/category/api-reference"
"#;
        let config = load_from_str(content).unwrap();

        assert_eq!(config.tagline, "Resource Management and Scheduling System");
        assert_eq!(config.navbar.len(), 2);
        assert_eq!(config.navbar[1].label, "API Reference");
        assert_eq!(config.footer.len(), 1);
        assert_eq!(config.footer[0].items.len(), 2);
        assert_eq!(config.footer[0].items[0].href, "/content/introduction");
    }

    #[test]
    fn test_load_config_missing_file() {
        let mock = MockPal::new();
        let pal = PalHandle::new(mock);
        let result = load_config(&pal, &FilePath::from("sarcdoc.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_missing_title() {
        let result = load_from_str("tagline = \"no title here\"");
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("sarcdoc.toml"));
        assert!(message.contains("title"));
    }

    #[test]
    fn test_load_config_malformed_toml() {
        let result = load_from_str("title = ");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("sarcdoc.toml"));
    }

    #[test]
    fn test_new_defaults() {
        let config = SiteConfig::new("Docs");
        assert_eq!(config.title, "Docs");
        assert_eq!(config.base_url, "/");
        assert_eq!(config.redirect, "/content/introduction");
    }
}
