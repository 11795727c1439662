//! Closed set of project categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of software a project produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    WebApp,
    MobileApp,
    DesktopApp,
    Api,
    Library,
    Other,
}

impl Category {
    /// Returns a static slice of all categories in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::WebApp,
            Category::MobileApp,
            Category::DesktopApp,
            Category::Api,
            Category::Library,
            Category::Other,
        ]
    }

    /// Returns the wire name used in catalog files and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::WebApp => "web-app",
            Category::MobileApp => "mobile-app",
            Category::DesktopApp => "desktop-app",
            Category::Api => "api",
            Category::Library => "library",
            Category::Other => "other",
        }
    }

    /// Comma separated list of every valid wire name.
    pub fn valid_values() -> String {
        Self::all()
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid category '{}'. Valid values: {}",
                    s,
                    Self::valid_values()
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_wire_names() {
        assert_eq!("web-app".parse::<Category>().unwrap(), Category::WebApp);
        assert_eq!("api".parse::<Category>().unwrap(), Category::Api);
        assert_eq!("other".parse::<Category>().unwrap(), Category::Other);
    }

    #[test]
    fn test_category_parse_is_case_sensitive() {
        let err = "Web-App".parse::<Category>().unwrap_err();
        assert!(err.contains("web-app, mobile-app, desktop-app, api, library, other"));
    }

    #[test]
    fn test_category_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Category::DesktopApp).unwrap();
        assert_eq!(json, "\"desktop-app\"");
        let back: Category = serde_json::from_str("\"mobile-app\"").unwrap();
        assert_eq!(back, Category::MobileApp);
    }
}
