//! `[site]` section configuration.
//!
//! Site metadata and header injection.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "OpenCHS Docs"
//! description = "Child Helpline Case Management System"
//!
//! [[site.head]]
//! tag = "link"
//! attrs = { rel = "icon", type = "image/x-icon", href = "/favicon.ico" }
//! ```

mod head;

pub use head::{HeadTag, RECOGNIZED_TAGS};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site section configuration: title, description, and head tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, shown in the browser tab and the navbar.
    pub title: String,

    /// Short subtitle, used for the description meta tag.
    pub description: String,

    /// Elements injected into every page's `<head>`, in order.
    pub head: Vec<HeadTag>,
}

impl SiteSectionConfig {
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const DESCRIPTION: FieldPath = FieldPath::new("site.description");
    pub const HEAD: FieldPath = FieldPath::new("site.head");

    /// Validate site metadata and head tags.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `description` should not be empty (warning)
    /// - every head tag must be recognized and well-formed
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::TITLE,
                "site title must not be empty",
                format!("set {}, e.g.: \"My Docs\"", Self::TITLE),
            );
        }

        if self.description.trim().is_empty() {
            diag.warn(
                Self::DESCRIPTION,
                "description is empty, pages will have no description meta tag",
            );
        }

        for (i, tag) in self.head.iter().enumerate() {
            tag.validate(&Self::HEAD.index(i), diag);
        }
    }
}
