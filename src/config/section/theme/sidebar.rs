//! `[[theme.sidebar]]` groups.

use serde::{Deserialize, Serialize};

use super::NavItem;
use crate::config::{ConfigDiagnostics, FieldPath};

/// A titled group of sidebar links, rendered in declaration order.
///
/// ```toml
/// [[theme.sidebar]]
/// text = "Getting Started"
/// items = [
///     { text = "Overview", link = "/" },
///     { text = "Installation", link = "/install" },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,
    pub items: Vec<NavItem>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }

    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(field.field("text"), "group title must not be empty");
        }

        if self.items.is_empty() {
            diag.error_with_hint(
                field.field("items"),
                "sidebar group has no items",
                "add at least one { text, link } entry or remove the group",
            );
        }

        let items = field.field("items");
        for (i, item) in self.items.iter().enumerate() {
            item.validate(&items.index(i), diag);
        }
    }
}
