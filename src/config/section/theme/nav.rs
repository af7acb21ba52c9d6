//! Navigation entries shared by `[[theme.nav]]` and sidebar groups.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath, Target};

/// A labelled link: one top navigation entry or one sidebar item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Label shown in the menu.
    pub text: String,
    /// Root-relative path or absolute URL.
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Classify `link`. Only meaningful after validation succeeded.
    pub fn target(&self) -> Option<Target> {
        Target::parse(&self.link).ok()
    }

    /// Check label and link, reporting under `field` (e.g. `theme.nav[0]`).
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(field.field("text"), "label must not be empty");
        }

        if let Err(e) = Target::parse(&self.link) {
            diag.error_with_hint(field.field("link"), e.message(), e.hint());
        }
    }
}
