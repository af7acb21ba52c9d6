//! `[[theme.social_links]]` entries.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath, Target};

/// Platform identifiers the default theme ships icons for.
pub const KNOWN_ICONS: &[&str] = &[
    "bluesky",
    "discord",
    "facebook",
    "github",
    "gitlab",
    "instagram",
    "linkedin",
    "mastodon",
    "npm",
    "slack",
    "twitter",
    "x",
    "youtube",
];

/// A link to the project on an external platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform identifier, e.g. `github`.
    pub icon: String,
    /// Absolute URL of the project page on that platform.
    pub link: String,
}

impl SocialLink {
    pub fn new(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            link: link.into(),
        }
    }

    pub fn is_known_icon(&self) -> bool {
        KNOWN_ICONS.contains(&self.icon.as_str())
    }

    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.icon.trim().is_empty() {
            diag.error_with_hint(
                field.field("icon"),
                "platform identifier must not be empty",
                "use an identifier like \"github\"",
            );
        } else if !self.is_known_icon() {
            diag.hint(
                field.field("icon"),
                format!("no built-in icon for '{}', the renderer may show none", self.icon),
            );
        }

        match Target::parse(&self.link) {
            Ok(target) if target.is_external() => {}
            Ok(_) => diag.error_with_hint(
                field.field("link"),
                "social links must be absolute URLs",
                "use format like https://github.com/org/repo",
            ),
            Err(e) => diag.error_with_hint(field.field("link"), e.message(), e.hint()),
        }
    }
}
