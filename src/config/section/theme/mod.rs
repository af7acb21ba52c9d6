//! `[theme]` section configuration.
//!
//! Site chrome rendered around every page: top navigation, sidebar, and
//! social links. Entries render in the order they are declared.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.sidebar]]
//! text = "Getting Started"
//! items = [{ text = "Overview", link = "/" }]
//!
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/openchlsystem/OpenCHS-helpline"
//! ```

mod nav;
mod sidebar;
mod social;

pub use nav::NavItem;
pub use sidebar::SidebarGroup;
pub use social::{KNOWN_ICONS, SocialLink};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme section configuration: nav, sidebar and social links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Top navigation entries.
    pub nav: Vec<NavItem>,

    /// Sidebar groups.
    pub sidebar: Vec<SidebarGroup>,

    /// Links to the project on external platforms.
    pub social_links: Vec<SocialLink>,
}

impl ThemeSectionConfig {
    pub const NAV: FieldPath = FieldPath::new("theme.nav");
    pub const SIDEBAR: FieldPath = FieldPath::new("theme.sidebar");
    pub const SOCIAL_LINKS: FieldPath = FieldPath::new("theme.social_links");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, item) in self.nav.iter().enumerate() {
            item.validate(&Self::NAV.index(i), diag);
        }
        for (i, group) in self.sidebar.iter().enumerate() {
            group.validate(&Self::SIDEBAR.index(i), diag);
        }
        for (i, link) in self.social_links.iter().enumerate() {
            link.validate(&Self::SOCIAL_LINKS.index(i), diag);
        }
    }

    /// Total number of links across nav, sidebar and social links.
    pub fn link_count(&self) -> usize {
        self.nav.len()
            + self.sidebar.iter().map(|g| g.items.len()).sum::<usize>()
            + self.social_links.len()
    }
}
