//! Built-in descriptor for the OpenCHS documentation site.

use std::path::PathBuf;

use super::SiteConfig;
use super::section::{HeadTag, NavItem, SidebarGroup, SiteSectionConfig, SocialLink, ThemeSectionConfig};

pub(super) fn openchs() -> SiteConfig {
    SiteConfig {
        config_path: PathBuf::new(),
        site: SiteSectionConfig {
            title: "OpenCHS Docs".into(),
            description: "Child Helpline Case Management System".into(),
            head: vec![
                HeadTag::new("link")
                    .attr("rel", "icon")
                    .attr("type", "image/x-icon")
                    .attr("href", "/favicon.ico"),
            ],
        },
        theme: ThemeSectionConfig {
            nav: vec![
                NavItem::new("Home", "/"),
                NavItem::new("Install", "/install"),
                NavItem::new("Features", "/features"),
                NavItem::new("Docs", "/documentation"),
                NavItem::new("Roadmap", "/roadmap"),
                NavItem::new("FAQ", "/faq"),
            ],
            sidebar: vec![
                SidebarGroup::new(
                    "Getting Started",
                    vec![
                        NavItem::new("Overview", "/"),
                        NavItem::new("Installation", "/install"),
                        NavItem::new("Usage", "/usage"),
                    ],
                ),
                SidebarGroup::new(
                    "Core Features",
                    vec![
                        NavItem::new("Features", "/features"),
                        NavItem::new("Documentation", "/documentation"),
                        NavItem::new("Support", "/support"),
                    ],
                ),
                SidebarGroup::new(
                    "Community & Contribution",
                    vec![
                        NavItem::new("Contributing", "/contributing"),
                        NavItem::new("License", "/license"),
                        NavItem::new("Acknowledgements", "/acknowledgements"),
                    ],
                ),
                SidebarGroup::new(
                    "Project Evolution",
                    vec![
                        NavItem::new("Roadmap", "/roadmap"),
                        NavItem::new("Changelog", "/changelog"),
                        NavItem::new("FAQ", "/faq"),
                    ],
                ),
            ],
            social_links: vec![
                SocialLink::new("github", "https://github.com/openchlsystem/OpenCHS-helpline"),
                SocialLink::new(
                    "linkedin",
                    "https://www.linkedin.com/company/bitz-it-consulting/",
                ),
            ],
        },
    }
}
