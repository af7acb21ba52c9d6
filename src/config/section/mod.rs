//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module  | TOML Section | Purpose                              |
//! |---------|--------------|--------------------------------------|
//! | `site`  | `[site]`     | Title, description, head tags        |
//! | `theme` | `[theme]`    | Navigation, sidebar, social links    |

pub mod site;
pub mod theme;

pub use site::{HeadTag, SiteSectionConfig};
pub use theme::{NavItem, SidebarGroup, SocialLink, ThemeSectionConfig};
