//! docsite - typed, validated site configuration for static documentation sites.
//!
//! The renderer asks for a [`config::SiteConfig`], either the built-in one
//! from [`config::SiteConfig::load`] or one read from `docsite.toml`, and
//! reads title, head tags, navigation, sidebar and social links from it.

pub mod config;
pub mod logger;

pub use config::{ConfigError, SiteConfig};
