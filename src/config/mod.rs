//! Site configuration for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]  title, description, head tags
//! │   └── theme      # [theme] nav, sidebar, social links
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   ├── handle     # Global config handle
//! │   └── target     # Link target classification
//! ├── builtin.rs     # Built-in OpenCHS descriptor
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! A [`SiteConfig`] is only ever handed out after [`SiteConfig::validate`]
//! succeeded, so consumers never see a partially valid descriptor.

mod builtin;
pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    HeadTag, NavItem, SidebarGroup, SiteSectionConfig, SocialLink, ThemeSectionConfig,
};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Target, TargetError, cfg,
    init_config,
};

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{debug, log};

/// Default config filename
pub const CONFIG_FILE: &str = "docsite.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml.
///
/// This is the site descriptor read by the renderer: title, description,
/// head tags, navigation, sidebar groups and social links. Fields are only
/// reachable through accessors, and deserializing runs full validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawSiteConfig")]
pub struct SiteConfig {
    /// Path of the file this config was read from (internal use only)
    #[serde(skip)]
    config_path: PathBuf,

    /// Site metadata and head tags
    site: SiteSectionConfig,

    /// Navigation, sidebar and social links
    theme: ThemeSectionConfig,
}

/// Unvalidated shape of `docsite.toml`, as read by serde.
#[derive(Debug, Default, Deserialize)]
struct RawSiteConfig {
    #[serde(default)]
    site: SiteSectionConfig,

    #[serde(default)]
    theme: ThemeSectionConfig,
}

impl RawSiteConfig {
    /// Callers must validate before handing the result out.
    fn into_unchecked(self) -> SiteConfig {
        SiteConfig {
            config_path: PathBuf::new(),
            site: self.site,
            theme: self.theme,
        }
    }
}

/// Only descriptors without validation errors are constructed.
impl TryFrom<RawSiteConfig> for SiteConfig {
    type Error = ConfigDiagnostics;

    fn try_from(raw: RawSiteConfig) -> Result<Self, Self::Error> {
        let config = raw.into_unchecked();
        config.diagnostics().into_result()?;
        Ok(config)
    }
}

/// Descriptors are equal when their content is; where they were read from
/// does not matter.
impl PartialEq for SiteConfig {
    fn eq(&self, other: &Self) -> bool {
        self.site == other.site && self.theme == other.theme
    }
}

impl Eq for SiteConfig {}

impl SiteConfig {
    /// Build the built-in OpenCHS documentation descriptor.
    ///
    /// The values are literals, but they still go through full validation so
    /// a bad edit fails here instead of in the renderer.
    pub fn load() -> Result<Self, ConfigError> {
        let config = builtin::openchs();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file with unknown field detection.
    ///
    /// Unknown fields are reported as warnings, or rejected when
    /// `deny_unknown` is set.
    pub fn from_path(path: &Path, deny_unknown: bool) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (raw, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            if deny_unknown {
                return Err(ConfigError::UnknownFields(ignored));
            }
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let mut config = Self::from_raw(raw)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Search upward from `start` for `config_name` and load it.
    pub fn discover(
        start: &Path,
        config_name: &Path,
        deny_unknown: bool,
    ) -> Result<Self, ConfigError> {
        debug!("config"; "searching for {} from {}", config_name.display(), start.display());
        let path = find_config_file(start, config_name).ok_or_else(|| {
            ConfigError::Io(
                config_name.to_path_buf(),
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "config file not found in this directory or any parent",
                ),
            )
        })?;
        debug!("config"; "using {}", path.display());
        Self::from_path(&path, deny_unknown)
    }

    /// Validate a raw config, printing hints and warnings.
    fn from_raw(raw: RawSiteConfig) -> Result<Self, ConfigError> {
        let config = raw.into_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(RawSiteConfig, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect diagnostics for every section without printing anything.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);
        diag
    }

    /// Validate the whole descriptor.
    ///
    /// Collects all validation errors and returns them at once. Hints and
    /// warnings are printed but do not fail validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnostics();
        diag.print_hints_and_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    // ========================================================================
    // descriptor accessors
    // ========================================================================

    /// File this descriptor was read from, `None` for the built-in one.
    pub fn config_path(&self) -> Option<&Path> {
        (!self.config_path.as_os_str().is_empty()).then_some(self.config_path.as_path())
    }

    pub fn title(&self) -> &str {
        &self.site.title
    }

    pub fn description(&self) -> &str {
        &self.site.description
    }

    pub fn head_tags(&self) -> &[HeadTag] {
        &self.site.head
    }

    pub fn navigation(&self) -> &[NavItem] {
        &self.theme.nav
    }

    pub fn sidebar_groups(&self) -> &[SidebarGroup] {
        &self.theme.sidebar
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.theme.social_links
    }

    /// Total number of links across nav, sidebar and social links.
    pub fn link_count(&self) -> usize {
        self.theme.link_count()
    }

    // ========================================================================
    // export
    // ========================================================================

    /// Serialize to `docsite.toml` form.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Serialize to JSON for the renderer.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Parse and validate a descriptor from TOML text.
impl FromStr for SiteConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let raw: RawSiteConfig = toml::from_str(content)?;
        Self::from_raw(raw)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` section.
/// Panics if there are unknown fields (to catch config typos in tests)
/// or if the result does not validate.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (raw, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    SiteConfig::try_from(raw).unwrap()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_openchs_scenario() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config.title(), "OpenCHS Docs");
        assert_eq!(config.description(), "Child Helpline Case Management System");
        assert_eq!(config.navigation()[0], NavItem::new("Home", "/"));

        let social = config.social_links();
        let github: Vec<_> = social.iter().filter(|s| s.icon == "github").collect();
        let linkedin: Vec<_> = social.iter().filter(|s| s.icon == "linkedin").collect();
        assert_eq!(github.len(), 1);
        assert_eq!(linkedin.len(), 1);

        let host = |link: &SocialLink| Target::parse(&link.link).unwrap().host().map(str::to_owned);
        assert_eq!(host(github[0]).as_deref(), Some("github.com"));
        assert_eq!(host(linkedin[0]).as_deref(), Some("www.linkedin.com"));
    }

    #[test]
    fn test_getting_started_group() {
        let config = SiteConfig::load().unwrap();
        let group = config
            .sidebar_groups()
            .iter()
            .find(|g| g.text == "Getting Started")
            .unwrap();
        let labels: Vec<_> = group.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(labels, ["Overview", "Installation", "Usage"]);
    }

    #[test]
    fn test_load_is_idempotent() {
        assert_eq!(SiteConfig::load().unwrap(), SiteConfig::load().unwrap());
    }

    #[test]
    fn test_builtin_declaration_order() {
        let config = SiteConfig::load().unwrap();
        let nav: Vec<_> = config.navigation().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(nav, ["Home", "Install", "Features", "Docs", "Roadmap", "FAQ"]);

        let groups: Vec<_> = config.sidebar_groups().iter().map(|g| g.text.as_str()).collect();
        assert_eq!(
            groups,
            [
                "Getting Started",
                "Core Features",
                "Community & Contribution",
                "Project Evolution"
            ]
        );
        assert!(config.sidebar_groups().iter().all(|g| g.items.len() == 3));
    }

    #[test]
    fn test_every_nav_entry_non_empty() {
        let config = SiteConfig::load().unwrap();
        let sidebar_items = config.sidebar_groups().iter().flat_map(|g| &g.items);
        for item in config.navigation().iter().chain(sidebar_items) {
            assert!(!item.text.is_empty());
            assert!(!item.link.is_empty());
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SiteConfig::load().unwrap();
        let toml = config.to_toml().unwrap();
        let parsed: SiteConfig = toml.parse().unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SiteConfig::load().unwrap();
        for pretty in [false, true] {
            let json = config.to_json(pretty).unwrap();
            let parsed: SiteConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, config);
        }
    }

    #[test]
    fn test_json_shape() {
        let config = SiteConfig::load().unwrap();
        let value: serde_json::Value = serde_json::from_str(&config.to_json(false).unwrap()).unwrap();
        assert_eq!(value["site"]["title"], "OpenCHS Docs");
        assert_eq!(value["site"]["head"][0]["tag"], "link");
        assert_eq!(value["theme"]["nav"][0]["link"], "/");
        assert_eq!(value["theme"]["social_links"][1]["icon"], "linkedin");
        assert!(value.get("config_path").is_none());
    }

    #[test]
    fn test_deserialize_rejects_invalid_descriptor() {
        let json = r#"{
            "site": { "title": "", "description": "d", "head": [{ "tag": "div" }] },
            "theme": { "nav": [{ "text": "", "link": "" }] }
        }"#;
        let err = serde_json::from_str::<SiteConfig>(json).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("site.title"));
        assert!(message.contains("theme.nav[0].link"));

        let toml = "[site]\ntitle = \"Docs\"\n[[theme.nav]]\ntext = \"Home\"\nlink = \"\"\n";
        assert!(toml::from_str::<SiteConfig>(toml).is_err());
    }

    #[test]
    fn test_config_path_accessor() {
        assert_eq!(SiteConfig::load().unwrap().config_path(), None);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = "[site\ntitle = \"Docs\"".parse::<SiteConfig>();
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_from_str_rejects_all_errors_at_once() {
        let content = r#"
[site]
title = ""

[[site.head]]
tag = "div"

[[theme.nav]]
text = "Home"
link = ""
"#;
        let err = content.parse::<SiteConfig>().unwrap_err();
        let ConfigError::Diagnostics(diag) = err else {
            panic!("expected diagnostics");
        };
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.title", "site.head[0].tag", "theme.nav[0].link"]);
    }

    #[test]
    fn test_from_str_missing_link_field() {
        let content = "[site]\ntitle = \"Docs\"\n[[theme.nav]]\ntext = \"Home\"\n";
        assert!(matches!(
            content.parse::<SiteConfig>(),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (raw, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(raw.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, SiteConfig::load().unwrap().to_toml().unwrap()).unwrap();

        let config = SiteConfig::from_path(&path, true).unwrap();
        assert_eq!(config.config_path(), Some(path.as_path()));
        assert_eq!(config, SiteConfig::load().unwrap());
    }

    #[test]
    fn test_from_path_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[site]\ntitle = \"Docs\"\ntitel = \"typo\"\n").unwrap();

        let lenient = SiteConfig::from_path(&path, false).unwrap();
        assert_eq!(lenient.title(), "Docs");

        match SiteConfig::from_path(&path, true) {
            Err(ConfigError::UnknownFields(fields)) => assert_eq!(fields, ["site.titel"]),
            other => panic!("expected unknown fields error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            SiteConfig::from_path(&path, false),
            Err(ConfigError::Io(p, _)) if p == path
        ));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("guide");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[site]\ntitle = \"Found\"\ndescription = \"d\"\n",
        )
        .unwrap();

        let config = SiteConfig::discover(&nested, Path::new(CONFIG_FILE), true).unwrap();
        assert_eq!(config.title(), "Found");
    }

    #[test]
    fn test_discover_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = SiteConfig::discover(dir.path(), Path::new("no-such-docsite-config.toml"), false);
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }
}
