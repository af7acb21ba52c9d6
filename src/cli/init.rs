//! Configuration file generation.
//!
//! Creates a starter docsite.toml seeded with the built-in descriptor.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use docsite::config::{CONFIG_FILE, SiteConfig};
use docsite::log;

/// Generate docsite.toml content with a header comment.
pub fn generate_config_template() -> Result<String> {
    let config = SiteConfig::load()?;

    let mut out = String::new();
    out.push_str(&format!(
        "# docsite configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("#\n");
    out.push_str("# [site]            title, description\n");
    out.push_str("# [[site.head]]     tags injected into <head>\n");
    out.push_str("# [[theme.nav]]     top navigation, in order\n");
    out.push_str("# [[theme.sidebar]] sidebar groups, in order\n");
    out.push_str("# [[theme.social_links]]\n");
    out.push_str("#\n");
    out.push_str("# Links are root-relative paths (\"/install\") or absolute URLs.\n\n");
    out.push_str(&config.to_toml().context("Failed to serialize default config")?);

    Ok(out)
}

/// Write the starter config to `root/config_name`.
pub fn write_config(root: &Path, config_name: &Path, force: bool) -> Result<()> {
    let path = root.join(config_name);
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    let content = generate_config_template()?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
