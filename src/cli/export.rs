//! Descriptor export for the external renderer.

use anyhow::{Context, Result};
use std::{fs, io::Write, path::Path};

use super::ExportFormat;
use docsite::config::SiteConfig;
use docsite::log;

/// Serialize the descriptor in the requested format.
pub fn render(config: &SiteConfig, format: ExportFormat, pretty: bool) -> Result<String> {
    let mut out = match format {
        ExportFormat::Json => config.to_json(pretty).context("Failed to serialize JSON")?,
        ExportFormat::Toml => config.to_toml().context("Failed to serialize TOML")?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Write the descriptor to `output`, or stdout when `None`.
pub fn export_config(
    config: &SiteConfig,
    format: ExportFormat,
    pretty: bool,
    output: Option<&Path>,
) -> Result<()> {
    let content = render(config, format, pretty)?;

    match output {
        Some(path) => {
            fs::write(path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("export"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
