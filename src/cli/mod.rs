//! Command-line interface module.

mod args;
pub mod check;
pub mod export;
pub mod init;

pub use args::{Cli, Commands, ExportFormat, SourceArgs};

use anyhow::{Context, Result};
use docsite::config::SiteConfig;

/// Resolve the descriptor for a command: built-in, or discovered upward
/// from the current directory.
pub fn load_config(cli: &Cli, source: &SourceArgs) -> Result<SiteConfig> {
    if source.builtin {
        docsite::debug!("config"; "using built-in descriptor");
        return Ok(SiteConfig::load()?);
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    SiteConfig::discover(&cwd, &cli.config, cli.strict).with_context(|| {
        format!(
            "Failed to load '{}'. Run 'docsite init' to create one.",
            cli.config.display()
        )
    })
}
