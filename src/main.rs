//! docsite - site configuration tool for static documentation sites.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use docsite::config::init_config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    docsite::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, force } => {
            let cwd = std::env::current_dir()?;
            let root = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
            cli::init::write_config(&root, &cli.config, *force)
        }
        Commands::Check { source } => {
            let config = init_config(cli::load_config(&cli, source)?);
            cli::check::check_config(&config);
            Ok(())
        }
        Commands::Export {
            source,
            format,
            pretty,
            output,
        } => {
            let config = init_config(cli::load_config(&cli, source)?);
            cli::export::export_config(&config, *format, *pretty, output.as_deref())
        }
    }
}
