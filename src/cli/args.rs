//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use docsite::config::CONFIG_FILE;
use std::path::PathBuf;

/// Site configuration tool for static documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docsite.toml)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Treat unknown config fields as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter docsite.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Load and validate the site configuration
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write the validated configuration for the renderer
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

/// Where the descriptor comes from.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Use the built-in descriptor instead of reading a config file
    #[arg(short, long)]
    pub builtin: bool,
}

/// Serialized form written by `export`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Toml,
}
