//! Configuration management for the Alloy language server.
//!
//! Handles:
//! - Command-line argument parsing
//! - Catalog extension file locations

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// File name looked up in the user config directory
pub const CATALOG_FILE_NAME: &str = "catalog.toml";

/// Command-line arguments for the Alloy language server
#[derive(Debug, Parser)]
#[command(name = "alloy-ls")]
#[command(about = "Language server for Grafana Alloy configuration files")]
#[command(version)]
pub struct Args {
    /// Extra catalog file with component types and attributes
    #[arg(long, help = "TOML file adding known components and attributes")]
    pub catalog: Option<PathBuf>,

    /// Log level for the language server
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog extension files, lowest priority first
    pub catalog_paths: Vec<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let mut catalog_paths = Vec::new();

        // User config directory first so an explicit file can override it
        if let Some(config_dir) = dirs::config_dir() {
            catalog_paths.push(config_dir.join("alloy-ls").join(CATALOG_FILE_NAME));
        }

        if let Some(path) = args.catalog {
            catalog_paths.push(path);
        }

        Ok(Config {
            catalog_paths,
            log_level: args.log_level,
        })
    }
}
