//! Command line configuration.

use anyhow::{Result, bail};
use chrono::{Datelike, Local};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Northgate.
#[derive(Debug, Clone, Parser)]
#[command(name = "northgate", version, about, long_about = None)]
pub struct Config {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Copyright year shown in the footer (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Path prefix for every internal link, e.g. "/school"
    #[arg(long, default_value = "")]
    pub base_path: String,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base path is not empty and either lacks a leading
    /// slash or ends with one.
    pub fn validate(&self) -> Result<()> {
        if self.base_path.is_empty() {
            return Ok(());
        }
        if !self.base_path.starts_with('/') {
            bail!("Base path must start with '/': {}", self.base_path);
        }
        if self.base_path.ends_with('/') {
            bail!("Base path must not end with '/': {}", self.base_path);
        }
        if self.base_path.contains("..") {
            bail!("Base path contains directory traversal: {}", self.base_path);
        }

        Ok(())
    }

    /// Returns the copyright year from configuration or the local clock.
    pub fn copyright_year(&self) -> i32 {
        self.year.unwrap_or_else(|| Local::now().year())
    }
}
