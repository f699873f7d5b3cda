//! Config file support (`find-globals.toml`).

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default outline tool when neither the CLI nor the config names one.
pub const DEFAULT_TOOL: &str = "go-outline";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Outline tool executable. Overridden by `--tool`.
    pub tool: Option<String>,

    /// File paths to skip entirely, merged with `--exclude` flags.
    pub exclude: Vec<String>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
