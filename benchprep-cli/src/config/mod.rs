//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use benchprep_core::xpath::{DEFAULT_QUERY_TOOL, DEFAULT_SCRATCH_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// External programs
    #[serde(default)]
    pub tools: ToolsConfig,

    /// XPath test driver settings
    #[serde(default)]
    pub xpath: XPathConfig,
}

/// External program locations
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ToolsConfig {
    /// Comparison tool used by strip-and-compare
    pub benchstat: PathBuf,

    /// Parser executable exercised by xpath-test
    pub query_xpath: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            benchstat: PathBuf::from("benchstat"),
            query_xpath: PathBuf::from(DEFAULT_QUERY_TOOL),
        }
    }
}

/// XPath test driver configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct XPathConfig {
    /// File each query is written to before running the parser
    pub scratch_file: PathBuf,
}

impl Default for XPathConfig {
    fn default() -> Self {
        Self {
            scratch_file: PathBuf::from(DEFAULT_SCRATCH_FILE),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load `path` if given, otherwise use the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
