//! File reading utilities

use anyhow::{Context, Result};
use benchprep_core::BenchmarkReport;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a benchmark report split into lines
    pub fn read_report(path: &Path) -> Result<BenchmarkReport> {
        Ok(BenchmarkReport::parse(&Self::read_text(path)?))
    }

    /// Read and parse a JSON document
    pub fn read_json(path: &Path) -> Result<Value> {
        let content = Self::read_text(path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from: {}", path.display()))
    }
}
