//! JSON output

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a JSON value to a file with 2-space indentation
pub struct JsonWriter;

impl JsonWriter {
    /// Serialize `value` to `path`, without a trailing newline
    pub fn write_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)
            .with_context(|| format!("Failed to write JSON to: {}", path.display()))?;
        writer.flush()?;
        Ok(())
    }
}
