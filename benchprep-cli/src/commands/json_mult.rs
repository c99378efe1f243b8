//! JSON multiplier command implementation

use super::Context;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::JsonWriter;
use anyhow::{Context as _, Result};
use benchprep_core::{parse_copy_count, replicate};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the json-mult command
#[derive(Debug, Args)]
pub struct JsonMultArgs {
    /// Source JSON file holding a single object
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Number of copies of each key
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub copies: String,

    /// Destination JSON file
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,
}

impl JsonMultArgs {
    /// Execute the json-mult command
    pub fn execute(&self, _ctx: &Context) -> Result<()> {
        let copies = parse_copy_count(&self.copies)
            .map_err(|_| CliError::Usage("benchprep json-mult SOURCE N DEST".to_string()))?;

        let document = FileReader::read_json(&self.source)?;
        let result = replicate(&document, copies)
            .with_context(|| format!("Cannot replicate {}", self.source.display()))?;

        log::info!(
            "Writing {} keys to {}",
            result.len(),
            self.dest.display()
        );
        JsonWriter::write_file(&self.dest, &result)
    }
}
