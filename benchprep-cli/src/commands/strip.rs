//! Strip command implementation

use super::Context;
use crate::input::{resolve_patterns, FileReader};
use crate::progress::ProgressReporter;
use anyhow::{Context as _, Result};
use benchprep_core::{stat_path, strip_labels};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the strip command
#[derive(Debug, Args)]
pub struct StripArgs {
    /// Benchmark reports to strip (supports glob)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,
}

impl StripArgs {
    /// Execute the strip command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let files = resolve_patterns(&self.files)?;

        let mut progress = ProgressReporter::new(ctx.quiet);
        progress.init_files(files.len() as u64);

        for file in &files {
            let destination = stat_path(file);
            let stripped = read_stripped(file)?;
            fs::write(&destination, stripped)
                .with_context(|| format!("Failed to write {}", destination.display()))?;
            progress.file_completed(&destination.display().to_string());
        }

        progress.finish();
        Ok(())
    }
}

/// Read `path` and remove every strategy label from its text
pub(crate) fn read_stripped(path: &Path) -> Result<String> {
    Ok(strip_labels(&FileReader::read_text(path)?))
}

