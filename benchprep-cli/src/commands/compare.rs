//! Strip-and-compare command implementation

use super::strip::read_stripped;
use super::Context;
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::progress::ProgressReporter;
use anyhow::{Context as _, Result};
use benchprep_core::{stat_path, ExternalTool, IntermediateFiles};
use clap::Args;
use std::fs::File;
use std::path::PathBuf;

/// Minimum number of benchmark reports to compare
pub const MIN_COMPARED_FILES: usize = 3;

const USAGE: &str = "benchprep strip-and-compare FILE FILE FILE... OUTFILE";

/// Arguments for the strip-and-compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Benchmark reports to compare (supports glob), followed by the output file
    #[arg(value_name = "FILE", required = true)]
    pub paths: Vec<String>,

    /// Comparison tool invoked on the stripped copies
    #[arg(long, value_name = "PROGRAM", env = "BENCHSTAT")]
    pub benchstat: Option<PathBuf>,
}

impl CompareArgs {
    /// Execute the strip-and-compare command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let (output, patterns) = self
            .paths
            .split_last()
            .ok_or_else(|| CliError::Usage(USAGE.to_string()))?;
        if patterns.is_empty() {
            return Err(CliError::Usage(USAGE.to_string()).into());
        }

        let files = resolve_patterns(patterns)?;
        if files.len() < MIN_COMPARED_FILES {
            return Err(CliError::Usage(USAGE.to_string()).into());
        }

        let tool = ExternalTool::new(
            self.benchstat
                .clone()
                .unwrap_or_else(|| ctx.config.tools.benchstat.clone()),
        );

        let mut progress = ProgressReporter::new(ctx.quiet);
        progress.init_files(files.len() as u64);

        // removed when dropped, whatever happens below
        let mut intermediates = IntermediateFiles::new();
        for file in &files {
            let destination = stat_path(file);
            intermediates.write(&destination, &read_stripped(file)?)?;
            progress.file_completed(&destination.display().to_string());
        }
        progress.finish();

        let output_file =
            File::create(output).with_context(|| format!("Failed to create {output}"))?;
        log::info!(
            "Comparing {} files with {}",
            intermediates.paths().len(),
            tool.program().display()
        );
        let status = tool.run_to_file(intermediates.paths(), output_file)?;
        if !status.success() {
            log::warn!("{} exited with {status}", tool.program().display());
        }

        Ok(())
    }
}
