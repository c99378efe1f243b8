//! Combine command implementation

use super::Context;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{open_output, LineWriter};
use anyhow::Result;
use benchprep_core::combine::{combine, MIN_REPORTS};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the combine command
#[derive(Debug, Args)]
pub struct CombineArgs {
    /// Benchmark reports to merge, in order (supports glob)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl CombineArgs {
    /// Execute the combine command
    pub fn execute(&self, _ctx: &Context) -> Result<()> {
        let files = resolve_patterns(&self.files)?;
        if files.len() < MIN_REPORTS {
            return Err(CliError::Usage(
                "benchprep combine FILE FILE... (at least two files are required)".to_string(),
            )
            .into());
        }

        let reports = files
            .iter()
            .map(|path| FileReader::read_report(path))
            .collect::<Result<Vec<_>>>()?;
        log::info!("Combining {} reports", reports.len());

        let lines = combine(&reports)?;
        let mut writer = LineWriter::new(open_output(self.output.as_deref())?);
        writer.write_all(lines)?;
        writer.finish()
    }
}
