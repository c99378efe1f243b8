//! Filter command implementation

use super::Context;
use crate::input::FileReader;
use crate::output::{open_output, LineWriter};
use anyhow::Result;
use benchprep_core::FilterSet;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the filter command
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Benchmark report to filter
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Substrings that must all occur in a result line for it to be dropped.
    /// Filters spelled like an option (`-o`, `-q`, `-v`, `-c`) go after `--`
    #[arg(value_name = "FILTER", required = true, allow_hyphen_values = true)]
    pub filters: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl FilterArgs {
    /// Execute the filter command
    pub fn execute(&self, _ctx: &Context) -> Result<()> {
        let filters = FilterSet::new(self.filters.iter().cloned())?;
        let report = FileReader::read_report(&self.file)?;
        log::debug!("Filters: {:?}", filters.filters());

        let mut writer = LineWriter::new(open_output(self.output.as_deref())?);
        writer.write_all(filters.apply(report.lines().iter().map(String::as_str)))?;
        writer.finish()?;

        log::info!(
            "Kept {} of {} lines",
            writer.lines_written(),
            report.len()
        );
        Ok(())
    }
}
