//! XPath test driver command implementation

use super::Context;
use crate::error::CliError;
use anyhow::Result;
use benchprep_core::{ExternalTool, QueryRun, XPATH_QUERIES};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the xpath-test command
#[derive(Debug, Args)]
pub struct XPathTestArgs {
    /// Parser executable, invoked as `<PROGRAM> -f <SCRATCH>`
    #[arg(long, value_name = "PROGRAM", env = "QUERY_XPATH")]
    pub tool: Option<PathBuf>,

    /// File each query is written to
    #[arg(long, value_name = "FILE")]
    pub scratch: Option<PathBuf>,

    /// Print parser output after each query and wait for Enter
    #[arg(short, long)]
    pub interactive: bool,

    /// Any extra argument also enables interactive mode
    #[arg(value_name = "ARGS", hide = true)]
    pub extra: Vec<String>,
}

impl XPathTestArgs {
    /// Execute the xpath-test command
    pub fn execute(&self, ctx: &Context) -> Result<()> {
        let tool = ExternalTool::new(
            self.tool
                .clone()
                .unwrap_or_else(|| ctx.config.tools.query_xpath.clone()),
        );
        let scratch = self
            .scratch
            .clone()
            .unwrap_or_else(|| ctx.config.xpath.scratch_file.clone());
        let interactive = self.interactive || !self.extra.is_empty();

        log::info!(
            "Running {} queries against {}",
            XPATH_QUERIES.len(),
            tool.program().display()
        );

        let stdout = io::stdout();
        let stdin = io::stdin();
        let mut out = stdout.lock();
        let summary = QueryRun::new(tool, scratch)
            .interactive(interactive)
            .run(&XPATH_QUERIES, &mut out, &mut stdin.lock())?;
        out.flush()?;

        match summary.failed {
            Some(query) => Err(CliError::TestFailed(query).into()),
            None => Ok(()),
        }
    }
}
