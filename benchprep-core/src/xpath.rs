//! Driver feeding fixed XPath queries to an external parser binary
//!
//! Each query is written verbatim to a scratch file and the parser is run as
//! `<tool> -f <scratch>`. A non-zero exit stops the run at that query.

use crate::error::{BenchError, Result};
use crate::external::{ExternalTool, ToolOutput};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Queries exercised by the driver, in execution order.
///
/// The set mixes `/` and `\\` separators and attribute predicates to cover
/// the parser's escaping and path-separator handling.
pub const XPATH_QUERIES: [&str; 13] = [
    "/a",
    r"\\a",
    "//a",
    r"\\\\a",
    "/a/b",
    r"\\a/b",
    r"//a\\b",
    r"\\\\a/b",
    "/a/b[/@c]",
    r#"/a/b[/@c="d"]"#,
    "/a/b[/@c and /@d]",
    r#"/a/b[/@c and /@d="e"]"#,
    r"/a/b[/@c and /d\\e]",
];

/// Default scratch file, relative to the working directory
pub const DEFAULT_SCRATCH_FILE: &str = "./tmp";

/// Default parser executable, relative to the working directory
pub const DEFAULT_QUERY_TOOL: &str = "./query_xpath";

/// Runs the parser against a scratch file holding one query
pub trait QueryExecutor {
    /// Run against `scratch_file` and report the captured result
    fn execute(&mut self, scratch_file: &Path) -> Result<ToolOutput>;
}

impl QueryExecutor for ExternalTool {
    fn execute(&mut self, scratch_file: &Path) -> Result<ToolOutput> {
        self.run([Path::new("-f"), scratch_file])
    }
}

/// Result of a single query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Parser exited with status zero
    Passed(ToolOutput),
    /// Parser exited with a non-zero status
    Failed(ToolOutput),
}

impl From<ToolOutput> for QueryOutcome {
    fn from(output: ToolOutput) -> Self {
        if output.success() {
            QueryOutcome::Passed(output)
        } else {
            QueryOutcome::Failed(output)
        }
    }
}

/// Summary of a driver run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Queries that passed, in order
    pub passed: Vec<String>,
    /// First failing query, after which the run stopped
    pub failed: Option<String>,
}

impl RunSummary {
    /// Whether every query passed
    pub fn success(&self) -> bool {
        self.failed.is_none()
    }
}

/// A configured driver run
#[derive(Debug)]
pub struct QueryRun<E> {
    executor: E,
    scratch_file: PathBuf,
    interactive: bool,
}

impl<E: QueryExecutor> QueryRun<E> {
    /// Create a run using `executor` and the given scratch file
    pub fn new(executor: E, scratch_file: impl Into<PathBuf>) -> Self {
        Self {
            executor,
            scratch_file: scratch_file.into(),
            interactive: false,
        }
    }

    /// Print parser output after each passing query and wait for a line
    /// on `input` before continuing
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Scratch file the queries are written to
    pub fn scratch_file(&self) -> &Path {
        &self.scratch_file
    }

    /// Run `queries` in order, reporting to `out`.
    ///
    /// Stops at the first failing query and removes the scratch file. On a
    /// fully passing run the scratch file is left in place.
    pub fn run<W, R>(&mut self, queries: &[&str], out: &mut W, input: &mut R) -> Result<RunSummary>
    where
        W: Write,
        R: BufRead,
    {
        let mut summary = RunSummary::default();

        for query in queries {
            fs::write(&self.scratch_file, query)
                .map_err(|source| BenchError::io(&self.scratch_file, source))?;

            log::debug!("executing query {query}");
            match QueryOutcome::from(self.executor.execute(&self.scratch_file)?) {
                QueryOutcome::Failed(output) => {
                    writeln!(out, "TEST FAILED: {query} {}", output.stdout)
                        .map_err(BenchError::Report)?;
                    if let Err(e) = fs::remove_file(&self.scratch_file) {
                        log::warn!("failed to remove {}: {e}", self.scratch_file.display());
                    }
                    summary.failed = Some((*query).to_string());
                    return Ok(summary);
                }
                QueryOutcome::Passed(output) => {
                    writeln!(out, "PASSED: {query}").map_err(BenchError::Report)?;
                    if self.interactive {
                        writeln!(out, "{}", output.stdout).map_err(BenchError::Report)?;
                        out.flush().map_err(BenchError::Report)?;
                        let mut line = String::new();
                        input.read_line(&mut line).map_err(BenchError::Report)?;
                    }
                    summary.passed.push((*query).to_string());
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Records every query it sees and fails at a fixed position
    struct StubExecutor {
        seen: Vec<String>,
        fail_at: Option<usize>,
    }

    impl StubExecutor {
        fn new(fail_at: Option<usize>) -> Self {
            Self {
                seen: Vec::new(),
                fail_at,
            }
        }
    }

    impl QueryExecutor for &mut StubExecutor {
        fn execute(&mut self, scratch_file: &Path) -> Result<ToolOutput> {
            self.seen.push(fs::read_to_string(scratch_file).unwrap());
            let code = if self.fail_at == Some(self.seen.len() - 1) {
                2
            } else {
                0
            };
            Ok(ToolOutput {
                code: Some(code),
                stdout: format!("parsed #{}", self.seen.len()),
                stderr: String::new(),
            })
        }
    }

    #[test]
    fn test_query_list_contents() {
        assert_eq!(XPATH_QUERIES.len(), 13);
        assert_eq!(XPATH_QUERIES[1], "\\\\a");
        assert_eq!(XPATH_QUERIES[3], "\\\\\\\\a");
        assert_eq!(XPATH_QUERIES[6], "//a\\\\b");
        assert_eq!(XPATH_QUERIES[12], "/a/b[/@c and /d\\\\e]");
    }

    #[test]
    fn test_all_queries_pass() {
        let temp_dir = TempDir::new().unwrap();
        let scratch = temp_dir.path().join("tmp");
        let mut stub = StubExecutor::new(None);
        let mut out = Vec::new();

        let summary = QueryRun::new(&mut stub, &scratch)
            .run(&XPATH_QUERIES, &mut out, &mut Cursor::new(""))
            .unwrap();

        assert!(summary.success());
        assert_eq!(summary.passed.len(), 13);
        assert_eq!(stub.seen, XPATH_QUERIES);
        let report = String::from_utf8(out).unwrap();
        assert!(report.starts_with("PASSED: /a\n"));
        assert_eq!(report.lines().count(), 13);
        // left behind on success
        assert_eq!(fs::read_to_string(&scratch).unwrap(), XPATH_QUERIES[12]);
    }

    #[test]
    fn test_failure_stops_run() {
        let temp_dir = TempDir::new().unwrap();
        let scratch = temp_dir.path().join("tmp");
        let mut stub = StubExecutor::new(Some(4));
        let mut out = Vec::new();

        let summary = QueryRun::new(&mut stub, &scratch)
            .run(&XPATH_QUERIES, &mut out, &mut Cursor::new(""))
            .unwrap();

        assert!(!summary.success());
        assert_eq!(summary.failed.as_deref(), Some("/a/b"));
        assert_eq!(summary.passed.len(), 4);
        assert_eq!(stub.seen, &XPATH_QUERIES[..5]);
        assert!(!scratch.exists());

        let report = String::from_utf8(out).unwrap();
        assert!(report.ends_with("TEST FAILED: /a/b parsed #5\n"));
    }

    #[test]
    fn test_queries_written_without_newline() {
        let temp_dir = TempDir::new().unwrap();
        let scratch = temp_dir.path().join("tmp");
        let mut stub = StubExecutor::new(None);

        QueryRun::new(&mut stub, &scratch)
            .run(&["/a/b[/@c]"], &mut Vec::<u8>::new(), &mut Cursor::new(""))
            .unwrap();

        assert_eq!(stub.seen, ["/a/b[/@c]"]);
    }

    #[test]
    fn test_interactive_prints_output_and_waits() {
        let temp_dir = TempDir::new().unwrap();
        let scratch = temp_dir.path().join("tmp");
        let mut stub = StubExecutor::new(None);
        let mut out = Vec::new();
        let mut input = Cursor::new("\n\n");

        QueryRun::new(&mut stub, &scratch)
            .interactive(true)
            .run(&XPATH_QUERIES[..2], &mut out, &mut input)
            .unwrap();

        let report = String::from_utf8(out).unwrap();
        assert_eq!(
            report,
            "PASSED: /a\nparsed #1\nPASSED: \\\\a\nparsed #2\n"
        );
        assert_eq!(input.position(), 2);
    }
}
