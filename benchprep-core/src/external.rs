//! External programs and the intermediate files handed to them

use crate::error::{BenchError, Result};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Captured result of an external program run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl ToolOutput {
    /// Whether the program exited with status zero
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// An external program invoked as an opaque subprocess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTool {
    program: PathBuf,
}

impl ExternalTool {
    /// Wrap `program`, resolved through `PATH` when it has no separator
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program path or name
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run with `args`, waiting for exit and capturing both output streams
    pub fn run<I, S>(&self, args: I) -> Result<ToolOutput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        log::debug!("running {}", self.program.display());
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| self.spawn_error(source))?;

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Run with `args`, sending standard output into `destination`
    pub fn run_to_file<I, S>(&self, args: I, destination: File) -> Result<ExitStatus>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        log::debug!("running {} with redirected stdout", self.program.display());
        Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(destination))
            .status()
            .map_err(|source| self.spawn_error(source))
    }

    fn spawn_error(&self, source: std::io::Error) -> BenchError {
        BenchError::ToolSpawn {
            program: self.program.clone(),
            source,
        }
    }
}

/// Files written for a single invocation and removed when dropped.
///
/// Removal happens on every exit path, including early returns through `?`
/// and unwinding.
#[derive(Debug, Default)]
pub struct IntermediateFiles {
    paths: Vec<PathBuf>,
}

impl IntermediateFiles {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `contents` to `path` and take ownership of the file
    pub fn write(&mut self, path: impl Into<PathBuf>, contents: &str) -> Result<()> {
        let path = path.into();
        fs::write(&path, contents).map_err(|source| BenchError::io(&path, source))?;
        self.paths.push(path);
        Ok(())
    }

    /// Owned paths in creation order
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl Drop for IntermediateFiles {
    fn drop(&mut self) {
        for path in self.paths.drain(..) {
            match fs::remove_file(&path) {
                Ok(()) => log::debug!("removed {}", path.display()),
                Err(e) => log::warn!("failed to remove {}: {e}", path.display()),
            }
        }
    }
}
