//! Plain text output

use anyhow::Result;
use std::io::Write;

/// Line writer - outputs each line followed by a newline
pub struct LineWriter<W: Write> {
    writer: W,
    lines_written: usize,
}

impl<W: Write> LineWriter<W> {
    /// Create a new line writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Write a single line
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write every line of `lines`
    pub fn write_all<'a, I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// Number of lines written so far
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush buffered output
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
