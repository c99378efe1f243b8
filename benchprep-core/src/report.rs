//! Line-oriented view of a Go benchmark report
//!
//! A report produced by `go test -bench` starts with a four line preamble
//! (`goos`, `goarch`, `pkg`, `cpu`), then the result lines, and ends with a
//! two line footer (`PASS`, `ok <pkg> <time>`). Only that coarse layout is
//! used; individual result lines are never parsed.

/// Number of preamble lines at the start of a report
pub const HEADER_LINES: usize = 4;

/// Number of footer lines at the end of a report
pub const TRAILER_LINES: usize = 2;

/// Marker identifying a benchmark result line
pub const RESULT_MARKER: &str = "Benchmark";

/// Section a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Preamble line
    Header,
    /// Result or other intermediate line
    Body,
    /// Footer line
    Trailer,
}

impl Section {
    /// Classify line `index` of a report with `len` lines.
    ///
    /// Header wins over trailer, so reports shorter than six lines have an
    /// empty body instead of overlapping ranges.
    pub fn of(index: usize, len: usize) -> Self {
        if index < HEADER_LINES {
            Section::Header
        } else if index >= len.saturating_sub(TRAILER_LINES) {
            Section::Trailer
        } else {
            Section::Body
        }
    }
}

/// A benchmark report split into lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkReport {
    lines: Vec<String>,
}

impl BenchmarkReport {
    /// Split `text` into lines (`\n` or `\r\n` separated)
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    /// All lines in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the report has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines of the given section, in order
    pub fn section(&self, section: Section) -> impl Iterator<Item = &str> {
        let len = self.lines.len();
        self.lines
            .iter()
            .enumerate()
            .filter(move |(index, _)| Section::of(*index, len) == section)
            .map(|(_, line)| line.as_str())
    }
}

/// Whether `line` is a benchmark result line
pub fn is_result_line(line: &str) -> bool {
    line.contains(RESULT_MARKER)
}
