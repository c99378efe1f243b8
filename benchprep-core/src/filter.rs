//! Drop benchmark result lines matching a set of substrings

use crate::error::{BenchError, Result};
use crate::report::is_result_line;

/// Literal substrings a result line must all contain to be dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<String>,
}

impl FilterSet {
    /// Build a filter set. At least one filter is required.
    pub fn new<I, S>(filters: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let filters: Vec<String> = filters.into_iter().map(Into::into).collect();
        if filters.is_empty() {
            return Err(BenchError::NotEnoughInputs {
                required: 1,
                found: 0,
            });
        }
        Ok(Self { filters })
    }

    /// Filters in the order they were given
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    /// Whether `line` contains every filter
    pub fn matches_all(&self, line: &str) -> bool {
        self.filters.iter().all(|filter| line.contains(filter.as_str()))
    }

    /// Whether `line` survives filtering.
    ///
    /// Lines that are not benchmark results are always kept; result lines
    /// are dropped only when every filter occurs in them.
    pub fn keeps(&self, line: &str) -> bool {
        !is_result_line(line) || !self.matches_all(line)
    }

    /// Apply the filter to a sequence of lines
    pub fn apply<'a, I>(&'a self, lines: I) -> impl Iterator<Item = &'a str> + 'a
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        lines.into_iter().filter(move |line| self.keeps(line))
    }
}
