//! Merge several benchmark reports into one
//!
//! The output keeps the preamble and the footer of the first report and the
//! bodies of every report, so the result still looks like the output of a
//! single `go test -bench` run to tools like `benchplot`.

use crate::error::{BenchError, Result};
use crate::report::{BenchmarkReport, Section};

/// Minimum number of reports accepted by [`combine`]
pub const MIN_REPORTS: usize = 2;

/// Combine `reports` into a single sequence of lines.
///
/// Output is the header of the first report, the bodies of all reports in
/// order, then the trailer of the first report.
pub fn combine(reports: &[BenchmarkReport]) -> Result<Vec<&str>> {
    if reports.len() < MIN_REPORTS {
        return Err(BenchError::NotEnoughInputs {
            required: MIN_REPORTS,
            found: reports.len(),
        });
    }
    let first = &reports[0];

    let mut lines: Vec<&str> = first.section(Section::Header).collect();
    for report in reports {
        lines.extend(report.section(Section::Body));
    }
    lines.extend(first.section(Section::Trailer));

    log::debug!(
        "combined {} reports into {} lines",
        reports.len(),
        lines.len()
    );
    Ok(lines)
}
