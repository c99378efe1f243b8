//! Strategy label stripping for cross-variant comparison
//!
//! Benchmarks of the same grammar are run once per parser strategy and the
//! strategy name ends up in package paths and benchmark names. Removing the
//! names lets `benchstat` line up results from different strategies.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Strategy labels in removal order.
///
/// `opp` is a substring of the other two and must be removed last.
pub const STRATEGY_LABELS: [&str; 3] = ["copp", "aopp", "opp"];

/// Suffix appended to the file stem of a stripped copy
pub const STAT_SUFFIX: &str = "_stat";

/// Remove every strategy label, lower and upper case, from `text`.
///
/// Removal is plain substring replacement, so labels embedded in longer
/// tokens are removed as well.
pub fn strip_labels(text: &str) -> String {
    let mut stripped = text.to_owned();
    for label in STRATEGY_LABELS {
        stripped = stripped.replace(label, "");
        stripped = stripped.replace(&label.to_uppercase(), "");
    }
    stripped
}

/// Path of the stripped copy of `path`: `{stem}_stat{ext}` in the same
/// directory.
pub fn stat_path(path: &Path) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = path.file_stem() {
        name.push(stem);
    }
    name.push(STAT_SUFFIX);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}
