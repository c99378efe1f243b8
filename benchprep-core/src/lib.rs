//! Benchprep core library
//!
//! Pure transformations used to prepare Go benchmark reports for tools such
//! as `benchstat` and `benchplot`, a JSON fixture multiplier, and the driver
//! that feeds fixed XPath queries to an external parser binary.
//!
//! Nothing here touches the terminal. Subprocesses and intermediate files
//! live in [`external`], the scratch file in [`xpath`]; everything else
//! operates on in-memory values.

#![warn(missing_docs)]

pub mod combine;
pub mod error;
pub mod external;
pub mod filter;
pub mod labels;
pub mod report;
pub mod replicate;
pub mod xpath;

pub use combine::combine;
pub use error::{BenchError, Result};
pub use external::{ExternalTool, IntermediateFiles, ToolOutput};
pub use filter::FilterSet;
pub use labels::{stat_path, strip_labels, STRATEGY_LABELS};
pub use replicate::{parse_copy_count, replicate};
pub use report::BenchmarkReport;
pub use xpath::{QueryExecutor, QueryOutcome, QueryRun, RunSummary, XPATH_QUERIES};
