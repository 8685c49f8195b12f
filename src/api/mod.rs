//! Traverse adjustment API
//!
//! `compute` takes raw leg measurements and returns an `AdjustmentReport`;
//! the formatting writers render that report for people or other programs.

pub mod assembler;
pub mod blocking;
pub mod formatting;
pub mod types;

pub use assembler::ReportAssembler;
pub use blocking::{compute, TraverseAdjuster};
pub use formatting::{
    CsvFormatter, FormattedErrorInfo, FormattedReport, FormattedRow, JsonFormatter, ReportFormatter, TextFormatter,
};
pub use types::{AdjustmentReport, BowditchData, ErrorInfo, PlotData, TableRow};
