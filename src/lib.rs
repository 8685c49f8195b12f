//! Traverse Adjustment
//!
//! Closure analysis and Bowditch (compass rule) adjustment of closed survey
//! traverses measured as lengths and whole-circle bearings.

pub mod core;
pub mod algorithms;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{ClosureError, Correction, CorrectedLeg, Leg, LegVector, Station, Traverse};
pub use crate::algorithms::{BearingVectorConverter, BowditchCorrector, ClosureAnalyzer, CoordinateReconstructor};
pub use crate::validation::{ErrorResponse, LegField, LegIssue, LegValidator, NumberLike, RawLeg, TraverseError, TraverseResult};
pub use crate::utils::{ConfigError, DisplayConfig, EngineConfig};
pub use crate::api::{
    compute, AdjustmentReport, BowditchData, CsvFormatter, ErrorInfo, FormattedReport, JsonFormatter, PlotData,
    ReportAssembler, ReportFormatter, TableRow, TextFormatter, TraverseAdjuster,
};
