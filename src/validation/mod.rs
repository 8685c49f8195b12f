//! Input validation and error types

pub mod data;
pub mod error;

pub use data::{LegValidator, NumberLike, RawLeg};
pub use error::{ErrorResponse, LegField, LegIssue, TraverseError, TraverseResult};
