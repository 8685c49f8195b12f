use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for traverse computations
pub type TraverseResult<T> = Result<T, TraverseError>;

/// Failures of a traverse computation. The first failure aborts the whole
/// computation; no partial report is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraverseError {
    #[error("Invalid leg {} ({}): {issue}", .index + 1, line_of(.index))]
    InvalidLeg { index: usize, issue: LegIssue },

    #[error("Traverse must have {} legs, got {count}", leg_range(.min, .max))]
    InvalidTraverseSize { count: usize, min: usize, max: usize },

    #[error("Degenerate traverse: perimeter {perimeter} is not a positive finite length")]
    DegenerateTraverse { perimeter: f64 },
}

impl TraverseError {
    /// Stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            TraverseError::InvalidLeg { .. } => "InvalidLeg",
            TraverseError::InvalidTraverseSize { .. } => "InvalidTraverseSize",
            TraverseError::DegenerateTraverse { .. } => "DegenerateTraverse",
        }
    }

    /// Zero-based index of the offending leg, if the error concerns one
    pub fn leg_index(&self) -> Option<usize> {
        match self {
            TraverseError::InvalidLeg { index, .. } => Some(*index),
            _ => None,
        }
    }
}

fn line_of(index: &usize) -> String {
    crate::algorithms::coordinates::line_label(*index)
}

/// `usize::MAX` as the upper bound means the count is unbounded above
fn leg_range(min: &usize, max: &usize) -> String {
    if *max == usize::MAX {
        format!("at least {}", min)
    } else {
        format!("between {} and {}", min, max)
    }
}

/// Which input field of a leg was at fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegField {
    Length,
    Bearing,
}

impl fmt::Display for LegField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegField::Length => write!(f, "length"),
            LegField::Bearing => write!(f, "bearing"),
        }
    }
}

/// Why a single leg was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LegIssue {
    #[error("{field} is missing")]
    Missing { field: LegField },

    #[error("{field} '{value}' is not a number")]
    NotNumeric { field: LegField, value: String },

    #[error("{field} is not a finite number")]
    NonFinite { field: LegField },

    #[error("length must be positive, got {length}")]
    NonPositiveLength { length: f64 },
}

/// Failure body handed to a transport layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
    pub leg_index: Option<usize>,
}

impl From<&TraverseError> for ErrorResponse {
    fn from(error: &TraverseError) -> Self {
        Self {
            error: error.to_string(),
            kind: error.kind().to_string(),
            leg_index: error.leg_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_leg_message_names_line() {
        let error = TraverseError::InvalidLeg {
            index: 2,
            issue: LegIssue::NonPositiveLength { length: 0.0 },
        };
        assert_eq!(
            error.to_string(),
            "Invalid leg 3 (C-D): length must be positive, got 0"
        );
        assert_eq!(error.kind(), "InvalidLeg");
        assert_eq!(error.leg_index(), Some(2));
    }

    #[test]
    fn test_size_message() {
        let capped = TraverseError::InvalidTraverseSize { count: 21, min: 2, max: 20 };
        assert_eq!(capped.to_string(), "Traverse must have between 2 and 20 legs, got 21");

        let open = TraverseError::InvalidTraverseSize { count: 1, min: 2, max: usize::MAX };
        assert_eq!(open.to_string(), "Traverse must have at least 2 legs, got 1");
    }

    #[test]
    fn test_missing_field_message() {
        let issue = LegIssue::Missing { field: LegField::Bearing };
        assert_eq!(issue.to_string(), "bearing is missing");
    }

    #[test]
    fn test_error_response_body() {
        let error = TraverseError::InvalidTraverseSize { count: 1, min: 2, max: 20 };
        let body = ErrorResponse::from(&error);
        assert_eq!(body.kind, "InvalidTraverseSize");
        assert_eq!(body.leg_index, None);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Traverse must have between 2 and 20 legs, got 1");
        assert!(json["leg_index"].is_null());
    }
}
