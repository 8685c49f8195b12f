//! Input validation for raw leg measurements
//!
//! Legs arrive the way a form or JSON client sends them: each value may be a
//! number or a numeric string. Validation is eager and stops at the first bad
//! leg; nothing is defaulted.

use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_MAX_LEGS, MIN_LEGS};
use crate::core::types::{Leg, Traverse};
use crate::validation::error::{LegField, LegIssue, TraverseError, TraverseResult};

/// A JSON number or a string holding one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Number(f64),
    Text(String),
}

impl From<f64> for NumberLike {
    fn from(value: f64) -> Self {
        NumberLike::Number(value)
    }
}

impl From<&str> for NumberLike {
    fn from(value: &str) -> Self {
        NumberLike::Text(value.to_string())
    }
}

/// Unvalidated leg as received from a caller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawLeg {
    #[serde(default)]
    pub length: Option<NumberLike>,
    #[serde(default)]
    pub bearing: Option<NumberLike>,
}

impl RawLeg {
    pub fn new(length: impl Into<NumberLike>, bearing: impl Into<NumberLike>) -> Self {
        Self {
            length: Some(length.into()),
            bearing: Some(bearing.into()),
        }
    }
}

/// Turns raw legs into a validated `Traverse`
#[derive(Debug, Clone)]
pub struct LegValidator {
    max_legs: usize,
}

impl LegValidator {
    pub fn new() -> Self {
        Self {
            max_legs: DEFAULT_MAX_LEGS,
        }
    }

    pub fn with_max_legs(max_legs: usize) -> Self {
        Self { max_legs }
    }

    /// Validate the leg count, then every leg in order
    pub fn validate(&self, raw_legs: &[RawLeg]) -> TraverseResult<Traverse> {
        if raw_legs.len() < MIN_LEGS || raw_legs.len() > self.max_legs {
            return Err(TraverseError::InvalidTraverseSize {
                count: raw_legs.len(),
                min: MIN_LEGS,
                max: self.max_legs,
            });
        }

        let legs = raw_legs
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                Self::validate_leg(raw).map_err(|issue| TraverseError::InvalidLeg { index, issue })
            })
            .collect::<TraverseResult<Vec<_>>>()?;

        Traverse::new(legs)
    }

    fn validate_leg(raw: &RawLeg) -> Result<Leg, LegIssue> {
        let length = parse_number(raw.length.as_ref(), LegField::Length)?;
        let bearing = parse_number(raw.bearing.as_ref(), LegField::Bearing)?;
        Leg::new(length, bearing)
    }
}

impl Default for LegValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one number-like field into a finite real
pub fn parse_number(value: Option<&NumberLike>, field: LegField) -> Result<f64, LegIssue> {
    let number = match value {
        None => return Err(LegIssue::Missing { field }),
        Some(NumberLike::Number(n)) => *n,
        Some(NumberLike::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(LegIssue::Missing { field });
            }
            trimmed.parse::<f64>().map_err(|_| LegIssue::NotNumeric {
                field,
                value: text.clone(),
            })?
        }
    };

    if !number.is_finite() {
        return Err(LegIssue::NonFinite { field });
    }
    Ok(number)
}
