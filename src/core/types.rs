//! Core data types for traverse adjustment

use std::ops::Add;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::algorithms::bearing::normalize_bearing;
use crate::core::constants::MIN_LEGS;
use crate::validation::error::{LegField, LegIssue, TraverseError, TraverseResult};

/// One measured leg: length in meters and whole-circle bearing in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub length: f64,
    /// Normalized into `[0, 360)`
    pub bearing: f64,
}

impl Leg {
    /// Create a leg, rejecting non-finite values and non-positive lengths.
    /// Out-of-range bearings wrap around rather than fail.
    pub fn new(length: f64, bearing: f64) -> Result<Self, LegIssue> {
        if !length.is_finite() {
            return Err(LegIssue::NonFinite { field: LegField::Length });
        }
        if !bearing.is_finite() {
            return Err(LegIssue::NonFinite { field: LegField::Bearing });
        }
        if length <= 0.0 {
            return Err(LegIssue::NonPositiveLength { length });
        }

        Ok(Self {
            length,
            bearing: normalize_bearing(bearing),
        })
    }
}

/// Ordered legs of a closed traverse. Order is traverse order and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Traverse {
    legs: Vec<Leg>,
    perimeter: f64,
}

impl Traverse {
    /// Any upper bound on the leg count belongs to the caller
    /// (see `LegValidator`); only the minimum is enforced here.
    pub fn new(legs: Vec<Leg>) -> TraverseResult<Self> {
        if legs.len() < MIN_LEGS {
            return Err(TraverseError::InvalidTraverseSize {
                count: legs.len(),
                min: MIN_LEGS,
                max: usize::MAX,
            });
        }

        let perimeter: f64 = legs.iter().map(|leg| leg.length).sum();
        if !(perimeter.is_finite() && perimeter > 0.0) {
            return Err(TraverseError::DegenerateTraverse { perimeter });
        }

        Ok(Self { legs, perimeter })
    }

    /// Build a traverse from `(length, bearing)` pairs
    pub fn from_pairs(pairs: &[(f64, f64)]) -> TraverseResult<Self> {
        let legs = pairs
            .iter()
            .enumerate()
            .map(|(index, &(length, bearing))| {
                Leg::new(length, bearing).map_err(|issue| TraverseError::InvalidLeg { index, issue })
            })
            .collect::<TraverseResult<Vec<_>>>()?;
        Self::new(legs)
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Sum of all leg lengths
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }
}

/// Planar displacement of a leg: latitude (north) and departure (east)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LegVector {
    pub north: f64,
    pub east: f64,
}

impl LegVector {
    pub fn new(north: f64, east: f64) -> Self {
        Self { north, east }
    }

    pub fn to_vector2(self) -> Vector2<f64> {
        Vector2::new(self.north, self.east)
    }

    pub fn from_vector2(v: Vector2<f64>) -> Self {
        Self { north: v.x, east: v.y }
    }

    pub fn magnitude(&self) -> f64 {
        self.north.hypot(self.east)
    }
}

impl Add for LegVector {
    type Output = LegVector;

    fn add(self, rhs: LegVector) -> LegVector {
        LegVector::new(self.north + rhs.north, self.east + rhs.east)
    }
}

impl Add<Correction> for LegVector {
    type Output = LegVector;

    fn add(self, rhs: Correction) -> LegVector {
        LegVector::new(self.north + rhs.latitude, self.east + rhs.departure)
    }
}

/// Cumulative station position; station 0 sits on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub index: usize,
    pub north: f64,
    pub east: f64,
}

impl Station {
    pub fn origin() -> Self {
        let (north, east) = crate::core::constants::ORIGIN;
        Self { index: 0, north, east }
    }

    pub fn distance_to(&self, other: &Station) -> f64 {
        (self.north - other.north).hypot(self.east - other.east)
    }
}

/// Misclosure of the unadjusted traverse.
///
/// `delta_north`/`delta_east` are the sums of all leg vectors. `bearing` points
/// from the misclosed endpoint back to the origin, i.e. the correction direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosureError {
    pub delta_north: f64,
    pub delta_east: f64,
    pub magnitude: f64,
    pub bearing: f64,
}

impl ClosureError {
    pub fn is_perfect(&self) -> bool {
        self.magnitude == 0.0
    }
}

/// Bowditch correction applied to one leg's latitude and departure
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Correction {
    pub latitude: f64,
    pub departure: f64,
}

/// A leg after adjustment, alongside its original measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectedLeg {
    pub index: usize,
    pub original_length: f64,
    pub original_bearing: f64,
    pub lat_correction: f64,
    pub dep_correction: f64,
    pub adjusted_length: f64,
    pub adjusted_bearing: f64,
}
