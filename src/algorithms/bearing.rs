//! Whole-circle bearing conversions
//!
//! Survey convention throughout: 0° is north, 90° is east, bearings increase
//! clockwise. A vector's `north` component is the latitude and its `east`
//! component the departure.

use crate::core::constants::{FULL_CIRCLE_DEG, QUARTER_TURN_DEG};
use crate::core::types::LegVector;
use crate::validation::error::{LegField, LegIssue};

/// Reduce any finite angle into `[0, 360)`
pub fn normalize_bearing(degrees: f64) -> f64 {
    let reduced = degrees.rem_euclid(FULL_CIRCLE_DEG);
    // rem_euclid of a tiny negative angle rounds up to exactly 360
    if reduced >= FULL_CIRCLE_DEG {
        0.0
    } else {
        reduced
    }
}

/// Sine and cosine of an angle in degrees.
///
/// The angle is first reduced to within 45° of a quarter turn, so multiples of
/// 90° produce exact 0/±1 components.
pub fn sin_cos_deg(degrees: f64) -> (f64, f64) {
    let quarters = (degrees / QUARTER_TURN_DEG).round();
    let remainder = degrees - quarters * QUARTER_TURN_DEG;
    let (s, c) = remainder.to_radians().sin_cos();

    match (quarters as i64).rem_euclid(4) {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

/// Whole-circle bearing of a (north, east) displacement.
/// A zero displacement has no direction and reports 0.
pub fn bearing_of(north: f64, east: f64) -> f64 {
    if north == 0.0 && east == 0.0 {
        return 0.0;
    }
    // Axis-aligned displacements map onto exact cardinal bearings
    if east == 0.0 {
        return if north > 0.0 { 0.0 } else { 180.0 };
    }
    if north == 0.0 {
        return if east > 0.0 { 90.0 } else { 270.0 };
    }
    normalize_bearing(east.atan2(north).to_degrees())
}

/// Converts leg measurements into planar displacement vectors
pub struct BearingVectorConverter;

impl BearingVectorConverter {
    /// Displacement of a leg of `length` meters along `bearing` degrees
    pub fn to_vector(length: f64, bearing: f64) -> Result<LegVector, LegIssue> {
        if !length.is_finite() {
            return Err(LegIssue::NonFinite { field: LegField::Length });
        }
        if !bearing.is_finite() {
            return Err(LegIssue::NonFinite { field: LegField::Bearing });
        }
        if length <= 0.0 {
            return Err(LegIssue::NonPositiveLength { length });
        }

        let (sin, cos) = sin_cos_deg(normalize_bearing(bearing));
        Ok(LegVector::new(length * cos, length * sin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize_bearing() {
        assert_eq!(normalize_bearing(0.0), 0.0);
        assert_eq!(normalize_bearing(360.0), 0.0);
        assert_eq!(normalize_bearing(725.5), 5.5);
        assert_eq!(normalize_bearing(-45.0), 315.0);
        assert_eq!(normalize_bearing(-1e-20), 0.0);

        for raw in [-1e-13, -720.0, 359.999_999_999, 1e9, -1e9] {
            let b = normalize_bearing(raw);
            assert!((0.0..360.0).contains(&b), "{} -> {}", raw, b);
        }
    }

    #[test]
    fn test_cardinal_bearings_are_exact() {
        assert_eq!(BearingVectorConverter::to_vector(100.0, 0.0).unwrap(), LegVector::new(100.0, 0.0));
        assert_eq!(BearingVectorConverter::to_vector(100.0, 90.0).unwrap(), LegVector::new(0.0, 100.0));

        let south = BearingVectorConverter::to_vector(100.0, 180.0).unwrap();
        assert_eq!(south.north, -100.0);
        assert_eq!(south.east, 0.0);

        let west = BearingVectorConverter::to_vector(100.0, 270.0).unwrap();
        assert_eq!(west.north, 0.0);
        assert_eq!(west.east, -100.0);
    }

    #[test]
    fn test_oblique_bearing() {
        let v = BearingVectorConverter::to_vector(141.0, 225.0).unwrap();
        assert_abs_diff_eq!(v.north, -99.702_056, epsilon = 1e-6);
        assert_abs_diff_eq!(v.east, -99.702_056, epsilon = 1e-6);

        let v = BearingVectorConverter::to_vector(10.0, 30.0).unwrap();
        assert_abs_diff_eq!(v.north, 10.0 * 3f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.east, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bearing_wraps_instead_of_failing() {
        let wrapped = BearingVectorConverter::to_vector(20.0, 405.0).unwrap();
        let plain = BearingVectorConverter::to_vector(20.0, 45.0).unwrap();
        assert_abs_diff_eq!(wrapped.north, plain.north, epsilon = 1e-12);
        assert_abs_diff_eq!(wrapped.east, plain.east, epsilon = 1e-12);

        let negative = BearingVectorConverter::to_vector(20.0, -90.0).unwrap();
        assert_eq!(negative.east, -20.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            BearingVectorConverter::to_vector(0.0, 10.0),
            Err(LegIssue::NonPositiveLength { length: 0.0 })
        );
        assert_eq!(
            BearingVectorConverter::to_vector(f64::INFINITY, 10.0),
            Err(LegIssue::NonFinite { field: LegField::Length })
        );
        assert_eq!(
            BearingVectorConverter::to_vector(5.0, f64::NAN),
            Err(LegIssue::NonFinite { field: LegField::Bearing })
        );
    }

    #[test]
    fn test_bearing_of_quadrants() {
        assert_eq!(bearing_of(0.0, 0.0), 0.0);
        assert_abs_diff_eq!(bearing_of(1.0, 0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bearing_of(0.0, 1.0), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bearing_of(-1.0, 0.0), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bearing_of(0.0, -1.0), 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bearing_of(-1.0, -1.0), 225.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bearing_of(1.0, -1.0), 315.0, epsilon = 1e-12);
    }
}
