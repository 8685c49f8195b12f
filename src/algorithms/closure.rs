//! Misclosure analysis of an unadjusted traverse

use log::debug;
use nalgebra::Vector2;

use crate::algorithms::bearing::bearing_of;
use crate::core::types::{ClosureError, LegVector};

/// Sums leg vectors to find how far the traverse fails to close
pub struct ClosureAnalyzer;

impl ClosureAnalyzer {
    /// Compute the closure error of a traverse from its leg vectors.
    ///
    /// Vectors are summed in traverse order so results are reproducible.
    /// The reported bearing is the direction from the misclosed endpoint back
    /// to the origin; a perfect closure reports a bearing of 0.
    pub fn analyze(vectors: &[LegVector]) -> ClosureError {
        let sum: Vector2<f64> = vectors
            .iter()
            .fold(Vector2::zeros(), |acc, v| acc + v.to_vector2());

        let delta_north = sum.x;
        let delta_east = sum.y;
        let magnitude = delta_north.hypot(delta_east);
        let bearing = if magnitude == 0.0 {
            0.0
        } else {
            bearing_of(-delta_north, -delta_east)
        };

        debug!(
            "Misclosure: dN={:.6} dE={:.6} |e|={:.6} bearing={:.4}",
            delta_north, delta_east, magnitude, bearing
        );

        ClosureError {
            delta_north,
            delta_east,
            magnitude,
            bearing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bearing::BearingVectorConverter;
    use approx::assert_abs_diff_eq;

    fn vectors(pairs: &[(f64, f64)]) -> Vec<LegVector> {
        pairs
            .iter()
            .map(|&(len, brg)| BearingVectorConverter::to_vector(len, brg).unwrap())
            .collect()
    }

    #[test]
    fn test_perfect_square_closes() {
        let error = ClosureAnalyzer::analyze(&vectors(&[
            (100.0, 0.0),
            (100.0, 90.0),
            (100.0, 180.0),
            (100.0, 270.0),
        ]));
        assert_eq!(error.magnitude, 0.0);
        assert_eq!(error.bearing, 0.0);
        assert!(error.is_perfect());
    }

    #[test]
    fn test_triangle_misclosure() {
        let error = ClosureAnalyzer::analyze(&vectors(&[(100.0, 0.0), (100.0, 90.0), (141.0, 225.0)]));
        assert_abs_diff_eq!(error.delta_north, 0.297_944, epsilon = 1e-6);
        assert_abs_diff_eq!(error.delta_east, 0.297_944, epsilon = 1e-6);
        assert_abs_diff_eq!(error.magnitude, 0.421_356, epsilon = 1e-6);
    }

    #[test]
    fn test_bearing_points_back_to_origin() {
        // Endpoint lands north-east of the origin, so the way home is south-west
        let error = ClosureAnalyzer::analyze(&vectors(&[(100.0, 0.0), (100.0, 90.0), (141.0, 225.0)]));
        assert_abs_diff_eq!(error.bearing, 225.0, epsilon = 1e-9);

        // Endpoint lands due west of the origin, so the way home is east
        let error = ClosureAnalyzer::analyze(&[
            LegVector::new(10.0, 0.0),
            LegVector::new(-10.0, -0.5),
        ]);
        assert_abs_diff_eq!(error.bearing, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(error.magnitude, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sums_match_components() {
        let legs = vectors(&[(120.5, 150.0), (89.8, 220.25), (110.0, 310.75), (100.2, 45.5)]);
        let error = ClosureAnalyzer::analyze(&legs);

        let north: f64 = legs.iter().map(|v| v.north).sum();
        let east: f64 = legs.iter().map(|v| v.east).sum();
        assert_abs_diff_eq!(error.delta_north, north, epsilon = 1e-9);
        assert_abs_diff_eq!(error.delta_east, east, epsilon = 1e-9);
        assert!((0.0..360.0).contains(&error.bearing));
    }
}
