//! Bowditch (compass rule) distribution of the misclosure
//!
//! Each leg absorbs a share of the negated misclosure proportional to its own
//! length over the perimeter. The shares are independent per leg and sum to
//! one, so the corrections add up to exactly `-misclosure`.

use log::debug;

use crate::core::types::{ClosureError, Correction, Leg};
use crate::validation::error::{TraverseError, TraverseResult};

pub struct BowditchCorrector;

impl BowditchCorrector {
    /// One correction per leg, in leg order
    pub fn correct(legs: &[Leg], closure: &ClosureError, perimeter: f64) -> TraverseResult<Vec<Correction>> {
        if !(perimeter.is_finite() && perimeter > 0.0) {
            return Err(TraverseError::DegenerateTraverse { perimeter });
        }

        let total_lat = -closure.delta_north;
        let total_dep = -closure.delta_east;

        let corrections: Vec<Correction> = legs
            .iter()
            .map(|leg| {
                let share = leg.length / perimeter;
                Correction {
                    latitude: positive_zero(total_lat * share),
                    departure: positive_zero(total_dep * share),
                }
            })
            .collect();

        debug!(
            "Distributed ({:.6}, {:.6}) over {} legs, perimeter {:.3}",
            total_lat,
            total_dep,
            corrections.len(),
            perimeter
        );

        Ok(corrections)
    }

    /// Magnitude of correction accrued after walking `cumulative_length`.
    /// Linear in distance under the compass rule.
    pub fn cumulative_magnitude(closure: &ClosureError, cumulative_length: f64, perimeter: f64) -> f64 {
        closure.magnitude * (cumulative_length / perimeter)
    }
}

/// Negating a zero misclosure component yields -0.0; report it as +0.0
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn closure(delta_north: f64, delta_east: f64) -> ClosureError {
        ClosureError {
            delta_north,
            delta_east,
            magnitude: delta_north.hypot(delta_east),
            bearing: 0.0,
        }
    }

    fn legs(lengths: &[f64]) -> Vec<Leg> {
        lengths.iter().map(|&l| Leg::new(l, 0.0).unwrap()).collect()
    }

    #[test]
    fn test_corrections_proportional_to_length() {
        let legs = legs(&[100.0, 100.0, 141.0]);
        let corrections = BowditchCorrector::correct(&legs, &closure(0.3, 0.3), 341.0).unwrap();

        assert_eq!(corrections.len(), 3);
        assert_abs_diff_eq!(corrections[0].latitude, -0.3 * 100.0 / 341.0, epsilon = 1e-15);
        assert_abs_diff_eq!(corrections[0].latitude, -0.088, epsilon = 1e-3);
        assert_abs_diff_eq!(corrections[0].departure, -0.088, epsilon = 1e-3);
        assert_eq!(corrections[0], corrections[1]);
        assert_abs_diff_eq!(corrections[2].latitude, -0.3 * 141.0 / 341.0, epsilon = 1e-15);
    }

    #[test]
    fn test_corrections_sum_to_negated_misclosure() {
        let legs = legs(&[12.5, 300.2, 47.9, 88.0, 150.15]);
        let perimeter: f64 = legs.iter().map(|l| l.length).sum();
        let error = closure(-0.734, 1.212);
        let corrections = BowditchCorrector::correct(&legs, &error, perimeter).unwrap();

        let lat: f64 = corrections.iter().map(|c| c.latitude).sum();
        let dep: f64 = corrections.iter().map(|c| c.departure).sum();
        assert_abs_diff_eq!(lat, 0.734, epsilon = 1e-12);
        assert_abs_diff_eq!(dep, -1.212, epsilon = 1e-12);
    }

    #[test]
    fn test_correction_is_not_cumulative() {
        // Reordering legs moves each correction with its own leg
        let forward = BowditchCorrector::correct(&legs(&[10.0, 30.0]), &closure(1.0, 0.0), 40.0).unwrap();
        let reversed = BowditchCorrector::correct(&legs(&[30.0, 10.0]), &closure(1.0, 0.0), 40.0).unwrap();
        assert_eq!(forward[0], reversed[1]);
        assert_eq!(forward[1], reversed[0]);
    }

    #[test]
    fn test_zero_misclosure_yields_zero_corrections() {
        let corrections = BowditchCorrector::correct(&legs(&[5.0, 7.0]), &closure(0.0, 0.0), 12.0).unwrap();
        for c in corrections {
            assert_eq!(c.latitude, 0.0);
            assert_eq!(c.departure, 0.0);
            assert!(c.latitude.is_sign_positive());
            assert!(c.departure.is_sign_positive());
        }

        // A single zero component is also +0.0
        let corrections = BowditchCorrector::correct(&legs(&[5.0, 7.0]), &closure(0.0, 2.0), 12.0).unwrap();
        assert!(corrections[0].latitude.is_sign_positive());
        assert!(corrections[0].departure < 0.0);
    }

    #[test]
    fn test_degenerate_perimeter_rejected() {
        let legs = legs(&[5.0, 7.0]);
        for perimeter in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = BowditchCorrector::correct(&legs, &closure(1.0, 1.0), perimeter);
            assert!(matches!(result, Err(TraverseError::DegenerateTraverse { .. })));
        }
    }

    #[test]
    fn test_cumulative_magnitude_is_linear() {
        let error = closure(3.0, 4.0);
        assert_eq!(BowditchCorrector::cumulative_magnitude(&error, 0.0, 200.0), 0.0);
        assert_abs_diff_eq!(BowditchCorrector::cumulative_magnitude(&error, 50.0, 200.0), 1.25, epsilon = 1e-12);
        assert_abs_diff_eq!(BowditchCorrector::cumulative_magnitude(&error, 200.0, 200.0), 5.0, epsilon = 1e-12);
    }
}
