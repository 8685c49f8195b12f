//! Synchronous traverse adjustment API
//!
//! `compute` is a pure function of its input: no state is kept between calls
//! and separate computations may run on separate threads without coordination.

use log::{debug, warn};

use crate::algorithms::{BearingVectorConverter, BowditchCorrector, ClosureAnalyzer, CoordinateReconstructor};
use crate::api::assembler::ReportAssembler;
use crate::api::types::AdjustmentReport;
use crate::core::types::{LegVector, Station, Traverse};
use crate::utils::config::EngineConfig;
use crate::validation::data::{LegValidator, RawLeg};
use crate::validation::error::{TraverseError, TraverseResult};

/// Runs the closure analysis and Bowditch adjustment pipeline
#[derive(Debug, Clone, Default)]
pub struct TraverseAdjuster {
    config: EngineConfig,
}

impl TraverseAdjuster {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate raw legs and adjust the traverse they describe
    pub fn compute(&self, raw_legs: &[RawLeg]) -> TraverseResult<AdjustmentReport> {
        let traverse = LegValidator::with_max_legs(self.config.max_legs).validate(raw_legs)?;
        self.adjust(&traverse)
    }

    /// Adjust an already validated traverse
    pub fn adjust(&self, traverse: &Traverse) -> TraverseResult<AdjustmentReport> {
        let vectors = traverse
            .legs()
            .iter()
            .enumerate()
            .map(|(index, leg)| {
                BearingVectorConverter::to_vector(leg.length, leg.bearing)
                    .map_err(|issue| TraverseError::InvalidLeg { index, issue })
            })
            .collect::<TraverseResult<Vec<_>>>()?;

        let closure = ClosureAnalyzer::analyze(&vectors);
        let corrections = BowditchCorrector::correct(traverse.legs(), &closure, traverse.perimeter())?;

        let adjusted_vectors: Vec<LegVector> = vectors
            .iter()
            .zip(&corrections)
            .map(|(&vector, &correction)| vector + correction)
            .collect();

        let origin = Station::origin();
        let unadjusted = CoordinateReconstructor::reconstruct(&vectors, origin);
        let mut adjusted = CoordinateReconstructor::reconstruct(&adjusted_vectors, origin);
        self.check_closure(&mut adjusted, origin, traverse.perimeter());

        Ok(ReportAssembler::assemble(
            traverse,
            &vectors,
            &closure,
            &corrections,
            &unadjusted,
            &adjusted,
        ))
    }

    /// Verify the adjusted polygon returns to the origin. A last station
    /// within tolerance is snapped onto the origin when configured; one
    /// outside it is left where it landed so the report shows the miss.
    fn check_closure(&self, adjusted: &mut [Station], origin: Station, perimeter: f64) {
        let Some(last) = adjusted.last_mut() else {
            return;
        };

        let residual = last.distance_to(&origin);
        let tolerance = self.config.closure_tolerance * perimeter.max(1.0);
        if residual > tolerance {
            warn!(
                "Adjusted traverse misses the origin by {:.3e} m (tolerance {:.3e} m)",
                residual, tolerance
            );
            return;
        }

        debug!("Adjusted closure residual {:.3e} m", residual);
        if self.config.snap_closing_station {
            last.north = origin.north;
            last.east = origin.east;
        }
    }
}

/// Adjust a traverse with the default configuration
pub fn compute(raw_legs: &[RawLeg]) -> TraverseResult<AdjustmentReport> {
    TraverseAdjuster::default().compute(raw_legs)
}
