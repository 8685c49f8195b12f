//! Packages pipeline results into an `AdjustmentReport`

use crate::algorithms::bearing::bearing_of;
use crate::algorithms::bowditch::BowditchCorrector;
use crate::algorithms::coordinates::{adjusted_station_labels, line_label, unadjusted_station_labels};
use crate::api::types::{AdjustmentReport, BowditchData, ErrorInfo, PlotData, TableRow};
use crate::core::types::{ClosureError, CorrectedLeg, Correction, LegVector, Station, Traverse};

pub struct ReportAssembler;

impl ReportAssembler {
    /// Assemble the report. `vectors`, `corrections` and the station series
    /// must all come from the same traverse.
    pub fn assemble(
        traverse: &Traverse,
        vectors: &[LegVector],
        closure: &ClosureError,
        corrections: &[Correction],
        unadjusted: &[Station],
        adjusted: &[Station],
    ) -> AdjustmentReport {
        let perimeter = traverse.perimeter();

        let table_data = Self::corrected_legs(traverse, vectors, corrections)
            .into_iter()
            .map(|leg| TableRow {
                line: line_label(leg.index),
                orig_len: leg.original_length,
                orig_brg: leg.original_bearing,
                lat_corr: leg.lat_correction,
                dep_corr: leg.dep_correction,
                adj_len: leg.adjusted_length,
                adj_brg: leg.adjusted_bearing,
            })
            .collect();

        let cumulative_lengths = Self::cumulative_lengths(traverse);
        let correction_magnitudes = cumulative_lengths
            .iter()
            .map(|&walked| BowditchCorrector::cumulative_magnitude(closure, walked, perimeter))
            .collect();

        AdjustmentReport {
            error_info: ErrorInfo {
                magnitude: closure.magnitude,
                bearing: closure.bearing,
                delta_north: closure.delta_north,
                delta_east: closure.delta_east,
                precision_ratio: (closure.magnitude > 0.0).then(|| perimeter / closure.magnitude),
            },
            table_data,
            plot_data: PlotData {
                unadjusted_x: unadjusted.iter().map(|s| s.east).collect(),
                unadjusted_y: unadjusted.iter().map(|s| s.north).collect(),
                adjusted_x: adjusted.iter().map(|s| s.east).collect(),
                adjusted_y: adjusted.iter().map(|s| s.north).collect(),
                unadjusted_labels: unadjusted_station_labels(traverse.len()),
                adjusted_labels: adjusted_station_labels(traverse.len()),
                lengths: traverse.legs().iter().map(|leg| leg.length).collect(),
            },
            bowditch_data: BowditchData {
                perimeter,
                cumulative_lengths,
                error_magnitude: closure.magnitude,
                correction_magnitudes,
            },
        }
    }

    /// Adjusted length and bearing of each leg from its corrected vector
    pub fn corrected_legs(
        traverse: &Traverse,
        vectors: &[LegVector],
        corrections: &[Correction],
    ) -> Vec<CorrectedLeg> {
        traverse
            .legs()
            .iter()
            .zip(vectors.iter().zip(corrections))
            .enumerate()
            .map(|(index, (leg, (&vector, &correction)))| {
                // An uncorrected leg keeps its measured values exactly
                let (adjusted_length, adjusted_bearing) = if correction.latitude == 0.0 && correction.departure == 0.0 {
                    (leg.length, leg.bearing)
                } else {
                    let adjusted = vector + correction;
                    (adjusted.magnitude(), bearing_of(adjusted.north, adjusted.east))
                };
                CorrectedLeg {
                    index,
                    original_length: leg.length,
                    original_bearing: leg.bearing,
                    lat_correction: correction.latitude,
                    dep_correction: correction.departure,
                    adjusted_length,
                    adjusted_bearing,
                }
            })
            .collect()
    }

    /// Running leg length at each station, starting at 0
    pub fn cumulative_lengths(traverse: &Traverse) -> Vec<f64> {
        std::iter::once(0.0)
            .chain(traverse.legs().iter().scan(0.0, |walked, leg| {
                *walked += leg.length;
                Some(*walked)
            }))
            .collect()
    }
}
