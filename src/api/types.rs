//! Report types handed to the presentation layer

use serde::{Deserialize, Serialize};

/// Full result of one traverse adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentReport {
    pub error_info: ErrorInfo,
    pub table_data: Vec<TableRow>,
    pub plot_data: PlotData,
    pub bowditch_data: BowditchData,
}

/// Closure error summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Length of the misclosure (meters)
    pub magnitude: f64,
    /// Whole-circle bearing from the misclosed endpoint back to the origin
    pub bearing: f64,
    pub delta_north: f64,
    pub delta_east: f64,
    /// Perimeter over misclosure, the N in a "1 : N" precision.
    /// `None` when the traverse closes perfectly.
    pub precision_ratio: Option<f64>,
}

/// One adjusted leg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Human label such as "A-B"
    pub line: String,
    pub orig_len: f64,
    pub orig_brg: f64,
    pub lat_corr: f64,
    pub dep_corr: f64,
    pub adj_len: f64,
    pub adj_brg: f64,
}

/// Station coordinates for plotting (x = east, y = north).
/// Every series has one entry per station, origin first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub unadjusted_x: Vec<f64>,
    pub unadjusted_y: Vec<f64>,
    pub adjusted_x: Vec<f64>,
    pub adjusted_y: Vec<f64>,
    pub unadjusted_labels: Vec<String>,
    pub adjusted_labels: Vec<String>,
    /// Original leg lengths, one per leg
    pub lengths: Vec<f64>,
}

/// Correction-versus-distance diagnostic series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowditchData {
    pub perimeter: f64,
    /// Distance walked at each station, starting at 0
    pub cumulative_lengths: Vec<f64>,
    pub error_magnitude: f64,
    /// Correction magnitude accrued at each station
    pub correction_magnitudes: Vec<f64>,
}

impl AdjustmentReport {
    pub fn leg_count(&self) -> usize {
        self.table_data.len()
    }

    /// Distance from the last adjusted station to the origin
    pub fn adjusted_closure_residual(&self) -> f64 {
        let x = self.plot_data.adjusted_x.last().copied().unwrap_or_default()
            - self.plot_data.adjusted_x.first().copied().unwrap_or_default();
        let y = self.plot_data.adjusted_y.last().copied().unwrap_or_default()
            - self.plot_data.adjusted_y.first().copied().unwrap_or_default();
        x.hypot(y)
    }
}
