//! Report output formatting and serialization
//!
//! `ReportFormatter` renders numeric report values as fixed-decimal strings,
//! the way adjustment results are shown in a results table. Text, CSV and
//! JSON writers build on top of it.

use serde::{Deserialize, Serialize};

use crate::api::types::{AdjustmentReport, TableRow};
use crate::utils::config::DisplayConfig;

/// Report values rendered as display strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedReport {
    pub error_info: FormattedErrorInfo,
    pub table_data: Vec<FormattedRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedErrorInfo {
    pub magnitude: String,
    pub bearing: String,
    /// "1 : N" precision, or "perfect" when the traverse closes exactly
    pub precision: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedRow {
    pub line: String,
    pub orig_len: String,
    pub orig_brg: String,
    pub lat_corr: String,
    pub dep_corr: String,
    pub adj_len: String,
    pub adj_brg: String,
}

/// Renders an `AdjustmentReport` with fixed decimal places
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    display: DisplayConfig,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display(display: DisplayConfig) -> Self {
        Self { display }
    }

    pub fn format(&self, report: &AdjustmentReport) -> FormattedReport {
        let info = &report.error_info;
        let precision = match info.precision_ratio {
            Some(ratio) => format!("1 : {:.0}", ratio),
            None => "perfect".to_string(),
        };

        FormattedReport {
            error_info: FormattedErrorInfo {
                magnitude: fixed(info.magnitude, self.display.error_magnitude_decimals),
                bearing: fixed(info.bearing, self.display.error_bearing_decimals),
                precision,
            },
            table_data: report.table_data.iter().map(|row| self.format_row(row)).collect(),
        }
    }

    fn format_row(&self, row: &TableRow) -> FormattedRow {
        let d = &self.display;
        FormattedRow {
            line: row.line.clone(),
            orig_len: fixed(row.orig_len, d.length_decimals),
            orig_brg: fixed(row.orig_brg, d.bearing_decimals),
            lat_corr: signed(row.lat_corr, d.correction_decimals),
            dep_corr: signed(row.dep_corr, d.correction_decimals),
            adj_len: fixed(row.adj_len, d.length_decimals),
            adj_brg: fixed(row.adj_brg, d.bearing_decimals),
        }
    }
}

/// Round to `decimals`, folding a negative zero result to +0
fn rounded(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let r = (value * scale).round() / scale;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, rounded(value, decimals))
}

fn signed(value: f64, decimals: usize) -> String {
    format!("{:+.*}", decimals, rounded(value, decimals))
}

/// Human-readable text report
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    /// One line per leg, no column header or summary block
    pub compact: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format_text(&self, formatted: &FormattedReport) -> String {
        let mut output = String::new();

        if self.compact {
            for row in &formatted.table_data {
                output.push_str(&format!(
                    "{} {} @ {} -> {} @ {} ({}, {})\n",
                    row.line, row.orig_len, row.orig_brg, row.adj_len, row.adj_brg, row.lat_corr, row.dep_corr
                ));
            }
            output.push_str(&format!(
                "Misclosure {} m @ {}°\n",
                formatted.error_info.magnitude, formatted.error_info.bearing
            ));
            return output;
        }

        output.push_str("Closure error:\n");
        output.push_str(&format!("  Magnitude: {} m\n", formatted.error_info.magnitude));
        output.push_str(&format!("  Bearing:   {}°\n", formatted.error_info.bearing));
        output.push_str(&format!("  Precision: {}\n", formatted.error_info.precision));
        output.push('\n');

        output.push_str(&format!(
            "{:<6} {:>12} {:>10} {:>10} {:>10} {:>12} {:>10}\n",
            "Line", "Length", "Bearing", "Lat corr", "Dep corr", "Adj length", "Adj brg"
        ));
        for row in &formatted.table_data {
            output.push_str(&format!(
                "{:<6} {:>12} {:>10} {:>10} {:>10} {:>12} {:>10}\n",
                row.line, row.orig_len, row.orig_brg, row.lat_corr, row.dep_corr, row.adj_len, row.adj_brg
            ));
        }

        output
    }
}

/// JSON writer for either the numeric or the formatted report
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format_json<T: Serialize>(&self, value: &T) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

/// CSV writer for the adjusted leg table
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self { include_header: true }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> String {
        "line,orig_len,orig_brg,lat_corr,dep_corr,adj_len,adj_brg".to_string()
    }

    pub fn format_csv(&self, formatted: &FormattedReport) -> String {
        let mut output = String::new();
        if self.include_header {
            output.push_str(&self.header());
            output.push('\n');
        }
        for row in &formatted.table_data {
            output.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                row.line, row.orig_len, row.orig_brg, row.lat_corr, row.dep_corr, row.adj_len, row.adj_brg
            ));
        }
        output
    }
}
