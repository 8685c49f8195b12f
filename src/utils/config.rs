use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::constants::{DEFAULT_CLOSURE_TOLERANCE, DEFAULT_MAX_LEGS, MAX_CONFIGURABLE_LEGS, MIN_LEGS};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of legs accepted per traverse
    pub max_legs: usize,
    /// Allowed distance between the last adjusted station and the origin,
    /// relative to max(1, perimeter)
    pub closure_tolerance: f64,
    /// Place the last adjusted station exactly on the origin after the check
    pub snap_closing_station: bool,
    /// Decimal places used when rendering the report
    pub display: DisplayConfig,
}

/// Decimal places for rendered report values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub length_decimals: usize,
    pub bearing_decimals: usize,
    pub correction_decimals: usize,
    pub error_magnitude_decimals: usize,
    pub error_bearing_decimals: usize,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in config file '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_legs: DEFAULT_MAX_LEGS,
            closure_tolerance: DEFAULT_CLOSURE_TOLERANCE,
            snap_closing_station: true,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            length_decimals: 3,
            bearing_decimals: 3,
            correction_decimals: 3,
            error_magnitude_decimals: 3,
            error_bearing_decimals: 2,
        }
    }
}

const MAX_DECIMALS: usize = 12;

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a JSON configuration file.
    /// Missing fields take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: EngineConfig = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_LEGS..=MAX_CONFIGURABLE_LEGS).contains(&self.max_legs) {
            return Err(ConfigError::InvalidParameter {
                parameter: "max_legs".to_string(),
                value: self.max_legs.to_string(),
                reason: format!("must be between {} and {}", MIN_LEGS, MAX_CONFIGURABLE_LEGS),
            });
        }

        if !(self.closure_tolerance.is_finite() && self.closure_tolerance > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "closure_tolerance".to_string(),
                value: self.closure_tolerance.to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }

        self.display.validate()
    }

    pub fn with_max_legs(mut self, max_legs: usize) -> Self {
        self.max_legs = max_legs;
        self
    }

    pub fn with_closure_tolerance(mut self, tolerance: f64) -> Self {
        self.closure_tolerance = tolerance;
        self
    }

    pub fn with_snap_closing_station(mut self, snap: bool) -> Self {
        self.snap_closing_station = snap;
        self
    }

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }
}

impl DisplayConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("display.length_decimals", self.length_decimals),
            ("display.bearing_decimals", self.bearing_decimals),
            ("display.correction_decimals", self.correction_decimals),
            ("display.error_magnitude_decimals", self.error_magnitude_decimals),
            ("display.error_bearing_decimals", self.error_bearing_decimals),
        ];

        for (parameter, value) in fields {
            if value > MAX_DECIMALS {
                return Err(ConfigError::InvalidParameter {
                    parameter: parameter.to_string(),
                    value: value.to_string(),
                    reason: format!("at most {} decimals are supported", MAX_DECIMALS),
                });
            }
        }
        Ok(())
    }
}
