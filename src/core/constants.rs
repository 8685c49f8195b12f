//! Survey constants and engine limits

/// Degrees in a full circle; whole-circle bearings live in `[0, FULL_CIRCLE_DEG)`
pub const FULL_CIRCLE_DEG: f64 = 360.0;

/// Degrees in a quarter turn
pub const QUARTER_TURN_DEG: f64 = 90.0;

/// A closed traverse needs at least two legs
pub const MIN_LEGS: usize = 2;

/// Default cap on the number of legs accepted per traverse
pub const DEFAULT_MAX_LEGS: usize = 20;

/// Largest leg cap a configuration may set
pub const MAX_CONFIGURABLE_LEGS: usize = 25;

/// Default tolerance for the adjusted closure check, relative to max(1, perimeter)
pub const DEFAULT_CLOSURE_TOLERANCE: f64 = 1e-9;

/// Fixed origin of station 0 (north, east)
pub const ORIGIN: (f64, f64) = (0.0, 0.0);
