//! Traverse adjustment algorithms

pub mod bearing;
pub mod closure;
pub mod bowditch;
pub mod coordinates;

pub use bearing::{bearing_of, normalize_bearing, BearingVectorConverter};
pub use closure::ClosureAnalyzer;
pub use bowditch::BowditchCorrector;
pub use coordinates::CoordinateReconstructor;
