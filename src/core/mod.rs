//! Core types and constants for traverse adjustment

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
