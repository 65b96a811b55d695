//! Signal helper formulas: unit conversion, phase and interpolation.

pub mod phase;
pub mod units;

pub use phase::{clamp, lerp, phase_difference};
pub use units::{hertz_to_megahertz, megahertz_to_hertz};
