//! Frequency unit conversion.

use crate::core::types::Hertz;

const HZ_PER_MHZ: f64 = 1e6;

/// Convert Hz to MHz.
#[inline]
pub fn hertz_to_megahertz(hertz: Hertz) -> f64 {
    hertz / HZ_PER_MHZ
}

/// Convert MHz to Hz.
#[inline]
pub fn megahertz_to_hertz(megahertz: f64) -> Hertz {
    megahertz * HZ_PER_MHZ
}
