//! Jitter metrics.
//!
//! Everything here is a pure function over `f64` inputs, except
//! [`JitterSample`], which is an immutable value type.

pub mod phase_noise;
pub mod sample;
pub mod timing;

pub use phase_noise::{
    rms_jitter_from_phase_noise, rms_jitter_from_phase_noise_with, try_rms_jitter_from_phase_noise,
};
pub use sample::{DeterministicJitter, JitterSample};
pub use timing::{
    cycle_to_cycle_jitter, cycle_to_cycle_series, n_cycle_jitter, n_cycle_jitter_rms, tie,
    tie_series,
};
