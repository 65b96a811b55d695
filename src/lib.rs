// Suppress warning from PyO3 macro expansion
#![cfg_attr(feature = "python", allow(non_local_definitions))]

//! WaveWobble - timing-jitter metrics.
//!
//! This crate provides:
//! - A [`JitterSample`] value type (RJ, DDJ, BUJ and the derived TJ) with
//!   BER-based total jitter estimation
//! - Edge and period jitter functions (TIE, cycle-to-cycle, N-cycle)
//! - RMS jitter from a phase-noise spectral density
//! - Signal helpers (unit conversion, phase difference, lerp, clamp)
//! - Optional Python bindings behind the `python` feature

pub mod core;
pub mod jitter;
#[cfg(feature = "python")]
pub mod python;
pub mod signal;

pub use crate::core::{BerTarget, IntegrationConfig, JitterError, Result};
pub use crate::jitter::{DeterministicJitter, JitterSample};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module entry point
#[cfg(feature = "python")]
#[pymodule]
fn _wavewobble(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    use crate::python::bindings;

    // Register value classes
    m.add_class::<bindings::PyJitterSample>()?;

    // Register jitter functions
    m.add_function(wrap_pyfunction!(bindings::tie, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::cycle_to_cycle_jitter, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::n_cycle_jitter, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::n_cycle_jitter_rms, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::tie_series, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::cycle_to_cycle_series, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::rms_jitter_from_phase_noise, m)?)?;

    // Register signal helpers
    m.add_function(wrap_pyfunction!(bindings::hertz_to_megahertz, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::megahertz_to_hertz, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::phase_difference, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::lerp, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::clamp, m)?)?;

    Ok(())
}
