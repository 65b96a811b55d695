//! PyO3 function bindings for WaveWobble.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::core::types::{IntegrationConfig, DEFAULT_INTEGRATION_STEP};
use crate::jitter::{self, JitterSample};
use crate::signal;

use super::numpy_bridge::*;

// ============================================================================
// Value Classes
// ============================================================================

/// Python-exposed jitter decomposition.
#[pyclass(name = "JitterSample", frozen)]
#[derive(Debug, Clone, Copy)]
pub struct PyJitterSample {
    inner: JitterSample,
}

#[pymethods]
impl PyJitterSample {
    #[new]
    fn new(rj: f64, ddj: f64, buj: f64) -> Self {
        Self {
            inner: JitterSample::new(rj, ddj, buj),
        }
    }

    #[getter]
    fn rj(&self) -> f64 {
        self.inner.rj()
    }

    #[getter]
    fn ddj(&self) -> f64 {
        self.inner.ddj()
    }

    #[getter]
    fn buj(&self) -> f64 {
        self.inner.buj()
    }

    #[getter]
    fn tj(&self) -> f64 {
        self.inner.tj()
    }

    /// Estimate total jitter at a bit error rate. Raises ValueError for unsupported BERs.
    fn total_jitter_estimation(&self, ber: f64) -> PyResult<f64> {
        Ok(self.inner.total_jitter_estimation(ber)?)
    }

    fn __repr__(&self) -> String {
        format!(
            "JitterSample(rj={}, ddj={}, buj={}, tj={})",
            self.inner.rj(),
            self.inner.ddj(),
            self.inner.buj(),
            self.inner.tj()
        )
    }
}

// ============================================================================
// Jitter Functions
// ============================================================================

/// Time Interval Error.
#[pyfunction]
pub fn tie(actual: f64, ideal: f64) -> f64 {
    jitter::tie(actual, ideal)
}

/// Cycle-to-cycle jitter.
#[pyfunction]
pub fn cycle_to_cycle_jitter(period1: f64, period2: f64) -> f64 {
    jitter::cycle_to_cycle_jitter(period1, period2)
}

/// N-cycle jitter (mean of mean-centered values, always ~0).
#[pyfunction]
pub fn n_cycle_jitter(cycles: PyReadonlyArray1<f64>) -> PyResult<f64> {
    Ok(jitter::n_cycle_jitter(&numpy_to_vec_f64(cycles))?)
}

/// N-cycle jitter as population standard deviation.
#[pyfunction]
pub fn n_cycle_jitter_rms(cycles: PyReadonlyArray1<f64>) -> PyResult<f64> {
    Ok(jitter::n_cycle_jitter_rms(&numpy_to_vec_f64(cycles))?)
}

/// Element-wise TIE.
#[pyfunction]
pub fn tie_series<'py>(
    py: Python<'py>,
    actual: PyReadonlyArray1<f64>,
    ideal: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let result = jitter::tie_series(&numpy_to_vec_f64(actual), &numpy_to_vec_f64(ideal))?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Adjacent-period differences.
#[pyfunction]
pub fn cycle_to_cycle_series<'py>(
    py: Python<'py>,
    periods: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let result = jitter::cycle_to_cycle_series(&numpy_to_vec_f64(periods))?;
    Ok(vec_to_numpy_f64(py, result))
}

/// RMS jitter from a Python callable `density(f) -> float`.
///
/// Exceptions raised by the callable propagate.
#[pyfunction]
#[pyo3(signature = (density, f1, f2, step=DEFAULT_INTEGRATION_STEP))]
pub fn rms_jitter_from_phase_noise(density: &PyAny, f1: f64, f2: f64, step: f64) -> PyResult<f64> {
    let config = IntegrationConfig { step };
    jitter::try_rms_jitter_from_phase_noise(
        &config,
        |f| density.call1((f,))?.extract::<f64>(),
        f1,
        f2,
    )
}

// ============================================================================
// Signal Helpers
// ============================================================================

#[pyfunction]
pub fn hertz_to_megahertz(hertz: f64) -> f64 {
    signal::hertz_to_megahertz(hertz)
}

#[pyfunction]
pub fn megahertz_to_hertz(megahertz: f64) -> f64 {
    signal::megahertz_to_hertz(megahertz)
}

#[pyfunction]
pub fn phase_difference(s1: f64, s2: f64) -> f64 {
    signal::phase_difference(s1, s2)
}

#[pyfunction]
pub fn lerp(x0: f64, x1: f64, t: f64) -> f64 {
    signal::lerp(x0, x1, t)
}

#[pyfunction]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    signal::clamp(value, min, max)
}
