//! RMS jitter from a phase-noise spectral density.
//!
//! The density is integrated with a left Riemann sum: starting at `f1`, the
//! frequency advances by `step` (accumulated, not recomputed from an index)
//! while it stays below `f2`. The result is the square root of the sum.
//! A density that integrates to a negative value produces NaN, not an error.
//!
//! Once `f` is large enough that `f + step == f`, the frequency stops
//! advancing. [`rms_jitter_from_phase_noise`] keeps the plain fixed-step loop
//! and never returns for such a band (about `f1 > 1.8e13` with the default
//! step). The configurable entry points report `InvalidConfig` instead.

use std::convert::Infallible;

use crate::core::error::JitterError;
use crate::core::types::{Hertz, IntegrationConfig, Seconds};
use crate::core::Result;

/// RMS jitter over `[f1, f2)` with the default step of 0.001.
///
/// An empty band (`f1 >= f2`) integrates to zero.
pub fn rms_jitter_from_phase_noise<L>(mut density: L, f1: Hertz, f2: Hertz) -> Seconds
where
    L: FnMut(Hertz) -> f64,
{
    let step = IntegrationConfig::default().step;
    let stepped = integrate(
        step,
        f1,
        f2,
        |f| Ok::<f64, Infallible>(density(f)),
        |_| Ok(()),
    );
    match stepped {
        Ok(integral) => finish(integral),
        Err(never) => match never {},
    }
}

/// RMS jitter over `[f1, f2)` with a configured step.
///
/// # Errors
/// `InvalidConfig` if the step is not finite and positive, or if it is too
/// small to advance the frequency inside the band.
pub fn rms_jitter_from_phase_noise_with<L>(
    config: &IntegrationConfig,
    mut density: L,
    f1: Hertz,
    f2: Hertz,
) -> Result<Seconds>
where
    L: FnMut(Hertz) -> f64,
{
    try_rms_jitter_from_phase_noise(config, |f| Ok(density(f)), f1, f2)
}

/// RMS jitter from a density that may fail. The first error stops integration.
///
/// A step that no longer advances the frequency fails with `InvalidConfig`.
pub fn try_rms_jitter_from_phase_noise<L, E>(
    config: &IntegrationConfig,
    density: L,
    f1: Hertz,
    f2: Hertz,
) -> std::result::Result<Seconds, E>
where
    L: FnMut(Hertz) -> std::result::Result<f64, E>,
    E: From<JitterError>,
{
    config.validate()?;
    let step = config.step;
    let stalled = |f: Hertz| -> std::result::Result<(), E> {
        tracing::warn!(f, step, "integration step does not advance frequency");
        Err(JitterError::invalid_config(format!(
            "integration step {} does not advance frequency at {}",
            step, f
        ))
        .into())
    };
    integrate(step, f1, f2, density, stalled).map(finish)
}

fn integrate<L, S, E>(
    step: f64,
    f1: Hertz,
    f2: Hertz,
    mut density: L,
    mut on_stall: S,
) -> std::result::Result<f64, E>
where
    L: FnMut(Hertz) -> std::result::Result<f64, E>,
    S: FnMut(Hertz) -> std::result::Result<(), E>,
{
    let mut integral = 0.0;
    let mut terms = 0usize;
    let mut f = f1;
    while f < f2 {
        integral += density(f)? * step;
        terms += 1;
        let next = f + step;
        if next <= f {
            on_stall(f)?;
        }
        f = next;
    }
    tracing::debug!(f1, f2, step, terms, "integrated phase-noise density");
    Ok(integral)
}

fn finish(integral: f64) -> Seconds {
    if integral < 0.0 {
        tracing::warn!(integral, "phase-noise integral is negative, rms jitter is NaN");
    }
    integral.sqrt()
}
