//! Walkthrough of the WaveWobble API.
//!
//! Run with `RUST_LOG=debug` to see integration details.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wavewobble::jitter::{
    cycle_to_cycle_jitter, n_cycle_jitter, n_cycle_jitter_rms, rms_jitter_from_phase_noise, tie,
};
use wavewobble::signal::{hertz_to_megahertz, phase_difference};
use wavewobble::JitterSample;

fn main() -> wavewobble::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let sample = JitterSample::new(0.05, 0.02, 0.03);
    tracing::info!(
        rj = sample.rj(),
        ddj = sample.ddj(),
        buj = sample.buj(),
        tj = sample.tj(),
        "jitter sample"
    );

    tracing::info!(tie = tie(1.02, 1.00), "time interval error");
    tracing::info!(c2c = cycle_to_cycle_jitter(1.02, 1.03), "cycle-to-cycle jitter");

    let cycles = [1.02, 1.03, 1.04];
    tracing::info!(
        n_cycle = n_cycle_jitter(&cycles)?,
        n_cycle_rms = n_cycle_jitter_rms(&cycles)?,
        "n-cycle jitter"
    );

    let estimate = sample.total_jitter_estimation(1e-12)?;
    tracing::info!(estimate, "total jitter at BER 1e-12");

    if let Err(err) = sample.total_jitter_estimation(1e-6) {
        tracing::info!(%err, "BER 1e-6 is not in the table");
    }

    let rms = rms_jitter_from_phase_noise(|f| 1e-4 / (1.0 + f), 0.0, 1.0);
    tracing::info!(rms, "rms jitter from phase noise");

    tracing::info!(
        mhz = hertz_to_megahertz(156.25e6),
        phase = phase_difference(3.5, -3.0),
        "signal helpers"
    );

    Ok(())
}
