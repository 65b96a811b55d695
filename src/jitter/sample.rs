//! Jitter decomposition value type.

use serde::{Deserialize, Serialize};

use crate::core::types::{BerTarget, Seconds};
use crate::core::Result;

/// Deterministic jitter components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeterministicJitter {
    /// Data-dependent jitter.
    pub ddj: Seconds,
    /// Bounded uncorrelated jitter.
    pub buj: Seconds,
}

/// A measured jitter decomposition: RJ, DDJ and BUJ, plus their sum TJ.
///
/// TJ is computed once in [`JitterSample::new`]. There are no setters, so it
/// always equals `rj + ddj + buj`. Deserialization goes through `new` as
/// well, and any `tj` in the input is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SampleComponents")]
pub struct JitterSample {
    rj: Seconds,
    dj: DeterministicJitter,
    tj: Seconds,
}

#[derive(Deserialize)]
struct SampleComponents {
    rj: Seconds,
    dj: DeterministicJitter,
}

impl From<SampleComponents> for JitterSample {
    fn from(raw: SampleComponents) -> Self {
        Self::new(raw.rj, raw.dj.ddj, raw.dj.buj)
    }
}

impl JitterSample {
    /// Create a sample from its components.
    ///
    /// Negative values are accepted as-is.
    pub fn new(rj: Seconds, ddj: Seconds, buj: Seconds) -> Self {
        Self {
            rj,
            dj: DeterministicJitter { ddj, buj },
            tj: rj + ddj + buj,
        }
    }

    /// Random jitter.
    #[inline]
    pub fn rj(&self) -> Seconds {
        self.rj
    }

    /// Deterministic jitter group.
    #[inline]
    pub fn dj(&self) -> DeterministicJitter {
        self.dj
    }

    /// Data-dependent jitter.
    #[inline]
    pub fn ddj(&self) -> Seconds {
        self.dj.ddj
    }

    /// Bounded uncorrelated jitter.
    #[inline]
    pub fn buj(&self) -> Seconds {
        self.dj.buj
    }

    /// Total jitter, `rj + ddj + buj`.
    #[inline]
    pub fn tj(&self) -> Seconds {
        self.tj
    }

    /// Estimate total jitter at a bit error rate: `ddj + n(ber) * rj`.
    ///
    /// # Errors
    /// `UnsupportedParameter` if `ber` has no multiplier.
    pub fn total_jitter_estimation(&self, ber: f64) -> Result<Seconds> {
        let n = Self::multiplier_for_ber(ber)?;
        Ok(self.dj.ddj + n * self.rj)
    }

    /// Same as [`total_jitter_estimation`](Self::total_jitter_estimation) for an already-resolved target.
    #[inline]
    pub fn total_jitter_at(&self, target: BerTarget) -> Seconds {
        self.dj.ddj + target.multiplier() * self.rj
    }

    /// Crest-factor multiplier for a BER.
    pub fn multiplier_for_ber(ber: f64) -> Result<f64> {
        BerTarget::from_ber(ber).map(BerTarget::multiplier)
    }
}
