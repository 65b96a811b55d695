//! Core data types for WaveWobble.

use serde::{Deserialize, Serialize};

use super::error::{JitterError, Result};

/// Type alias for time values (edge positions, periods, jitter magnitudes).
pub type Seconds = f64;

/// Type alias for frequency values.
pub type Hertz = f64;

/// Default step of the phase-noise rectangle rule, in the units of the band limits.
pub const DEFAULT_INTEGRATION_STEP: f64 = 0.001;

/// Supported bit-error-rate targets for total jitter estimation.
///
/// The table is closed: a BER without a variant here is rejected rather than
/// mapped to some fallback multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BerTarget {
    /// BER = 1e-12.
    E12,
}

impl BerTarget {
    /// Look up a BER value.
    ///
    /// The comparison is exact, so `1e-12` matches but `1.0000001e-12` does not.
    pub fn from_ber(ber: f64) -> Result<Self> {
        if ber == 1e-12 {
            return Ok(BerTarget::E12);
        }
        tracing::warn!(ber, "no crest-factor multiplier for BER");
        Err(JitterError::unsupported_parameter("BER", ber))
    }

    /// Numeric BER value of this target.
    #[inline]
    pub fn ber(self) -> f64 {
        match self {
            BerTarget::E12 => 1e-12,
        }
    }

    /// Crest-factor multiplier applied to RJ.
    #[inline]
    pub fn multiplier(self) -> f64 {
        match self {
            BerTarget::E12 => 12.0,
        }
    }
}

impl TryFrom<f64> for BerTarget {
    type Error = JitterError;

    fn try_from(ber: f64) -> Result<Self> {
        Self::from_ber(ber)
    }
}

/// Configuration for phase-noise integration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Rectangle width of the left Riemann sum.
    pub step: f64,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_INTEGRATION_STEP,
        }
    }
}

impl IntegrationConfig {
    /// Create a config with the given step.
    pub fn new(step: f64) -> Result<Self> {
        let config = Self { step };
        config.validate()?;
        Ok(config)
    }

    /// Check that the step is finite and positive.
    ///
    /// Whether it advances the frequency depends on the band and is checked
    /// during integration.
    pub fn validate(&self) -> Result<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(JitterError::invalid_config(format!(
                "integration step must be finite and > 0, got {}",
                self.step
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ber_lookup() {
        let target = BerTarget::from_ber(1e-12).unwrap();
        assert_eq!(target, BerTarget::E12);
        assert!((target.multiplier() - 12.0).abs() < f64::EPSILON);
        assert_eq!(target.ber(), 1e-12);
    }

    #[test]
    fn test_ber_unknown_rejected() {
        for ber in [1e-3, 1e-6, 1e-9, 1.0000001e-12, 0.0, -1e-12, f64::NAN] {
            let err = BerTarget::try_from(ber).unwrap_err();
            assert!(matches!(
                err,
                JitterError::UnsupportedParameter { name: "BER", .. }
            ));
        }
    }

    #[test]
    fn test_integration_config_default() {
        let config = IntegrationConfig::default();
        assert_eq!(config.step, 0.001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_integration_config_invalid_step() {
        assert!(IntegrationConfig::new(0.0).is_err());
        assert!(IntegrationConfig::new(-0.01).is_err());
        assert!(IntegrationConfig::new(f64::NAN).is_err());
        assert!(IntegrationConfig::new(f64::INFINITY).is_err());
        assert!(IntegrationConfig::new(0.5).is_ok());
    }

    #[test]
    fn test_integration_config_serde_defaults() {
        let config: IntegrationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, IntegrationConfig::default());

        let config: IntegrationConfig = serde_json::from_str(r#"{"step":0.01}"#).unwrap();
        assert_eq!(config.step, 0.01);
    }
}
