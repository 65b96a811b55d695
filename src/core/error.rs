//! Error types for WaveWobble.

use thiserror::Error;

/// Result type alias for WaveWobble operations.
pub type Result<T> = std::result::Result<T, JitterError>;

/// Error types for jitter computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JitterError {
    /// A parameter value has no entry in a closed lookup table.
    #[error("Unsupported {name}: {value:e}")]
    UnsupportedParameter { name: &'static str, value: f64 },

    /// Empty data error.
    #[error("Empty data provided for {context}")]
    EmptyData { context: String },

    /// Data length mismatch between slices.
    #[error("Data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl JitterError {
    /// Create an unsupported parameter error.
    pub fn unsupported_parameter(name: &'static str, value: f64) -> Self {
        Self::UnsupportedParameter { name, value }
    }

    /// Create an empty data error.
    pub fn empty_data(context: impl Into<String>) -> Self {
        Self::EmptyData {
            context: context.into(),
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(feature = "python")]
impl From<JitterError> for pyo3::PyErr {
    fn from(err: JitterError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = JitterError::unsupported_parameter("BER", 1e-6);
        assert_eq!(err.to_string(), "Unsupported BER: 1e-6");

        let err = JitterError::empty_data("n-cycle jitter");
        assert_eq!(err.to_string(), "Empty data provided for n-cycle jitter");

        let err = JitterError::length_mismatch(3, 2);
        assert_eq!(err.to_string(), "Data length mismatch: expected 3, got 2");
    }
}
