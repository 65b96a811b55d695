//! Core types and utilities for WaveWobble.

pub mod error;
pub mod types;

pub use error::{JitterError, Result};
pub use types::*;
