//! Edge and period jitter: TIE, cycle-to-cycle and N-cycle.

use crate::core::error::JitterError;
use crate::core::types::Seconds;
use crate::core::Result;

/// Time Interval Error: deviation of an edge from its ideal position.
#[inline]
pub fn tie(actual: Seconds, ideal: Seconds) -> Seconds {
    actual - ideal
}

/// Cycle-to-cycle jitter: `period2 - period1`.
#[inline]
pub fn cycle_to_cycle_jitter(period1: Seconds, period2: Seconds) -> Seconds {
    period2 - period1
}

/// N-cycle jitter as the mean of mean-centered cycle values.
///
/// The deviations from a mean always sum to zero, so this returns 0 up to
/// rounding for every input. Use [`n_cycle_jitter_rms`] for the spread.
///
/// # Errors
/// `EmptyData` if `cycles` is empty.
pub fn n_cycle_jitter(cycles: &[Seconds]) -> Result<Seconds> {
    let avg = mean(cycles, "n-cycle jitter")?;
    let n = cycles.len() as f64;
    Ok(cycles.iter().map(|c| c - avg).sum::<f64>() / n)
}

/// N-cycle jitter as the population standard deviation of the cycle values.
///
/// # Errors
/// `EmptyData` if `cycles` is empty.
pub fn n_cycle_jitter_rms(cycles: &[Seconds]) -> Result<Seconds> {
    let avg = mean(cycles, "n-cycle rms jitter")?;
    let n = cycles.len() as f64;
    let variance = cycles.iter().map(|c| (c - avg).powi(2)).sum::<f64>() / n;
    Ok(variance.sqrt())
}

/// Element-wise TIE over two edge sequences.
///
/// # Errors
/// `EmptyData` on empty input, `LengthMismatch` if the lengths differ.
pub fn tie_series(actual: &[Seconds], ideal: &[Seconds]) -> Result<Vec<Seconds>> {
    if actual.is_empty() {
        return Err(JitterError::empty_data("tie series"));
    }
    if actual.len() != ideal.len() {
        return Err(JitterError::length_mismatch(actual.len(), ideal.len()));
    }

    Ok(actual
        .iter()
        .zip(ideal)
        .map(|(&a, &i)| tie(a, i))
        .collect())
}

/// Cycle-to-cycle jitter for each adjacent pair of periods.
///
/// Returns `periods.len() - 1` values; a single period yields an empty vector.
///
/// # Errors
/// `EmptyData` if `periods` is empty.
pub fn cycle_to_cycle_series(periods: &[Seconds]) -> Result<Vec<Seconds>> {
    if periods.is_empty() {
        return Err(JitterError::empty_data("cycle-to-cycle series"));
    }

    Ok(periods
        .windows(2)
        .map(|w| cycle_to_cycle_jitter(w[0], w[1]))
        .collect())
}

fn mean(values: &[f64], context: &str) -> Result<f64> {
    if values.is_empty() {
        return Err(JitterError::empty_data(context));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie() {
        assert!((tie(1.02, 1.00) - 0.02).abs() < 1e-10);
        assert_eq!(tie(3.5, 1.25), -tie(1.25, 3.5));
    }

    #[test]
    fn test_cycle_to_cycle() {
        assert!((cycle_to_cycle_jitter(1.02, 1.03) - 0.01).abs() < 1e-10);
        assert_eq!(
            cycle_to_cycle_jitter(2.0, 0.5),
            -cycle_to_cycle_jitter(0.5, 2.0)
        );
    }

    #[test]
    fn test_n_cycle_jitter_is_zero() {
        let result = n_cycle_jitter(&[1.02, 1.03, 1.04]).unwrap();
        assert!(result.abs() < 1e-10);

        let result = n_cycle_jitter(&[7.0]).unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_n_cycle_jitter_empty() {
        assert!(matches!(
            n_cycle_jitter(&[]),
            Err(JitterError::EmptyData { .. })
        ));
        assert!(n_cycle_jitter_rms(&[]).is_err());
    }

    #[test]
    fn test_n_cycle_jitter_rms() {
        // mean 5, squared deviations sum to 32, /8 = 4
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let result = n_cycle_jitter_rms(&data).unwrap();
        assert!((result - 2.0).abs() < 1e-10);

        assert_eq!(n_cycle_jitter_rms(&[3.0, 3.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_tie_series() {
        let result = tie_series(&[1.0, 2.1, 2.9], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result[0].abs() < 1e-10);
        assert!((result[1] - 0.1).abs() < 1e-10);
        assert!((result[2] + 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_tie_series_errors() {
        assert_eq!(
            tie_series(&[1.0, 2.0], &[1.0]).unwrap_err(),
            JitterError::length_mismatch(2, 1)
        );
        assert!(matches!(
            tie_series(&[], &[]),
            Err(JitterError::EmptyData { .. })
        ));
    }

    #[test]
    fn test_cycle_to_cycle_series() {
        let result = cycle_to_cycle_series(&[1.0, 1.5, 1.25]).unwrap();
        assert_eq!(result.len(), 2);
        assert!((result[0] - 0.5).abs() < 1e-10);
        assert!((result[1] + 0.25).abs() < 1e-10);

        assert!(cycle_to_cycle_series(&[1.0]).unwrap().is_empty());
        assert!(cycle_to_cycle_series(&[]).is_err());
    }
}
