//! Integration tests for WaveWobble signal helpers.

use std::f64::consts::PI;

use wavewobble::signal::{clamp, hertz_to_megahertz, lerp, megahertz_to_hertz, phase_difference};

#[test]
fn test_unit_round_trip() {
    let values = [0.0, 1.0, 2.5, -7.125, 156.25, 1e-6, 3.3e9];
    for x in values {
        let back = hertz_to_megahertz(megahertz_to_hertz(x));
        assert!(
            (back - x).abs() <= x.abs() * 1e-15,
            "round trip of {} gave {}",
            x,
            back
        );
    }
}

#[test]
fn test_phase_difference_range() {
    let mut s1 = -20.0;
    while s1 < 20.0 {
        let d = phase_difference(s1, 0.7);
        assert!(d > -PI && d <= PI, "phase {} out of range for {}", d, s1);
        assert_eq!(phase_difference(s1, s1), 0.0);
        s1 += 0.37;
    }
}

#[test]
fn test_phase_difference_small_offsets() {
    assert!((phase_difference(0.3, 0.1) - 0.2).abs() < 1e-10);
    assert!((phase_difference(0.1, 0.3) + 0.2).abs() < 1e-10);
}

#[test]
fn test_lerp_examples() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
}

#[test]
fn test_clamp_examples() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
}
