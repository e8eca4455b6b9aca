use super::Sine;
use crate::common::TableBuilder;
use crate::tables::Twiddle;

const EPSILON: f32 = 1e-6;

fn assert_feq(a: f32, b: f32) {
    assert!(
        (a - b).abs() < EPSILON,
        "Float mismatch: {} vs {}", a, b
    );
}

#[test]
fn test_sine_4_is_empty() {
    assert!(Sine::build(4).is_empty());
}

#[test]
fn test_sine_below_minimum_is_empty() {
    assert!(Sine::build(1).is_empty());
    assert!(Sine::build(2).is_empty());
}

#[test]
fn test_sine_8() {
    let table = Sine::build(8);
    assert_eq!(table.len(), 1);
    assert_feq(table[0], -core::f32::consts::FRAC_1_SQRT_2);
}

#[test]
fn test_sine_16() {
    let table = Sine::build(16);
    assert_eq!(table.len(), 3);
    // sin(-pi/8), sin(-pi/4), sin(-3pi/8)
    assert_feq(table[0], -0.38268343);
    assert_feq(table[1], -0.70710678);
    assert_feq(table[2], -0.92387953);
}

#[test]
fn test_sine_lengths() {
    let mut n = 4;
    while n <= 4096 {
        assert_eq!(Sine::build(n).len(), n / 4 - 1);
        n *= 2;
    }
}

#[test]
fn test_sine_strictly_decreasing_in_first_quadrant() {
    let table = Sine::build(1024);
    for pair in table.windows(2) {
        assert!(pair[1] < pair[0], "{} !< {}", pair[1], pair[0]);
    }
    assert!(table.iter().all(|&s| s < 0.0 && s > -1.0));
}

#[test]
fn test_sine_matches_twiddle_imaginary_parts() {
    // sin(-2pi k/n) is the imaginary part of the k-th twiddle factor
    let n = 256;
    let sine = Sine::build(n);
    let twiddles = Twiddle::build(n);
    for (i, s) in sine.iter().enumerate() {
        assert_feq(*s, twiddles[i + 1].im);
    }
}
