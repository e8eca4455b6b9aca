// src/tables/twiddle.rs

use super::core::sin_cos;
use crate::common::{TableBuilder, TableKind};
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex32;

/// Complex twiddle factors `exp(-2πi·k/n)` for `k` in `0..n/2`.
///
/// Only the upper half of the unit circle is stored; a radix-2 butterfly
/// never needs an argument outside `[0, π)`. Values are computed in `f64`
/// and narrowed to `f32`. The consumer indexes the table by `k`, so the
/// order is fixed.
///
/// Size 1 still gets one entry, the trivial factor `1`, so every table
/// starts with `w⁰`.
pub struct Twiddle;

impl TableBuilder for Twiddle {
    type Entry = Complex32;

    const KIND: TableKind = TableKind::Twiddle;
    const MIN_SIZE: usize = 1;

    fn build(n: usize) -> Vec<Complex32> {
        let count = if n == 1 { 1 } else { n / 2 };
        (0..count)
            .map(|k| {
                let angle = 2.0 * PI * (k as f64) / (n as f64);
                let (sin, cos) = sin_cos(angle);
                Complex32::new(cos as f32, -sin as f32)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
