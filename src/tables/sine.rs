// src/tables/sine.rs

use super::core::sin_cos;
use crate::common::{TableBuilder, TableKind};
use alloc::vec::Vec;
use core::f64::consts::PI;

/// Quarter-wave sine table `sin(-2π·k/n)` for `k` in `1..n/4`, used by the
/// real-input FFT recombination step.
///
/// The `k = 0` entry is always zero and is left out; the consumer handles
/// it separately. The other three quadrants follow from the symmetry of
/// the sine, so they are not stored either. Size 4 produces an empty
/// table.
pub struct Sine;

impl TableBuilder for Sine {
    type Entry = f32;

    const KIND: TableKind = TableKind::Sine;
    const MIN_SIZE: usize = 4;

    fn build(n: usize) -> Vec<f32> {
        (1..n / 4)
            .map(|k| {
                let angle = -2.0 * PI * (k as f64) / (n as f64);
                let (sin, _) = sin_cos(angle);
                sin as f32
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "sine_tests.rs"]
mod tests;
