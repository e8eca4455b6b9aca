// src/tables/core.rs

use crate::common::TableError;
use crate::MAX_SIZE;

/// Sine and cosine of `angle`, in double precision.
///
/// Always goes through `libm` (even with `std`) so the generated tables are
/// bit-identical whatever the host's math library.
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    (libm::sin(angle), libm::cos(angle))
}

/// Integer base-2 logarithm, rounded down. `log2(0)` is 0.
pub(crate) fn log2(n: usize) -> u32 {
    if n == 0 { 0 } else { n.ilog2() }
}

/// Reverses the low `bits` bits of `i`. Higher bits are discarded.
pub(crate) fn reverse_bits(i: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    i.reverse_bits() >> (usize::BITS - bits)
}

/// Checks a requested maximum size against a family's minimum size.
pub(crate) fn validate_size(max: usize, min: usize) -> Result<(), TableError> {
    if max == 0 {
        return Err(TableError::ZeroSize);
    }
    if !max.is_power_of_two() {
        return Err(TableError::NotPowerOfTwo);
    }
    if max < min {
        return Err(TableError::SizeTooSmall);
    }
    Ok(())
}

/// Bit-reversal entries are `u16`, so `max - 1` must fit in 16 bits.
pub(crate) fn validate_index_width(max: usize) -> Result<(), TableError> {
    if max > MAX_SIZE {
        return Err(TableError::SizeTooLarge);
    }
    Ok(())
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
