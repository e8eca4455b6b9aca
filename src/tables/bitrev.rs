// src/tables/bitrev.rs

use super::core::{log2, reverse_bits};
use crate::MAX_SIZE;
use crate::common::{TableBuilder, TableKind};
use alloc::vec::Vec;

/// Compacted bit-reversal table for in-place reordering.
///
/// Entry `i` holds `reverse(i)` when `reverse(i) > i`, and `i` itself
/// otherwise. An entry equal to its own index means "no swap here": it is
/// either a fixed point or the upper half of a pair already swapped at the
/// lower index. Walking the table once in index order therefore performs
/// every swap exactly once (see [`apply_bitrev`]).
///
/// Entries are `u16`, so `n` may be at most [`MAX_SIZE`]; larger sizes
/// would truncate indices (debug builds panic instead).
pub struct BitReversal;

impl TableBuilder for BitReversal {
    type Entry = u16;

    const KIND: TableKind = TableKind::BitReversal;
    const MIN_SIZE: usize = 1;

    fn build(n: usize) -> Vec<u16> {
        debug_assert!(n <= MAX_SIZE, "bit-reversal size {} does not fit u16 indices", n);

        let bits = log2(n);
        (0..n)
            .map(|i| {
                let rev = reverse_bits(i, bits);
                let entry = if rev > i { rev } else { i };
                entry as u16
            })
            .collect()
    }
}

/// Reorders `data` in place using a table produced by [`BitReversal`].
///
/// This is the loop the consuming FFT runs: swap `data[i]` with
/// `data[table[i]]` for increasing `i`, skipping self-referencing entries.
/// Running it twice restores the original order.
///
/// # Panics
///
/// Panics if an entry indexes past the end of `data`.
pub fn apply_bitrev<T>(data: &mut [T], table: &[u16]) {
    debug_assert_eq!(data.len(), table.len());

    for (i, &entry) in table.iter().enumerate() {
        let j = entry as usize;
        if j != i {
            data.swap(i, j);
        }
    }
}

#[cfg(test)]
#[path = "bitrev_tests.rs"]
mod tests;
