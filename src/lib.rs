//! Lookup-table generator for allocation-free radix-2 FFTs.
//!
//! Computes, for every power-of-two size up to a maximum, the complex
//! twiddle factors, the quarter-wave sine table used by real-input FFTs and
//! the compacted in-place bit-reversal table, then renders them as Rust
//! `const` declarations ready to be linked into a `no_std` binary.

#![no_std]

extern crate alloc;

// Tests and the `std` feature (error trait, CLI) need the standard library.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod emit;
pub mod tables;

pub use crate::common::{TableBuilder, TableError, TableKind};
pub use emit::{BitrevGate, TableEmitter, render};
pub use tables::{
    BitReversal, GeneratorConfig, Sine, SizeSequence, TableFamily, TableSet, Twiddle,
    apply_bitrev, build_family,
};

/// Largest supported transform size. Bit-reversal entries are `u16`.
pub const MAX_SIZE: usize = 1 << 16;
