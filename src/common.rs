// src/common.rs

use alloc::vec::Vec;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TableError {
    ZeroSize,
    NotPowerOfTwo,
    SizeTooSmall,
    SizeTooLarge,
    WriteFailed,
}

use core::fmt;

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ZeroSize => write!(f, "Maximum size must be greater than zero"),
            TableError::NotPowerOfTwo => write!(f, "Size must be a power of 2"),
            TableError::SizeTooSmall => {
                write!(f, "Maximum size is below the smallest size of an enabled table family")
            }
            TableError::SizeTooLarge => {
                write!(f, "Maximum size exceeds {} with bit-reversal tables (indices are u16)", crate::MAX_SIZE)
            }
            TableError::WriteFailed => write!(f, "Output sink rejected the write"),
        }
    }
}

impl From<fmt::Error> for TableError {
    fn from(_: fmt::Error) -> Self {
        TableError::WriteFailed
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TableError {}

/// The three table families the generator knows how to build.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TableKind {
    Twiddle,
    Sine,
    #[cfg_attr(feature = "cli", value(name = "bitrev"))]
    BitReversal,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Twiddle, TableKind::Sine, TableKind::BitReversal];

    /// Name of the emitted constant.
    pub fn const_name(self) -> &'static str {
        match self {
            TableKind::Twiddle => "TWIDDLE",
            TableKind::Sine => "SINE",
            TableKind::BitReversal => "BITREV",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Twiddle => write!(f, "twiddle"),
            TableKind::Sine => write!(f, "sine"),
            TableKind::BitReversal => write!(f, "bitrev"),
        }
    }
}

/// A per-size table builder. Each builder is a pure function of the
/// transform size; `n` is expected to be a power of two no smaller than
/// `MIN_SIZE`, anything else yields an unspecified table.
pub trait TableBuilder {
    type Entry: Copy + Send;

    const KIND: TableKind;
    const MIN_SIZE: usize;

    fn build(n: usize) -> Vec<Self::Entry>;
}
