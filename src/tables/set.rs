// src/tables/set.rs

use super::core::{validate_index_width, validate_size};
use super::family::{TableFamily, build_family};
use super::{BitReversal, Sine, Twiddle};
use crate::common::{TableBuilder, TableError, TableKind};
use num_complex::Complex32;

/// What to generate: the maximum transform size and the enabled families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub max_size: usize,
    pub twiddle: bool,
    pub sine: bool,
    pub bitrev: bool,
}

impl GeneratorConfig {
    /// All three families up to `max_size`.
    pub fn new(max_size: usize) -> Self {
        Self { max_size, twiddle: true, sine: true, bitrev: true }
    }

    /// Enables exactly the listed families.
    pub fn with_kinds(self, kinds: &[TableKind]) -> Self {
        Self {
            max_size: self.max_size,
            twiddle: kinds.contains(&TableKind::Twiddle),
            sine: kinds.contains(&TableKind::Sine),
            bitrev: kinds.contains(&TableKind::BitReversal),
        }
    }

    pub fn enables(&self, kind: TableKind) -> bool {
        match kind {
            TableKind::Twiddle => self.twiddle,
            TableKind::Sine => self.sine,
            TableKind::BitReversal => self.bitrev,
        }
    }

    /// Checks `max_size` against every enabled family.
    pub fn validate(&self) -> Result<(), TableError> {
        // size checks that do not depend on a family minimum
        validate_size(self.max_size, 1)?;

        if self.twiddle {
            validate_size(self.max_size, Twiddle::MIN_SIZE)?;
        }
        if self.sine {
            validate_size(self.max_size, Sine::MIN_SIZE)?;
        }
        if self.bitrev {
            validate_size(self.max_size, BitReversal::MIN_SIZE)?;
            validate_index_width(self.max_size)?;
        }
        Ok(())
    }
}

/// The families produced by one generation run. Disabled families are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSet {
    max_size: usize,
    pub twiddle: Option<TableFamily<Complex32>>,
    pub sine: Option<TableFamily<f32>>,
    pub bitrev: Option<TableFamily<u16>>,
}

impl TableSet {
    /// Validates `config` and builds every enabled family.
    pub fn generate(config: &GeneratorConfig) -> Result<Self, TableError> {
        config.validate()?;

        let max = config.max_size;
        log::info!(
            "generating tables up to n = {} (twiddle: {}, sine: {}, bitrev: {})",
            max,
            config.twiddle,
            config.sine,
            config.bitrev
        );

        Ok(Self {
            max_size: max,
            twiddle: config.twiddle.then(|| build_family::<Twiddle>(max)),
            sine: config.sine.then(|| build_family::<Sine>(max)),
            bitrev: config.bitrev.then(|| build_family::<BitReversal>(max)),
        })
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
