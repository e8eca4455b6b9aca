// src/tables/family.rs

use super::sizes::SizeSequence;
use crate::common::{TableBuilder, TableKind};
use alloc::vec::Vec;

/// One table per supported size, in increasing size order starting at
/// `min_size`. Position `rank` holds the table for size `min_size << rank`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableFamily<T> {
    kind: TableKind,
    min_size: usize,
    tables: Vec<Vec<T>>,
}

impl<T> TableFamily<T> {
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Number of per-size tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Transform size of the table at `rank`.
    pub fn size_at(&self, rank: usize) -> usize {
        self.min_size << rank
    }

    pub fn get(&self, rank: usize) -> Option<&[T]> {
        self.tables.get(rank).map(Vec::as_slice)
    }

    /// `(size, table)` pairs in increasing size order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[T])> + '_ {
        self.tables
            .iter()
            .enumerate()
            .map(|(rank, table)| (self.size_at(rank), table.as_slice()))
    }

    pub fn lengths(&self) -> Vec<usize> {
        self.tables.iter().map(Vec::len).collect()
    }
}

/// Builds the tables of `B` for every size from `B::MIN_SIZE` to `max`.
///
/// `max` is not validated here; see [`TableSet::generate`](super::TableSet::generate).
pub fn build_family<B: TableBuilder>(max: usize) -> TableFamily<B::Entry> {
    let sizes = SizeSequence::new(B::MIN_SIZE, max);

    #[cfg(feature = "parallel")]
    let tables: Vec<Vec<B::Entry>> = {
        use rayon::prelude::*;

        let sizes: Vec<usize> = sizes.iter().collect();
        sizes
            .into_par_iter()
            .map(|n| {
                log::trace!("building {} table for n = {}", B::KIND, n);
                B::build(n)
            })
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let tables: Vec<Vec<B::Entry>> = sizes
        .iter()
        .map(|n| {
            log::trace!("building {} table for n = {}", B::KIND, n);
            B::build(n)
        })
        .collect();

    log::debug!(
        "built {} family: {} tables, sizes {}..={}",
        B::KIND,
        tables.len(),
        B::MIN_SIZE,
        max
    );

    TableFamily {
        kind: B::KIND,
        min_size: B::MIN_SIZE,
        tables,
    }
}

#[cfg(test)]
#[path = "family_tests.rs"]
mod tests;
