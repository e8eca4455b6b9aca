// src/tables/sizes.rs

/// The power-of-two sizes `min, 2·min, 4·min, …` up to and including `max`.
///
/// Restartable: every call to [`SizeSequence::iter`] starts again from
/// `min`. If `max` is not a power of two the last size is simply the
/// largest one below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSequence {
    min: usize,
    max: usize,
}

impl SizeSequence {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn iter(&self) -> Sizes {
        Sizes { next: self.min, max: self.max }
    }
}

impl IntoIterator for SizeSequence {
    type Item = usize;
    type IntoIter = Sizes;

    fn into_iter(self) -> Sizes {
        self.iter()
    }
}

impl IntoIterator for &SizeSequence {
    type Item = usize;
    type IntoIter = Sizes;

    fn into_iter(self) -> Sizes {
        self.iter()
    }
}

/// Iterator returned by [`SizeSequence::iter`].
#[derive(Debug, Clone)]
pub struct Sizes {
    next: usize,
    max: usize,
}

impl Iterator for Sizes {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // 0 marks exhaustion (also covers a zero `min`, which never doubles)
        if self.next == 0 || self.next > self.max {
            return None;
        }
        let n = self.next;
        self.next = n.checked_mul(2).unwrap_or(0);
        Some(n)
    }
}

#[cfg(test)]
#[path = "sizes_tests.rs"]
mod tests;
