use std::iter::FusedIterator;
use std::ops::Range;

/// A position in the traversal order of a [`Bag`](crate::Bag).
///
/// Indices compare the same way their positions do. They only make sense for the bag
/// that issued them, and only until that bag is mutated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BagIndex(pub(crate) usize);

impl BagIndex {
    pub(crate) fn position(self) -> usize {
        self.0
    }

    pub(crate) fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Every valid index of a bag, from the start index up to, not including, the end index.
#[derive(Debug, Clone)]
pub struct Indices {
    range: Range<usize>,
}

impl Indices {
    pub(crate) fn new(len: usize) -> Self {
        Self { range: 0..len }
    }
}

impl Iterator for Indices {
    type Item = BagIndex;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(BagIndex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Indices {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(BagIndex)
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}
