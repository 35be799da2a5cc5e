use std::fmt;
use std::iter::FusedIterator;

use indexmap::map;

/// Borrowing iterator over `(member, occurrences)` pairs of a [`Bag`](crate::Bag).
///
/// A clone continues from the position of the original.
pub struct Iter<'a, E> {
    inner: map::Iter<'a, E, usize>,
}

impl<'a, E> Iter<'a, E> {
    pub(crate) fn new(inner: map::Iter<'a, E, usize>) -> Self {
        Self { inner }
    }
}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<E: fmt::Debug> fmt::Debug for Iter<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = (&'a E, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(member, &count)| (member, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn count(self) -> usize {
        self.inner.len()
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(member, &count)| (member, count))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for Iter<'_, E> {}

/// Owning iterator over `(member, occurrences)` pairs of a [`Bag`](crate::Bag).
pub struct IntoIter<E> {
    inner: map::IntoIter<E, usize>,
}

impl<E> IntoIter<E> {
    pub(crate) fn new(inner: map::IntoIter<E, usize>) -> Self {
        Self { inner }
    }
}

impl<E: fmt::Debug> fmt::Debug for IntoIter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<E> Iterator for IntoIter<E> {
    type Item = (E, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for IntoIter<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> FusedIterator for IntoIter<E> {}

/// Iterator that repeats every member as many times as it occurs.
pub struct Elements<'a, E> {
    pairs: Iter<'a, E>,
    current: Option<(&'a E, usize)>,
    remaining: usize,
}

impl<'a, E> Elements<'a, E> {
    pub(crate) fn new(pairs: Iter<'a, E>, total: usize) -> Self {
        Self { pairs, current: None, remaining: total }
    }
}

impl<E> Clone for Elements<'_, E> {
    fn clone(&self) -> Self {
        Self { pairs: self.pairs.clone(), current: self.current, remaining: self.remaining }
    }
}

impl<'a, E> Iterator for Elements<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((member, left)) = &mut self.current {
                if *left > 0 {
                    *left -= 1;
                    self.remaining -= 1;
                    return Some(*member);
                }
            }
            self.current = Some(self.pairs.next()?);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Elements<'_, E> {}

impl<E> FusedIterator for Elements<'_, E> {}
