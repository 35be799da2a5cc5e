use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::Range;

use hashbrown::DefaultHashBuilder;
use indexmap::{Equivalent, IndexMap};
use itertools::Itertools;
use log::{debug, trace};

use crate::error::BagError;
use crate::index::{BagIndex, Indices};
use crate::iter::{Elements, IntoIter, Iter};

/// A multiset: every member is stored once, together with the number of times it occurs.
///
/// Members with zero occurrences are never stored, so every count observed through the
/// bag is at least `1`. Traversal yields `(member, occurrences)` pairs.
///
/// # Traversal order
///
/// Members are kept in an [`IndexMap`]. The order follows the first insertion of each
/// member until something is dropped from the bag: the last member then takes the freed
/// position. Treat it as unspecified, but stable while the bag is not mutated.
///
/// # Examples
///
/// ```
/// use multibag::Bag;
///
/// let mut fruits = Bag::new();
/// fruits.insert("Banana");
/// fruits.add("Orange", 2);
/// fruits.insert("Banana");
/// fruits.remove_one("Orange");
///
/// assert_eq!(fruits.count("Banana"), 2);
/// assert_eq!(fruits.unique_count(), 2);
/// assert_eq!(fruits.total_count(), 3);
///
/// let frequent: Vec<_> = fruits.iter().filter(|&(_, count)| count > 1).collect();
/// assert_eq!(frequent, [(&"Banana", 2)]);
/// ```
#[derive(Clone)]
pub struct Bag<E, S = DefaultHashBuilder> {
    contents: IndexMap<E, usize, S>,
    /// Sum of all counts in `contents`.
    total: usize,
}

impl<E> Bag<E> {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty bag with room for `capacity` distinct members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<E: Eq + Hash> Bag<E> {
    /// Creates a bag from `(member, occurrences)` pairs. Repeated members accumulate.
    ///
    /// # Panics
    ///
    /// If any pair has zero occurrences or the total overflows `usize`.
    #[track_caller]
    pub fn from_counts<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (E, usize)>,
    {
        let mut bag = Self::new();
        bag.extend_counts(pairs);
        bag
    }
}

impl<E, S> Bag<E, S> {
    /// Creates an empty bag which hashes members with `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self { contents: IndexMap::with_hasher(hash_builder), total: 0 }
    }

    /// Creates an empty bag with room for `capacity` distinct members, hashing with `hash_builder`.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self { contents: IndexMap::with_capacity_and_hasher(capacity, hash_builder), total: 0 }
    }

    /// The number of distinct members.
    pub fn unique_count(&self) -> usize {
        self.contents.len()
    }

    /// The sum of occurrences over all members.
    pub fn total_count(&self) -> usize {
        self.total
    }

    /// `true` when no member occurs.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.contents.clear();
        self.total = 0;
        debug!("cleared the bag");
    }

    /// Pairs of `(member, occurrences)` in traversal order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.contents.iter())
    }

    /// Every member, repeated as many times as it occurs.
    pub fn elements(&self) -> Elements<'_, E> {
        Elements::new(self.iter(), self.total)
    }

    /// The first pair in traversal order.
    pub fn first(&self) -> Option<(&E, usize)> {
        self.get_at(self.start_index())
    }

    /// Collects the pairs, ordered by `compare`. The sort is stable.
    pub fn sorted_by<F>(&self, compare: F) -> Vec<(&E, usize)>
    where
        F: FnMut(&(&E, usize), &(&E, usize)) -> Ordering,
    {
        self.iter().sorted_by(compare).collect()
    }

    /// Collects the pairs, most frequent first. Ties keep their traversal order.
    pub fn most_common(&self) -> Vec<(&E, usize)> {
        self.iter().sorted_by_key(|&(_, count)| Reverse(count)).collect()
    }

    /// Index of the first pair. Equals [`end_index`](Bag::end_index) for an empty bag.
    pub fn start_index(&self) -> BagIndex {
        BagIndex(0)
    }

    /// Index one past the last pair. It can't be dereferenced.
    pub fn end_index(&self) -> BagIndex {
        BagIndex(self.contents.len())
    }

    /// Index that follows `index`.
    pub fn index_after(&self, index: BagIndex) -> BagIndex {
        index.successor()
    }

    /// All valid indices, in order.
    pub fn indices(&self) -> Indices {
        Indices::new(self.contents.len())
    }

    /// The pair at `index`, or `None` when `index` is not below [`end_index`](Bag::end_index).
    pub fn get_at(&self, index: BagIndex) -> Option<(&E, usize)> {
        self.contents.get_index(index.position()).map(|(member, &count)| (member, count))
    }

    /// The pair at `index`.
    ///
    /// # Panics
    ///
    /// If `index` lies outside `start_index()..end_index()`.
    #[track_caller]
    pub fn at(&self, index: BagIndex) -> (&E, usize) {
        match self.get_at(index) {
            Some(pair) => pair,
            None => panic!("{}", BagError::OutOfBoundsCursor { index: index.position(), end: self.contents.len() }),
        }
    }

    /// Pairs between two indices, the end excluded.
    ///
    /// # Panics
    ///
    /// If the range is inverted or ends past [`end_index`](Bag::end_index).
    #[track_caller]
    pub fn range(&self, range: Range<BagIndex>) -> Iter<'_, E> {
        let (start, end) = (range.start.position(), range.end.position());
        if end > self.contents.len() {
            panic!("{}", BagError::OutOfBoundsCursor { index: end, end: self.contents.len() });
        }
        if start > end {
            panic!("index range starts at {start} but ends at {end}");
        }
        Iter::new(self.contents.as_slice()[start..end].iter())
    }
}

impl<E, S> Bag<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    /// Adds `occurrences` of `member` and returns its new count.
    ///
    /// Leaves the bag untouched on error: zero `occurrences` gives
    /// [`BagError::InvalidOccurrenceCount`], a total past `usize::MAX` gives
    /// [`BagError::CountOverflow`].
    pub fn try_add(&mut self, member: E, occurrences: usize) -> Result<usize, BagError> {
        if occurrences == 0 {
            return Err(BagError::InvalidOccurrenceCount);
        }

        let Some(total) = self.total.checked_add(occurrences) else {
            return Err(BagError::CountOverflow { requested: occurrences, total: self.total });
        };

        let count = self.contents.entry(member).or_insert(0);
        *count += occurrences;
        self.total = total;

        trace!("added {occurrences} occurrence(s), member count is {count}, total is {total}");
        Ok(*count)
    }

    /// Adds `occurrences` of `member`.
    ///
    /// # Panics
    ///
    /// If `occurrences` is zero or the total number of occurrences overflows `usize`.
    #[track_caller]
    pub fn add(&mut self, member: E, occurrences: usize) {
        if let Err(err) = self.try_add(member, occurrences) {
            panic!("{err}");
        }
    }

    /// Adds a single occurrence of `member`.
    ///
    /// # Panics
    ///
    /// If the total number of occurrences overflows `usize`.
    #[track_caller]
    pub fn insert(&mut self, member: E) {
        self.add(member, 1);
    }

    /// Adds every pair with [`add`](Bag::add).
    ///
    /// # Panics
    ///
    /// If any pair has zero occurrences or the total overflows `usize`.
    #[track_caller]
    pub fn extend_counts<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (E, usize)>,
    {
        for (member, occurrences) in pairs {
            self.add(member, occurrences);
        }
    }

    /// Removes `occurrences` of `member` and returns how many are left.
    ///
    /// The member disappears from the bag once its count drops to zero. On error the bag
    /// is left untouched: zero `occurrences` gives [`BagError::InvalidOccurrenceCount`],
    /// an absent member or too few occurrences give [`BagError::InvalidRemoval`].
    pub fn try_remove<Q>(&mut self, member: &Q, occurrences: usize) -> Result<usize, BagError>
    where
        Q: ?Sized + Hash + Equivalent<E>,
    {
        if occurrences == 0 {
            return Err(BagError::InvalidOccurrenceCount);
        }

        let Some((index, _, count)) = self.contents.get_full_mut(member) else {
            return Err(BagError::InvalidRemoval { requested: occurrences, present: 0 });
        };
        if *count < occurrences {
            return Err(BagError::InvalidRemoval { requested: occurrences, present: *count });
        }

        *count -= occurrences;
        let remaining = *count;
        self.total -= occurrences;
        trace!("removed {occurrences} occurrence(s), member count is {remaining}, total is {}", self.total);

        if remaining == 0 {
            self.contents.swap_remove_index(index);
            debug!("member at index {index} dropped out, {} distinct left", self.contents.len());
        }

        Ok(remaining)
    }

    /// Removes `occurrences` of `member`.
    ///
    /// # Panics
    ///
    /// If `occurrences` is zero, `member` is absent or occurs fewer than `occurrences` times.
    #[track_caller]
    pub fn remove<Q>(&mut self, member: &Q, occurrences: usize)
    where
        Q: ?Sized + Hash + Equivalent<E>,
    {
        if let Err(err) = self.try_remove(member, occurrences) {
            panic!("{err}");
        }
    }

    /// Removes a single occurrence of `member`.
    ///
    /// # Panics
    ///
    /// If `member` is absent.
    #[track_caller]
    pub fn remove_one<Q>(&mut self, member: &Q)
    where
        Q: ?Sized + Hash + Equivalent<E>,
    {
        self.remove(member, 1);
    }

    /// Drops `member` altogether and returns how many occurrences it had. Absent members give `0`.
    pub fn remove_all<Q>(&mut self, member: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<E>,
    {
        let count = self.contents.swap_remove(member).unwrap_or(0);
        self.total -= count;
        if count > 0 {
            debug!("dropped {count} occurrence(s) of a member, total is {}", self.total);
        }
        count
    }

    /// Keeps only the members for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&E, usize) -> bool,
    {
        let total = &mut self.total;
        self.contents.retain(|member, count| {
            let kept = keep(member, *count);
            if !kept {
                *total -= *count;
            }
            kept
        });
        debug!("retained {} distinct member(s), total is {}", self.contents.len(), self.total);
    }

    /// How many times `member` occurs. Absent members give `0`.
    pub fn count<Q>(&self, member: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<E>,
    {
        self.contents.get(member).copied().unwrap_or(0)
    }

    /// `true` when `member` occurs at least once.
    pub fn contains<Q>(&self, member: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<E>,
    {
        self.contents.contains_key(member)
    }

    /// Index of the pair holding `member`.
    pub fn index_of<Q>(&self, member: &Q) -> Option<BagIndex>
    where
        Q: ?Sized + Hash + Equivalent<E>,
    {
        self.contents.get_index_of(member).map(BagIndex)
    }
}

impl<E, S: Default> Default for Bag<E, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

/// Same text as the underlying map: `{"Banana": 2, "Orange": 1}`.
impl<E: fmt::Debug, S> fmt::Debug for Bag<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.contents.fmt(f)
    }
}

/// Bags are equal when they hold the same members with the same counts, in any order.
impl<E, S> PartialEq for Bag<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total && self.contents == other.contents
    }
}

impl<E, S> Eq for Bag<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
}

impl<E, S> FromIterator<E> for Bag<E, S>
where
    E: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = E>>(members: I) -> Self {
        let members = members.into_iter();
        let mut bag = Self::with_capacity_and_hasher(members.size_hint().0, S::default());
        bag.extend(members);
        bag
    }
}

impl<E, S> Extend<E> for Bag<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, members: I) {
        members.into_iter().for_each(|member| self.insert(member));
    }
}

impl<'a, E, S> Extend<&'a E> for Bag<E, S>
where
    E: Eq + Hash + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a E>>(&mut self, members: I) {
        self.extend(members.into_iter().copied());
    }
}

impl<E: Eq + Hash, const N: usize> From<[E; N]> for Bag<E> {
    fn from(members: [E; N]) -> Self {
        members.into_iter().collect()
    }
}

impl<'a, E, S> IntoIterator for &'a Bag<E, S> {
    type Item = (&'a E, usize);
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, S> IntoIterator for Bag<E, S> {
    type Item = (E, usize);
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.contents.into_iter())
    }
}
