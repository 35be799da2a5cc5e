use thiserror::Error;

/// A broken precondition of a [`Bag`](crate::Bag) operation.
///
/// The panicking operations ([`add`](crate::Bag::add), [`remove`](crate::Bag::remove),
/// [`at`](crate::Bag::at)) report these as panics: they are programming errors.
/// The `try_*` twins hand them back instead, leaving the bag untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BagError {
    /// Occurrences passed to `add` or `remove` must be positive.
    #[error("occurrence count must be positive")]
    InvalidOccurrenceCount,
    /// The member is absent, or has fewer occurrences than requested.
    #[error("cannot remove {requested} occurrence(s), only {present} present")]
    InvalidRemoval {
        /// How many occurrences the caller asked to remove.
        requested: usize,
        /// How many occurrences the bag holds.
        present: usize,
    },
    /// Adding the occurrences would push the total past `usize::MAX`.
    #[error("cannot add {requested} occurrence(s) to a total of {total} without overflow")]
    CountOverflow {
        /// How many occurrences the caller asked to add.
        requested: usize,
        /// The total before the addition.
        total: usize,
    },
    /// A cursor was dereferenced outside `start_index()..end_index()`.
    #[error("cursor {index} is out of bounds, end is {end}")]
    OutOfBoundsCursor {
        /// Position of the offending cursor.
        index: usize,
        /// Position of the end cursor.
        end: usize,
    },
}
