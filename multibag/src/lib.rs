#![cfg_attr(not(doctest), doc = include_str!("../README.md"))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(unused_imports)]
#![warn(missing_docs)]

/// Builds a [`Bag`] from literal members or `member => occurrences` pairs.
///
/// ```
/// use multibag::bag;
///
/// let listed = bag!["Banana", "Orange", "Banana"];
/// let counted = bag! { "Banana" => 2, "Orange" => 1 };
/// assert_eq!(listed, counted);
/// ```
///
/// # Panics
///
/// If a pair has zero occurrences.
#[macro_export]
macro_rules! bag {
    () => {
        $crate::Bag::new()
    };
    ($($member:expr => $occurrences:expr),+ $(,)?) => {
        $crate::Bag::from_counts([$(($member, $occurrences)),+])
    };
    ($($member:expr),+ $(,)?) => {
        $crate::Bag::from([$($member),+])
    };
}

pub use crate::bag::Bag;
pub use crate::error::BagError;
pub use crate::index::{BagIndex, Indices};
pub use crate::iter::{Elements, IntoIter, Iter};

mod bag;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde_impls;
