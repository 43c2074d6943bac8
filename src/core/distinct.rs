//! Ordered, duplicate-free sequences
//!
//! A `DistinctList` is built once from a stream of candidates and never changes
//! afterwards. Duplicates offered during construction are dropped silently, the
//! first occurrence wins.

use super::Digit;
use std::fmt;
use std::ops::Index;

/// Values with a position on the integer line
///
/// Used by [`DistinctList::is_consecutive`] to decide whether elements form a run.
pub trait Ordinal {
    fn ordinal(&self) -> i64;
}

impl Ordinal for Digit {
    fn ordinal(&self) -> i64 {
        i64::from(self.value())
    }
}

/// Insertion-ordered sequence with no repeated elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistinctList<T> {
    items: Vec<T>,
}

impl<T: PartialEq> DistinctList<T> {
    /// Build a list from candidates, keeping the first occurrence of each value
    ///
    /// # Examples
    /// ```
    /// use baseball::core::DistinctList;
    ///
    /// let list = DistinctList::of([3, 1, 3, 2, 1]);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.get(0), &3);
    /// assert_eq!(list.get(2), &2);
    /// ```
    pub fn of<I: IntoIterator<Item = T>>(candidates: I) -> Self {
        Self::build(candidates, usize::MAX)
    }

    /// Like [`DistinctList::of`], but stops once `limit` distinct elements are held
    pub fn with_limit<I: IntoIterator<Item = T>>(candidates: I, limit: usize) -> Self {
        Self::build(candidates, limit)
    }

    fn build<I: IntoIterator<Item = T>>(candidates: I, limit: usize) -> Self {
        let mut items = Vec::new();
        for candidate in candidates {
            if items.len() >= limit {
                break;
            }
            if !items.contains(&candidate) {
                items.push(candidate);
            }
        }
        Self { items }
    }

    /// Check whether the list holds a value
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

impl<T> DistinctList<T> {
    /// The zero-size list
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of distinct elements held
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the element at `index`
    ///
    /// # Panics
    /// Panics if `index >= self.len()`. Callers only index positions they know exist.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> &T {
        &self.items[index]
    }

    /// Iterate elements in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Elements as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Lazily chain this list's elements with `other`'s
    ///
    /// The chained stream is NOT deduplicated; pair it with a distinct count to
    /// measure the size of the union.
    pub fn concat<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a T> + 'a {
        self.items.iter().chain(other.items.iter())
    }
}

impl<T: Ordinal> DistinctList<T> {
    /// True iff the elements, sorted, form a run where each is one more than the previous
    ///
    /// Empty and single-element lists count as consecutive.
    ///
    /// # Examples
    /// ```
    /// use baseball::core::{Digit, DistinctList};
    ///
    /// assert!(DistinctList::of([3, 1, 2].map(Digit::new)).is_consecutive());
    /// assert!(!DistinctList::of([1, 3, 5].map(Digit::new)).is_consecutive());
    /// ```
    #[must_use]
    pub fn is_consecutive(&self) -> bool {
        let mut ordinals: Vec<i64> = self.items.iter().map(Ordinal::ordinal).collect();
        ordinals.sort_unstable();
        ordinals.windows(2).all(|pair| pair[1] - pair[0] == 1)
    }
}

impl<T> Default for DistinctList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Display> fmt::Display for DistinctList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.items.iter().try_for_each(|item| write!(f, "{item}"))
    }
}

impl<T: PartialEq> FromIterator<T> for DistinctList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T> Index<usize> for DistinctList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<'a, T> IntoIterator for &'a DistinctList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
