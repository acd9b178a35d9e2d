//! Immutable bitset representation of a column combination.
//!
//! A [`ColumnCombination`] is an unordered, duplicate-free set of column
//! indices drawn from `[0, width)` for some table-specific width. It is the
//! value type that lattice-search algorithms pass around, insert into a
//! [`SetTrie`](super::SetTrie), and hand back to result reporting.
//!
//! Values are immutable: every set-algebra operation returns a new value.
//! Equality, hashing, and the canonical ordering depend only on the bit
//! pattern, so two combinations with the same members are interchangeable
//! everywhere, including as map keys.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{LatticeError, Result};

const WORD_BITS: usize = 64;

/// An immutable set of column indices, stored as a bit vector.
///
/// Bit `i` set means column `i` is a member. The internal word vector is
/// normalized (no trailing zero words), so the representation is canonical:
/// the width a value was validated against does not leak into equality or
/// ordering.
///
/// # Examples
///
/// ```rust
/// use column_lattice::core::ColumnCombination;
///
/// let c = ColumnCombination::from_indices([2, 4, 7], 10)?;
/// assert_eq!(c.set_bits(), vec![2, 4, 7]);
/// assert_eq!(c.len(), 3);
/// assert!(c.contains(4));
/// assert!(!c.contains(3));
/// # Ok::<(), column_lattice::LatticeError>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ColumnCombination {
    /// Bit words, least significant first, normalized.
    words: Vec<u64>,
}

impl ColumnCombination {
    /// Creates the empty combination (no columns).
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Creates a combination containing exactly one column.
    pub fn singleton(index: usize) -> Self {
        let mut words = vec![0u64; index / WORD_BITS + 1];
        words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
        Self { words }
    }

    /// Creates a combination from explicit column indices, validated against
    /// the table's universe `[0, width)`.
    ///
    /// Duplicate indices collapse silently.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::ColumnOutOfRange`] if any index is `>= width`.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>, width: usize) -> Result<Self> {
        let mut combination = Self::empty();
        for index in indices {
            if index >= width {
                return Err(LatticeError::column_out_of_range(index, width));
            }
            combination.set_bit(index);
        }
        Ok(combination)
    }

    /// Creates a combination from a raw bit pattern, least significant word
    /// first. No range validation is performed; the pattern is taken as is.
    pub fn from_words(words: Vec<u64>) -> Self {
        let mut combination = Self { words };
        combination.normalize();
        combination
    }

    /// Creates a combination from indices that are already known to be valid.
    pub(crate) fn from_bits_unchecked(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut combination = Self::empty();
        for index in indices {
            combination.set_bit(index);
        }
        combination
    }

    fn set_bit(&mut self, index: usize) {
        let word = index / WORD_BITS;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1u64 << (index % WORD_BITS);
    }

    fn normalize(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }

    /// Returns true if column `index` is a member.
    pub fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / WORD_BITS)
            .is_some_and(|word| word & (1u64 << (index % WORD_BITS)) != 0)
    }

    /// Returns the number of member columns.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no columns are members.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the member indices in increasing order.
    pub fn set_bits(&self) -> Vec<usize> {
        self.iter_set_bits().collect()
    }

    /// Iterates over the member indices in increasing order.
    ///
    /// The iterator borrows the combination and can be created any number of
    /// times; it is not a one-shot cursor.
    pub fn iter_set_bits(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            (0..WORD_BITS)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| w * WORD_BITS + bit)
        })
    }

    /// Returns the largest member index, or `None` for the empty combination.
    pub fn max_bit(&self) -> Option<usize> {
        let last = *self.words.last()?;
        Some((self.words.len() - 1) * WORD_BITS + (WORD_BITS - 1 - last.leading_zeros() as usize))
    }

    /// Returns true if every member of `self` is also a member of `other`.
    ///
    /// Reflexive: every combination is a subset of itself.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        if self.words.len() > other.words.len() {
            return false;
        }
        self.words
            .iter()
            .zip(&other.words)
            .all(|(a, b)| a & !b == 0)
    }

    /// Returns true if every member of `other` is also a member of `self`.
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// Returns true if `self` is a subset of `other` and not equal to it.
    pub fn is_proper_subset_of(&self, other: &Self) -> bool {
        self != other && self.is_subset_of(other)
    }

    /// Returns true if `self` is a superset of `other` and not equal to it.
    pub fn is_proper_superset_of(&self, other: &Self) -> bool {
        self != other && self.is_superset_of(other)
    }

    /// Returns the union of `self` and `other` as a new combination.
    pub fn union(&self, other: &Self) -> Self {
        let (longer, shorter) = if self.words.len() >= other.words.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut words = longer.words.clone();
        for (word, &w) in words.iter_mut().zip(&shorter.words) {
            *word |= w;
        }
        Self { words }
    }

    /// Returns the intersection of `self` and `other` as a new combination.
    pub fn intersect(&self, other: &Self) -> Self {
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a & b)
            .collect();
        Self::from_words(words)
    }

    /// Returns the members of `self` that are not members of `other`.
    pub fn without(&self, other: &Self) -> Self {
        let mut words = self.words.clone();
        for (word, &w) in words.iter_mut().zip(&other.words) {
            *word &= !w;
        }
        Self::from_words(words)
    }

    /// Returns the complement of `self` within the universe `[0, width)`.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::ColumnOutOfRange`] if `self` has a member
    /// outside the universe.
    pub fn invert(&self, width: usize) -> Result<Self> {
        self.check_width(width)?;
        Ok(Self::from_bits_unchecked(
            (0..width).filter(|&index| !self.contains(index)),
        ))
    }

    /// Returns every combination formed by adding one column from the
    /// universe `[0, width)` that is not yet a member.
    ///
    /// Lattice searches use this to walk one level up from a candidate.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::ColumnOutOfRange`] if `self` has a member
    /// outside the universe.
    pub fn direct_supersets(&self, width: usize) -> Result<Vec<Self>> {
        self.check_width(width)?;
        Ok((0..width)
            .filter(|&index| !self.contains(index))
            .map(|index| self.union(&Self::singleton(index)))
            .collect())
    }

    /// Returns every combination formed by removing one member column.
    pub fn direct_subsets(&self) -> Vec<Self> {
        self.iter_set_bits()
            .map(|index| self.without(&Self::singleton(index)))
            .collect()
    }

    fn check_width(&self, width: usize) -> Result<()> {
        match self.max_bit() {
            Some(max) if max >= width => Err(LatticeError::column_out_of_range(max, width)),
            _ => Ok(()),
        }
    }
}

/// Canonical total order: the bit pattern compared as an unsigned integer.
///
/// The order is stable across widths because the word vector is normalized.
impl Ord for ColumnCombination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.words
            .len()
            .cmp(&other.words.len())
            .then_with(|| self.words.iter().rev().cmp(other.words.iter().rev()))
    }
}

impl PartialOrd for ColumnCombination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ColumnCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.iter_set_bits().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for ColumnCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnCombination{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo(indices: &[usize]) -> ColumnCombination {
        ColumnCombination::from_indices(indices.iter().copied(), 128).unwrap()
    }

    #[test]
    fn round_trip_preserves_sorted_indices() {
        let c = combo(&[7, 2, 4]);
        assert_eq!(c.set_bits(), vec![2, 4, 7]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn duplicates_collapse() {
        let c = ColumnCombination::from_indices([3, 3, 5, 3], 8).unwrap();
        assert_eq!(c.set_bits(), vec![3, 5]);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let err = ColumnCombination::from_indices([0, 8], 8).unwrap_err();
        assert!(matches!(
            err,
            LatticeError::ColumnOutOfRange { index: 8, width: 8 }
        ));
    }

    #[test]
    fn equality_ignores_construction_width() {
        let narrow = ColumnCombination::from_indices([1, 3], 4).unwrap();
        let wide = ColumnCombination::from_indices([1, 3], 4096).unwrap();
        assert_eq!(narrow, wide);
    }

    #[test]
    fn from_words_normalizes_trailing_zeros() {
        let padded = ColumnCombination::from_words(vec![0b1010, 0, 0]);
        let tight = ColumnCombination::from_words(vec![0b1010]);
        assert_eq!(padded, tight);
        assert_eq!(padded.set_bits(), vec![1, 3]);
    }

    #[test]
    fn subset_and_superset_are_duals_and_reflexive() {
        let small = combo(&[2, 4]);
        let large = combo(&[2, 4, 7]);
        assert!(small.is_subset_of(&large));
        assert!(large.is_superset_of(&small));
        assert!(!large.is_subset_of(&small));
        assert!(small.is_subset_of(&small));
        assert!(small.is_superset_of(&small));
        assert!(!small.is_proper_subset_of(&small));
        assert!(small.is_proper_subset_of(&large));
    }

    #[test]
    fn empty_combination_is_subset_of_everything() {
        let empty = ColumnCombination::empty();
        assert!(empty.is_empty());
        assert!(empty.is_subset_of(&combo(&[5])));
        assert!(empty.is_subset_of(&empty));
        assert_eq!(empty.max_bit(), None);
    }

    #[test]
    fn set_algebra() {
        let a = combo(&[1, 2, 64]);
        let b = combo(&[2, 3]);
        assert_eq!(a.union(&b).set_bits(), vec![1, 2, 3, 64]);
        assert_eq!(a.intersect(&b).set_bits(), vec![2]);
        assert_eq!(a.without(&b).set_bits(), vec![1, 64]);
        // Differencing away the high word must renormalize.
        assert_eq!(a.without(&combo(&[64])), combo(&[1, 2]));
    }

    #[test]
    fn invert_complements_within_width() {
        let c = combo(&[0, 2]);
        assert_eq!(c.invert(5).unwrap().set_bits(), vec![1, 3, 4]);
        assert!(combo(&[9]).invert(5).is_err());
    }

    #[test]
    fn direct_supersets_and_subsets() {
        let c = ColumnCombination::from_indices([1], 3).unwrap();
        let ups = c.direct_supersets(3).unwrap();
        assert_eq!(ups.len(), 2);
        assert!(ups.contains(&combo(&[0, 1])));
        assert!(ups.contains(&combo(&[1, 2])));

        let downs = combo(&[1, 2]).direct_subsets();
        assert_eq!(downs.len(), 2);
        assert!(downs.contains(&combo(&[1])));
        assert!(downs.contains(&combo(&[2])));
    }

    #[test]
    fn ordering_tracks_bit_pattern_magnitude() {
        // {0} < {1} < {0,1} < {64} as unsigned integers.
        let mut values = vec![combo(&[64]), combo(&[0, 1]), combo(&[0]), combo(&[1])];
        values.sort();
        assert_eq!(
            values,
            vec![combo(&[0]), combo(&[1]), combo(&[0, 1]), combo(&[64])]
        );
    }

    #[test]
    fn display_renders_sorted_indices() {
        assert_eq!(combo(&[7, 2, 4]).to_string(), "[2, 4, 7]");
        assert_eq!(ColumnCombination::empty().to_string(), "[]");
    }
}
