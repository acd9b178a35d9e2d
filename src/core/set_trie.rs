//! Trie-structured containment index over column combinations.
//!
//! A [`SetTrie`] records column combinations as root-to-node paths of
//! strictly increasing column indices, so combinations sharing a low-index
//! prefix share nodes. On top of that sharing it answers the two questions
//! lattice searches ask before testing a candidate:
//!
//! - which recorded combinations are **subsets** of this candidate?
//! - which recorded combinations are **supersets** of this candidate?
//!
//! Both queries prune the walk using the trie's ordering invariant instead
//! of scanning every recorded combination.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::ColumnCombination;

/// One trie node: an ordered child map plus a terminal marker.
///
/// The terminal marker distinguishes combinations that were actually
/// inserted from paths that merely prefix another insertion. Children are
/// kept in a `BTreeMap`, so derived equality and hashing are independent of
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
struct Node {
    terminal: bool,
    children: BTreeMap<usize, Node>,
}

impl Node {
    fn collect_subsets(
        &self,
        query: &[usize],
        from: usize,
        path: &mut Vec<usize>,
        results: &mut Vec<ColumnCombination>,
    ) {
        // Skip-or-descend: taking a later loop iteration skips the query
        // index, descending consumes it. Every recorded subset is reached by
        // exactly one path because trie paths are strictly increasing.
        for (pos, &index) in query.iter().enumerate().skip(from) {
            if let Some(child) = self.children.get(&index) {
                path.push(index);
                if child.terminal {
                    results.push(ColumnCombination::from_bits_unchecked(path.iter().copied()));
                }
                child.collect_subsets(query, pos + 1, path, results);
                path.pop();
            }
        }
    }

    fn has_subset(&self, query: &[usize], from: usize) -> bool {
        if self.terminal {
            return true;
        }
        query.iter().enumerate().skip(from).any(|(pos, index)| {
            self.children
                .get(index)
                .is_some_and(|child| child.has_subset(query, pos + 1))
        })
    }

    fn collect_supersets(
        &self,
        required: &[usize],
        cursor: usize,
        path: &mut Vec<usize>,
        results: &mut Vec<ColumnCombination>,
    ) {
        if cursor == required.len() {
            // Every terminal below this node already covers the query.
            if self.terminal {
                results.push(ColumnCombination::from_bits_unchecked(path.iter().copied()));
            }
            for (&index, child) in &self.children {
                path.push(index);
                child.collect_supersets(required, cursor, path, results);
                path.pop();
            }
            return;
        }
        // Children keyed above the next required index can never supply it:
        // paths are strictly increasing.
        let next = required[cursor];
        for (&index, child) in self.children.range(..=next) {
            let advanced = if index == next { cursor + 1 } else { cursor };
            path.push(index);
            child.collect_supersets(required, advanced, path, results);
            path.pop();
        }
    }

    fn has_superset(&self, required: &[usize], cursor: usize) -> bool {
        if cursor == required.len() {
            return self.terminal
                || self
                    .children
                    .values()
                    .any(|child| child.has_superset(required, cursor));
        }
        let next = required[cursor];
        self.children.range(..=next).any(|(&index, child)| {
            child.has_superset(required, if index == next { cursor + 1 } else { cursor })
        })
    }
}

/// A set of column combinations indexed for subset and superset queries.
///
/// Insertion is idempotent and append-only; queries never mutate the trie.
/// Two tries compare equal (and hash equal) iff they contain the same set
/// of combinations, regardless of insertion order.
///
/// The trie provides no internal synchronization. A search that shares one
/// trie across concurrent branches must serialize all access itself.
///
/// # Examples
///
/// ```rust
/// use column_lattice::core::{ColumnCombination, SetTrie};
///
/// let mut trie = SetTrie::new();
/// trie.add(&ColumnCombination::from_indices([2, 4], 8)?)
///     .add(&ColumnCombination::from_indices([4, 7], 8)?);
///
/// let query = ColumnCombination::from_indices([2, 4, 7], 8)?;
/// let subsets = trie.existing_subsets(&query);
/// assert_eq!(subsets.len(), 2);
/// # Ok::<(), column_lattice::LatticeError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SetTrie {
    root: Node,
    len: usize,
}

impl SetTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a combination, creating intermediate nodes as needed.
    ///
    /// Idempotent: re-inserting a present combination leaves the trie
    /// observably unchanged. Returns `&mut Self` for chained insertion.
    pub fn add(&mut self, combination: &ColumnCombination) -> &mut Self {
        let mut node = &mut self.root;
        for index in combination.iter_set_bits() {
            node = node.children.entry(index).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
            debug!(combination = %combination, len = self.len, "recorded column combination");
        }
        self
    }

    /// Inserts every combination in the iterator.
    ///
    /// The resulting trie is independent of iteration order.
    pub fn add_all<'a>(
        &mut self,
        combinations: impl IntoIterator<Item = &'a ColumnCombination>,
    ) -> &mut Self {
        for combination in combinations {
            self.add(combination);
        }
        self
    }

    /// Returns the number of distinct combinations recorded.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true iff no combination has ever been inserted.
    ///
    /// Inserting the empty combination marks the root terminal and makes
    /// the trie non-empty even though the root has no children.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns every recorded combination that is a subset of `query`,
    /// including `query` itself if recorded. The empty combination, if
    /// recorded, is a subset of every query.
    ///
    /// Result order is unspecified; treat it as a set.
    pub fn existing_subsets(&self, query: &ColumnCombination) -> Vec<ColumnCombination> {
        let bits = query.set_bits();
        let mut results = Vec::new();
        if self.root.terminal {
            results.push(ColumnCombination::empty());
        }
        let mut path = Vec::with_capacity(bits.len());
        self.root.collect_subsets(&bits, 0, &mut path, &mut results);
        trace!(query = %query, found = results.len(), "subset query");
        results
    }

    /// Returns every recorded combination that is a superset of `query`,
    /// including `query` itself if recorded.
    ///
    /// Result order is unspecified; treat it as a set.
    pub fn existing_supersets(&self, query: &ColumnCombination) -> Vec<ColumnCombination> {
        let bits = query.set_bits();
        let mut results = Vec::new();
        let mut path = Vec::new();
        self.root.collect_supersets(&bits, 0, &mut path, &mut results);
        trace!(query = %query, found = results.len(), "superset query");
        results
    }

    /// Returns true if some recorded combination is a subset of `query`.
    ///
    /// Early-exit form of [`existing_subsets`](Self::existing_subsets) for
    /// the hot pruning check.
    pub fn contains_subset(&self, query: &ColumnCombination) -> bool {
        self.root.has_subset(&query.set_bits(), 0)
    }

    /// Returns true if some recorded combination is a superset of `query`.
    pub fn contains_superset(&self, query: &ColumnCombination) -> bool {
        self.root.has_superset(&query.set_bits(), 0)
    }
}
