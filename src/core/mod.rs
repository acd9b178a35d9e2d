//! Core data structures for column-combination lattice searches.
//!
//! This module contains the two pruning primitives the rest of the crate is
//! built around:
//!
//! - **[`ColumnCombination`]**: an immutable bitset over column indices with
//!   set algebra, containment tests, and lattice-walk helpers
//! - **[`SetTrie`]**: a trie over many combinations answering subset and
//!   superset containment queries without a linear scan
//!
//! A lattice search records verdicts (`SetTrie::add`) as it goes and checks
//! each new candidate against the recorded combinations
//! (`existing_subsets`, `contains_superset`, ...) to decide whether the
//! candidate's outcome is already implied.

mod combination;
mod set_trie;

pub use combination::ColumnCombination;
pub use set_trie::SetTrie;
