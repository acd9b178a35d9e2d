//! # Column Lattice - Pruning Primitives for Data Profiling
//!
//! Column-lattice provides the inner-loop data structures of
//! functional-dependency and unique-column-combination discovery: a compact
//! bitset over a table's column indices ([`core::ColumnCombination`]) and a
//! trie-structured index over many such combinations ([`core::SetTrie`])
//! that answers "which recorded combinations are contained in, or contain,
//! this candidate?" in better than linear-scan time.
//!
//! Discovery algorithms explore the power set of a table's columns ordered
//! by the subset relation. Once a combination is known to satisfy or
//! violate a property, all of its supersets or subsets can often be
//! skipped; the `SetTrie` is what makes that check cheap across thousands
//! of candidates.
//!
//! ## Quick Start
//!
//! ```rust
//! use column_lattice::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let schema = TableSchema::new("orders", ["id", "customer", "date", "amount"]);
//!
//! // Record verdicts as the search progresses.
//! let mut known_unique = SetTrie::new();
//! known_unique
//!     .add(&schema.combination([0])?)
//!     .add(&schema.combination([1, 2])?);
//!
//! // Before testing a candidate, check whether a recorded subset already
//! // implies its outcome.
//! let candidate = schema.combination([0, 3])?;
//! if known_unique.contains_subset(&candidate) {
//!     // {id} is unique, so {id, amount} is trivially unique: prune it.
//! }
//!
//! // Accepted combinations translate into named results at the boundary.
//! let mut report = ProfilingReport::new(schema.name());
//! for combination in known_unique.existing_subsets(&schema.combination([0, 1, 2, 3])?) {
//!     report.record_ucc(UniqueColumnCombination::from_combination(&schema, &combination)?);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Architecture
//!
//! - **[`core`]**: `ColumnCombination` and `SetTrie`, the pruning
//!   primitives themselves
//! - **[`input`]**: the seam to input adapters — `TableSchema` (universe
//!   width plus column names) and the `RelationalInput` trait
//! - **[`report`]**: translation of opaque combinations into named,
//!   serializable results
//! - **[`error`]**: the crate error type; validation happens once, at
//!   combination construction, and everything after is total
//! - **[`logging`]**: opt-in `tracing` subscriber setup
//!
//! The core is a single-threaded, synchronous, in-memory structure: no
//! operation suspends, blocks, or performs I/O, and nothing here decides
//! *which* property to check. Sharing one `SetTrie` across concurrent
//! search branches requires external serialization by the caller.

pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod prelude;
pub mod report;

pub use error::{LatticeError, Result};
