//! Error types for the column-lattice crate.

use thiserror::Error;

/// Result type for column-lattice operations.
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Errors that can occur while building column combinations or feeding
/// relational input into a profiling run.
///
/// The containment index itself ([`crate::core::SetTrie`]) and all
/// set-algebra operations are total functions over well-formed values and
/// never fail; validation happens once, at construction time.
#[derive(Error, Debug)]
pub enum LatticeError {
    /// A column index was outside the table's universe `[0, width)`.
    #[error("column index {index} is out of range for a table with {width} columns")]
    ColumnOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of columns in the table.
        width: usize,
    },

    /// A column name did not resolve against the table schema.
    #[error("unknown column {name:?}")]
    UnknownColumn {
        /// The name that failed to resolve.
        name: String,
    },

    /// A relational input failed while iterating rows.
    #[error("input iteration failed: {0}")]
    Input(String),

    /// Report serialization failed.
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LatticeError {
    /// Creates a column-out-of-range error.
    pub fn column_out_of_range(index: usize, width: usize) -> Self {
        Self::ColumnOutOfRange { index, width }
    }

    /// Creates an unknown-column error.
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn { name: name.into() }
    }

    /// Creates an input iteration error with the given message.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}
