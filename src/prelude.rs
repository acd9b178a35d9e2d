//! Prelude for commonly used types and traits in column-lattice.

pub use crate::core::{ColumnCombination, SetTrie};
pub use crate::error::{LatticeError, Result};
pub use crate::input::{MemoryInput, RelationalInput, TableSchema};
pub use crate::report::{FunctionalDependency, ProfilingReport, UniqueColumnCombination};
